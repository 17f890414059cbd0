use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Students table. Ids are allocated by the application (random
        // five-digit codes), so the primary key is not auto-increment.
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Academics table, one row per student
        manager
            .create_table(
                Table::create()
                    .table(StudentAcademics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentAcademics::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentAcademics::StudentId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(StudentAcademics::Percentage)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAcademics::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAcademics::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentAcademics::Table, StudentAcademics::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Character value scores, one row per (student, value type)
        manager
            .create_table(
                Table::create()
                    .table(StudentValues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentValues::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentValues::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentValues::ValueType).string().not_null())
                    .col(ColumnDef::new(StudentValues::Score).integer().not_null())
                    .col(
                        ColumnDef::new(StudentValues::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentValues::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentValues::Table, StudentValues::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Event participation records
        manager
            .create_table(
                Table::create()
                    .table(StudentEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentEvents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentEvents::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentEvents::EventCategory)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentEvents::AchievementLevel)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentEvents::IsGroup)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(StudentEvents::Points).integer().not_null())
                    .col(ColumnDef::new(StudentEvents::Remark).string().not_null())
                    .col(
                        ColumnDef::new(StudentEvents::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentEvents::Table, StudentEvents::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_teacher_id")
                    .table(Students::Table)
                    .col(Students::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_events_student_id")
                    .table(StudentEvents::Table)
                    .col(StudentEvents::StudentId)
                    .to_owned(),
            )
            .await?;

        // Conflict target for the per-type score upsert
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_student_values_student_id_value_type")
                    .table(StudentValues::Table)
                    .col(StudentValues::StudentId)
                    .col(StudentValues::ValueType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse creation order
        manager
            .drop_table(Table::drop().table(StudentEvents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentValues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentAcademics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    TeacherId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentAcademics {
    #[sea_orm(iden = "student_academics")]
    Table,
    Id,
    StudentId,
    Percentage,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentValues {
    #[sea_orm(iden = "student_values")]
    Table,
    Id,
    StudentId,
    ValueType,
    Score,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentEvents {
    #[sea_orm(iden = "student_events")]
    Table,
    Id,
    StudentId,
    EventCategory,
    AchievementLevel,
    IsGroup,
    Points,
    Remark,
    CreatedAt,
}

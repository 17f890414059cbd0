use super::SeaOrmStorage;
use crate::entity::prelude::{
    AcademicsActiveModel, EventActiveModel, StudentActiveModel, Students, Users, ValueActiveModel,
};
use crate::entity::students::Column;
use crate::errors::{MeritbookError, Result};
use crate::models::{
    events::requests::NewEvent,
    students::entities::{Student, StudentWithTeacher},
    values::requests::NewValueScore,
};
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// Bounded retries for the random five-digit id. The id space holds 90,000
/// values, far above any realistic roster, so exhaustion here means the
/// database is effectively full.
const MAX_ID_ATTEMPTS: u32 = 1000;

impl SeaOrmStorage {
    /// Sample an unused id from [10000, 99999].
    async fn allocate_student_id(txn: &DatabaseTransaction) -> Result<i64> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate: i64 = rand::rng().random_range(10_000..=99_999);
            let taken = Students::find_by_id(candidate)
                .one(txn)
                .await
                .map_err(|e| {
                    MeritbookError::database_operation(format!("Failed to check student id: {e}"))
                })?
                .is_some();
            if !taken {
                return Ok(candidate);
            }
        }

        Err(MeritbookError::id_allocation(
            "Unable to generate unique student ID. Too many students in database.",
        ))
    }

    /// Insert a student plus its initial records in one transaction.
    pub async fn create_student_with_records_impl(
        &self,
        teacher_id: i64,
        name: &str,
        academics_percentage: Option<f64>,
        values: &[NewValueScore],
        events: &[NewEvent],
    ) -> Result<i64> {
        let txn = self.db.begin().await.map_err(|e| {
            MeritbookError::database_operation(format!("Failed to start transaction: {e}"))
        })?;

        let student_id = Self::allocate_student_id(&txn).await?;
        let now = chrono::Utc::now().timestamp();

        let student = StudentActiveModel {
            id: Set(student_id),
            teacher_id: Set(teacher_id),
            name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        student.insert(&txn).await.map_err(|e| {
            MeritbookError::database_operation(format!("Failed to create student: {e}"))
        })?;

        if let Some(percentage) = academics_percentage {
            let academics = AcademicsActiveModel {
                student_id: Set(student_id),
                percentage: Set(percentage),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            academics.insert(&txn).await.map_err(|e| {
                MeritbookError::database_operation(format!("Failed to create academics: {e}"))
            })?;
        }

        for value in values {
            let row = ValueActiveModel {
                student_id: Set(student_id),
                value_type: Set(value.value_type.to_string()),
                score: Set(value.score),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            row.insert(&txn).await.map_err(|e| {
                MeritbookError::database_operation(format!("Failed to create value score: {e}"))
            })?;
        }

        for event in events {
            let row = EventActiveModel {
                student_id: Set(student_id),
                event_category: Set(event.event_category.to_string()),
                achievement_level: Set(event.achievement_level.to_string()),
                is_group: Set(event.is_group),
                points: Set(event.points),
                remark: Set(event.remark.clone()),
                created_at: Set(now),
                ..Default::default()
            };
            row.insert(&txn).await.map_err(|e| {
                MeritbookError::database_operation(format!("Failed to create event: {e}"))
            })?;
        }

        txn.commit().await.map_err(|e| {
            MeritbookError::database_operation(format!("Failed to commit transaction: {e}"))
        })?;

        Ok(student_id)
    }

    /// Fetch a student by id.
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id).one(&self.db).await.map_err(|e| {
            MeritbookError::database_operation(format!("Failed to query student: {e}"))
        })?;

        Ok(result.map(|m| m.into_student()))
    }

    /// One teacher's roster, newest first.
    pub async fn list_students_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Student>> {
        let result = Students::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to query students: {e}"))
            })?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }

    /// Every student joined with its teacher, newest first.
    pub async fn list_all_students_with_teacher_impl(&self) -> Result<Vec<StudentWithTeacher>> {
        let rows = Students::find()
            .find_also_related(Users)
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to query students: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .map(|(student, teacher)| {
                let (teacher_name, teacher_email) =
                    teacher.map(|t| (t.name, t.email)).unwrap_or_default();
                StudentWithTeacher {
                    student: student.into_student(),
                    teacher_name,
                    teacher_email,
                }
            })
            .collect())
    }

    /// Roster size for one teacher.
    pub async fn count_students_by_teacher_impl(&self, teacher_id: i64) -> Result<u64> {
        let count = Students::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to count students: {e}"))
            })?;

        Ok(count)
    }

    /// Rename a student. Keyed on (id, teacher_id): a non-owner's update
    /// touches zero rows and reports false.
    pub async fn update_student_name_impl(
        &self,
        id: i64,
        teacher_id: i64,
        name: &str,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Students::update_many()
            .col_expr(Column::Name, sea_orm::sea_query::Expr::value(name))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::TeacherId.eq(teacher_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to update student: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// Delete a student. Keyed on (id, teacher_id) like the rename.
    pub async fn delete_student_impl(&self, id: i64, teacher_id: i64) -> Result<bool> {
        let result = Students::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::TeacherId.eq(teacher_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to delete student: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}

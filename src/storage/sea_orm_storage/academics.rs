use super::SeaOrmStorage;
use crate::entity::academics::{ActiveModel, Column, Entity as StudentAcademics};
use crate::errors::{MeritbookError, Result};
use crate::models::academics::entities::Academics;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// The student's academics row, if one has been saved.
    pub async fn get_academics_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Option<Academics>> {
        let result = StudentAcademics::find()
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to query academics: {e}"))
            })?;

        Ok(result.map(|m| m.into_academics()))
    }

    /// Fetch an academics row by its own id.
    pub async fn get_academics_by_id_impl(&self, id: i64) -> Result<Option<Academics>> {
        let result = StudentAcademics::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to query academics: {e}"))
            })?;

        Ok(result.map(|m| m.into_academics()))
    }

    /// Insert or overwrite the percentage for a student. The student_id
    /// unique key makes this a single-row upsert; created_at survives,
    /// updated_at is refreshed.
    pub async fn upsert_academics_impl(&self, student_id: i64, percentage: f64) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            percentage: Set(percentage),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        StudentAcademics::insert(model)
            .on_conflict(
                OnConflict::column(Column::StudentId)
                    .update_columns([Column::Percentage, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to save academics: {e}"))
            })?;

        Ok(())
    }

    /// Update keyed by the owning student.
    pub async fn update_academics_impl(&self, student_id: i64, percentage: f64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = StudentAcademics::update_many()
            .col_expr(Column::Percentage, sea_orm::sea_query::Expr::value(percentage))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::StudentId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to update academics: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// Delete keyed by the owning student.
    pub async fn delete_academics_impl(&self, student_id: i64) -> Result<bool> {
        let result = StudentAcademics::delete_many()
            .filter(Column::StudentId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to delete academics: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// Every academics row, for the export join.
    pub async fn list_all_academics_impl(&self) -> Result<Vec<Academics>> {
        let result = StudentAcademics::find().all(&self.db).await.map_err(|e| {
            MeritbookError::database_operation(format!("Failed to query academics: {e}"))
        })?;

        Ok(result.into_iter().map(|m| m.into_academics()).collect())
    }
}

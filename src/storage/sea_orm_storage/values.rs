use super::SeaOrmStorage;
use crate::entity::values::{ActiveModel, Column, Entity as StudentValues};
use crate::errors::{MeritbookError, Result};
use crate::models::values::entities::{ValueRecord, ValueType};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// A student's value scores, ordered by value type.
    pub async fn list_values_by_student_impl(&self, student_id: i64) -> Result<Vec<ValueRecord>> {
        let result = StudentValues::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::ValueType)
            .all(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to query values: {e}"))
            })?;

        Ok(result.into_iter().map(|m| m.into_value_record()).collect())
    }

    /// Fetch a value row by id.
    pub async fn get_value_by_id_impl(&self, id: i64) -> Result<Option<ValueRecord>> {
        let result = StudentValues::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to query value: {e}"))
            })?;

        Ok(result.map(|m| m.into_value_record()))
    }

    /// Insert or overwrite the score for (student, value type). The unique
    /// pair key keeps this to one row per type.
    pub async fn upsert_value_impl(
        &self,
        student_id: i64,
        value_type: ValueType,
        score: i32,
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            value_type: Set(value_type.to_string()),
            score: Set(score),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        StudentValues::insert(model)
            .on_conflict(
                OnConflict::columns([Column::StudentId, Column::ValueType])
                    .update_columns([Column::Score, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to save value: {e}"))
            })?;

        Ok(())
    }

    /// Update keyed by (student, value type).
    pub async fn update_value_score_impl(
        &self,
        student_id: i64,
        value_type: ValueType,
        score: i32,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = StudentValues::update_many()
            .col_expr(Column::Score, sea_orm::sea_query::Expr::value(score))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::ValueType.eq(value_type.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to update value: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// Delete a single value row by id.
    pub async fn delete_value_impl(&self, id: i64) -> Result<bool> {
        let result = StudentValues::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to delete value: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// Every value row, for the export join.
    pub async fn list_all_values_impl(&self) -> Result<Vec<ValueRecord>> {
        let result = StudentValues::find().all(&self.db).await.map_err(|e| {
            MeritbookError::database_operation(format!("Failed to query values: {e}"))
        })?;

        Ok(result.into_iter().map(|m| m.into_value_record()).collect())
    }
}

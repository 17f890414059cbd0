use super::SeaOrmStorage;
use crate::entity::events::{ActiveModel, Column, Entity as StudentEvents};
use crate::errors::{MeritbookError, Result};
use crate::models::events::{entities::StudentEvent, requests::NewEvent};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// A student's events, newest first.
    pub async fn list_events_by_student_impl(&self, student_id: i64) -> Result<Vec<StudentEvent>> {
        let result = StudentEvents::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to query events: {e}"))
            })?;

        Ok(result.into_iter().map(|m| m.into_event()).collect())
    }

    /// Fetch an event by id.
    pub async fn get_event_by_id_impl(&self, id: i64) -> Result<Option<StudentEvent>> {
        let result = StudentEvents::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to query event: {e}"))
            })?;

        Ok(result.map(|m| m.into_event()))
    }

    /// Insert an event and return its id.
    pub async fn create_event_impl(&self, student_id: i64, event: &NewEvent) -> Result<i64> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            event_category: Set(event.event_category.to_string()),
            achievement_level: Set(event.achievement_level.to_string()),
            is_group: Set(event.is_group),
            points: Set(event.points),
            remark: Set(event.remark.clone()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            MeritbookError::database_operation(format!("Failed to create event: {e}"))
        })?;

        Ok(result.id)
    }

    /// Replace an event's fields by id. Points arrive already recomputed.
    pub async fn update_event_impl(&self, id: i64, event: &NewEvent) -> Result<bool> {
        use sea_orm::sea_query::Expr;

        let result = StudentEvents::update_many()
            .col_expr(
                Column::EventCategory,
                Expr::value(event.event_category.to_string()),
            )
            .col_expr(
                Column::AchievementLevel,
                Expr::value(event.achievement_level.to_string()),
            )
            .col_expr(Column::IsGroup, Expr::value(event.is_group))
            .col_expr(Column::Points, Expr::value(event.points))
            .col_expr(Column::Remark, Expr::value(event.remark.clone()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to update event: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// Delete an event by id.
    pub async fn delete_event_impl(&self, id: i64) -> Result<bool> {
        let result = StudentEvents::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to delete event: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// Every event row, newest first, for the export join.
    pub async fn list_all_events_impl(&self) -> Result<Vec<StudentEvent>> {
        let result = StudentEvents::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to query events: {e}"))
            })?;

        Ok(result.into_iter().map(|m| m.into_event()).collect())
    }
}

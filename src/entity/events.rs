//! Event participation entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub event_category: String,
    pub achievement_level: String,
    pub is_group: bool,
    pub points: i32,
    pub remark: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Database model to business model
impl Model {
    pub fn into_event(self) -> crate::models::events::entities::StudentEvent {
        use crate::models::events::entities::{AchievementLevel, EventCategory, StudentEvent};
        use chrono::{DateTime, Utc};

        StudentEvent {
            id: self.id,
            student_id: self.student_id,
            event_category: self
                .event_category
                .parse::<EventCategory>()
                .unwrap_or(EventCategory::Literary),
            achievement_level: self
                .achievement_level
                .parse::<AchievementLevel>()
                .unwrap_or(AchievementLevel::MayookhamWinners),
            is_group: self.is_group,
            points: self.points,
            remark: self.remark,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}

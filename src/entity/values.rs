//! Character value score entity, one row per (student, value type)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_values")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub value_type: String,
    pub score: i32,
    pub created_at: i64,
    pub updated_at: i64,
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
    pub fn into_value_record(self) -> crate::models::values::entities::ValueRecord {
        use crate::models::values::entities::{ValueRecord, ValueType};
        use chrono::{DateTime, Utc};

        ValueRecord {
            id: self.id,
            student_id: self.student_id,
            value_type: self
                .value_type
                .parse::<ValueType>()
                .unwrap_or(ValueType::LeadershipAndResponsibility),
            score: self.score,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

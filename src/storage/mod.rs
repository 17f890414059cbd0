use std::sync::Arc;

use crate::models::{
    academics::entities::Academics,
    events::{entities::StudentEvent, requests::NewEvent},
    students::entities::{Student, StudentWithTeacher},
    users::{entities::User, requests::CreateUserRecord},
    values::{
        entities::{ValueRecord, ValueType},
        requests::NewValueScore,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// User accounts
    // Insert a user (register, admin seeding)
    async fn create_user(&self, user: CreateUserRecord) -> Result<User>;
    // Fetch a user by id (session resolution re-reads on every request)
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // Fetch a user by email
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // All teacher accounts, for the admin directory
    async fn list_teachers(&self) -> Result<Vec<User>>;
    // Replace a user's password hash
    async fn update_user_password(&self, id: i64, password_hash: &str) -> Result<bool>;
    // Delete a user; owned students cascade away with it
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // Number of admin accounts, for first-run seeding
    async fn count_admins(&self) -> Result<u64>;

    /// Students
    // Atomically insert a student plus its initial academics/values/events;
    // allocates the random five-digit id and returns it
    async fn create_student_with_records(
        &self,
        teacher_id: i64,
        name: &str,
        academics_percentage: Option<f64>,
        values: &[NewValueScore],
        events: &[NewEvent],
    ) -> Result<i64>;
    // Fetch a student by id
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // One teacher's roster, newest first
    async fn list_students_by_teacher(&self, teacher_id: i64) -> Result<Vec<Student>>;
    // Every student joined with its teacher, newest first (admin view, export)
    async fn list_all_students_with_teacher(&self) -> Result<Vec<StudentWithTeacher>>;
    // Roster size for one teacher
    async fn count_students_by_teacher(&self, teacher_id: i64) -> Result<u64>;
    // Rename a student; keyed on (id, teacher_id) so non-owners change nothing
    async fn update_student_name(&self, id: i64, teacher_id: i64, name: &str) -> Result<bool>;
    // Delete a student; keyed on (id, teacher_id)
    async fn delete_student(&self, id: i64, teacher_id: i64) -> Result<bool>;

    /// Academics (at most one row per student)
    async fn get_academics_by_student(&self, student_id: i64) -> Result<Option<Academics>>;
    async fn get_academics_by_id(&self, id: i64) -> Result<Option<Academics>>;
    // Insert or overwrite the percentage for a student
    async fn upsert_academics(&self, student_id: i64, percentage: f64) -> Result<()>;
    // Update keyed by the owning student
    async fn update_academics(&self, student_id: i64, percentage: f64) -> Result<bool>;
    // Delete keyed by the owning student
    async fn delete_academics(&self, student_id: i64) -> Result<bool>;
    // Every academics row (export)
    async fn list_all_academics(&self) -> Result<Vec<Academics>>;

    /// Value scores (unique per student and value type)
    async fn list_values_by_student(&self, student_id: i64) -> Result<Vec<ValueRecord>>;
    async fn get_value_by_id(&self, id: i64) -> Result<Option<ValueRecord>>;
    // Insert or overwrite the score for (student, value type)
    async fn upsert_value(&self, student_id: i64, value_type: ValueType, score: i32) -> Result<()>;
    // Update keyed by (student, value type)
    async fn update_value_score(
        &self,
        student_id: i64,
        value_type: ValueType,
        score: i32,
    ) -> Result<bool>;
    // Delete a single value row by id
    async fn delete_value(&self, id: i64) -> Result<bool>;
    // Every value row (export)
    async fn list_all_values(&self) -> Result<Vec<ValueRecord>>;

    /// Events
    async fn list_events_by_student(&self, student_id: i64) -> Result<Vec<StudentEvent>>;
    async fn get_event_by_id(&self, id: i64) -> Result<Option<StudentEvent>>;
    // Insert an event and return its id
    async fn create_event(&self, student_id: i64, event: &NewEvent) -> Result<i64>;
    // Replace an event's fields (points included) by id
    async fn update_event(&self, id: i64, event: &NewEvent) -> Result<bool>;
    // Delete an event by id
    async fn delete_event(&self, id: i64) -> Result<bool>;
    // Every event row, newest first (export)
    async fn list_all_events(&self) -> Result<Vec<StudentEvent>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

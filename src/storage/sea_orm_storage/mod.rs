//! SeaORM storage implementation.
//!
//! One database layer for SQLite, PostgreSQL and MySQL. Instances are
//! constructed explicitly and injected as `web::Data<Arc<dyn Storage>>`;
//! tests build their own isolated instances via [`SeaOrmStorage::connect`].

mod academics;
mod events;
mod students;
mod users;
mod values;

use crate::config::AppConfig;
use crate::errors::{MeritbookError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// Storage configured from the global [`AppConfig`].
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// Connect to the given database URL and run migrations.
    pub async fn connect(url: &str, pool_size: u32, timeout_secs: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, pool_size, timeout_secs).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout_secs).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| MeritbookError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite connection (WAL + pragma tuning).
    ///
    /// Foreign keys are enabled explicitly: the schema leans on
    /// ON DELETE CASCADE for teacher and student removal.
    async fn connect_sqlite(url: &str, pool_size: u32, timeout_secs: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| MeritbookError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                MeritbookError::database_connection(format!("SQLite connection failed: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Generic connection (PostgreSQL, MySQL).
    async fn connect_generic(url: &str, pool_size: u32, timeout_secs: u64) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(timeout_secs))
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| MeritbookError::database_connection(format!("Cannot connect to database: {e}")))
    }

    /// Infer the database type from the URL.
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(MeritbookError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite://, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

// Storage trait implementation
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // Users
    async fn create_user(&self, user: CreateUserRecord) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_teachers(&self) -> Result<Vec<User>> {
        self.list_teachers_impl().await
    }

    async fn update_user_password(&self, id: i64, password_hash: &str) -> Result<bool> {
        self.update_user_password_impl(id, password_hash).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn count_admins(&self) -> Result<u64> {
        self.count_admins_impl().await
    }

    // Students
    async fn create_student_with_records(
        &self,
        teacher_id: i64,
        name: &str,
        academics_percentage: Option<f64>,
        values: &[NewValueScore],
        events: &[NewEvent],
    ) -> Result<i64> {
        self.create_student_with_records_impl(teacher_id, name, academics_percentage, values, events)
            .await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students_by_teacher(&self, teacher_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_teacher_impl(teacher_id).await
    }

    async fn list_all_students_with_teacher(&self) -> Result<Vec<StudentWithTeacher>> {
        self.list_all_students_with_teacher_impl().await
    }

    async fn count_students_by_teacher(&self, teacher_id: i64) -> Result<u64> {
        self.count_students_by_teacher_impl(teacher_id).await
    }

    async fn update_student_name(&self, id: i64, teacher_id: i64, name: &str) -> Result<bool> {
        self.update_student_name_impl(id, teacher_id, name).await
    }

    async fn delete_student(&self, id: i64, teacher_id: i64) -> Result<bool> {
        self.delete_student_impl(id, teacher_id).await
    }

    // Academics
    async fn get_academics_by_student(&self, student_id: i64) -> Result<Option<Academics>> {
        self.get_academics_by_student_impl(student_id).await
    }

    async fn get_academics_by_id(&self, id: i64) -> Result<Option<Academics>> {
        self.get_academics_by_id_impl(id).await
    }

    async fn upsert_academics(&self, student_id: i64, percentage: f64) -> Result<()> {
        self.upsert_academics_impl(student_id, percentage).await
    }

    async fn update_academics(&self, student_id: i64, percentage: f64) -> Result<bool> {
        self.update_academics_impl(student_id, percentage).await
    }

    async fn delete_academics(&self, student_id: i64) -> Result<bool> {
        self.delete_academics_impl(student_id).await
    }

    async fn list_all_academics(&self) -> Result<Vec<Academics>> {
        self.list_all_academics_impl().await
    }

    // Values
    async fn list_values_by_student(&self, student_id: i64) -> Result<Vec<ValueRecord>> {
        self.list_values_by_student_impl(student_id).await
    }

    async fn get_value_by_id(&self, id: i64) -> Result<Option<ValueRecord>> {
        self.get_value_by_id_impl(id).await
    }

    async fn upsert_value(&self, student_id: i64, value_type: ValueType, score: i32) -> Result<()> {
        self.upsert_value_impl(student_id, value_type, score).await
    }

    async fn update_value_score(
        &self,
        student_id: i64,
        value_type: ValueType,
        score: i32,
    ) -> Result<bool> {
        self.update_value_score_impl(student_id, value_type, score)
            .await
    }

    async fn delete_value(&self, id: i64) -> Result<bool> {
        self.delete_value_impl(id).await
    }

    async fn list_all_values(&self) -> Result<Vec<ValueRecord>> {
        self.list_all_values_impl().await
    }

    // Events
    async fn list_events_by_student(&self, student_id: i64) -> Result<Vec<StudentEvent>> {
        self.list_events_by_student_impl(student_id).await
    }

    async fn get_event_by_id(&self, id: i64) -> Result<Option<StudentEvent>> {
        self.get_event_by_id_impl(id).await
    }

    async fn create_event(&self, student_id: i64, event: &NewEvent) -> Result<i64> {
        self.create_event_impl(student_id, event).await
    }

    async fn update_event(&self, id: i64, event: &NewEvent) -> Result<bool> {
        self.update_event_impl(id, event).await
    }

    async fn delete_event(&self, id: i64) -> Result<bool> {
        self.delete_event_impl(id).await
    }

    async fn list_all_events(&self) -> Result<Vec<StudentEvent>> {
        self.list_all_events_impl().await
    }
}

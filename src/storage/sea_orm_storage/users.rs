use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{MeritbookError, Result};
use crate::models::users::{
    entities::{User, UserRole},
    requests::CreateUserRecord,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// Insert a user account.
    pub async fn create_user_impl(&self, user: CreateUserRecord) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            name: Set(user.name),
            role: Set(user.role.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| MeritbookError::database_operation(format!("Failed to create user: {e}")))?;

        Ok(result.into_user())
    }

    /// Fetch a user by id.
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MeritbookError::database_operation(format!("Failed to query user: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// Fetch a user by email.
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| MeritbookError::database_operation(format!("Failed to query user: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// All teacher accounts.
    pub async fn list_teachers_impl(&self) -> Result<Vec<User>> {
        let result = Users::find()
            .filter(Column::Role.eq(UserRole::TEACHER))
            .all(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to query teachers: {e}"))
            })?;

        Ok(result.into_iter().map(|m| m.into_user()).collect())
    }

    /// Replace a user's password hash.
    pub async fn update_user_password_impl(&self, id: i64, password_hash: &str) -> Result<bool> {
        let result = Users::update_many()
            .col_expr(
                Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                MeritbookError::database_operation(format!("Failed to update password: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// Delete a user. Owned students and their records cascade away.
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| MeritbookError::database_operation(format!("Failed to delete user: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// Number of admin accounts.
    pub async fn count_admins_impl(&self) -> Result<u64> {
        let count = Users::find()
            .filter(Column::Role.eq(UserRole::ADMIN))
            .count(&self.db)
            .await
            .map_err(|e| MeritbookError::database_operation(format!("Failed to count admins: {e}")))?;

        Ok(count)
    }
}

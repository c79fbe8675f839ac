//! User service
//!
//! Creating, editing, listing and deleting blog authors.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserChanges, UserId};
use crate::domain::ports::UserRepository;
use crate::error::{AppError, DomainError};

/// Service for managing users
pub struct UserService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    /// List all users
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = self.users.list().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &UserId) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::Domain(DomainError::NotFound(format!("User {} not found", id)))
            })
    }

    /// Create a user. A missing image URL falls back to the placeholder.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<User, AppError> {
        new_user.validate()?;

        let user = self.users.create(new_user).await?;
        tracing::info!(user_id = %user.id, "Created user");

        Ok(user)
    }

    /// Edit a user's names, and the image URL when one is given
    pub async fn update_user(&self, id: &UserId, changes: &UserChanges) -> Result<User, AppError> {
        changes.validate()?;

        let user = self.users.update(id, changes).await?;
        tracing::info!(
            user_id = %id,
            image_changed = changes.image_url.is_some(),
            "Updated user"
        );

        Ok(user)
    }

    /// Delete a user and every post they own
    pub async fn delete_user(&self, id: &UserId) -> Result<(), AppError> {
        let removed_posts = self.users.delete(id).await?;
        tracing::info!(user_id = %id, removed_posts, "Deleted user");

        Ok(())
    }
}

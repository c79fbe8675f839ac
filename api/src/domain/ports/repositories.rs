//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Every mutating method is atomic: it either persists its whole change or
//! nothing at all.

use async_trait::async_trait;

use crate::domain::entities::{
    NewPost, NewUser, Post, PostChanges, PostId, User, UserChanges, UserId,
};
use crate::error::DomainError;

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// List all users ordered by last name, then first name
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Create a new user
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Apply an edit to an existing user.
    /// Fails with `NotFound` if the user does not exist.
    async fn update(&self, id: &UserId, changes: &UserChanges) -> Result<User, DomainError>;

    /// Delete a user together with all of their posts.
    /// Returns the number of posts removed by the cascade.
    async fn delete(&self, id: &UserId) -> Result<u64, DomainError>;
}

/// Repository for Post entities
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by ID
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError>;

    /// List a user's posts, oldest first
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Post>, DomainError>;

    /// Create a new post.
    /// Fails with `NotFound` if the owning user does not exist.
    async fn create(&self, post: &NewPost) -> Result<Post, DomainError>;

    /// Overwrite a post's title and content
    async fn update(&self, id: &PostId, changes: &PostChanges) -> Result<Post, DomainError>;

    /// Delete a post
    async fn delete(&self, id: &PostId) -> Result<(), DomainError>;
}

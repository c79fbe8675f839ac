//! Post service
//!
//! Posts are always scoped to an existing user.

use std::sync::Arc;

use crate::domain::entities::{NewPost, Post, PostChanges, PostId, User, UserId};
use crate::domain::ports::{PostRepository, UserRepository};
use crate::error::{AppError, DomainError};

/// Service for managing posts
pub struct PostService<PR, UR>
where
    PR: PostRepository,
    UR: UserRepository,
{
    posts: Arc<PR>,
    users: Arc<UR>,
}

impl<PR, UR> PostService<PR, UR>
where
    PR: PostRepository,
    UR: UserRepository,
{
    pub fn new(posts: Arc<PR>, users: Arc<UR>) -> Self {
        Self { posts, users }
    }

    /// List a user's posts, oldest first.
    ///
    /// An unknown user is `NotFound` rather than an empty list.
    pub async fn list_posts_by_user(&self, user_id: &UserId) -> Result<Vec<Post>, AppError> {
        self.require_user(user_id).await?;

        let posts = self.posts.list_by_user(user_id).await?;
        tracing::debug!(user_id = %user_id, count = posts.len(), "Listed posts");
        Ok(posts)
    }

    /// Get a post by ID
    pub async fn get_post(&self, id: &PostId) -> Result<Post, AppError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::Domain(DomainError::NotFound(format!("Post {} not found", id)))
            })
    }

    /// Get a post together with its author
    pub async fn get_post_with_author(&self, id: &PostId) -> Result<(Post, User), AppError> {
        let post = self.get_post(id).await?;
        let author = self.require_user(&post.user_id).await?;
        Ok((post, author))
    }

    /// Create a post for an existing user
    pub async fn create_post(&self, new_post: &NewPost) -> Result<Post, AppError> {
        new_post.validate()?;

        let post = self.posts.create(new_post).await?;
        tracing::info!(post_id = %post.id, user_id = %post.user_id, "Created post");

        Ok(post)
    }

    /// Overwrite a post's title and content
    pub async fn update_post(&self, id: &PostId, changes: &PostChanges) -> Result<Post, AppError> {
        changes.validate()?;

        let post = self.posts.update(id, changes).await?;
        tracing::info!(post_id = %id, "Updated post");

        Ok(post)
    }

    /// Delete a post
    pub async fn delete_post(&self, id: &PostId) -> Result<(), AppError> {
        self.posts.delete(id).await?;
        tracing::info!(post_id = %id, "Deleted post");

        Ok(())
    }

    async fn require_user(&self, id: &UserId) -> Result<User, AppError> {
        self.users.find_by_id(id).await?.ok_or_else(|| {
            AppError::Domain(DomainError::NotFound(format!("User {} not found", id)))
        })
    }
}

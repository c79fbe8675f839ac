//! Post domain entity
//!
//! A post always belongs to exactly one user. The owner is fixed at creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{require, UserId};
use crate::error::DomainError;

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A blog post written by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a new post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: UserId,
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn validate(&self) -> Result<(), DomainError> {
        require("title", &self.title)?;
        require("content", &self.content)
    }
}

/// Edit applied to an existing post
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
}

impl PostChanges {
    pub fn validate(&self) -> Result<(), DomainError> {
        require("title", &self.title)?;
        require("content", &self.content)
    }

    pub fn apply(&self, post: &mut Post) {
        post.title = self.title.clone();
        post.content = self.content.clone();
    }
}

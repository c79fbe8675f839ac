//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    NewPost, NewUser, Post, PostChanges, PostId, User, UserChanges, UserId,
};
use crate::domain::ports::{PostRepository, UserRepository};
use crate::error::DomainError;

// ============================================================================
// Shared store
// ============================================================================

/// Tables shared by the in-memory repositories.
///
/// Lock order is always users, then posts.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    posts: Arc<RwLock<HashMap<PostId, Post>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.read().unwrap().len()
    }

    pub fn post_count(&self) -> usize {
        self.posts.read().unwrap().len()
    }
}

/// Create a user and a post repository backed by the same store
pub fn in_memory_repositories() -> (InMemoryUserRepository, InMemoryPostRepository) {
    let store = InMemoryStore::new();
    (
        InMemoryUserRepository::new(store.clone()),
        InMemoryPostRepository::new(store),
    )
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    store: InMemoryStore,
}

impl InMemoryUserRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.store.users.write().unwrap().insert(user.id, user);
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.store.users.read().unwrap();
        Ok(users.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.store.users.read().unwrap();
        let mut sorted: Vec<_> = users.values().cloned().collect();
        sorted.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
        });
        Ok(sorted)
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError> {
        let user = User {
            id: UserId::new(),
            first_name: new_user.first_name.clone(),
            last_name: new_user.last_name.clone(),
            image_url: new_user.image_url_or_default().to_string(),
        };

        let mut users = self.store.users.write().unwrap();
        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn update(&self, id: &UserId, changes: &UserChanges) -> Result<User, DomainError> {
        let mut users = self.store.users.write().unwrap();
        if let Some(user) = users.get_mut(id) {
            changes.apply(user);
            Ok(user.clone())
        } else {
            Err(DomainError::NotFound(format!("User {} not found", id)))
        }
    }

    async fn delete(&self, id: &UserId) -> Result<u64, DomainError> {
        let mut users = self.store.users.write().unwrap();
        let mut posts = self.store.posts.write().unwrap();

        if users.remove(id).is_none() {
            return Err(DomainError::NotFound(format!("User {} not found", id)));
        }

        let before = posts.len();
        posts.retain(|_, p| p.user_id != *id);
        Ok((before - posts.len()) as u64)
    }
}

// ============================================================================
// In-Memory Post Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPostRepository {
    store: InMemoryStore,
}

impl InMemoryPostRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }

    /// Pre-populate with a post for testing. The owner must already be in the store.
    pub fn with_post(self, post: Post) -> Self {
        self.store.posts.write().unwrap().insert(post.id, post);
        self
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        let posts = self.store.posts.read().unwrap();
        Ok(posts.get(id).cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Post>, DomainError> {
        let posts = self.store.posts.read().unwrap();
        let mut owned: Vec<_> = posts
            .values()
            .filter(|p| p.user_id == *user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|p| p.created_at);
        Ok(owned)
    }

    async fn create(&self, new_post: &NewPost) -> Result<Post, DomainError> {
        let users = self.store.users.read().unwrap();
        let mut posts = self.store.posts.write().unwrap();

        if !users.contains_key(&new_post.user_id) {
            return Err(DomainError::NotFound(format!(
                "User {} not found",
                new_post.user_id
            )));
        }

        let post = Post {
            id: PostId::new(),
            title: new_post.title.clone(),
            content: new_post.content.clone(),
            user_id: new_post.user_id,
            created_at: Utc::now(),
        };
        posts.insert(post.id, post.clone());

        Ok(post)
    }

    async fn update(&self, id: &PostId, changes: &PostChanges) -> Result<Post, DomainError> {
        let mut posts = self.store.posts.write().unwrap();
        if let Some(post) = posts.get_mut(id) {
            changes.apply(post);
            Ok(post.clone())
        } else {
            Err(DomainError::NotFound(format!("Post {} not found", id)))
        }
    }

    async fn delete(&self, id: &PostId) -> Result<(), DomainError> {
        let mut posts = self.store.posts.write().unwrap();
        if posts.remove(id).is_some() {
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("Post {} not found", id)))
        }
    }
}

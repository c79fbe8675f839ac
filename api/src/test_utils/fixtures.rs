//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::{Post, PostId, User, UserId, DEFAULT_IMAGE_URL};

/// Create a test user with default values
pub fn test_user() -> User {
    test_user_named("Ada", "Lovelace")
}

/// Create a test user with a specific name
pub fn test_user_named(first_name: &str, last_name: &str) -> User {
    User {
        id: UserId(Uuid::new_v4()),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        image_url: DEFAULT_IMAGE_URL.to_string(),
    }
}

/// Create a test post owned by the given user
pub fn test_post(user_id: UserId) -> Post {
    test_post_titled(user_id, "Hello")
}

/// Create a test post with a specific title
pub fn test_post_titled(user_id: UserId, title: &str) -> Post {
    Post {
        id: PostId(Uuid::new_v4()),
        title: title.to_string(),
        content: "World".to_string(),
        user_id,
        created_at: Utc::now(),
    }
}

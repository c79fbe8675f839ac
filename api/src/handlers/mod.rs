//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod posts;
pub mod users;

pub use posts::{create_post, delete_post, get_post, list_posts, update_post};
pub use users::{create_user, delete_user, get_user, list_users, update_user};

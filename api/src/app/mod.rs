//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and the repository ports.

pub mod post_service;
pub mod user_service;

pub use post_service::PostService;
pub use user_service::UserService;

//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod post;
pub mod user;

pub use post::{NewPost, Post, PostChanges, PostId};
pub use user::{NewUser, User, UserChanges, UserId, DEFAULT_IMAGE_URL};

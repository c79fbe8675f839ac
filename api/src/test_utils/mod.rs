//! Test utilities
//!
//! Manual mock implementations, test fixtures and an in-memory database for
//! unit testing.
//!
//! The in-memory repositories share one store so that cross-entity rules
//! (owner check on post creation, cascade on user deletion) behave like the
//! database-backed adapters.

pub mod database;
pub mod fixtures;
pub mod mocks;

pub use database::*;
pub use fixtures::*;
pub use mocks::*;

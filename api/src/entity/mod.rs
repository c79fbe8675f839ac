//! SeaORM entities
//!
//! Table definitions for the persistence layer. The domain never sees these;
//! adapters convert them into `domain::entities` types.

pub mod posts;
pub mod users;

//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.
//! Every write runs inside its own transaction; returning early drops the
//! `DatabaseTransaction`, which rolls it back.

pub mod post_repo;
pub mod schema;
pub mod user_repo;


use sea_orm::{DbErr, SqlErr};

use crate::error::DomainError;

pub use post_repo::PostgresPostRepository;
pub use schema::create_schema;
pub use user_repo::PostgresUserRepository;

/// Convert a SeaORM error, keeping constraint violations distinguishable
pub(crate) fn map_db_err(e: DbErr) -> DomainError {
    // Row removed between the read and the UPDATE inside a transaction
    if matches!(e, DbErr::RecordNotUpdated) {
        return DomainError::NotFound("Record no longer exists".to_string());
    }

    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => DomainError::Integrity(msg),
        Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Integrity(msg),
        _ => DomainError::Database(e.to_string()),
    }
}

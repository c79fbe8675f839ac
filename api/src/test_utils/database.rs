//! SQLite-backed database for adapter and router tests

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::adapters::create_schema;

/// Open a fresh in-memory SQLite database with the schema applied.
///
/// The pool is pinned to a single connection: every SQLite `:memory:`
/// connection is its own database.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory SQLite database");
    create_schema(&db).await.expect("Failed to create schema");
    db
}

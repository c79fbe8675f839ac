//! Schema bootstrap
//!
//! Creates the `users` and `posts` tables from the SeaORM entities when they
//! do not exist yet. `posts.user_id` references `users.id` with
//! `ON DELETE CASCADE`.

use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entity::{posts, users};

pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // users first: posts carries the foreign key
    let mut users_table = schema.create_table_from_entity(users::Entity);
    users_table.if_not_exists();
    db.execute(backend.build(&users_table)).await?;

    let mut posts_table = schema.create_table_from_entity(posts::Entity);
    posts_table.if_not_exists();
    db.execute(backend.build(&posts_table)).await?;

    let posts_by_user = Index::create()
        .if_not_exists()
        .name("idx_posts_user_id")
        .table(posts::Entity)
        .col(posts::Column::UserId)
        .to_owned();
    db.execute(backend.build(&posts_by_user)).await?;

    tracing::info!("Database schema ready");
    Ok(())
}

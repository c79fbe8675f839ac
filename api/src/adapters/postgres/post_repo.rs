//! PostgreSQL adapter for PostRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::map_db_err;
use crate::domain::entities::{NewPost, Post, PostChanges, PostId, UserId};
use crate::domain::ports::PostRepository;
use crate::entity::{posts, users};
use crate::error::DomainError;

/// PostgreSQL implementation of PostRepository
pub struct PostgresPostRepository {
    db: DatabaseConnection,
}

impl PostgresPostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        let result = posts::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Post>, DomainError> {
        let results = posts::Entity::find()
            .filter(posts::Column::UserId.eq(user_id.0))
            .order_by_asc(posts::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, post: &NewPost) -> Result<Post, DomainError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let owner = users::Entity::find_by_id(post.user_id.0)
            .one(&txn)
            .await
            .map_err(map_db_err)?;
        if owner.is_none() {
            return Err(DomainError::NotFound(format!(
                "User {} not found",
                post.user_id
            )));
        }

        let model = posts::ActiveModel {
            id: Set(PostId::new().0),
            title: Set(post.title.clone()),
            content: Set(post.content.clone()),
            created_at: Set(Utc::now().fixed_offset()),
            user_id: Set(post.user_id.0),
        };

        // A concurrent user delete between the check and the insert is caught
        // by the foreign key and surfaces as DomainError::Integrity.
        let result = model.insert(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn update(&self, id: &PostId, changes: &PostChanges) -> Result<Post, DomainError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let Some(existing) = posts::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .map_err(map_db_err)?
        else {
            return Err(DomainError::NotFound(format!("Post {} not found", id)));
        };

        let mut post: Post = existing.into();
        changes.apply(&mut post);

        let result = posts::ActiveModel {
            id: Set(id.0),
            title: Set(post.title),
            content: Set(post.content),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn delete(&self, id: &PostId) -> Result<(), DomainError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result = posts::Entity::delete_by_id(id.0)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Post {} not found", id)));
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<posts::Model> for Post {
    fn from(model: posts::Model) -> Self {
        Post {
            id: PostId(model.id),
            title: model.title,
            content: model.content,
            user_id: UserId(model.user_id),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

//! PostgreSQL adapter for UserRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::map_db_err;
use crate::domain::entities::{NewUser, User, UserChanges, UserId};
use crate::domain::ports::UserRepository;
use crate::entity::{posts, users};
use crate::error::DomainError;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let results = users::Entity::find()
            .order_by_asc(users::Column::LastName)
            .order_by_asc(users::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = users::ActiveModel {
            id: Set(UserId::new().0),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            image_url: Set(user.image_url_or_default().to_string()),
        };

        let result = model.insert(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn update(&self, id: &UserId, changes: &UserChanges) -> Result<User, DomainError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let Some(existing) = users::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .map_err(map_db_err)?
        else {
            return Err(DomainError::NotFound(format!("User {} not found", id)));
        };

        let mut user: User = existing.into();
        changes.apply(&mut user);

        let result = users::ActiveModel {
            id: Set(id.0),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            image_url: Set(user.image_url),
        }
        .update(&txn)
        .await
        .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn delete(&self, id: &UserId) -> Result<u64, DomainError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let exists = users::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .is_some();
        if !exists {
            return Err(DomainError::NotFound(format!("User {} not found", id)));
        }

        // Explicit so the cascade holds even on a schema created without ON DELETE CASCADE
        let removed_posts = posts::Entity::delete_many()
            .filter(posts::Column::UserId.eq(id.0))
            .exec(&txn)
            .await
            .map_err(map_db_err)?
            .rows_affected;

        users::Entity::delete_by_id(id.0)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(removed_posts)
    }
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: UserId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            image_url: model.image_url,
        }
    }
}

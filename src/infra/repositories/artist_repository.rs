//! Artist repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use super::entities::artist::{self, ActiveModel, Entity as ArtistEntity};
use super::search::folded_contains;
use crate::domain::{Artist, ArtistFields};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Artist repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    /// Find artist by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Artist>>;

    /// List every artist
    async fn list(&self) -> AppResult<Vec<Artist>>;

    /// Artists whose name contains `term`, ignoring case
    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Artist>>;
}

/// Concrete implementation of ArtistRepository
pub struct ArtistStore {
    db: DatabaseConnection,
}

impl ArtistStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArtistRepository for ArtistStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Artist>> {
        find_artist(&self.db, id).await
    }

    async fn list(&self) -> AppResult<Vec<Artist>> {
        let models = ArtistEntity::find()
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Artist::from).collect())
    }

    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Artist>> {
        let models = ArtistEntity::find()
            .filter(folded_contains::<ArtistEntity>(artist::Column::SearchName, term))
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Artist::from).collect())
    }
}

pub(crate) async fn find_artist<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Artist>> {
    let result = ArtistEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(AppError::from)?;

    Ok(result.map(Artist::from))
}

pub(crate) async fn insert_artist<C: ConnectionTrait>(
    db: &C,
    fields: ArtistFields,
) -> AppResult<Artist> {
    let mut active = ActiveModel::new();
    active.set_fields(fields);

    let model = active.insert(db).await.map_err(AppError::from)?;
    Ok(Artist::from(model))
}

pub(crate) async fn update_artist<C: ConnectionTrait>(
    db: &C,
    id: i32,
    fields: ArtistFields,
) -> AppResult<Artist> {
    let artist = ArtistEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = artist.into();
    active.set_fields(fields);

    let model = active.update(db).await.map_err(AppError::from)?;
    Ok(Artist::from(model))
}

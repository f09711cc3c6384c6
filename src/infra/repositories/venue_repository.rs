//! Venue repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use super::entities::venue::{self, ActiveModel, Entity as VenueEntity};
use super::search::folded_contains;
use crate::domain::{Venue, VenueFields};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Venue repository trait for dependency injection.
///
/// Read side only; writes go through the Unit of Work transaction context.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// Find venue by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Venue>>;

    /// List every venue
    async fn list(&self) -> AppResult<Vec<Venue>>;

    /// Venues whose name contains `term`, ignoring case
    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Venue>>;
}

/// Concrete implementation of VenueRepository
pub struct VenueStore {
    db: DatabaseConnection,
}

impl VenueStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VenueRepository for VenueStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Venue>> {
        find_venue(&self.db, id).await
    }

    async fn list(&self) -> AppResult<Vec<Venue>> {
        let models = VenueEntity::find()
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Venue::from).collect())
    }

    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Venue>> {
        let models = VenueEntity::find()
            .filter(folded_contains::<VenueEntity>(venue::Column::SearchName, term))
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Venue::from).collect())
    }
}

pub(crate) async fn find_venue<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Venue>> {
    let result = VenueEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(AppError::from)?;

    Ok(result.map(Venue::from))
}

pub(crate) async fn insert_venue<C: ConnectionTrait>(db: &C, fields: VenueFields) -> AppResult<Venue> {
    let mut active = ActiveModel::new();
    active.set_fields(fields);

    let model = active.insert(db).await.map_err(AppError::from)?;
    Ok(Venue::from(model))
}

/// Overwrite every field of an existing venue; `NotFound` performs no write.
pub(crate) async fn update_venue<C: ConnectionTrait>(
    db: &C,
    id: i32,
    fields: VenueFields,
) -> AppResult<Venue> {
    let venue = VenueEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = venue.into();
    active.set_fields(fields);

    let model = active.update(db).await.map_err(AppError::from)?;
    Ok(Venue::from(model))
}

//! Show repository implementation.
//!
//! Shows are always read together with the parent rows a page needs, so
//! most queries here join venue and/or artist.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::entities::show::{self, ActiveModel, Entity as ShowEntity};
use super::entities::{ArtistEntity, VenueEntity};
use crate::domain::{Artist, NewShow, Show, ShowOwner, Venue};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Show repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ShowRepository: Send + Sync {
    /// Find show by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Show>>;

    /// Every show joined with its venue and artist
    async fn list_with_parents(&self) -> AppResult<Vec<(Show, Venue, Artist)>>;

    /// A venue's shows joined with the performing artist
    async fn list_for_venue(&self, venue_id: i32) -> AppResult<Vec<(Show, Artist)>>;

    /// An artist's shows joined with the hosting venue
    async fn list_for_artist(&self, artist_id: i32) -> AppResult<Vec<(Show, Venue)>>;

    /// Upcoming shows per venue id; venues without any are absent
    async fn count_upcoming_by_venue(&self, now: DateTime<Utc>) -> AppResult<HashMap<i32, usize>>;

    /// Upcoming shows per artist id; artists without any are absent
    async fn count_upcoming_by_artist(&self, now: DateTime<Utc>) -> AppResult<HashMap<i32, usize>>;

    /// Upcoming shows of a single venue or artist
    async fn count_upcoming(&self, owner: ShowOwner, now: DateTime<Utc>) -> AppResult<usize>;
}

/// Concrete implementation of ShowRepository
pub struct ShowStore {
    db: DatabaseConnection,
}

impl ShowStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShowRepository for ShowStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Show>> {
        find_show(&self.db, id).await
    }

    async fn list_with_parents(&self) -> AppResult<Vec<(Show, Venue, Artist)>> {
        let shows = ShowEntity::find()
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
            .all(&self.db)
            .await?;

        let venues = shows.load_one(VenueEntity, &self.db).await?;
        let artists = shows.load_one(ArtistEntity, &self.db).await?;

        // Foreign keys guarantee both parents; a missing one is skipped
        let rows = shows
            .into_iter()
            .zip(venues)
            .zip(artists)
            .filter_map(|((show, venue), artist)| {
                Some((Show::from(show), Venue::from(venue?), Artist::from(artist?)))
            })
            .collect();

        Ok(rows)
    }

    async fn list_for_venue(&self, venue_id: i32) -> AppResult<Vec<(Show, Artist)>> {
        let rows = ShowEntity::find()
            .filter(show::Column::VenueId.eq(venue_id))
            .find_also_related(ArtistEntity)
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows
            .into_iter()
            .filter_map(|(show, artist)| Some((Show::from(show), Artist::from(artist?))))
            .collect())
    }

    async fn list_for_artist(&self, artist_id: i32) -> AppResult<Vec<(Show, Venue)>> {
        let rows = ShowEntity::find()
            .filter(show::Column::ArtistId.eq(artist_id))
            .find_also_related(VenueEntity)
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows
            .into_iter()
            .filter_map(|(show, venue)| Some((Show::from(show), Venue::from(venue?))))
            .collect())
    }

    async fn count_upcoming_by_venue(&self, now: DateTime<Utc>) -> AppResult<HashMap<i32, usize>> {
        upcoming_counts(&self.db, show::Column::VenueId, now).await
    }

    async fn count_upcoming_by_artist(&self, now: DateTime<Utc>) -> AppResult<HashMap<i32, usize>> {
        upcoming_counts(&self.db, show::Column::ArtistId, now).await
    }

    async fn count_upcoming(&self, owner: ShowOwner, now: DateTime<Utc>) -> AppResult<usize> {
        let parent = match owner {
            ShowOwner::Venue(id) => show::Column::VenueId.eq(id),
            ShowOwner::Artist(id) => show::Column::ArtistId.eq(id),
        };

        let count = ShowEntity::find()
            .filter(parent)
            .filter(show::Column::StartTime.gt(now))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count as usize)
    }
}

/// `SELECT <parent>, COUNT(id) ... WHERE start_time > now GROUP BY <parent>`
async fn upcoming_counts<C: ConnectionTrait>(
    db: &C,
    parent: show::Column,
    now: DateTime<Utc>,
) -> AppResult<HashMap<i32, usize>> {
    let rows: Vec<(i32, i64)> = ShowEntity::find()
        .select_only()
        .column(parent)
        .column_as(Expr::col(show::Column::Id).count(), "upcoming")
        .filter(show::Column::StartTime.gt(now))
        .group_by(parent)
        .into_tuple()
        .all(db)
        .await
        .map_err(AppError::from)?;

    Ok(rows
        .into_iter()
        .map(|(id, count)| (id, count as usize))
        .collect())
}

async fn find_show<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Show>> {
    let result = ShowEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(AppError::from)?;

    Ok(result.map(Show::from))
}

pub(crate) async fn insert_show<C: ConnectionTrait>(db: &C, new_show: NewShow) -> AppResult<Show> {
    let active = ActiveModel {
        start_time: Set(new_show.start_time),
        artist_id: Set(new_show.artist_id),
        venue_id: Set(new_show.venue_id),
        ..Default::default()
    };

    let model = active.insert(db).await.map_err(AppError::from)?;
    Ok(Show::from(model))
}

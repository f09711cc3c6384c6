//! Artist service - Artist use cases.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{
    Artist, ArtistDetail, ArtistFields, Schedule, SearchResults, ShowWithVenue, Summary,
};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Artist service trait for dependency injection.
#[async_trait]
pub trait ArtistService: Send + Sync {
    /// Every artist with its upcoming show count
    async fn list_artists(&self) -> AppResult<Vec<Summary>>;

    /// Case-insensitive substring search on artist names
    async fn search(&self, term: &str) -> AppResult<SearchResults>;

    /// Get artist by ID; absence is not an error
    async fn find_artist(&self, id: i32) -> AppResult<Option<Artist>>;

    /// Artist with its past and upcoming shows
    async fn artist_detail(&self, id: i32) -> AppResult<Option<ArtistDetail>>;

    async fn create_artist(&self, fields: ArtistFields) -> AppResult<Artist>;

    async fn update_artist(&self, id: i32, fields: ArtistFields) -> AppResult<Artist>;
}

/// Concrete implementation of ArtistService using Unit of Work.
pub struct ArtistManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ArtistManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn summarize(&self, artists: &[Artist]) -> AppResult<Vec<Summary>> {
        let upcoming = self.uow.shows().count_upcoming_by_artist(Utc::now()).await?;
        Ok(artists
            .iter()
            .map(|a| Summary::counted(a.id, &a.name, &upcoming))
            .collect())
    }
}

#[async_trait]
impl<U: UnitOfWork> ArtistService for ArtistManager<U> {
    async fn list_artists(&self) -> AppResult<Vec<Summary>> {
        let artists = self.uow.artists().list().await?;
        self.summarize(&artists).await
    }

    async fn search(&self, term: &str) -> AppResult<SearchResults> {
        let artists = self.uow.artists().search_by_name(term).await?;
        Ok(SearchResults::new(self.summarize(&artists).await?))
    }

    async fn find_artist(&self, id: i32) -> AppResult<Option<Artist>> {
        self.uow.artists().find_by_id(id).await
    }

    async fn artist_detail(&self, id: i32) -> AppResult<Option<ArtistDetail>> {
        let Some(artist) = self.uow.artists().find_by_id(id).await? else {
            return Ok(None);
        };

        let shows = self.uow.shows().list_for_artist(id).await?;
        let schedule = Schedule::partition(shows, Utc::now(), |(show, _)| show.start_time)
            .map(|(show, venue)| ShowWithVenue::new(&show, &venue));

        Ok(Some(ArtistDetail::new(artist, schedule.past, schedule.upcoming)))
    }

    async fn create_artist(&self, fields: ArtistFields) -> AppResult<Artist> {
        let fields = fields.sanitized();
        fields.validate()?;

        let artist = with_transaction!(self.uow, |ctx| ctx.artists().create(fields).await)?;

        tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");
        Ok(artist)
    }

    async fn update_artist(&self, id: i32, fields: ArtistFields) -> AppResult<Artist> {
        let fields = fields.sanitized();
        fields.validate()?;

        let artist = with_transaction!(self.uow, |ctx| ctx.artists().update(id, fields).await)?;

        tracing::info!(artist_id = artist.id, "Artist updated");
        Ok(artist)
    }
}

//! Unit of Work over mocked repositories for service tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::{Artist, ArtistFields, Show, Venue, VenueFields};
use crate::errors::{AppError, AppResult};
use crate::infra::{
    ArtistRepository, MockArtistRepository, MockShowRepository, MockVenueRepository,
    ShowRepository, TransactionContext, UnitOfWork, VenueRepository,
};

pub(crate) const TX_UNSUPPORTED: &str = "Transactions not supported in test mock";

/// Test mock for UnitOfWork that wraps mocked repositories
pub(crate) struct TestUnitOfWork {
    venue_repo: Arc<MockVenueRepository>,
    artist_repo: Arc<MockArtistRepository>,
    show_repo: Arc<MockShowRepository>,
}

impl TestUnitOfWork {
    pub(crate) fn new(
        venues: MockVenueRepository,
        artists: MockArtistRepository,
        shows: MockShowRepository,
    ) -> Self {
        Self {
            venue_repo: Arc::new(venues),
            artist_repo: Arc::new(artists),
            show_repo: Arc::new(shows),
        }
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn venues(&self) -> Arc<dyn VenueRepository> {
        self.venue_repo.clone()
    }

    fn artists(&self) -> Arc<dyn ArtistRepository> {
        self.artist_repo.clone()
    }

    fn shows(&self) -> Arc<dyn ShowRepository> {
        self.show_repo.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal(TX_UNSUPPORTED))
    }
}

pub(crate) fn venue(id: i32, name: &str, city: &str, state: &str) -> Venue {
    Venue::from_fields(
        id,
        VenueFields {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "1015 Folsom Street".to_string(),
            genres: vec!["Jazz".to_string()],
            ..Default::default()
        },
    )
}

pub(crate) fn artist(id: i32, name: &str) -> Artist {
    Artist::from_fields(
        id,
        ArtistFields {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            genres: vec!["Rock n Roll".to_string()],
            ..Default::default()
        },
    )
}

/// A show starting `offset_hours` from now
pub(crate) fn show(id: i32, venue_id: i32, artist_id: i32, offset_hours: i64) -> Show {
    Show {
        id,
        start_time: hours_from_now(offset_hours),
        artist_id,
        venue_id,
    }
}

pub(crate) fn hours_from_now(hours: i64) -> DateTime<Utc> {
    Utc::now() + Duration::hours(hours)
}

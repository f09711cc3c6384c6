//! Venue service - Venue use cases.
//!
//! Listing by area, name search, detail pages with the show schedule,
//! and the transactional create/update paths.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{
    group_by_area, Schedule, SearchResults, ShowWithArtist, Summary, Venue,
    VenueArea, VenueDetail, VenueFields,
};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Venue service trait for dependency injection.
#[async_trait]
pub trait VenueService: Send + Sync {
    /// Every venue grouped by (city, state) with upcoming show counts
    async fn list_by_area(&self) -> AppResult<Vec<VenueArea>>;

    /// Case-insensitive substring search on venue names
    async fn search(&self, term: &str) -> AppResult<SearchResults>;

    /// Get venue by ID; absence is not an error
    async fn find_venue(&self, id: i32) -> AppResult<Option<Venue>>;

    /// Venue with its past and upcoming shows
    async fn venue_detail(&self, id: i32) -> AppResult<Option<VenueDetail>>;

    /// Validate and insert a new venue
    async fn create_venue(&self, fields: VenueFields) -> AppResult<Venue>;

    /// Validate and overwrite every field of an existing venue
    async fn update_venue(&self, id: i32, fields: VenueFields) -> AppResult<Venue>;
}

/// Concrete implementation of VenueService using Unit of Work.
pub struct VenueManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> VenueManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> VenueService for VenueManager<U> {
    async fn list_by_area(&self) -> AppResult<Vec<VenueArea>> {
        let venues = self.uow.venues().list().await?;
        let upcoming = self.uow.shows().count_upcoming_by_venue(Utc::now()).await?;
        Ok(group_by_area(&venues, &upcoming))
    }

    async fn search(&self, term: &str) -> AppResult<SearchResults> {
        let venues = self.uow.venues().search_by_name(term).await?;
        let upcoming = self.uow.shows().count_upcoming_by_venue(Utc::now()).await?;
        Ok(SearchResults::new(
            venues
                .iter()
                .map(|v| Summary::counted(v.id, &v.name, &upcoming))
                .collect(),
        ))
    }

    async fn find_venue(&self, id: i32) -> AppResult<Option<Venue>> {
        self.uow.venues().find_by_id(id).await
    }

    async fn venue_detail(&self, id: i32) -> AppResult<Option<VenueDetail>> {
        let Some(venue) = self.uow.venues().find_by_id(id).await? else {
            return Ok(None);
        };

        let shows = self.uow.shows().list_for_venue(id).await?;
        let schedule = Schedule::partition(shows, Utc::now(), |(show, _)| show.start_time)
            .map(|(show, artist)| ShowWithArtist::new(&show, &artist));

        Ok(Some(VenueDetail::new(venue, schedule.past, schedule.upcoming)))
    }

    async fn create_venue(&self, fields: VenueFields) -> AppResult<Venue> {
        let fields = fields.sanitized();
        fields.validate()?;

        let venue = with_transaction!(self.uow, |ctx| ctx.venues().create(fields).await)?;

        tracing::info!(venue_id = venue.id, name = %venue.name, "Venue created");
        Ok(venue)
    }

    async fn update_venue(&self, id: i32, fields: VenueFields) -> AppResult<Venue> {
        let fields = fields.sanitized();
        fields.validate()?;

        let venue = with_transaction!(self.uow, |ctx| ctx.venues().update(id, fields).await)?;

        tracing::info!(venue_id = venue.id, "Venue updated");
        Ok(venue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::{MockArtistRepository, MockShowRepository, MockVenueRepository};
    use crate::services::test_support::{artist, show, venue, TestUnitOfWork, TX_UNSUPPORTED};
    use mockall::predicate::eq;
    use std::collections::HashMap;

    fn service(venues: MockVenueRepository, shows: MockShowRepository) -> VenueManager<TestUnitOfWork> {
        VenueManager::new(Arc::new(TestUnitOfWork::new(
            venues,
            MockArtistRepository::new(),
            shows,
        )))
    }

    // =========================================================================
    // Listing
    // =========================================================================

    #[tokio::test]
    async fn test_list_by_area_counts_upcoming_shows() {
        let mut venues = MockVenueRepository::new();
        venues.expect_list().returning(|| {
            Ok(vec![
                venue(1, "Venue1", "Boston", "MA"),
                venue(2, "Venue2", "Boston", "MA"),
                venue(3, "Venue3", "NYC", "NY"),
            ])
        });

        let mut shows = MockShowRepository::new();
        shows
            .expect_count_upcoming_by_venue()
            .returning(|_| Ok(HashMap::from([(1, 1), (3, 1)])));

        let areas = service(venues, shows).list_by_area().await.unwrap();

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].venues.len(), 2);
        assert_eq!(areas[0].venues[0].num_upcoming_shows, 1);
        assert_eq!(areas[0].venues[1].num_upcoming_shows, 0);
        assert_eq!(areas[1].venues[0].num_upcoming_shows, 1);
    }

    #[tokio::test]
    async fn test_search_reports_count() {
        let mut venues = MockVenueRepository::new();
        venues
            .expect_search_by_name()
            .with(eq("hop"))
            .returning(|_| Ok(vec![venue(1, "The Musical Hop", "San Francisco", "CA")]));

        let mut shows = MockShowRepository::new();
        shows
            .expect_count_upcoming_by_venue()
            .returning(|_| Ok(HashMap::new()));

        let results = service(venues, shows).search("hop").await.unwrap();

        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].name, "The Musical Hop");
        assert_eq!(results.data[0].num_upcoming_shows, 0);
    }

    // =========================================================================
    // Detail
    // =========================================================================

    #[tokio::test]
    async fn test_detail_splits_past_and_upcoming() {
        let mut venues = MockVenueRepository::new();
        venues
            .expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(venue(id, "The Musical Hop", "San Francisco", "CA"))));

        let mut shows = MockShowRepository::new();
        shows.expect_list_for_venue().with(eq(1)).returning(|_| {
            Ok(vec![
                (show(1, 1, 4, -1), artist(4, "Guns N Petals")),
                (show(2, 1, 5, 1), artist(5, "Matt Quevedo")),
            ])
        });

        let detail = service(venues, shows).venue_detail(1).await.unwrap().unwrap();

        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 1);
        assert_eq!(detail.past_shows[0].artist_name, "Guns N Petals");
        assert_eq!(detail.upcoming_shows[0].artist_id, 5);
    }

    #[tokio::test]
    async fn test_detail_of_missing_venue_is_none() {
        let mut venues = MockVenueRepository::new();
        venues.expect_find_by_id().returning(|_| Ok(None));

        let mut shows = MockShowRepository::new();
        shows.expect_list_for_venue().never();

        let detail = service(venues, shows).venue_detail(42).await.unwrap();
        assert!(detail.is_none());
    }

    // =========================================================================
    // Writes
    // =========================================================================

    #[tokio::test]
    async fn test_create_rejects_invalid_fields_before_transaction() {
        let fields = VenueFields {
            name: "  ".to_string(),
            city: "Boston".to_string(),
            state: "MA".to_string(),
            address: "1 Main Street".to_string(),
            ..Default::default()
        };

        let result = service(MockVenueRepository::new(), MockShowRepository::new())
            .create_venue(fields)
            .await;

        assert!(matches!(result, Err(AppError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_update_runs_in_transaction() {
        let fields = venue(1, "Hop", "Boston", "MA").fields();

        let result = service(MockVenueRepository::new(), MockShowRepository::new())
            .update_venue(1, fields)
            .await;

        match result {
            Err(AppError::Internal(msg)) => assert_eq!(msg, TX_UNSUPPORTED),
            other => panic!("expected transaction to be used, got {other:?}"),
        }
    }
}

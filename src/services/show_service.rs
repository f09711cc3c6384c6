//! Show service - Show listing, creation and upcoming counts.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::domain::{NewShow, Show, ShowListing, ShowOwner};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Show service trait for dependency injection.
#[async_trait]
pub trait ShowService: Send + Sync {
    /// Every show joined with its venue and artist
    async fn list_shows(&self) -> AppResult<Vec<ShowListing>>;

    /// Get show by ID; absence is not an error
    async fn find_show(&self, id: i32) -> AppResult<Option<Show>>;

    /// Insert a show after checking both references inside the transaction
    async fn create_show(&self, new_show: NewShow) -> AppResult<Show>;

    /// Number of shows for `owner` starting strictly after now
    async fn upcoming_show_count(&self, owner: ShowOwner) -> AppResult<usize> {
        self.uow.shows().count_upcoming(owner, Utc::now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockArtistRepository, MockShowRepository, MockVenueRepository};
    use crate::services::test_support::{
        artist, hours_from_now, show, venue, TestUnitOfWork, TX_UNSUPPORTED,
    };

    fn service(shows: MockShowRepository) -> ShowManager<TestUnitOfWork> {
        ShowManager::new(Arc::new(TestUnitOfWork::new(
            MockVenueRepository::new(),
            MockArtistRepository::new(),
            shows,
        )))
    }

    #[tokio::test]
    async fn test_list_shows_flattens_parents() {
        let mut shows = MockShowRepository::new();
        shows.expect_list_with_parents().returning(|| {
            Ok(vec![(
                show(1, 1, 4, 1),
                venue(1, "The Musical Hop", "San Francisco", "CA"),
                artist(4, "Guns N Petals"),
            )])
        });

        let listing = service(shows).list_shows().await.unwrap();

        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].venue_name, "The Musical Hop");
        assert_eq!(listing[0].artist_name, "Guns N Petals");
    }

    #[tokio::test]
    async fn test_upcoming_count_for_venue() {
        let mut shows = MockShowRepository::new();
        shows
            .expect_count_upcoming()
            .withf(|owner, _| *owner == ShowOwner::Venue(1))
            .returning(|_, _| Ok(2));

        let count = service(shows)
            .upcoming_show_count(ShowOwner::Venue(1))
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_upcoming_count_for_unknown_artist_is_zero() {
        let mut shows = MockShowRepository::new();
        shows
            .expect_count_upcoming()
            .withf(|owner, _| *owner == ShowOwner::Artist(99))
            .returning(|_, _| Ok(0));

        let count = service(shows)
            .upcoming_show_count(ShowOwner::Artist(99))
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_create_goes_through_transaction() {
        let new_show = NewShow {
            artist_id: 4,
            venue_id: 1,
            start_time: hours_from_now(1),
        };

        let result = service(MockShowRepository::new()).create_show(new_show).await;

        match result {
            Err(AppError::Internal(msg)) => assert_eq!(msg, TX_UNSUPPORTED),
            other => panic!("expected transaction to be used, got {other:?}"),
        }
    }
}

//! Service Container - Centralized service access.
//!
//! SOLID (DIP): Handlers depend on service traits, not implementations.

use std::sync::Arc;

use super::{ArtistService, ShowService, VenueService};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get venue service
    fn venues(&self) -> Arc<dyn VenueService>;

    /// Get artist service
    fn artists(&self) -> Arc<dyn ArtistService>;

    /// Get show service
    fn shows(&self) -> Arc<dyn ShowService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    venue_service: Arc<dyn VenueService>,
    artist_service: Arc<dyn ArtistService>,
    show_service: Arc<dyn ShowService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        venue_service: Arc<dyn VenueService>,
        artist_service: Arc<dyn ArtistService>,
        show_service: Arc<dyn ShowService>,
    ) -> Self {
        Self {
            venue_service,
            artist_service,
            show_service,
        }
    }

    /// Create service container over a single Unit of Work
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        use super::{ArtistManager, ShowManager, VenueManager};

        let uow = Arc::new(Persistence::new(db));

        Self::new(
            Arc::new(VenueManager::new(uow.clone())),
            Arc::new(ArtistManager::new(uow.clone())),
            Arc::new(ShowManager::new(uow)),
        )
    }
}

impl ServiceContainer for Services {
    fn venues(&self) -> Arc<dyn VenueService> {
        self.venue_service.clone()
    }

    fn artists(&self) -> Arc<dyn ArtistService> {
        self.artist_service.clone()
    }

    fn shows(&self) -> Arc<dyn ShowService> {
        self.show_service.clone()
    }
}

//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{ArtistService, ServiceContainer, Services, ShowService, VenueService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub venue_service: Arc<dyn VenueService>,
    pub artist_service: Arc<dyn ArtistService>,
    pub show_service: Arc<dyn ShowService>,
    /// Database handle for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state with the service container built over `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::new(&container, database)
    }

    /// Create application state from an existing service container.
    pub fn new(services: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            venue_service: services.venues(),
            artist_service: services.artists(),
            show_service: services.shows(),
            database,
        }
    }
}

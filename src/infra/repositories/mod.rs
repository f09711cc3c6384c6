//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Each module also exposes connection-generic write helpers that the
//! Unit of Work runs inside a transaction.

mod artist_repository;
pub(crate) mod entities;
mod search;
mod show_repository;
mod venue_repository;

pub use artist_repository::{ArtistRepository, ArtistStore};
pub use show_repository::{ShowRepository, ShowStore};
pub use venue_repository::{VenueRepository, VenueStore};

pub(crate) use artist_repository::{find_artist, insert_artist, update_artist};
pub(crate) use show_repository::insert_show;
pub(crate) use venue_repository::{find_venue, insert_venue, update_venue};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use artist_repository::MockArtistRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use show_repository::MockShowRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use venue_repository::MockVenueRepository;

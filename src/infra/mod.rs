//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - SeaORM entities and repositories
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    ArtistRepository, ArtistStore, ShowRepository, ShowStore, VenueRepository, VenueStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxArtistRepository, TxShowRepository, TxVenueRepository,
    UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockArtistRepository, MockShowRepository, MockVenueRepository};

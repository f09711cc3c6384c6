//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

mod artist_service;
pub mod container;
mod show_service;
mod venue_service;

#[cfg(test)]
mod test_support;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use artist_service::{ArtistManager, ArtistService};
pub use show_service::{ShowManager, ShowService};
pub use venue_service::{VenueManager, VenueService};

//! Domain layer - Core business entities and logic
//!
//! This module contains the booking directory's domain models and the
//! pure query logic (time partitioning, city/state grouping) that the
//! services apply on top of repository results.
//!
//! DDD: Domain layer has NO infrastructure dependencies (except error types).

pub mod area;
pub mod artist;
pub mod schedule;
pub mod show;
pub mod summary;
pub mod venue;

mod validation;

pub use area::{group_by_area, VenueArea};
pub use artist::{Artist, ArtistDetail, ArtistFields};
pub use schedule::{is_upcoming, Schedule, TimeBucket};
pub use show::{NewShow, Show, ShowListing, ShowOwner, ShowWithArtist, ShowWithVenue};
pub use summary::{SearchResults, Summary};
pub use venue::{Venue, VenueDetail, VenueFields};

//! Show domain entity and the joined views built from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Artist, Venue};
use crate::utils::format_show_time;

/// A scheduled performance linking one artist to one venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Show {
    #[schema(example = 1)]
    pub id: i32,
    pub start_time: DateTime<Utc>,
    #[schema(example = 4)]
    pub artist_id: i32,
    #[schema(example = 1)]
    pub venue_id: i32,
}

/// Show creation data; every field is mandatory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

/// The parent a show count or listing is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowOwner {
    Venue(i32),
    Artist(i32),
}

/// A venue's show, joined with the performing artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShowWithArtist {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[schema(example = "2035-04-01 20:00:00")]
    pub start_time: String,
}

impl ShowWithArtist {
    pub fn new(show: &Show, artist: &Artist) -> Self {
        Self {
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: format_show_time(&show.start_time),
        }
    }
}

/// An artist's show, joined with the hosting venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShowWithVenue {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    #[schema(example = "2035-04-01 20:00:00")]
    pub start_time: String,
}

impl ShowWithVenue {
    pub fn new(show: &Show, venue: &Venue) -> Self {
        Self {
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            venue_image_link: venue.image_link.clone(),
            start_time: format_show_time(&show.start_time),
        }
    }
}

/// Flat show listing row with both parents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[schema(example = "2035-04-01 20:00:00")]
    pub start_time: String,
}

impl ShowListing {
    pub fn new(show: &Show, venue: &Venue, artist: &Artist) -> Self {
        Self {
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: format_show_time(&show.start_time),
        }
    }
}

//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use venue_booking::domain::{ArtistFields, VenueFields};
use venue_booking::infra::{Database, Persistence};

/// Fresh in-memory SQLite database with every migration applied.
///
/// The whole database lives in the pool's single connection.
pub async fn setup_db() -> Arc<Database> {
    let db = Database::connect_url("sqlite::memory:", 1)
        .await
        .expect("in-memory sqlite");
    db.run_migrations().await.expect("migrations apply");
    Arc::new(db)
}

pub fn persistence(db: &Database) -> Arc<Persistence> {
    Arc::new(Persistence::new(db.get_connection()))
}

pub fn venue_fields(name: &str, city: &str, state: &str) -> VenueFields {
    VenueFields {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: Some("123-123-1234".to_string()),
        image_link: Some("https://images.example.com/venue.jpg".to_string()),
        facebook_link: None,
        website_link: None,
        seeking_talent: true,
        seeking_description: Some("We are on the lookout for a local artist".to_string()),
        genres: vec!["Jazz".to_string(), "Reggae".to_string()],
    }
}

pub fn artist_fields(name: &str) -> ArtistFields {
    ArtistFields {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("326-123-5000".to_string()),
        genres: vec!["Rock n Roll".to_string()],
        image_link: Some("https://images.example.com/artist.jpg".to_string()),
        facebook_link: None,
        website_link: None,
        seeking_venue: false,
        seeking_description: None,
    }
}

/// Now shifted by whole hours, truncated to the second
pub fn hours_from_now(hours: i64) -> DateTime<Utc> {
    let now = Utc::now() + Duration::hours(hours);
    DateTime::from_timestamp(now.timestamp(), 0).expect("valid timestamp")
}

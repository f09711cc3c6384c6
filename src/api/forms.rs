//! Submitted form bodies and their explicit mapping onto domain field sets.
//!
//! Every form denies unknown fields; the mapping below is the only place a
//! form value reaches a domain type.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Artist, ArtistFields, NewShow, Venue, VenueFields};
use crate::errors::AppError;
use crate::utils::{format_show_time, parse_start_time};

const CHECKED: &str = "y";

/// HTML checkbox semantics: present with a truthy value means checked
fn is_checked(value: &Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim),
        Some("y" | "on" | "true" | "1")
    )
}

fn checkbox(checked: bool) -> Option<String> {
    checked.then(|| CHECKED.to_string())
}

/// Name search form
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct SearchForm {
    #[schema(example = "hop")]
    pub search_term: String,
}

/// Venue create/edit form
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct VenueForm {
    #[schema(example = "The Musical Hop")]
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    /// Checkbox; `y`, `on`, `true` or `1` when checked
    pub seeking_talent: Option<String>,
    pub seeking_description: String,
    /// Repeated key, one value per genre
    pub genres: Vec<String>,
}

impl From<VenueForm> for VenueFields {
    fn from(form: VenueForm) -> Self {
        VenueFields {
            seeking_talent: is_checked(&form.seeking_talent),
            name: form.name,
            city: form.city,
            state: form.state,
            address: form.address,
            phone: Some(form.phone),
            image_link: Some(form.image_link),
            facebook_link: Some(form.facebook_link),
            website_link: Some(form.website_link),
            seeking_description: Some(form.seeking_description),
            genres: form.genres,
        }
    }
}

/// Prefill an edit form from the stored venue
impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        VenueForm {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            seeking_talent: checkbox(venue.seeking_talent),
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
            genres: venue.genres.clone(),
        }
    }
}

/// Artist create/edit form
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ArtistForm {
    #[schema(example = "Guns N Petals")]
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: Option<String>,
    pub seeking_description: String,
}

impl From<ArtistForm> for ArtistFields {
    fn from(form: ArtistForm) -> Self {
        ArtistFields {
            seeking_venue: is_checked(&form.seeking_venue),
            name: form.name,
            city: form.city,
            state: form.state,
            phone: Some(form.phone),
            genres: form.genres,
            image_link: Some(form.image_link),
            facebook_link: Some(form.facebook_link),
            website_link: Some(form.website_link),
            seeking_description: Some(form.seeking_description),
        }
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        ArtistForm {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            genres: artist.genres.clone(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            seeking_venue: checkbox(artist.seeking_venue),
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }
}

/// Show creation form
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ShowForm {
    #[schema(example = "4")]
    pub artist_id: String,
    #[schema(example = "1")]
    pub venue_id: String,
    #[schema(example = "2035-04-01 20:00:00")]
    pub start_time: String,
}

impl ShowForm {
    /// Blank form with the start time preset to the current time
    pub fn blank() -> Self {
        ShowForm {
            start_time: format_show_time(&Utc::now()),
            ..Default::default()
        }
    }
}

fn parse_id(value: &str, label: &str) -> Result<i32, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::constraint(format!("{label} is required")));
    }
    value
        .parse()
        .map_err(|_| AppError::constraint(format!("{label} must be a whole number")))
}

impl TryFrom<ShowForm> for NewShow {
    type Error = AppError;

    fn try_from(form: ShowForm) -> Result<Self, Self::Error> {
        let artist_id = parse_id(&form.artist_id, "Artist ID")?;
        let venue_id = parse_id(&form.venue_id, "Venue ID")?;

        if form.start_time.trim().is_empty() {
            return Err(AppError::constraint("Start time is required"));
        }
        let start_time = parse_start_time(&form.start_time).ok_or_else(|| {
            AppError::constraint("Start time must look like YYYY-MM-DD HH:MM:SS")
        })?;

        Ok(NewShow {
            artist_id,
            venue_id,
            start_time,
        })
    }
}

//! Artist domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::show::ShowWithVenue;
use super::validation::{normalize_genres, PHONE_PATTERN};
use super::venue::non_blank;

/// Artist domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Artist {
    #[schema(example = 4)]
    pub id: i32,
    #[schema(example = "Guns N Petals")]
    pub name: String,
    #[schema(example = "San Francisco")]
    pub city: String,
    #[schema(example = "CA")]
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl Artist {
    /// Assemble an artist from its generated id and stored fields
    pub fn from_fields(id: i32, fields: ArtistFields) -> Self {
        Self {
            id,
            name: fields.name,
            city: fields.city,
            state: fields.state,
            phone: fields.phone,
            genres: fields.genres,
            image_link: fields.image_link,
            facebook_link: fields.facebook_link,
            website_link: fields.website_link,
            seeking_venue: fields.seeking_venue,
            seeking_description: fields.seeking_description,
        }
    }

    /// Every writable field of this artist
    pub fn fields(&self) -> ArtistFields {
        ArtistFields {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: self.phone.clone(),
            genres: self.genres.clone(),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

/// The complete set of writable artist fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ArtistFields {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "City is required (max 120 characters)"))]
    pub city: String,
    #[validate(length(min = 1, max = 120, message = "State is required (max 120 characters)"))]
    pub state: String,
    #[validate(
        length(max = 120, message = "Phone is too long"),
        regex(path = *PHONE_PATTERN, message = "Phone number is invalid")
    )]
    pub phone: Option<String>,
    pub genres: Vec<String>,
    #[validate(
        url(message = "Image link must be a valid URL"),
        length(max = 500, message = "Image link is too long")
    )]
    pub image_link: Option<String>,
    #[validate(
        url(message = "Facebook link must be a valid URL"),
        length(max = 120, message = "Facebook link is too long")
    )]
    pub facebook_link: Option<String>,
    #[validate(
        url(message = "Website link must be a valid URL"),
        length(max = 120, message = "Website link is too long")
    )]
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    #[validate(length(max = 500, message = "Seeking description is too long"))]
    pub seeking_description: Option<String>,
}

impl ArtistFields {
    /// Trim text, turn blank optional values into `None` and drop empty genres.
    pub fn sanitized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: non_blank(self.phone),
            genres: normalize_genres(self.genres),
            image_link: non_blank(self.image_link),
            facebook_link: non_blank(self.facebook_link),
            website_link: non_blank(self.website_link),
            seeking_venue: self.seeking_venue,
            seeking_description: non_blank(self.seeking_description),
        }
    }
}

/// Artist detail page data: the artist plus the venues they play, split around "now"
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ShowWithVenue>,
    pub upcoming_shows: Vec<ShowWithVenue>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn new(
        artist: Artist,
        past_shows: Vec<ShowWithVenue>,
        upcoming_shows: Vec<ShowWithVenue>,
    ) -> Self {
        Self {
            artist,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_seeking_description_is_rejected() {
        let fields = ArtistFields {
            name: "Matt Quevedo".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            seeking_description: Some("x".repeat(501)),
            ..Default::default()
        };

        let errors = fields.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("seeking_description"));
    }

    #[test]
    fn test_artist_website_limit_is_stricter_than_venue() {
        let fields = ArtistFields {
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            website_link: Some(format!("https://example.com/{}", "a".repeat(150))),
            ..Default::default()
        };

        assert!(fields.validate().is_err());
    }
}

//! Venue domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::show::ShowWithArtist;
use super::validation::{normalize_genres, PHONE_PATTERN};

/// Venue domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Venue {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "The Musical Hop")]
    pub name: String,
    #[schema(example = "San Francisco")]
    pub city: String,
    #[schema(example = "CA")]
    pub state: String,
    #[schema(example = "1015 Folsom Street")]
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

impl Venue {
    /// Assemble a venue from its generated id and stored fields
    pub fn from_fields(id: i32, fields: VenueFields) -> Self {
        Self {
            id,
            name: fields.name,
            city: fields.city,
            state: fields.state,
            address: fields.address,
            phone: fields.phone,
            image_link: fields.image_link,
            facebook_link: fields.facebook_link,
            website_link: fields.website_link,
            seeking_talent: fields.seeking_talent,
            seeking_description: fields.seeking_description,
            genres: fields.genres,
        }
    }

    /// Every writable field of this venue
    pub fn fields(&self) -> VenueFields {
        VenueFields {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description.clone(),
            genres: self.genres.clone(),
        }
    }
}

/// The complete set of writable venue fields.
///
/// Create inserts these, Update overwrites all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct VenueFields {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 120,
        message = "City is required (max 120 characters)"
    ))]
    pub city: String,
    #[validate(length(
        min = 1,
        max = 120,
        message = "State is required (max 120 characters)"
    ))]
    pub state: String,
    #[validate(length(
        min = 1,
        max = 120,
        message = "Address is required (max 120 characters)"
    ))]
    pub address: String,
    #[validate(
        length(max = 120, message = "Phone is too long"),
        regex(path = *PHONE_PATTERN, message = "Phone number is invalid")
    )]
    pub phone: Option<String>,
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
        length(max = 300, message = "Website link is too long")
    )]
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    #[validate(length(
        max = 250,
        message = "Seeking description is too long"
    ))]
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

impl VenueFields {
    /// Trim text, turn blank optional values into `None` and drop empty genres.
    pub fn sanitized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: non_blank(self.phone),
            image_link: non_blank(self.image_link),
            facebook_link: non_blank(self.facebook_link),
            website_link: non_blank(self.website_link),
            seeking_talent: self.seeking_talent,
            seeking_description: non_blank(self.seeking_description),
            genres: normalize_genres(self.genres),
        }
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Venue detail page data: the venue plus its shows split around "now"
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<ShowWithArtist>,
    pub upcoming_shows: Vec<ShowWithArtist>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn new(
        venue: Venue,
        past_shows: Vec<ShowWithArtist>,
        upcoming_shows: Vec<ShowWithArtist>,
    ) -> Self {
        Self {
            venue,
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

    fn fields(name: &str) -> VenueFields {
        VenueFields {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("123-123-1234".to_string()),
            image_link: None,
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
            website_link: None,
            seeking_talent: true,
            seeking_description: None,
            genres: vec!["Jazz".to_string()],
        }
    }

    #[test]
    fn test_valid_fields_pass() {
        assert!(fields("The Musical Hop").validate().is_ok());
    }

    #[test]
    fn test_blank_name_is_rejected_after_sanitizing() {
        let result = fields("   ").sanitized().validate();
        let errors = result.unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_bad_url_and_phone_are_rejected() {
        let mut f = fields("Hop");
        f.website_link = Some("not a url".to_string());
        f.phone = Some("call me".to_string());

        let errors = f.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("website_link"));
        assert!(fields.contains_key("phone"));
    }

    #[test]
    fn test_sanitized_blanks_become_none() {
        let mut f = fields("  Hop  ");
        f.image_link = Some("   ".to_string());
        f.genres = vec!["".to_string(), " Folk".to_string()];

        let f = f.sanitized();
        assert_eq!(f.name, "Hop");
        assert_eq!(f.image_link, None);
        assert_eq!(f.genres, vec!["Folk"]);
    }

    #[test]
    fn test_detail_counts_follow_lists() {
        let venue = Venue::from_fields(1, fields("Hop"));
        let show = ShowWithArtist {
            artist_id: 4,
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: None,
            start_time: "2019-05-21 21:30:00".to_string(),
        };

        let detail = VenueDetail::new(venue, vec![show], vec![]);
        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 0);
    }
}

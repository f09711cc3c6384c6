//! OpenAPI documentation configuration.
//!
//! Every page is a JSON document `{ view, flash, data }`; the schemas below
//! describe the `data` member of each page and the submitted forms.

use utoipa::OpenApi;

use crate::api::forms::{ArtistForm, SearchForm, ShowForm, VenueForm};
use crate::api::handlers::{artist_handler, show_handler, venue_handler};
use crate::api::routes;
use crate::domain::{
    Artist, ArtistDetail, SearchResults, Show, ShowListing, ShowWithArtist, ShowWithVenue,
    Summary, Venue, VenueArea, VenueDetail,
};

/// OpenAPI documentation for the booking directory
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Venue Booking",
        version = "0.1.0",
        description = "Browse, search and book venues, artists and shows",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        routes::home,
        // Venues
        venue_handler::list_venues,
        venue_handler::search_venues,
        venue_handler::show_venue,
        venue_handler::create_venue_form,
        venue_handler::create_venue_submission,
        venue_handler::edit_venue_form,
        venue_handler::edit_venue_submission,
        // Artists
        artist_handler::list_artists,
        artist_handler::search_artists,
        artist_handler::show_artist,
        artist_handler::create_artist_form,
        artist_handler::create_artist_submission,
        artist_handler::edit_artist_form,
        artist_handler::edit_artist_submission,
        // Shows
        show_handler::list_shows,
        show_handler::create_show_form,
        show_handler::create_show_submission,
    ),
    components(
        schemas(
            // Domain types
            Venue,
            Artist,
            Show,
            VenueDetail,
            ArtistDetail,
            ShowWithArtist,
            ShowWithVenue,
            ShowListing,
            Summary,
            SearchResults,
            VenueArea,
            // Forms
            SearchForm,
            VenueForm,
            ArtistForm,
            ShowForm,
            // Page data
            venue_handler::VenueSearchPage,
            venue_handler::EditVenuePage,
            artist_handler::ArtistSearchPage,
            artist_handler::EditArtistPage,
        )
    ),
    tags(
        (name = "Pages", description = "Landing page"),
        (name = "Venues", description = "Venue directory"),
        (name = "Artists", description = "Artist directory"),
        (name = "Shows", description = "Show listing and booking")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_page() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/",
            "/venues",
            "/venues/search",
            "/venues/{venue_id}",
            "/venues/create",
            "/venues/{venue_id}/edit",
            "/artists",
            "/artists/{artist_id}",
            "/shows",
            "/shows/create",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }
}

//! Venue pages and form submissions.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::extractors::{EntityId, StrictForm};
use crate::api::flash::Flash;
use crate::api::forms::{SearchForm, VenueForm};
use crate::api::AppState;
use crate::config::{
    FLASH_EDIT_SUCCESS, VIEW_EDIT_VENUE, VIEW_HOME, VIEW_NEW_VENUE, VIEW_SEARCH_VENUES,
    VIEW_SHOW_VENUE, VIEW_VENUES,
};
use crate::domain::{SearchResults, Venue, VenueArea, VenueDetail, VenueFields};
use crate::errors::{AppError, OptionExt};

/// Search page data
#[derive(Debug, Serialize, ToSchema)]
pub struct VenueSearchPage {
    pub search_term: String,
    pub results: SearchResults,
}

/// Edit form page data
#[derive(Debug, Serialize, ToSchema)]
pub struct EditVenuePage {
    pub venue: Venue,
    pub form: VenueForm,
}

/// Create venue routes
pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_venues))
        .route("/search", post(search_venues))
        .route("/create", get(create_venue_form).post(create_venue_submission))
        .route("/:venue_id", get(show_venue))
        .route("/:venue_id/edit", get(edit_venue_form).post(edit_venue_submission))
}

/// List venues grouped by city and state
#[utoipa::path(
    get,
    path = "/venues",
    tag = "Venues",
    responses(
        (status = 200, description = "Venues page", body = [VenueArea]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_venues(State(state): State<AppState>, flash: Flash) -> Response {
    flash.render(VIEW_VENUES, state.venue_service.list_by_area().await)
}

/// Case-insensitive substring search on venue names
#[utoipa::path(
    post,
    path = "/venues/search",
    tag = "Venues",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Search results page", body = VenueSearchPage),
        (status = 400, description = "Unknown form field")
    )
)]
pub async fn search_venues(
    State(state): State<AppState>,
    flash: Flash,
    StrictForm(form): StrictForm<SearchForm>,
) -> Response {
    let results = state.venue_service.search(&form.search_term).await;
    flash.render(
        VIEW_SEARCH_VENUES,
        results.map(|results| VenueSearchPage {
            search_term: form.search_term,
            results,
        }),
    )
}

/// Venue detail with past and upcoming shows
#[utoipa::path(
    get,
    path = "/venues/{venue_id}",
    tag = "Venues",
    params(("venue_id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Venue page", body = VenueDetail),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn show_venue(
    State(state): State<AppState>,
    EntityId(venue_id): EntityId,
    flash: Flash,
) -> Response {
    let detail = state
        .venue_service
        .venue_detail(venue_id)
        .await
        .and_then(|detail| detail.ok_or_not_found());

    flash.render(VIEW_SHOW_VENUE, detail)
}

/// Blank venue form
#[utoipa::path(
    get,
    path = "/venues/create",
    tag = "Venues",
    responses((status = 200, description = "New venue form", body = VenueForm))
)]
pub async fn create_venue_form(flash: Flash) -> impl IntoResponse {
    flash.page(VIEW_NEW_VENUE, VenueForm::default())
}

/// Submit a new venue; the outcome is reported as a flash on the home page
#[utoipa::path(
    post,
    path = "/venues/create",
    tag = "Venues",
    request_body(content = VenueForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Home page with success or error flash"))
)]
pub async fn create_venue_submission(
    State(state): State<AppState>,
    flash: Flash,
    form: Result<StrictForm<VenueForm>, AppError>,
) -> impl IntoResponse {
    let result = match form {
        Ok(StrictForm(form)) => state.venue_service.create_venue(VenueFields::from(form)).await,
        Err(e) => Err(e),
    };

    let message = match result {
        Ok(venue) => format!("Venue {} was successfully added!", venue.name),
        Err(e) => {
            tracing::warn!(error = %e, "Venue could not be created");
            format!("Error: {}", e.user_message())
        }
    };

    flash.push(message).page(VIEW_HOME, ())
}

/// Venue edit form prefilled with the stored values
#[utoipa::path(
    get,
    path = "/venues/{venue_id}/edit",
    tag = "Venues",
    params(("venue_id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Edit venue form", body = EditVenuePage),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn edit_venue_form(
    State(state): State<AppState>,
    EntityId(venue_id): EntityId,
    flash: Flash,
) -> Response {
    let venue = state
        .venue_service
        .find_venue(venue_id)
        .await
        .and_then(|venue| venue.ok_or_not_found());

    flash.render(
        VIEW_EDIT_VENUE,
        venue.map(|venue| EditVenuePage {
            form: VenueForm::from(&venue),
            venue,
        }),
    )
}

/// Overwrite a venue and redirect back to its page
#[utoipa::path(
    post,
    path = "/venues/{venue_id}/edit",
    tag = "Venues",
    params(("venue_id" = i32, Path, description = "Venue ID")),
    request_body(content = VenueForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 302, description = "Redirect to the venue page with a flash"))
)]
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    EntityId(venue_id): EntityId,
    flash: Flash,
    form: Result<StrictForm<VenueForm>, AppError>,
) -> impl IntoResponse {
    let result = match form {
        Ok(StrictForm(form)) => {
            state
                .venue_service
                .update_venue(venue_id, VenueFields::from(form))
                .await
        }
        Err(e) => Err(e),
    };

    let message = match result {
        Ok(_) => FLASH_EDIT_SUCCESS.to_string(),
        Err(e) => {
            tracing::warn!(venue_id, error = %e, "Venue could not be updated");
            format!("Error: {}", e.user_message())
        }
    };

    flash.push(message).redirect(format!("/venues/{}", venue_id))
}

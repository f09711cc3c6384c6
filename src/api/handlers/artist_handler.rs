//! Artist pages and form submissions.

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
use crate::api::forms::{ArtistForm, SearchForm};
use crate::api::AppState;
use crate::config::{
    FLASH_EDIT_SUCCESS, VIEW_ARTISTS, VIEW_EDIT_ARTIST, VIEW_HOME, VIEW_NEW_ARTIST,
    VIEW_SEARCH_ARTISTS, VIEW_SHOW_ARTIST,
};
use crate::domain::{Artist, ArtistDetail, ArtistFields, SearchResults, Summary};
use crate::errors::{AppError, OptionExt};

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistSearchPage {
    pub search_term: String,
    pub results: SearchResults,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EditArtistPage {
    pub artist: Artist,
    pub form: ArtistForm,
}

/// Create artist routes
pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_artists))
        .route("/search", post(search_artists))
        .route("/create", get(create_artist_form).post(create_artist_submission))
        .route("/:artist_id", get(show_artist))
        .route("/:artist_id/edit", get(edit_artist_form).post(edit_artist_submission))
}

/// List all artists
#[utoipa::path(
    get,
    path = "/artists",
    tag = "Artists",
    responses(
        (status = 200, description = "Artists page", body = [Summary]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_artists(State(state): State<AppState>, flash: Flash) -> Response {
    flash.render(VIEW_ARTISTS, state.artist_service.list_artists().await)
}

/// Case-insensitive substring search on artist names
#[utoipa::path(
    post,
    path = "/artists/search",
    tag = "Artists",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Search results page", body = ArtistSearchPage),
        (status = 400, description = "Unknown form field")
    )
)]
pub async fn search_artists(
    State(state): State<AppState>,
    flash: Flash,
    StrictForm(form): StrictForm<SearchForm>,
) -> Response {
    let results = state.artist_service.search(&form.search_term).await;
    flash.render(
        VIEW_SEARCH_ARTISTS,
        results.map(|results| ArtistSearchPage {
            search_term: form.search_term,
            results,
        }),
    )
}

/// Artist detail with past and upcoming shows
#[utoipa::path(
    get,
    path = "/artists/{artist_id}",
    tag = "Artists",
    params(("artist_id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 200, description = "Artist page", body = ArtistDetail),
        (status = 404, description = "Artist not found")
    )
)]
pub async fn show_artist(
    State(state): State<AppState>,
    EntityId(artist_id): EntityId,
    flash: Flash,
) -> Response {
    let detail = state
        .artist_service
        .artist_detail(artist_id)
        .await
        .and_then(|detail| detail.ok_or_not_found());

    flash.render(VIEW_SHOW_ARTIST, detail)
}

/// Blank artist form
#[utoipa::path(
    get,
    path = "/artists/create",
    tag = "Artists",
    responses((status = 200, description = "New artist form", body = ArtistForm))
)]
pub async fn create_artist_form(flash: Flash) -> impl IntoResponse {
    flash.page(VIEW_NEW_ARTIST, ArtistForm::default())
}

/// Submit a new artist; the outcome is reported as a flash on the home page
#[utoipa::path(
    post,
    path = "/artists/create",
    tag = "Artists",
    request_body(content = ArtistForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Home page with success or error flash"))
)]
pub async fn create_artist_submission(
    State(state): State<AppState>,
    flash: Flash,
    form: Result<StrictForm<ArtistForm>, AppError>,
) -> impl IntoResponse {
    let result = match form {
        Ok(StrictForm(form)) => {
            state
                .artist_service
                .create_artist(ArtistFields::from(form))
                .await
        }
        Err(e) => Err(e),
    };

    let message = match result {
        Ok(artist) => format!("Artist {} was successfully added!", artist.name),
        Err(e) => {
            tracing::warn!(error = %e, "Artist could not be created");
            format!("Error: {}", e.user_message())
        }
    };

    flash.push(message).page(VIEW_HOME, ())
}

/// Artist edit form prefilled with the stored values
#[utoipa::path(
    get,
    path = "/artists/{artist_id}/edit",
    tag = "Artists",
    params(("artist_id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 200, description = "Edit artist form", body = EditArtistPage),
        (status = 404, description = "Artist not found")
    )
)]
pub async fn edit_artist_form(
    State(state): State<AppState>,
    EntityId(artist_id): EntityId,
    flash: Flash,
) -> Response {
    let artist = state
        .artist_service
        .find_artist(artist_id)
        .await
        .and_then(|artist| artist.ok_or_not_found());

    flash.render(
        VIEW_EDIT_ARTIST,
        artist.map(|artist| EditArtistPage {
            form: ArtistForm::from(&artist),
            artist,
        }),
    )
}

/// Overwrite an artist and redirect back to its page
#[utoipa::path(
    post,
    path = "/artists/{artist_id}/edit",
    tag = "Artists",
    params(("artist_id" = i32, Path, description = "Artist ID")),
    request_body(content = ArtistForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 302, description = "Redirect to the artist page with a flash"))
)]
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    EntityId(artist_id): EntityId,
    flash: Flash,
    form: Result<StrictForm<ArtistForm>, AppError>,
) -> impl IntoResponse {
    let result = match form {
        Ok(StrictForm(form)) => {
            state
                .artist_service
                .update_artist(artist_id, ArtistFields::from(form))
                .await
        }
        Err(e) => Err(e),
    };

    let message = match result {
        Ok(_) => FLASH_EDIT_SUCCESS.to_string(),
        Err(e) => {
            tracing::warn!(artist_id, error = %e, "Artist could not be updated");
            format!("Error: {}", e.user_message())
        }
    };

    flash.push(message).redirect(format!("/artists/{}", artist_id))
}

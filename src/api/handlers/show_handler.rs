//! Show listing and creation.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::api::extractors::StrictForm;
use crate::api::flash::Flash;
use crate::api::forms::ShowForm;
use crate::api::AppState;
use crate::config::{FLASH_SHOW_CREATED, VIEW_HOME, VIEW_NEW_SHOW, VIEW_SHOWS};
use crate::domain::{NewShow, ShowListing};
use crate::errors::AppError;

/// Create show routes
pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_shows))
        .route("/create", get(create_show_form).post(create_show_submission))
}

/// List every show with its venue and artist
#[utoipa::path(
    get,
    path = "/shows",
    tag = "Shows",
    responses(
        (status = 200, description = "Shows page", body = [ShowListing]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_shows(State(state): State<AppState>, flash: Flash) -> Response {
    flash.render(VIEW_SHOWS, state.show_service.list_shows().await)
}

/// Show form with the start time preset to now
#[utoipa::path(
    get,
    path = "/shows/create",
    tag = "Shows",
    responses((status = 200, description = "New show form", body = ShowForm))
)]
pub async fn create_show_form(flash: Flash) -> impl IntoResponse {
    flash.page(VIEW_NEW_SHOW, ShowForm::blank())
}

/// Submit a new show; the outcome is reported as a flash on the home page
#[utoipa::path(
    post,
    path = "/shows/create",
    tag = "Shows",
    request_body(content = ShowForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Home page with success or error flash"))
)]
pub async fn create_show_submission(
    State(state): State<AppState>,
    flash: Flash,
    form: Result<StrictForm<ShowForm>, AppError>,
) -> impl IntoResponse {
    let result = match form.and_then(|StrictForm(form)| NewShow::try_from(form)) {
        Ok(new_show) => state.show_service.create_show(new_show).await,
        Err(e) => Err(e),
    };

    let message = match result {
        Ok(_) => FLASH_SHOW_CREATED.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Show could not be created");
            format!("Error: {}", e.user_message())
        }
    };

    flash.push(message).page(VIEW_HOME, ())
}

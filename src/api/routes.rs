//! Application route configuration.

use std::any::Any;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::flash::Flash;
use super::handlers::{artist_routes, show_routes, venue_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::VIEW_HOME;
use crate::errors::AppError;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/venues", venue_routes())
        .nest("/artists", artist_routes())
        .nest("/shows", show_routes())
        .fallback(not_found)
        // Global middleware
        .layer(CatchPanicLayer::custom(panic_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Home page
#[utoipa::path(
    get,
    path = "/",
    tag = "Pages",
    responses((status = 200, description = "Home page"))
)]
pub async fn home(flash: Flash) -> impl IntoResponse {
    flash.page(VIEW_HOME, ())
}

async fn not_found(flash: Flash) -> Response {
    flash.error(AppError::NotFound)
}

fn panic_page(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::internal(format!("Handler panicked: {}", details)).into_response()
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

#[derive(Serialize)]
struct ServiceHealth {
    database: ServiceStatus,
}

#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, database) = match state.database.ping().await {
        Ok(_) => (
            StatusCode::OK,
            ServiceStatus {
                status: "healthy",
                error: None,
            },
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ServiceStatus {
                    status: "unhealthy",
                    error: Some(e.to_string()),
                },
            )
        }
    };

    let response = HealthResponse {
        status: if status_code == StatusCode::OK {
            "healthy"
        } else {
            "degraded"
        },
        services: ServiceHealth { database },
    };

    (status_code, Json(response))
}

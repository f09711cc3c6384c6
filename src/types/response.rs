use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// A rendered page: the view it belongs to, the flash messages to show
/// once, and the view data.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub view: &'static str,
    pub flash: Vec<String>,
    pub data: T,
}

impl<T: Serialize> Page<T> {
    pub fn new(view: &'static str, flash: Vec<String>, data: T) -> Self {
        Self { view, flash, data }
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// `302 Found` redirect (axum's `Redirect::to` answers 303)
pub struct Found(pub String);

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, self.0)]).into_response()
    }
}

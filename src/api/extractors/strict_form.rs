//! Strict form extractor - URL-encoded form bodies with a fixed field set.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
};
use axum_extra::extract::Form;
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Form extractor that rejects submissions the target type does not accept.
///
/// Repeated keys (such as `genres`) collect into a `Vec`. Target types are
/// expected to carry `#[serde(deny_unknown_fields)]`, so any field outside
/// the whitelist, like a malformed body, becomes a constraint error.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use venue_booking::api::extractors::StrictForm;
///
/// #[derive(Deserialize)]
/// #[serde(default, deny_unknown_fields)]
/// struct SearchForm {
///     search_term: String,
/// }
///
/// async fn search(StrictForm(form): StrictForm<SearchForm>) {
///     // form.search_term is the only field that was accepted
/// }
/// ```
pub struct StrictForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for StrictForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::constraint(format!("Invalid form submission: {}", e)))?;

        Ok(StrictForm(value))
    }
}

//! One-shot flash messages.
//!
//! Messages queued before a redirect travel in a cookie and are shown, then
//! cleared, by the next rendered page. Messages produced while rendering a
//! page directly are shown on that page.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Serialize;

use crate::config::FLASH_COOKIE_NAME;
use crate::errors::{AppError, AppResult};
use crate::types::{Found, Page};

/// Pending flash messages for the current request
pub struct Flash {
    jar: CookieJar,
    messages: Vec<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let messages = jar
            .get(FLASH_COOKIE_NAME)
            .map(|cookie| decode(cookie.value()))
            .unwrap_or_default();

        Ok(Self { jar, messages })
    }
}

impl Flash {
    /// Queue a message
    pub fn push(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Render a page showing every queued message and clear the cookie.
    pub fn page<T: Serialize>(self, view: &'static str, data: T) -> (CookieJar, Page<T>) {
        let (jar, messages) = self.take();
        (jar, Page::new(view, messages, data))
    }

    /// Render an error page showing every queued message and clear the cookie.
    pub fn error(self, err: AppError) -> Response {
        let (jar, messages) = self.take();
        (jar, err.into_page(messages)).into_response()
    }

    /// `page` on `Ok`, `error` on `Err`
    pub fn render<T: Serialize>(self, view: &'static str, result: AppResult<T>) -> Response {
        match result {
            Ok(data) => self.page(view, data).into_response(),
            Err(err) => self.error(err),
        }
    }

    /// Redirect with `302 Found`, carrying the queued messages in the cookie.
    pub fn redirect(self, location: impl Into<String>) -> (CookieJar, Found) {
        let jar = match encode(&self.messages) {
            Some(value) => {
                let cookie = Cookie::build((FLASH_COOKIE_NAME, value))
                    .path("/")
                    .http_only(true);
                self.jar.add(cookie)
            }
            None => self.jar,
        };

        (jar, Found(location.into()))
    }

    fn take(self) -> (CookieJar, Vec<String>) {
        let jar = if self.jar.get(FLASH_COOKIE_NAME).is_some() {
            self.jar.remove(Cookie::build(FLASH_COOKIE_NAME).path("/"))
        } else {
            self.jar
        };

        (jar, self.messages)
    }
}

fn encode(messages: &[String]) -> Option<String> {
    match serde_json::to_vec(messages) {
        Ok(json) => Some(URL_SAFE_NO_PAD.encode(json)),
        Err(e) => {
            tracing::error!(error = %e, "Flash messages could not be encoded");
            None
        }
    }
}

/// Undecodable cookies are treated as empty.
fn decode(value: &str) -> Vec<String> {
    URL_SAFE_NO_PAD
        .decode(value)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;

    async fn flash_from(cookie: Option<&str>) -> Flash {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = cookie {
            builder = builder.header(header::COOKIE, format!("{FLASH_COOKIE_NAME}={value}"));
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        Flash::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_cookie_messages_are_read_back() {
        let encoded = encode(&["Successful.".to_string()]).unwrap();
        let flash = flash_from(Some(&encoded)).await;

        assert_eq!(flash.messages, vec!["Successful."]);
    }

    #[tokio::test]
    async fn test_tampered_cookie_is_ignored() {
        let flash = flash_from(Some("%%%not-base64")).await;
        assert!(flash.messages.is_empty());
    }

    #[tokio::test]
    async fn test_page_includes_pushed_message() {
        let (_, page) = flash_from(None)
            .await
            .push("Venue X was successfully added!")
            .page("pages/home", ());

        assert_eq!(page.flash, vec!["Venue X was successfully added!"]);
    }

    #[tokio::test]
    async fn test_redirect_carries_messages_in_cookie() {
        let (jar, found) = flash_from(None).await.push("Successful.").redirect("/venues/1");

        let cookie = jar.get(FLASH_COOKIE_NAME).unwrap();
        assert_eq!(decode(cookie.value()), vec!["Successful."]);
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(found.0, "/venues/1");
    }

    #[test]
    fn test_non_ascii_messages_encode() {
        let messages = vec!["Error: Café Étoile could not be listed".to_string()];
        let encoded = encode(&messages).unwrap();
        assert_eq!(decode(&encoded), messages);
    }

    #[tokio::test]
    async fn test_error_page_shows_and_clears_cookie() {
        let encoded = encode(&["Error: Resource not found".to_string()]).unwrap();

        let response = flash_from(Some(&encoded)).await.error(AppError::NotFound);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.starts_with(&format!("{FLASH_COOKIE_NAME}=")));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["view"], "errors/404");
        assert_eq!(body["flash"][0], "Error: Resource not found");
    }
}

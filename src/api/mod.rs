//! API layer - HTTP handlers and routing
//!
//! - Request handlers, one module per resource
//! - Form bodies and their mapping onto domain field sets
//! - Flash messages
//! - Custom extractors
//! - Route definitions

pub mod extractors;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;

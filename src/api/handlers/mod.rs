//! HTTP request handlers.

pub mod artist_handler;
pub mod show_handler;
pub mod venue_handler;

pub use artist_handler::artist_routes;
pub use show_handler::show_routes;
pub use venue_handler::venue_routes;

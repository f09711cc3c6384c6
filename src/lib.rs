//! Venue booking directory
//!
//! Browse and search venues and artists, see their past and upcoming
//! shows, and book new shows through form submissions. Pages are served
//! as JSON documents naming the view they belong to.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, field rules, time partitioning and area grouping
//! - **services**: Application use cases
//! - **infra**: Database, migrations, repositories, Unit of Work
//! - **api**: HTTP handlers, forms, flash messages and routes
//! - **types**: Shared response types
//! - **utils**: Utility functions and helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};

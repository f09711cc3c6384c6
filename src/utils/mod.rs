//! Utility functions and helpers

pub mod datetime;

pub use datetime::{format_show_time, parse_start_time};

//! Shared response types.

mod response;

pub use response::{Found, Page};

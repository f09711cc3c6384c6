//! Shared field rules for venue and artist field sets.

use once_cell::sync::Lazy;
use regex::Regex;

/// Digits plus the usual separators; `555-123-4567`, `+1 (555) 123 4567`.
pub(crate) static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ().-]{3,}$").expect("phone pattern compiles"));

/// Trim genre names and drop blanks, keeping the submitted order.
pub(crate) fn normalize_genres<I>(genres: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    genres
        .into_iter()
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect()
}

//! Compact listing rows shared by the venue and artist pages.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

/// An entity's id and name with its upcoming show count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Summary {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "The Musical Hop")]
    pub name: String,
    #[schema(example = 2)]
    pub num_upcoming_shows: usize,
}

/// Name search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<Summary>,
}

impl SearchResults {
    pub fn new(data: Vec<Summary>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

impl Summary {
    /// Build a row, looking the upcoming count up by `id` (absent means zero)
    pub fn counted(id: i32, name: &str, upcoming: &HashMap<i32, usize>) -> Self {
        Self {
            id,
            name: name.to_string(),
            num_upcoming_shows: upcoming.get(&id).copied().unwrap_or(0),
        }
    }
}

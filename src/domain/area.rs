//! Grouping of venues by the city and state they are located in.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::{Summary, Venue};

/// All venues sharing one exact (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct VenueArea {
    #[schema(example = "San Francisco")]
    pub city: String,
    #[schema(example = "CA")]
    pub state: String,
    pub venues: Vec<Summary>,
}

/// Group venues by exact, case-sensitive (city, state).
///
/// Areas appear in the order their first venue appears in `venues`, and
/// venues keep their relative order inside an area. `upcoming` maps venue
/// id to upcoming show count; missing ids count as zero.
pub fn group_by_area(venues: &[Venue], upcoming: &HashMap<i32, usize>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for venue in venues {
        let key = (venue.city.as_str(), venue.state.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            areas.push(VenueArea {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: Vec::new(),
            });
            areas.len() - 1
        });

        areas[slot]
            .venues
            .push(Summary::counted(venue.id, &venue.name, upcoming));
    }

    areas
}

//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

pub mod artist;
pub mod show;
pub mod venue;

#[allow(unused_imports)]
pub use artist::{ActiveModel as ArtistActiveModel, Entity as ArtistEntity, Model as ArtistModel};
#[allow(unused_imports)]
pub use show::{ActiveModel as ShowActiveModel, Entity as ShowEntity, Model as ShowModel};
#[allow(unused_imports)]
pub use venue::{ActiveModel as VenueActiveModel, Entity as VenueEntity, Model as VenueModel};

/// Genre list stored as a JSON array column.
///
/// Order and duplicates are preserved as submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Genres(pub Vec<String>);

//! Custom request extractors.

mod entity_id;
mod strict_form;

pub use entity_id::EntityId;
pub use strict_form::StrictForm;

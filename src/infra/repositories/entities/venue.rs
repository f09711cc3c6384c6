//! Venue database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use super::Genres;
use crate::infra::repositories::search::fold_name;
use crate::domain::{Venue, VenueFields};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "venue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub search_name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub genres: Genres,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::show::Entity")]
    Show,
}

impl Related<super::show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Show.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Overwrite every writable column
    pub fn set_fields(&mut self, fields: VenueFields) {
        self.search_name = Set(fold_name(&fields.name));
        self.name = Set(fields.name);
        self.city = Set(fields.city);
        self.state = Set(fields.state);
        self.address = Set(fields.address);
        self.phone = Set(fields.phone);
        self.image_link = Set(fields.image_link);
        self.facebook_link = Set(fields.facebook_link);
        self.website_link = Set(fields.website_link);
        self.seeking_talent = Set(fields.seeking_talent);
        self.seeking_description = Set(fields.seeking_description);
        self.genres = Set(Genres(fields.genres));
    }
}

/// Convert database model to domain entity
impl From<Model> for Venue {
    fn from(model: Model) -> Self {
        Venue {
            id: model.id,
            name: model.name,
            city: model.city,
            state: model.state,
            address: model.address,
            phone: model.phone,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website_link: model.website_link,
            seeking_talent: model.seeking_talent,
            seeking_description: model.seeking_description,
            genres: model.genres.0,
        }
    }
}

//! Artist database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use super::Genres;
use crate::infra::repositories::search::fold_name;
use crate::domain::{Artist, ArtistFields};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "artist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub search_name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub genres: Genres,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
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
    pub fn set_fields(&mut self, fields: ArtistFields) {
        self.search_name = Set(fold_name(&fields.name));
        self.name = Set(fields.name);
        self.city = Set(fields.city);
        self.state = Set(fields.state);
        self.phone = Set(fields.phone);
        self.genres = Set(Genres(fields.genres));
        self.image_link = Set(fields.image_link);
        self.facebook_link = Set(fields.facebook_link);
        self.website_link = Set(fields.website_link);
        self.seeking_venue = Set(fields.seeking_venue);
        self.seeking_description = Set(fields.seeking_description);
    }
}

impl From<Model> for Artist {
    fn from(model: Model) -> Self {
        Artist {
            id: model.id,
            name: model.name,
            city: model.city,
            state: model.state,
            phone: model.phone,
            genres: model.genres.0,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website_link: model.website_link,
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description,
        }
    }
}

//! Migration: Create venue table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venue::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Venue::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Venue::Name).string().not_null())
                    // Unicode-lowercased name, matched by search
                    .col(ColumnDef::new(Venue::SearchName).string().not_null())
                    .col(ColumnDef::new(Venue::City).string_len(120).not_null())
                    .col(ColumnDef::new(Venue::State).string_len(120).not_null())
                    .col(ColumnDef::new(Venue::Address).string_len(120).not_null())
                    .col(ColumnDef::new(Venue::Phone).string_len(120).null())
                    .col(ColumnDef::new(Venue::ImageLink).string_len(500).null())
                    .col(ColumnDef::new(Venue::FacebookLink).string_len(120).null())
                    .col(ColumnDef::new(Venue::WebsiteLink).string_len(300).null())
                    .col(
                        ColumnDef::new(Venue::SeekingTalent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Venue::SeekingDescription).string_len(250).null())
                    .col(ColumnDef::new(Venue::Genres).json().not_null())
                    .to_owned(),
            )
            .await?;

        // Area listing groups on these
        manager
            .create_index(
                Index::create()
                    .name("idx_venue_city_state")
                    .table(Venue::Table)
                    .col(Venue::City)
                    .col(Venue::State)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Venue::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Venue {
    Table,
    Id,
    Name,
    SearchName,
    City,
    State,
    Address,
    Phone,
    ImageLink,
    FacebookLink,
    WebsiteLink,
    SeekingTalent,
    SeekingDescription,
    Genres,
}

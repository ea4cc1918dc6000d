//! Create `address` table.
//!
//! Owned one-to-one by either a user or a garage; coordinates are nullable
//! until the geocoder has resolved them.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(uuid(Address::Id).primary_key())
                    .col(string_len(Address::Number, 16).not_null())
                    .col(string_len(Address::StreetType, 32).not_null())
                    .col(string_len(Address::Name, 255).not_null())
                    .col(string_len(Address::Town, 128).not_null())
                    .col(string_len(Address::PostalCode, 16).not_null())
                    .col(ColumnDef::new(Address::Latitude).double().null())
                    .col(ColumnDef::new(Address::Longitude).double().null())
                    .col(timestamp_with_time_zone(Address::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Address::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Address::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Address { Table, Id, Number, StreetType, Name, Town, PostalCode, Latitude, Longitude, CreatedAt, UpdatedAt }

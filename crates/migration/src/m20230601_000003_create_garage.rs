//! Create `garage` table.
//!
//! Each garage owns exactly one address. `primary_owner_id` designates the
//! member with edit/delete rights; it is set at creation time instead of
//! being derived from membership insertion order.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Garage::Table)
                    .if_not_exists()
                    .col(uuid(Garage::Id).primary_key())
                    .col(string_len(Garage::Name, 255).not_null())
                    .col(string_len(Garage::RegisterNumber, 64).not_null())
                    .col(string_len(Garage::Phone, 32).not_null())
                    .col(string_len(Garage::Email, 255).not_null())
                    .col(ColumnDef::new(Garage::Rating).double().null())
                    .col(uuid(Garage::AddressId).not_null())
                    .col(ColumnDef::new(Garage::PrimaryOwnerId).uuid().null())
                    .col(timestamp_with_time_zone(Garage::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Garage::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garage_address")
                            .from(Garage::Table, Garage::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garage_primary_owner")
                            .from(Garage::Table, Garage::PrimaryOwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Garage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Garage { Table, Id, Name, RegisterNumber, Phone, Email, Rating, AddressId, PrimaryOwnerId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Address { Table, Id }

#[derive(DeriveIden)]
enum User { Table, Id }

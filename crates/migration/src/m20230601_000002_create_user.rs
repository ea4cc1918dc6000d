//! Create `user` table with optional FK to the user's own `address`.
//!
//! `roles` is a JSON array of role tags (`ROLE_ADMIN`, `ROLE_MANAGER`,
//! `ROLE_MEMBER`, `ROLE_USER`).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(uuid(User::Id).primary_key())
                    .col(string_len(User::Email, 255).unique_key().not_null())
                    .col(string_len(User::PasswordHash, 255).not_null())
                    .col(json_binary(User::Roles).not_null())
                    .col(string_len(User::Firstname, 128).not_null())
                    .col(string_len(User::Lastname, 128).not_null())
                    .col(string_len(User::Phone, 32).not_null())
                    .col(ColumnDef::new(User::DateOfBirth).date().null())
                    .col(ColumnDef::new(User::AddressId).uuid().null())
                    .col(timestamp_with_time_zone(User::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(User::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_address")
                            .from(User::Table, User::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User { Table, Id, Email, PasswordHash, Roles, Firstname, Lastname, Phone, DateOfBirth, AddressId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Address { Table, Id }

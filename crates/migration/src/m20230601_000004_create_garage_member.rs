//! Create `garage_member` join table (user <-> garage, many-to-many).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GarageMember::Table)
                    .if_not_exists()
                    .col(uuid(GarageMember::UserId).not_null())
                    .col(uuid(GarageMember::GarageId).not_null())
                    .col(timestamp_with_time_zone(GarageMember::JoinedAt).not_null())
                    .primary_key(
                        Index::create()
                            .col(GarageMember::UserId)
                            .col(GarageMember::GarageId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garage_member_user")
                            .from(GarageMember::Table, GarageMember::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garage_member_garage")
                            .from(GarageMember::Table, GarageMember::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(GarageMember::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum GarageMember { Table, UserId, GarageId, JoinedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Garage { Table, Id }

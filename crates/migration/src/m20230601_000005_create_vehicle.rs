//! Create `vehicle` table, owned by a user.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(uuid(Vehicle::Id).primary_key())
                    .col(string_len(Vehicle::VehicleType, 64).not_null())
                    .col(string_len(Vehicle::Brand, 128).not_null())
                    .col(string_len(Vehicle::Model, 128).not_null())
                    .col(string_len(Vehicle::NumberPlate, 32).not_null())
                    .col(ColumnDef::new(Vehicle::ReleaseDate).date().null())
                    .col(integer(Vehicle::Mileage).not_null())
                    .col(ColumnDef::new(Vehicle::UserId).uuid().null())
                    .col(timestamp_with_time_zone(Vehicle::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Vehicle::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_user")
                            .from(Vehicle::Table, Vehicle::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vehicle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vehicle { Table, Id, VehicleType, Brand, Model, NumberPlate, ReleaseDate, Mileage, UserId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

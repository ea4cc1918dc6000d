//! Create `service_type` table (services a garage offers), owned by a garage.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceType::Table)
                    .if_not_exists()
                    .col(uuid(ServiceType::Id).primary_key())
                    .col(string_len(ServiceType::Name, 128).not_null())
                    .col(text(ServiceType::Description).not_null())
                    .col(integer(ServiceType::DurationMinutes).not_null())
                    .col(ColumnDef::new(ServiceType::GarageId).uuid().null())
                    .col(timestamp_with_time_zone(ServiceType::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ServiceType::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_type_garage")
                            .from(ServiceType::Table, ServiceType::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceType::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceType { Table, Id, Name, Description, DurationMinutes, GarageId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Garage { Table, Id }

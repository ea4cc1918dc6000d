//! Create `appointment` table.
//!
//! References the booking user, the garage, and the booked service type.
//! Deleting a service type detaches the appointment instead of removing it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(uuid(Appointment::Id).primary_key())
                    .col(string_len(Appointment::Title, 255).not_null())
                    .col(text(Appointment::Details).not_null())
                    .col(timestamp_with_time_zone(Appointment::StartDate).not_null())
                    .col(timestamp_with_time_zone(Appointment::EndDate).not_null())
                    .col(ColumnDef::new(Appointment::UserId).uuid().null())
                    .col(ColumnDef::new(Appointment::GarageId).uuid().null())
                    .col(ColumnDef::new(Appointment::TypeId).uuid().null())
                    .col(timestamp_with_time_zone(Appointment::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Appointment::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_user")
                            .from(Appointment::Table, Appointment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_garage")
                            .from(Appointment::Table, Appointment::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_type")
                            .from(Appointment::Table, Appointment::TypeId)
                            .to(ServiceType::Table, ServiceType::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Appointment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Appointment { Table, Id, Title, Details, StartDate, EndDate, UserId, GarageId, TypeId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Garage { Table, Id }

#[derive(DeriveIden)]
enum ServiceType { Table, Id }

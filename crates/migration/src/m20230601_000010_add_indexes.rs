use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Ownership lookups used by the authorization layer
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_user")
                    .table(Vehicle::Table)
                    .col(Vehicle::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_user")
                    .table(Appointment::Table)
                    .col(Appointment::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_garage")
                    .table(Appointment::Table)
                    .col(Appointment::GarageId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_review_garage")
                    .table(Review::Table)
                    .col(Review::GarageId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_garage")
                    .table(Schedule::Table)
                    .col(Schedule::GarageId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_service_type_garage")
                    .table(ServiceType::Table)
                    .col(ServiceType::GarageId)
                    .to_owned(),
            )
            .await?;

        // Membership lookups go both ways
        manager
            .create_index(
                Index::create()
                    .name("idx_garage_member_garage")
                    .table(GarageMember::Table)
                    .col(GarageMember::GarageId)
                    .to_owned(),
            )
            .await?;

        // Geo search scans garages by name
        manager
            .create_index(
                Index::create()
                    .name("idx_garage_name")
                    .table(Garage::Table)
                    .col(Garage::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_vehicle_user").table(Vehicle::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_appointment_user").table(Appointment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_appointment_garage").table(Appointment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_review_garage").table(Review::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_schedule_garage").table(Schedule::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_type_garage").table(ServiceType::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_garage_member_garage").table(GarageMember::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_garage_name").table(Garage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Vehicle { Table, UserId }

#[derive(DeriveIden)]
enum Appointment { Table, UserId, GarageId }

#[derive(DeriveIden)]
enum Review { Table, GarageId }

#[derive(DeriveIden)]
enum Schedule { Table, GarageId }

#[derive(DeriveIden)]
enum ServiceType { Table, GarageId }

#[derive(DeriveIden)]
enum GarageMember { Table, GarageId }

#[derive(DeriveIden)]
enum Garage { Table, Name }

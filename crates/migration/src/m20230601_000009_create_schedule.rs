//! Create `schedule` table (opening hours per weekday), owned by a garage.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(uuid(Schedule::Id).primary_key())
                    .col(small_integer(Schedule::Day).not_null())
                    .col(time(Schedule::StartTime).not_null())
                    .col(time(Schedule::EndTime).not_null())
                    .col(ColumnDef::new(Schedule::GarageId).uuid().null())
                    .col(timestamp_with_time_zone(Schedule::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Schedule::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_garage")
                            .from(Schedule::Table, Schedule::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Schedule::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Schedule { Table, Id, Day, StartTime, EndTime, GarageId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Garage { Table, Id }

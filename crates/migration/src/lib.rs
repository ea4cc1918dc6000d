//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20230601_000001_create_address;
mod m20230601_000002_create_user;
mod m20230601_000003_create_garage;
mod m20230601_000004_create_garage_member;
mod m20230601_000005_create_vehicle;
mod m20230601_000006_create_service_type;
mod m20230601_000007_create_appointment;
mod m20230601_000008_create_review;
mod m20230601_000009_create_schedule;
mod m20230601_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230601_000001_create_address::Migration),
            Box::new(m20230601_000002_create_user::Migration),
            Box::new(m20230601_000003_create_garage::Migration),
            Box::new(m20230601_000004_create_garage_member::Migration),
            Box::new(m20230601_000005_create_vehicle::Migration),
            Box::new(m20230601_000006_create_service_type::Migration),
            Box::new(m20230601_000007_create_appointment::Migration),
            Box::new(m20230601_000008_create_review::Migration),
            Box::new(m20230601_000009_create_schedule::Migration),
            // Indexes should always be applied last
            Box::new(m20230601_000010_add_indexes::Migration),
        ]
    }
}

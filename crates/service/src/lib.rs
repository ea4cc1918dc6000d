//! Service layer providing business-oriented operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Hosts the access-control engine (`authz`) and geolocation search (`geo`).

pub mod errors;
pub mod auth;
pub mod authz;
pub mod geo;
pub mod pagination;
#[cfg(test)]
pub mod test_support;

pub mod user_service;
pub mod address_service;
pub mod garage_service;
pub mod vehicle_service;
pub mod appointment_service;
pub mod review_service;
pub mod schedule_service;
pub mod service_type_service;

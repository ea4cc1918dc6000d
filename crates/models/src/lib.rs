pub mod errors;
pub mod db;
pub mod address;
pub mod user;
pub mod garage;
pub mod garage_member;
pub mod vehicle;
pub mod appointment;
pub mod review;
pub mod schedule;
pub mod service_type;

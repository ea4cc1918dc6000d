//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration and login live here; the HTTP layer only maps tokens to
//! actors and errors to status codes.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;

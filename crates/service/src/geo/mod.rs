//! Geolocation garage search: coordinate handling, great-circle distance
//! and proximity ranking over the garages' stored addresses.

pub mod distance;
pub mod geocoder;
pub mod search;

use thiserror::Error;

pub use distance::{great_circle_km, Coordinate, EARTH_RADIUS_KM};
pub use geocoder::{Geocoder, NominatimGeocoder};
pub use search::{rank_by_distance, GarageHit, GeoSearchService};

/// Errors from the geo search pipeline. `NoResult` is a normal outcome
/// (geocoder failure or zero matches), kept separate from bad input so
/// callers can answer 404 vs 400.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no result")]
    NoResult,
    #[error("database error: {0}")]
    Db(String),
}

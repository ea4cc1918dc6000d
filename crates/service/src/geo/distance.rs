use serde::{Deserialize, Serialize};

use super::GeoError;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(GeoError::InvalidInput("coordinate must be finite".into()));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::InvalidInput(format!("latitude {lat} out of range [-90, 90]")));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::InvalidInput(format!("longitude {lon} out of range [-180, 180]")));
        }
        Ok(Self { lat, lon })
    }
}

/// Great-circle distance in kilometers via the spherical law of cosines:
/// `R * acos(cos(la1)*cos(la2)*cos(lo2-lo1) + sin(la1)*sin(la2))`.
pub fn great_circle_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let cos_angle = lat_a.cos() * lat_b.cos() * delta_lon.cos() + lat_a.sin() * lat_b.sin();
    // Floating error can push the cosine slightly outside [-1, 1], which
    // would make acos return NaN for identical points.
    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: Coordinate = Coordinate { lat: 48.8566, lon: 2.3522 };
    const LYON: Coordinate = Coordinate { lat: 45.75, lon: 4.85 };

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(great_circle_km(PARIS, PARIS), 0.0);
    }

    #[test]
    fn paris_to_lyon_is_about_392_km() {
        let d = great_circle_km(PARIS, LYON);
        assert!((d - 392.0).abs() < 2.0, "unexpected distance: {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        assert!((great_circle_km(PARIS, LYON) - great_circle_km(LYON, PARIS)).abs() < 1e-9);
    }

    #[test]
    fn constructor_rejects_out_of_range() {
        assert!(Coordinate::new(91.0, 0.0).is_err());
        assert!(Coordinate::new(0.0, 181.0).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(48.8566, 2.3522).is_ok());
    }
}

use std::sync::Arc;

use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Serialize;
use tracing::{debug, instrument};

use models::{address, garage};

use super::{great_circle_km, Coordinate, GeoError, Geocoder};

/// Result cap applied to every proximity search.
pub const MAX_RESULTS: usize = 10;

/// A garage together with its distance from the query point.
#[derive(Debug, Clone, Serialize)]
pub struct GarageHit {
    pub garage: garage::Model,
    pub distance_km: f64,
}

/// Pure ranking step: keep candidates strictly inside `radius_km`, order by
/// ascending distance and cap at `limit`.
pub fn rank_by_distance(
    origin: Coordinate,
    candidates: Vec<(garage::Model, Coordinate)>,
    radius_km: f64,
    limit: usize,
) -> Result<Vec<GarageHit>, GeoError> {
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(GeoError::InvalidInput(format!("radius {radius_km} must be a positive number")));
    }

    let mut hits: Vec<GarageHit> = candidates
        .into_iter()
        .map(|(garage, coordinate)| GarageHit { distance_km: great_circle_km(origin, coordinate), garage })
        .filter(|hit| hit.distance_km < radius_km)
        .collect();
    hits.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    hits.truncate(limit);
    Ok(hits)
}

/// Geolocation garage search: resolves a free-text address through the
/// geocoder, then ranks every garage by great-circle distance from the
/// resolved point.
pub struct GeoSearchService<G: Geocoder> {
    geocoder: Arc<G>,
    default_radius_km: f64,
    max_results: usize,
}

impl<G: Geocoder> GeoSearchService<G> {
    pub fn new(geocoder: Arc<G>, default_radius_km: f64, max_results: usize) -> Self {
        Self { geocoder, default_radius_km, max_results }
    }

    pub fn default_radius_km(&self) -> f64 {
        self.default_radius_km
    }

    /// Ordered (garage, distance) pairs within `radius_km` of the searched
    /// address; `Err(NoResult)` when the address cannot be resolved.
    #[instrument(skip(self, db), fields(query = %query))]
    pub async fn rank_garages_by_address(
        &self,
        db: &DatabaseConnection,
        query: &str,
        radius_km: Option<f64>,
    ) -> Result<Vec<GarageHit>, GeoError> {
        let radius_km = radius_km.unwrap_or(self.default_radius_km);

        let origin = self
            .geocoder
            .resolve(query)
            .await?
            .ok_or(GeoError::NoResult)?;
        debug!(lat = origin.lat, lon = origin.lon, radius_km, "address resolved");

        // Load every garage with its address; garages whose address has no
        // coordinates yet cannot be ranked and are skipped.
        let rows = garage::Entity::find()
            .find_also_related(address::Entity)
            .all(db)
            .await
            .map_err(|e| GeoError::Db(e.to_string()))?;

        let candidates = rows
            .into_iter()
            .filter_map(|(g, addr)| {
                let addr = addr?;
                let coordinate = Coordinate::new(addr.latitude?, addr.longitude?).ok()?;
                Some((g, coordinate))
            })
            .collect();

        rank_by_distance(origin, candidates, radius_km, self.max_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    const PARIS: Coordinate = Coordinate { lat: 48.8566, lon: 2.3522 };
    const LYON: Coordinate = Coordinate { lat: 45.75, lon: 4.85 };

    fn garage_named(name: &str) -> garage::Model {
        let now = Utc::now().into();
        garage::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            register_number: "123".into(),
            phone: "0100000000".into(),
            email: "contact@example.com".into(),
            rating: None,
            address_id: Uuid::new_v4(),
            primary_owner_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn same_point_ranks_first_with_zero_distance() {
        let candidates = vec![(garage_named("lyon"), LYON), (garage_named("paris"), PARIS)];
        let hits = rank_by_distance(PARIS, candidates, 1000.0, MAX_RESULTS).unwrap();
        assert_eq!(hits[0].garage.name, "paris");
        assert_eq!(hits[0].distance_km, 0.0);
    }

    #[test]
    fn radius_filter_is_strict() {
        // Lyon is ~392 km from Paris, outside a 100 km radius
        let candidates = vec![(garage_named("paris"), PARIS), (garage_named("lyon"), LYON)];
        let hits = rank_by_distance(PARIS, candidates, 100.0, MAX_RESULTS).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].garage.name, "paris");
    }

    #[test]
    fn ordering_is_non_decreasing_and_capped() {
        let candidates: Vec<_> = (0..25)
            .map(|i| {
                let c = Coordinate { lat: PARIS.lat + f64::from(i) * 0.01, lon: PARIS.lon };
                (garage_named(&format!("g{i}")), c)
            })
            .collect();
        let hits = rank_by_distance(PARIS, candidates, 100.0, MAX_RESULTS).unwrap();
        assert_eq!(hits.len(), MAX_RESULTS);
        for pair in hits.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
        for hit in &hits {
            assert!(hit.distance_km < 100.0);
        }
    }

    #[test]
    fn empty_when_nothing_in_radius() {
        let candidates = vec![(garage_named("lyon"), LYON)];
        let hits = rank_by_distance(PARIS, candidates, 100.0, MAX_RESULTS).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn invalid_radius_is_rejected() {
        assert!(matches!(
            rank_by_distance(PARIS, vec![], 0.0, MAX_RESULTS),
            Err(GeoError::InvalidInput(_))
        ));
        assert!(matches!(
            rank_by_distance(PARIS, vec![], f64::NAN, MAX_RESULTS),
            Err(GeoError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn unknown_address_is_no_result() {
        use crate::geo::geocoder::mock::MockGeocoder;
        let svc = GeoSearchService::new(Arc::new(MockGeocoder::default()), 100.0, MAX_RESULTS);
        let geocoded = svc.geocoder.resolve("nowhere, atlantis").await.unwrap();
        assert!(geocoded.is_none());
    }
}

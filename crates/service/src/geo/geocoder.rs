use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use super::{Coordinate, GeoError};

/// External geocoding lookup: free-text address to coordinate.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` means the provider answered but knows no such place.
    async fn resolve(&self, query: &str) -> Result<Option<Coordinate>, GeoError>;
}

/// Nominatim (OpenStreetMap) geocoder. One outbound call per lookup with a
/// bounded timeout and no retry; any transport or decode failure is treated
/// as "no result" for the caller and logged here.
pub struct NominatimGeocoder {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url: base_url.into() })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, query: &str) -> Result<Option<Coordinate>, GeoError> {
        if query.trim().is_empty() {
            return Err(GeoError::InvalidInput("address query must not be empty".into()));
        }

        let url = format!("{}/search.php", self.base_url.trim_end_matches('/'));
        let resp = match self
            .http
            .get(&url)
            .query(&[("q", query), ("format", "jsonv2")])
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "geocoder request failed");
                return Ok(None);
            }
        };

        if !resp.status().is_success() {
            warn!(status = %resp.status(), "geocoder answered with non-success status");
            return Ok(None);
        }

        let places: Vec<NominatimPlace> = match resp.json().await {
            Ok(places) => places,
            Err(e) => {
                warn!(error = %e, "geocoder answer could not be decoded");
                return Ok(None);
            }
        };

        let Some(first) = places.first() else {
            return Ok(None);
        };

        // Nominatim serializes coordinates as strings
        let lat: f64 = first
            .lat
            .parse()
            .map_err(|_| GeoError::InvalidInput(format!("geocoder returned bad latitude {:?}", first.lat)))?;
        let lon: f64 = first
            .lon
            .parse()
            .map_err(|_| GeoError::InvalidInput(format!("geocoder returned bad longitude {:?}", first.lon)))?;

        Coordinate::new(lat, lon).map(Some)
    }
}

/// In-memory geocoder for tests and doc examples.
pub mod mock {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MockGeocoder {
        places: HashMap<String, Coordinate>,
    }

    impl MockGeocoder {
        pub fn with_place(mut self, query: &str, coordinate: Coordinate) -> Self {
            self.places.insert(query.to_string(), coordinate);
            self
        }
    }

    #[async_trait]
    impl Geocoder for MockGeocoder {
        async fn resolve(&self, query: &str) -> Result<Option<Coordinate>, GeoError> {
            if query.trim().is_empty() {
                return Err(GeoError::InvalidInput("address query must not be empty".into()));
            }
            Ok(self.places.get(query).copied())
        }
    }
}

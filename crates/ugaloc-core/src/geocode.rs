// crates/ugaloc-core/src/geocode.rs

//! # Geocoding Client
//!
//! Resolves a free-text place description to coordinates with a single
//! best-match query against the Nominatim search API. The client is
//! independent of the hierarchy tree: callers typically compose the query
//! from a resolved path (e.g. "Kakoba, Mbarara, Uganda"), but any text works.

use crate::error::{LocError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public Nominatim search endpoint used by [`GeocodeClient::new`].
pub const NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

/// Nominatim's usage policy requires an identifying User-Agent.
pub(crate) const USER_AGENT: &str = concat!("ugaloc/", env!("CARGO_PKG_VERSION"));

/// A geocoding result. Transient: produced fresh per call, never stored in
/// the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

/// One entry of the Nominatim response array. Latitude and longitude arrive
/// as string-encoded decimals.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

/// Blocking client for the Nominatim search API.
pub struct GeocodeClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl GeocodeClient {
    /// Client against the public Nominatim endpoint, without a timeout.
    ///
    /// Deadlines are the caller's decision; pass one via
    /// [`GeocodeClient::configured`] when the call must not block
    /// indefinitely.
    pub fn new() -> Result<Self> {
        Self::configured(NOMINATIM_ENDPOINT, None)
    }

    /// Client against a custom endpoint, with an optional request timeout.
    pub fn configured(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Geocode a free-text location description.
    ///
    /// Sends one best-match query (`limit=1`) and returns the single
    /// candidate. Failure contract:
    /// - empty query → [`LocError::EmptyQuery`], before any network activity
    /// - zero candidates → [`LocError::NoMatch`] (expected in normal use)
    /// - transport/HTTP/decode failure → [`LocError::Http`]
    ///
    /// Nothing is retried; a transient failure is the caller's decision.
    pub fn coordinates(&self, query: &str) -> Result<Coordinates> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LocError::EmptyQuery);
        }

        tracing::debug!(query, "geocoding request");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("format", "json"), ("q", query), ("limit", "1")])
            .send()?
            .error_for_status()?;

        let places: Vec<NominatimPlace> = response.json()?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| LocError::NoMatch(query.to_string()))?;

        Ok(Coordinates {
            lat: parse_coordinate(&place.lat, "lat")?,
            lon: parse_coordinate(&place.lon, "lon")?,
            display_name: place.display_name,
        })
    }
}

fn parse_coordinate(value: &str, field: &str) -> Result<f64> {
    value.trim().parse().map_err(|_| {
        LocError::BadGeocodeResponse(format!("unparsable {field}: {value:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> GeocodeClient {
        GeocodeClient::configured(server.url("/search"), None).unwrap()
    }

    #[test]
    fn empty_query_fails_before_any_network_activity() {
        // Deliberately unroutable endpoint: the check must short-circuit.
        let client = GeocodeClient::configured("http://127.0.0.1:1/search", None).unwrap();
        let err = client.coordinates("   ").unwrap_err();
        assert!(matches!(err, LocError::EmptyQuery), "got {err:?}");
    }

    #[test]
    fn a_single_candidate_is_parsed_into_coordinates() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("format", "json")
                .query_param("q", "Mbarara, Uganda")
                .query_param("limit", "1");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"lat":"0.3","lon":"32.6","display_name":"X"}]"#);
        });

        let coords = client_for(&server).coordinates("Mbarara, Uganda").unwrap();
        mock.assert();
        assert_eq!(
            coords,
            Coordinates {
                lat: 0.3,
                lon: 32.6,
                display_name: "X".to_string()
            }
        );
    }

    #[test]
    fn zero_candidates_is_a_no_match() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .header("content-type", "application/json")
                .body("[]");
        });

        let err = client_for(&server).coordinates("Atlantis").unwrap_err();
        assert!(matches!(err, LocError::NoMatch(ref q) if q == "Atlantis"), "got {err:?}");
    }

    #[test]
    fn a_server_error_is_reported_as_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(503);
        });

        let err = client_for(&server).coordinates("Gulu").unwrap_err();
        assert!(matches!(err, LocError::Http(_)), "got {err:?}");
    }

    #[test]
    fn unparsable_numerics_are_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"lat":"zero","lon":"32.6","display_name":"X"}]"#);
        });

        let err = client_for(&server).coordinates("Gulu").unwrap_err();
        assert!(matches!(err, LocError::BadGeocodeResponse(_)), "got {err:?}");
    }
}

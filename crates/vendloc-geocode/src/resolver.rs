//! Reverse-geocoding orchestrator.
//!
//! Providers run strictly in sequence — the free-text call only happens
//! when the structured provider yielded nothing — and every provider
//! failure is recovered locally. The only hard error is an invalid
//! input coordinate.

use std::time::Duration;

use reqwest::{Client, Url};

use vendloc_core::{geo, Coordinate, NormalizedLocation};

use crate::config::GeocodeConfig;
use crate::error::GeocodeError;
use crate::providers::{google, nominatim};

const GOOGLE_BASE_URL: &str = "https://maps.googleapis.com/maps/api";
const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Reverse-geocoding client over both providers.
///
/// Use [`GeocodeClient::new`] for production or
/// [`GeocodeClient::with_base_urls`] to point at a mock server in tests.
pub struct GeocodeClient {
    client: Client,
    config: GeocodeConfig,
    google_base_url: String,
    nominatim_base_url: String,
}

impl GeocodeClient {
    /// Creates a client pointed at the production provider endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        Self::with_base_urls(config, GOOGLE_BASE_URL, NOMINATIM_BASE_URL)
    }

    /// Creates a client with custom provider base URLs (for wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] when a
    /// base URL does not parse.
    pub fn with_base_urls(
        config: GeocodeConfig,
        google_base_url: &str,
        nominatim_base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs.min(CONNECT_TIMEOUT_SECS)))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            google_base_url: parse_base_url(google_base_url)?,
            nominatim_base_url: parse_base_url(nominatim_base_url)?,
            config,
        })
    }

    /// Resolves a coordinate into a [`NormalizedLocation`]. Never fails
    /// for environmental reasons: provider errors, timeouts, and denials
    /// all fall through the chain, and when everything is exhausted the
    /// result degrades to a coordinate-only location.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidCoordinate`] for out-of-range or
    /// non-finite input — the one condition that signals a caller bug
    /// rather than an environmental failure.
    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<NormalizedLocation, GeocodeError> {
        if !geo::is_valid_coordinate(latitude, longitude) {
            return Err(GeocodeError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        let coordinate = Coordinate {
            latitude,
            longitude,
            accuracy_meters: None,
        };

        if let Some(api_key) = self.config.google_api_key.as_deref() {
            match self.try_structured(api_key, coordinate).await {
                Ok(google::Outcome::Resolved(location)) => return Ok(location),
                Ok(google::Outcome::Denied(status)) => {
                    tracing::warn!(status, "structured provider denied the request; skipping");
                }
                Ok(google::Outcome::NoMatch) => {
                    tracing::debug!(latitude, longitude, "structured provider had no usable result");
                }
                Err(err) => {
                    tracing::debug!(error = %err, "structured provider unavailable");
                }
            }
        }

        match self.try_free_text(coordinate).await {
            Ok(Some(location)) => return Ok(location),
            Ok(None) => {
                tracing::debug!(latitude, longitude, "free-text provider returned no address");
            }
            Err(err) => {
                tracing::debug!(error = %err, "free-text provider unavailable");
            }
        }

        tracing::warn!(
            latitude,
            longitude,
            "all geocoding providers exhausted; returning coordinate-only location"
        );
        Ok(degraded(coordinate))
    }

    async fn try_structured(
        &self,
        api_key: &str,
        coordinate: Coordinate,
    ) -> Result<google::Outcome, reqwest::Error> {
        let url = format!("{}/geocode/json", self.google_base_url);
        let latlng = format!("{},{}", coordinate.latitude, coordinate.longitude);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("latlng", latlng.as_str()),
                ("key", api_key),
                ("language", "en"),
                ("region", self.config.region.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<google::GeocodeResponse>().await?;
        Ok(google::parse_response(&body, coordinate))
    }

    async fn try_free_text(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<NormalizedLocation>, reqwest::Error> {
        let url = format!("{}/reverse", self.nominatim_base_url);
        let lat = coordinate.latitude.to_string();
        let lon = coordinate.longitude.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "json"),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("zoom", "18"),
                ("addressdetails", "1"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<nominatim::ReverseResponse>().await?;
        Ok(nominatim::parse_response(&body, coordinate))
    }
}

/// Coordinate-only output for when every provider and heuristic is
/// exhausted: the UI always has something to display.
fn degraded(coordinate: Coordinate) -> NormalizedLocation {
    let mut location = NormalizedLocation::unresolved(coordinate);
    location.formatted_address = format!(
        "GPS Location ({:.6}, {:.6})",
        coordinate.latitude, coordinate.longitude
    );
    location
}

fn parse_base_url(raw: &str) -> Result<String, GeocodeError> {
    let trimmed = raw.trim_end_matches('/');
    Url::parse(trimmed).map_err(|e| GeocodeError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    Ok(trimmed.to_string())
}

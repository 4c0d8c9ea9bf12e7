//! HTTP client for the location directory REST API.

use std::time::Duration;

use regex::Regex;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::DirectoryError;
use crate::types::{DirectoryEntry, Envelope, PincodeInfo};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "vendloc/0.1 (marketplace-locations)";

/// Client for the hierarchical location directory API.
pub struct DirectoryClient {
    client: Client,
    base_url: String,
}

impl DirectoryClient {
    /// Creates a client for the given directory base URL.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`DirectoryError::InvalidBaseUrl`] when
    /// `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self, DirectoryError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Same as [`DirectoryClient::new`].
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Result<Self, DirectoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(USER_AGENT)
            .build()?;

        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| DirectoryError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: trimmed.to_string(),
        })
    }

    /// All states.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures as [`DirectoryError`]; directory
    /// lookups back required form data and never degrade.
    pub async fn get_states(&self) -> Result<Vec<DirectoryEntry>, DirectoryError> {
        self.fetch_data(&format!("{}/states", self.base_url)).await
    }

    /// Districts of one state.
    ///
    /// # Errors
    ///
    /// See [`DirectoryClient::get_states`].
    pub async fn get_districts(&self, state_id: i64) -> Result<Vec<DirectoryEntry>, DirectoryError> {
        self.fetch_data(&format!("{}/districts?state_id={state_id}", self.base_url))
            .await
    }

    /// Cities of one district.
    ///
    /// # Errors
    ///
    /// See [`DirectoryClient::get_states`].
    pub async fn get_cities(&self, district_id: i64) -> Result<Vec<DirectoryEntry>, DirectoryError> {
        self.fetch_data(&format!("{}/cities?district_id={district_id}", self.base_url))
            .await
    }

    /// Pincodes of one city.
    ///
    /// # Errors
    ///
    /// See [`DirectoryClient::get_states`].
    pub async fn get_pincodes(&self, city_id: i64) -> Result<Vec<PincodeInfo>, DirectoryError> {
        self.fetch_data(&format!("{}/pincodes?city_id={city_id}", self.base_url))
            .await
    }

    /// Looks up one pincode. `Ok(None)` means the directory does not know
    /// it; a malformed pincode never reaches the network.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InvalidPincode`] when `pincode` is not
    /// exactly 6 digits, otherwise propagates upstream failures like the
    /// other lookups.
    pub async fn validate_pincode(
        &self,
        pincode: &str,
    ) -> Result<Option<PincodeInfo>, DirectoryError> {
        let re = Regex::new(r"^\d{6}$").expect("valid regex");
        if !re.is_match(pincode) {
            return Err(DirectoryError::InvalidPincode(pincode.to_string()));
        }

        let matches: Vec<PincodeInfo> = self
            .fetch_data(&format!("{}/pincodes/{pincode}", self.base_url))
            .await?;
        Ok(matches.into_iter().next())
    }

    async fn fetch_data<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, DirectoryError> {
        tracing::debug!(url, "directory lookup");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| DirectoryError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalised() {
        let client = DirectoryClient::new("https://directory.example.com/api/")
            .expect("client construction should not fail");
        assert_eq!(client.base_url, "https://directory.example.com/api");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            DirectoryClient::new("not a url"),
            Err(DirectoryError::InvalidBaseUrl { .. })
        ));
    }

    #[tokio::test]
    async fn malformed_pincode_fails_before_any_network_call() {
        // Unroutable base URL: if validation ever hit the network this
        // would fail with an HTTP error instead of InvalidPincode.
        let client = DirectoryClient::new("http://127.0.0.1:1").expect("client builds");
        for bad in ["1234", "12345a", "1234567", ""] {
            let result = client.validate_pincode(bad).await;
            assert!(
                matches!(result, Err(DirectoryError::InvalidPincode(_))),
                "pincode {bad:?} must be rejected syntactically"
            );
        }
    }
}

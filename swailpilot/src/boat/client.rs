//! Boat-control traits and the swail.io HTTP implementation.
//!
//! [`TelemetrySource`] is the single capability pilot strategies need;
//! [`BoatControl`] adds the course command used by the autopilot loop.
//! [`SwailClient`] implements both over HTTP via `reqwest`.

use std::fmt;
use std::future::Future;

use serde::de::DeserializeOwned;

use super::config::BoatClientConfig;
use super::error::BoatError;
use super::telemetry::{BoatInfos, BoatPolar};

/// Identity pair used to address a boat on the endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct BoatHandle {
    pub user_token: String,
    pub boat_id: String,
}

impl BoatHandle {
    pub fn new(user_token: impl Into<String>, boat_id: impl Into<String>) -> Self {
        Self {
            user_token: user_token.into(),
            boat_id: boat_id.into(),
        }
    }
}

impl fmt::Debug for BoatHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoatHandle")
            .field("user_token", &"<redacted>")
            .field("boat_id", &self.boat_id)
            .finish()
    }
}

/// Anything able to produce a fresh telemetry snapshot on demand.
pub trait TelemetrySource: Send + Sync {
    /// Fetch the current telemetry for the boat.
    fn boat_infos(&self) -> impl Future<Output = Result<BoatInfos, BoatError>> + Send;
}

/// Full boat-control surface: telemetry plus course commands.
pub trait BoatControl: TelemetrySource {
    /// Command a new heading, in whole degrees.
    fn set_course(&self, bearing: i32) -> impl Future<Output = Result<(), BoatError>> + Send;
}

/// swail.io client using direct HTTP requests.
///
/// Uses a reusable `reqwest::Client` with connection pooling and a request
/// timeout taken from [`BoatClientConfig`].
pub struct SwailClient {
    handle: BoatHandle,

    /// Reusable HTTP client with connection pooling.
    http: reqwest::Client,

    config: BoatClientConfig,
}

impl SwailClient {
    /// Create a client for the given boat.
    pub fn new(handle: BoatHandle, config: BoatClientConfig) -> Result<Self, BoatError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BoatError::ClientBuild(e.to_string()))?;

        Ok(Self {
            handle,
            http,
            config,
        })
    }

    /// The boat this client addresses.
    pub fn handle(&self) -> &BoatHandle {
        &self.handle
    }

    /// Fetch the boat's polar table.
    pub async fn polars(&self) -> Result<Vec<BoatPolar>, BoatError> {
        let polars: Vec<BoatPolar> = self.get_json(&self.polars_url()).await?;
        tracing::debug!(entries = polars.len(), "Polars fetched");
        Ok(polars)
    }

    fn telemetry_url(&self) -> String {
        format!(
            "{}/boats/{}/user/{}",
            self.config.base_url, self.handle.boat_id, self.handle.user_token
        )
    }

    fn polars_url(&self) -> String {
        format!("{}/boats/{}/polars", self.config.base_url, self.handle.boat_id)
    }

    fn heading_url(&self, course: i32) -> String {
        format!(
            "{}/boats/{}/heading/{}/user/{}",
            self.config.base_url, self.handle.boat_id, course, self.handle.user_token
        )
    }

    /// URL with the user token masked, for logging.
    fn redact(&self, url: &str) -> String {
        if self.handle.user_token.is_empty() {
            return url.to_string();
        }
        url.replace(&self.handle.user_token, "***")
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, BoatError> {
        tracing::debug!(url = %self.redact(url), "Swail request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| BoatError::HttpError(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(BoatError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BoatError::HttpError(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| BoatError::JsonError(e.to_string()))
    }
}

impl TelemetrySource for SwailClient {
    async fn boat_infos(&self) -> Result<BoatInfos, BoatError> {
        let infos: BoatInfos = self.get_json(&self.telemetry_url()).await?;
        infos.validate()?;

        tracing::debug!(
            boat = %infos.name,
            heading = infos.heading,
            twa = infos.twa,
            coord = ?infos.coord,
            "Boat telemetry fetched"
        );
        Ok(infos)
    }
}

impl BoatControl for SwailClient {
    async fn set_course(&self, bearing: i32) -> Result<(), BoatError> {
        let infos: BoatInfos = self.get_json(&self.heading_url(bearing)).await?;
        tracing::debug!(bearing, reported_heading = infos.heading, "Course command accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> SwailClient {
        SwailClient::new(
            BoatHandle::new("378f0e0c-token", "54c35ac521021e05f886ee01"),
            BoatClientConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_telemetry_url() {
        let client = test_client();
        assert_eq!(
            client.telemetry_url(),
            "http://swail.io/api/v1/boats/54c35ac521021e05f886ee01/user/378f0e0c-token"
        );
    }

    #[test]
    fn test_polars_url() {
        let client = test_client();
        assert_eq!(
            client.polars_url(),
            "http://swail.io/api/v1/boats/54c35ac521021e05f886ee01/polars"
        );
    }

    #[test]
    fn test_heading_url() {
        let client = test_client();
        assert_eq!(
            client.heading_url(206),
            "http://swail.io/api/v1/boats/54c35ac521021e05f886ee01/heading/206/user/378f0e0c-token"
        );
    }

    #[test]
    fn test_custom_base_url() {
        let config = BoatClientConfig::new().with_base_url("http://127.0.0.1:9000/v1/");
        let client = SwailClient::new(BoatHandle::new("t", "b"), config).unwrap();
        assert_eq!(client.polars_url(), "http://127.0.0.1:9000/v1/boats/b/polars");
    }

    #[test]
    fn test_redact_hides_token() {
        let client = test_client();
        let redacted = client.redact(&client.heading_url(90));
        assert!(!redacted.contains("378f0e0c-token"));
        assert!(redacted.ends_with("/heading/90/user/***"));
    }

    #[test]
    fn test_handle_debug_hides_token() {
        let handle = BoatHandle::new("secret-token", "boat-1");
        let debug = format!("{:?}", handle);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("boat-1"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let config = BoatClientConfig::new()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(std::time::Duration::from_secs(2));
        let client = SwailClient::new(BoatHandle::new("t", "b"), config).unwrap();

        let result = client.boat_infos().await;
        assert!(matches!(result, Err(BoatError::HttpError(_))));
    }
}

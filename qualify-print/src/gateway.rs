//! HTTP client for the print gateway
//!
//! Stateless transport over the gateway surface:
//! - `GET {url}/print/all` - destinations known to the gateway
//! - `GET {url}/print` - current default destination, if any
//! - `POST {url}/print` - submit a job
//!
//! Every call is single-shot with a bounded timeout; retry policy, if any,
//! belongs to the caller.

use crate::error::{PrintError, PrintResult};
use crate::job::{Destination, PrintJob};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Transport seam in front of the gateway HTTP surface
#[async_trait]
pub trait GatewayApi: Send + Sync {
    /// List destinations known to the gateway
    async fn list_destinations(&self, url: &str) -> PrintResult<Vec<Destination>>;

    /// Fetch the gateway's own default destination (best-effort)
    async fn default_destination(&self, url: &str) -> PrintResult<Option<Destination>>;

    /// Submit a job; either fully accepted or not sent at all
    async fn dispatch(&self, job: &PrintJob, url: &str) -> PrintResult<()>;
}

/// Gateway client over HTTP
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
}

impl GatewayClient {
    /// Create a client with the default 5 second timeout
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(5))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self { client }
    }

    fn endpoint(url: &str, path: &str) -> String {
        format!("{}/{}", url.trim_end_matches('/'), path)
    }
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GatewayApi for GatewayClient {
    #[instrument(skip(self))]
    async fn list_destinations(&self, url: &str) -> PrintResult<Vec<Destination>> {
        let endpoint = Self::endpoint(url, "print/all");
        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| PrintError::GatewayUnreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PrintError::GatewayUnreachable(format!(
                "{} returned {}",
                endpoint,
                response.status()
            )));
        }

        let names: Vec<String> = response
            .json()
            .await
            .map_err(|e| PrintError::GatewayUnreachable(e.to_string()))?;

        debug!(count = names.len(), "Loaded destinations");
        Ok(names.into_iter().map(Destination::from).collect())
    }

    #[instrument(skip(self))]
    async fn default_destination(&self, url: &str) -> PrintResult<Option<Destination>> {
        let endpoint = Self::endpoint(url, "print");

        // Best-effort: any failure is reported as "no default".
        let Ok(response) = self.client.get(&endpoint).send().await else {
            debug!("Gateway default lookup failed");
            return Ok(None);
        };
        if !response.status().is_success() {
            return Ok(None);
        }

        let name = response.json::<Option<String>>().await.ok().flatten();
        Ok(name.filter(|n| !n.is_empty()).map(Destination::from))
    }

    #[instrument(
        skip(self, job),
        fields(destination = %job.settings.destination, mime_type = %job.mime_type)
    )]
    async fn dispatch(&self, job: &PrintJob, url: &str) -> PrintResult<()> {
        let endpoint = Self::endpoint(url, "print");
        let response = self
            .client
            .post(&endpoint)
            .json(job)
            .send()
            .await
            .map_err(|e| PrintError::DispatchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PrintError::DispatchFailed(format!(
                "Gateway returned {}",
                response.status()
            )));
        }

        info!("Print job sent successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(
            GatewayClient::endpoint("http://localhost:9090/", "print/all"),
            "http://localhost:9090/print/all"
        );
        assert_eq!(
            GatewayClient::endpoint("http://localhost:9090", "print"),
            "http://localhost:9090/print"
        );
    }
}

//! JSON-over-HTTP source for PokeAPI requests

use crate::constants::api::USER_AGENT;
use crate::error::{Error, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Trait for fetching and decoding a JSON document by URL
///
/// Anything but a 200 response, a transport failure, or an undecodable body
/// is an `Error::DetailFetch`.
pub trait JsonSource: Send + Sync {
    fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<T>> + Send;
}

/// reqwest-backed source; no timeout, no retries
#[derive(Debug, Clone)]
pub struct HttpJsonSource {
    client: reqwest::Client,
}

impl HttpJsonSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl JsonSource for HttpJsonSource {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self.client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::DetailFetch(format!("Request to {} failed: {}", url, e)))?;

        if response.status() != StatusCode::OK {
            return Err(Error::DetailFetch(format!(
                "{} returned status: {}",
                url,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::DetailFetch(format!("Failed to parse response from {}: {}", url, e)))
    }
}

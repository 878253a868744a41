//! HTTP client for the mesh server API

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::http;
use crate::context::ActiveContext;
use crate::error::{MeshError, Result};
use crate::mesh::page::PageRequest;

/// Mesh server API client
pub struct MeshClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    probe_timeout: Duration,
}

impl MeshClient {
    /// Create a client with the default timeouts
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self::with_timeouts(base_url, token, http::REQUEST_TIMEOUT, http::PROBE_TIMEOUT)
    }

    /// Create a client with explicit request and probe timeouts
    pub fn with_timeouts(
        base_url: String,
        token: Option<String>,
        request_timeout: Duration,
        probe_timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .connect_timeout(http::CONNECT_TIMEOUT.min(request_timeout))
            .timeout(request_timeout)
            .user_agent(concat!("meshctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            probe_timeout,
        }
    }

    /// Create a client for a resolved context
    pub fn from_context(ctx: &ActiveContext) -> Self {
        Self::new(ctx.base_url.clone(), ctx.token.clone())
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a relative API path onto the base URL
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Liveness probe: any HTTP answer from the base URL counts as reachable
    pub async fn probe(&self) -> Result<()> {
        let url = format!("{}/", self.base_url);
        debug!("Probing server liveness at {}", url);

        match self
            .client
            .get(&url)
            .timeout(self.probe_timeout)
            .send()
            .await
        {
            Ok(response) => {
                debug!("Server answered probe with status {}", response.status());
                Ok(())
            }
            Err(e) => {
                debug!("Liveness probe to {} failed: {}", url, e);
                Err(MeshError::ServerUnreachable {
                    url: self.base_url.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Send a request and return the fully read body of a 2xx response.
    ///
    /// The response is owned by this function, so its connection is released
    /// on every return path, including the early status error.
    pub(crate) async fn send_raw(&self, request: reqwest::RequestBuilder) -> Result<Vec<u8>> {
        let response = request.send().await.map_err(|e| {
            debug!("Request failed: {}", e);
            MeshError::Network(e)
        })?;

        let status = response.status();
        let url = response.url().to_string();
        if !status.is_success() {
            debug!("{} answered with status {}", url, status);
            return Err(MeshError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            debug!("Failed to read body from {}: {}", url, e);
            MeshError::Network(e)
        })?;
        debug!("Read {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }

    /// Send a request and decode a 2xx JSON body
    pub(crate) async fn send_json<T>(&self, request: reqwest::RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.send_raw(request).await?;
        serde_json::from_slice(&body).map_err(|e| {
            debug!("Failed to decode response body: {}", e);
            MeshError::Decode(e.to_string())
        })
    }

    /// Fetch a collection endpoint in single-page or all-pages mode.
    ///
    /// `resource_path` may already carry query parameters. No retries are made.
    pub async fn fetch_listing<R>(&self, resource_path: &str, page: PageRequest) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = page.apply(&self.url(resource_path));
        debug!("Fetching listing from: {}", url);
        self.send_json(self.get(&url)).await
    }
}

#[cfg(test)]
impl MeshClient {
    /// Create a test client against a mock server with short timeouts
    pub fn test_client(base_url: &str) -> Self {
        Self::with_timeouts(
            base_url.to_string(),
            Some("test-token".to_string()),
            Duration::from_secs(5),
            Duration::from_secs(2),
        )
    }
}

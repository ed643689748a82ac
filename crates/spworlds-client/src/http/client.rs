/*
[INPUT]:  HTTP configuration (base URL, timeouts, user agent), credentials, transport
[OUTPUT]: Configured client that dispatches endpoint requests and maps responses
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use reqwest::header::HeaderValue;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::auth::Credentials;
use crate::http::endpoint::Endpoint;
use crate::http::response::map_response;
use crate::http::transport::{HttpRequest, HttpTransport, ReqwestTransport};
use crate::http::{Result, SpError};

/// Base URL of the SPWorlds API
pub const DEFAULT_BASE_URL: &str = "https://spworlds.ru";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("spworlds-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Main HTTP client for the SPWorlds card API
///
/// Cloning is cheap and clones share the transport. Every call is an
/// independent round trip; no state is shared between concurrent calls.
#[derive(Debug)]
pub struct SpClient<T = ReqwestTransport> {
    transport: Arc<T>,
    base_url: Url,
    credentials: Option<Credentials>,
    cancel: Option<CancellationToken>,
}

impl<T> Clone for SpClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: self.base_url.clone(),
            credentials: self.credentials.clone(),
            cancel: self.cancel.clone(),
        }
    }
}

impl SpClient<ReqwestTransport> {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.clone();
        Self::with_config_and_base_url(config, &base_url)
    }

    /// Create a client against another host, e.g. a mock server
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(transport, base_url)
    }
}

impl<T: HttpTransport> SpClient<T> {
    /// Create a client on top of a custom transport
    pub fn with_transport(transport: T, base_url: &str) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(transport),
            base_url: Url::parse(base_url)?,
            credentials: None,
            cancel: None,
        })
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Builder-style variant of [`SpClient::set_credentials`]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Handle whose calls abort with [`SpError::Cancelled`] once `token` fires
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        let mut client = self.clone();
        client.cancel = Some(token);
        client
    }

    /// Fail with `Configuration` unless usable credentials are set
    pub(crate) fn check_credentials(&self) -> Result<()> {
        self.auth_header().map(|_| ())
    }

    fn auth_header(&self) -> Result<HeaderValue> {
        self.credentials
            .as_ref()
            .ok_or_else(|| SpError::Configuration("credentials are not set".to_string()))?
            .auth_header()
    }

    /// GET an endpoint and decode its body
    pub(crate) async fn get<R: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<R> {
        let request = endpoint.request(&self.base_url, self.auth_header()?)?;
        self.execute(endpoint, request).await
    }

    /// POST `body` as JSON to an endpoint and decode its body
    pub(crate) async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        body: &B,
    ) -> Result<R> {
        let request = endpoint.json_request(&self.base_url, self.auth_header()?, body)?;
        self.execute(endpoint, request).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        request: HttpRequest,
    ) -> Result<R> {
        if self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled) {
            info!(endpoint = endpoint.name(), "request cancelled before dispatch");
            return Err(SpError::Cancelled);
        }

        debug!(
            endpoint = endpoint.name(),
            method = %request.method,
            path = request.url.path(),
            "sending request"
        );

        let send = self.transport.send(request);
        let response = match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    info!(endpoint = endpoint.name(), "request cancelled in flight");
                    return Err(SpError::Cancelled);
                }
                result = send => result?,
            },
            None => send.await?,
        };

        map_response(&endpoint, response)
    }
}

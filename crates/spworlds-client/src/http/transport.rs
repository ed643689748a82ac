/*
[INPUT]:  Fully built HTTP requests (method, URL, headers, body)
[OUTPUT]: Raw HTTP responses (status, headers, body bytes) or transport failures
[POS]:    HTTP layer - pluggable network collaborator
[UPDATE]: When adding transport implementations or failure categories
*/

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode, Url};
use thiserror::Error;

use crate::http::client::ClientConfig;
use crate::http::error::{Result, SpError};

/// Boxed underlying cause of a transport failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Network-level failure; the provider never produced an HTTP status
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request did not complete within the configured timeout
    #[error("request timed out: {0}")]
    Timeout(#[source] BoxError),

    /// DNS, TCP or TLS setup failed
    #[error("connection failed: {0}")]
    Connect(#[source] BoxError),

    /// Any other failure while sending or reading the response
    #[error("request failed: {0}")]
    Request(#[source] BoxError),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(Box::new(err))
        } else if err.is_connect() {
            TransportError::Connect(Box::new(err))
        } else {
            TransportError::Request(Box::new(err))
        }
    }
}

/// Outbound request handed to a transport
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Completed response as seen by the transport
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Trait for sending a single HTTP round trip
///
/// Implement this trait to plug in a different HTTP stack or a test double.
/// Timeouts, TLS and connection pooling belong to the implementation.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and return whatever the server answered
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError>;
}

/// Default transport backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a reqwest client from the timeouts and user agent in `config`
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SpError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

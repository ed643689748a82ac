/*
[INPUT]:  Test configuration and mock transport requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for spworlds-client tests

#![allow(dead_code)]

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use spworlds_client::{
    ClientConfig, Credentials, HttpRequest, HttpResponse, HttpTransport, SpClient, TransportError,
};
use wiremock::MockServer;

type Responder = Box<dyn Fn(&HttpRequest) -> HttpResponse + Send + Sync>;

/// Transport double that counts calls and answers from a closure
pub struct MockTransport {
    calls: AtomicUsize,
    delay: Option<Duration>,
    responder: Responder,
}

impl MockTransport {
    pub fn new(responder: impl Fn(&HttpRequest) -> HttpResponse + Send + Sync + 'static) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delay: None,
            responder: Box::new(responder),
        }
    }

    /// Always answer `status` with `body` serialized as JSON
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::new(move |_| json_response(status, &body))
    }

    /// Hold every response back for `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockTransport")
            .field("calls", &self.calls())
            .finish()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.delay {
            Some(delay) => tokio::time::sleep(delay).await,
            None => tokio::task::yield_now().await,
        }
        Ok((self.responder)(&request))
    }
}

/// Transport double whose every call fails to connect
#[derive(Debug, Default)]
pub struct UnreachableTransport;

#[async_trait]
impl HttpTransport for UnreachableTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Connect("connection refused".into()))
    }
}

pub fn json_response(status: u16, body: &serde_json::Value) -> HttpResponse {
    HttpResponse {
        status: StatusCode::from_u16(status).expect("valid status"),
        headers: HeaderMap::new(),
        body: serde_json::to_vec(body).expect("json body"),
    }
}

pub fn test_credentials() -> Credentials {
    Credentials::new("b7d0f3c2-card", "a1b2c3d4e5-token")
}

/// Client over `transport` with valid test credentials
pub fn mock_client<T: HttpTransport>(transport: T) -> SpClient<T> {
    SpClient::with_transport(transport, "https://spworlds.test")
        .expect("client init")
        .with_credentials(test_credentials())
}

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at a wiremock server with valid test credentials
pub fn server_client(server: &MockServer) -> SpClient {
    SpClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
        .with_credentials(test_credentials())
}

/*
[INPUT]:  HTTP client configuration, credentials and endpoint arguments
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod accounts;
pub mod card;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod payments;
pub mod response;
pub mod transport;

pub use error::{Result, SpError};

pub use client::{ClientConfig, DEFAULT_BASE_URL, SpClient};
pub use endpoint::Endpoint;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};

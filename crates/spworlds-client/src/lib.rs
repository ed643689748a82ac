/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public SPWorlds client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    BODY_HASH_HEADER,
    Credentials,
    make_auth_header,
    parse_webhook,
    verify_and_parse_webhook,
    verify_webhook,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Endpoint,
    HttpRequest,
    HttpResponse,
    HttpTransport,
    ReqwestTransport,
    Result,
    SpClient,
    SpError,
    TransportError,
};

// Re-export all types
pub use types::*;

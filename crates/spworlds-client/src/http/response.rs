/*
[INPUT]:  Endpoint descriptor and completed HttpResponse
[OUTPUT]: Typed success value or categorized SpError
[POS]:    HTTP layer - status categorization and strict JSON decoding
[UPDATE]: When the provider changes status semantics or response shapes
*/

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::endpoint::Endpoint;
use crate::http::transport::HttpResponse;
use crate::http::{Result, SpError};

const BODY_LOG_MAX_BYTES: usize = 512;

/// Map a response to `T`, or to the error its status stands for
pub fn map_response<T: DeserializeOwned>(endpoint: &Endpoint<'_>, response: HttpResponse) -> Result<T> {
    let status = response.status;
    debug!(endpoint = endpoint.name(), status = status.as_u16(), "response received");

    if status.is_success() {
        return serde_json::from_slice(&response.body)
            .map_err(|e| SpError::decoding(endpoint.name(), &e));
    }

    let body = response.text();
    warn!(
        endpoint = endpoint.name(),
        status = status.as_u16(),
        body = %truncate_for_log(&body, BODY_LOG_MAX_BYTES),
        "provider returned error status"
    );

    Err(match status {
        StatusCode::UNAUTHORIZED => SpError::Authentication,
        StatusCode::NOT_FOUND if endpoint.is_lookup() => SpError::NotFound {
            resource: endpoint.missing_resource(),
        },
        _ => SpError::provider(status, body),
    })
}

fn truncate_for_log(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }
    let mut end = max_len;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::with_capacity(end + 3);
    out.push_str(&value[..end]);
    out.push_str("...");
    out
}

/*
[INPUT]:  Card id and card token
[OUTPUT]: Authorization header value (Bearer base64(id:token))
[POS]:    Auth layer - credential validation and header derivation
[UPDATE]: When the provider changes its credential scheme
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::header::HeaderValue;

use crate::http::{Result, SpError};

/// Card credentials used for every authenticated request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub card_id: String,
    pub token: String,
}

impl Credentials {
    pub fn new(card_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            card_id: card_id.into(),
            token: token.into(),
        }
    }

    /// Reject empty fields before anything touches the network
    pub fn validate(&self) -> Result<()> {
        if self.card_id.trim().is_empty() {
            return Err(SpError::Configuration("card id must not be empty".to_string()));
        }
        if self.token.trim().is_empty() {
            return Err(SpError::Configuration("card token must not be empty".to_string()));
        }
        Ok(())
    }

    /// Derive the Authorization header for these credentials
    pub fn auth_header(&self) -> Result<HeaderValue> {
        make_auth_header(&self.card_id, &self.token)
    }
}

// Keep the token out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("card_id", &self.card_id)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Build `Bearer base64(card_id:token)`
///
/// Basic-auth encoding carried in a Bearer header, as the provider expects.
pub fn make_auth_header(card_id: &str, token: &str) -> Result<HeaderValue> {
    Credentials::new(card_id, token).validate()?;

    let encoded = BASE64.encode(format!("{card_id}:{token}").as_bytes());
    let mut value = HeaderValue::from_str(&format!("Bearer {encoded}"))
        .map_err(|e| SpError::Configuration(format!("Invalid authorization header: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

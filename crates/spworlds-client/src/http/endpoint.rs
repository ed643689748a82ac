/*
[INPUT]:  Endpoint descriptor, base URL, auth header, optional JSON body
[OUTPUT]: Fully built HttpRequest (method, percent-encoded URL, headers, body)
[POS]:    HTTP layer - declarative endpoint table and request construction
[UPDATE]: When the provider adds, moves or re-methods an endpoint
*/

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use serde::Serialize;

use crate::http::transport::HttpRequest;
use crate::http::{Result, SpError};

const API_PREFIX: [&str; 2] = ["api", "public"];
const JSON: &str = "application/json";

/// Every remote operation the provider exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    GetBalance,
    Transaction,
    Payment,
    GetUserName { discord_id: &'a str },
    GetUserCards { nickname: &'a str },
    GetInfo,
    ChangeWebhook,
}

impl Endpoint<'_> {
    /// Stable name used in logs and decoding errors
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::GetBalance => "get_balance",
            Endpoint::Transaction => "transaction",
            Endpoint::Payment => "payment",
            Endpoint::GetUserName { .. } => "get_user_name",
            Endpoint::GetUserCards { .. } => "get_user_cards",
            Endpoint::GetInfo => "get_info",
            Endpoint::ChangeWebhook => "change_webhook",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::GetBalance
            | Endpoint::GetUserName { .. }
            | Endpoint::GetUserCards { .. }
            | Endpoint::GetInfo => Method::GET,
            Endpoint::Transaction | Endpoint::Payment | Endpoint::ChangeWebhook => Method::POST,
        }
    }

    /// Path below `/api/public`, one entry per segment, unescaped
    pub fn path_segments(&self) -> Vec<&str> {
        match *self {
            Endpoint::GetBalance => vec!["card"],
            Endpoint::Transaction => vec!["transactions"],
            Endpoint::Payment => vec!["payments"],
            Endpoint::GetUserName { discord_id } => vec!["users", discord_id],
            Endpoint::GetUserCards { nickname } => vec!["accounts", nickname, "cards"],
            Endpoint::GetInfo => vec!["accounts", "me"],
            Endpoint::ChangeWebhook => vec!["card", "webhook"],
        }
    }

    /// Lookups turn a 404 into `NotFound`; elsewhere 404 is a provider error
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Endpoint::GetUserName { .. } | Endpoint::GetUserCards { .. }
        )
    }

    /// What a 404 on this endpoint means
    pub fn missing_resource(&self) -> String {
        match self {
            Endpoint::GetUserName { discord_id } => format!("user with discord id {discord_id}"),
            Endpoint::GetUserCards { nickname } => format!("cards of player {nickname}"),
            other => other.name().to_string(),
        }
    }

    /// Absolute URL under `base`; user-supplied segments are percent-encoded
    pub fn url(&self, base: &Url) -> Result<Url> {
        let segments = self.path_segments();
        if segments.iter().any(|segment| matches!(*segment, "" | "." | "..")) {
            return Err(SpError::Validation(format!(
                "{} path segment must not be empty, '.' or '..'",
                self.name()
            )));
        }

        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| SpError::Configuration(format!("Base URL {base} cannot carry a path")))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    /// Build a request without a body
    pub fn request(&self, base: &Url, auth: HeaderValue) -> Result<HttpRequest> {
        Ok(HttpRequest {
            method: self.method(),
            url: self.url(base)?,
            headers: base_headers(auth),
            body: None,
        })
    }

    /// Build a request carrying `body` as JSON
    pub fn json_request<B: Serialize>(
        &self,
        base: &Url,
        auth: HeaderValue,
        body: &B,
    ) -> Result<HttpRequest> {
        let body = serde_json::to_vec(body)
            .map_err(|e| SpError::Validation(format!("Failed to encode {} body: {e}", self.name())))?;
        let mut headers = base_headers(auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));

        Ok(HttpRequest {
            method: self.method(),
            url: self.url(base)?,
            headers,
            body: Some(body),
        })
    }
}

fn base_headers(auth: HeaderValue) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static(JSON));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WebhookRequest;
    use rstest::rstest;

    fn base() -> Url {
        Url::parse("https://spworlds.ru").unwrap()
    }

    #[rstest]
    #[case(Endpoint::GetBalance, "GET", "https://spworlds.ru/api/public/card")]
    #[case(Endpoint::Transaction, "POST", "https://spworlds.ru/api/public/transactions")]
    #[case(Endpoint::Payment, "POST", "https://spworlds.ru/api/public/payments")]
    #[case(
        Endpoint::GetUserName { discord_id: "262632724928397312" },
        "GET",
        "https://spworlds.ru/api/public/users/262632724928397312"
    )]
    #[case(
        Endpoint::GetUserCards { nickname: "Steve" },
        "GET",
        "https://spworlds.ru/api/public/accounts/Steve/cards"
    )]
    #[case(Endpoint::GetInfo, "GET", "https://spworlds.ru/api/public/accounts/me")]
    #[case(Endpoint::ChangeWebhook, "POST", "https://spworlds.ru/api/public/card/webhook")]
    fn test_endpoint_table(
        #[case] endpoint: Endpoint<'static>,
        #[case] method: &str,
        #[case] url: &str,
    ) {
        assert_eq!(endpoint.method().as_str(), method);
        assert_eq!(endpoint.url(&base()).unwrap().as_str(), url);
    }

    #[test]
    fn test_user_segments_are_percent_encoded() {
        let url = Endpoint::GetUserCards { nickname: "../me?x=1#y" }
            .url(&base())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://spworlds.ru/api/public/accounts/..%2Fme%3Fx=1%23y/cards"
        );
        assert_eq!(url.path_segments().unwrap().count(), 5);

        let url = Endpoint::GetUserName { discord_id: "a b/c" }.url(&base()).unwrap();
        assert_eq!(url.as_str(), "https://spworlds.ru/api/public/users/a%20b%2Fc");
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("..")]
    fn test_dot_segments_are_rejected(#[case] nickname: &str) {
        let err = Endpoint::GetUserCards { nickname }.url(&base()).unwrap_err();
        assert!(matches!(err, SpError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn test_base_url_prefix_is_kept() {
        let base = Url::parse("http://127.0.0.1:8080/proxy/").unwrap();
        let url = Endpoint::GetInfo.url(&base).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/proxy/api/public/accounts/me");
    }

    #[test]
    fn test_only_user_lookups_map_not_found() {
        assert!(Endpoint::GetUserName { discord_id: "1" }.is_lookup());
        assert!(Endpoint::GetUserCards { nickname: "n" }.is_lookup());
        assert!(!Endpoint::GetBalance.is_lookup());
        assert!(!Endpoint::Payment.is_lookup());
    }

    #[test]
    fn test_json_request_headers_and_body() {
        let auth = HeaderValue::from_static("Bearer Zm9vOmJhcg==");
        let body = WebhookRequest {
            url: "https://example.com/hook".to_string(),
        };
        let request = Endpoint::ChangeWebhook
            .json_request(&base(), auth, &body)
            .unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.headers[AUTHORIZATION], "Bearer Zm9vOmJhcg==");
        assert_eq!(request.headers[CONTENT_TYPE], JSON);
        assert_eq!(request.headers[ACCEPT], JSON);
        assert_eq!(
            request.body.as_deref(),
            Some(br#"{"url":"https://example.com/hook"}"#.as_slice())
        );
    }

    #[test]
    fn test_bodyless_request_has_no_content_type() {
        let auth = HeaderValue::from_static("Bearer x");
        let request = Endpoint::GetBalance.request(&base(), auth).unwrap();
        assert!(request.body.is_none());
        assert!(!request.headers.contains_key(CONTENT_TYPE));
    }
}

/*
[INPUT]:  Provider JSON response bodies
[OUTPUT]: Typed Rust response structs
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// GET /api/public/card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    pub balance: i64,
    #[serde(default)]
    pub webhook: Option<String>,
}

/// POST /api/public/transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferResponse {
    pub balance: i64,
}

/// POST /api/public/payments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub url: String,
}

/// GET /api/public/users/{discordId}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    #[serde(rename = "username")]
    pub nickname: String,
    pub uuid: String,
}

/// POST /api/public/card/webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub id: String,
    #[serde(rename = "webhook", alias = "webhookUrl")]
    pub webhook_url: String,
}

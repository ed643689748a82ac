/*
[INPUT]:  Provider JSON schema and serde requirements
[OUTPUT]: Typed account, city and card structs
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Returned by GET /api/public/accounts/me
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    #[serde(rename = "minecraftUUID")]
    pub minecraft_uuid: String,
    pub status: String,
    pub roles: Vec<String>,
    #[serde(default)]
    pub city: Option<City>,
    pub cards: Vec<CardSummary>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    // null for cities that never set one
    #[serde(default)]
    pub description: Option<String>,
    pub x: i64,
    pub z: i64,
    #[serde(rename = "isMayor")]
    pub is_mayor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSummary {
    pub id: String,
    pub name: String,
    pub number: String,
    pub color: i64,
}

/// Body of the callback the provider sends to `webhookUrl` after a payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentWebhook {
    pub payer: String,
    pub amount: i64,
    pub data: String,
}

/*
[INPUT]:  Caller arguments for write endpoints
[OUTPUT]: Typed request bodies serialized with the provider's field names
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Comment sent with a transfer when the caller gives none
pub const DEFAULT_TRANSFER_COMMENT: &str = "No comment";

/// Longest `data` string the payments endpoint accepts
pub const MAX_PAYMENT_DATA_CHARS: usize = 100;

/// POST /api/public/transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub receiver: String,
    pub amount: i64,
    pub comment: String,
}

impl TransferRequest {
    pub fn new(receiver: impl Into<String>, amount: i64, comment: Option<&str>) -> Self {
        Self {
            receiver: receiver.into(),
            amount,
            comment: comment.unwrap_or(DEFAULT_TRANSFER_COMMENT).to_string(),
        }
    }
}

/// One line of a payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentItem {
    pub name: String,
    pub count: u32,
    pub price: i64,
    pub comment: String,
}

impl PaymentItem {
    pub fn new(name: impl Into<String>, count: u32, price: i64, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count,
            price,
            comment: comment.into(),
        }
    }
}

/// POST /api/public/payments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub items: Vec<PaymentItem>,
    #[serde(rename = "redirectUrl")]
    pub redirect_url: String,
    #[serde(rename = "webhookUrl")]
    pub webhook_url: String,
    pub data: String,
}

/// POST /api/public/card/webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookRequest {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transfer_request_wire_shape() {
        let req = TransferRequest::new("12345", 16, None);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"receiver": "12345", "amount": 16, "comment": "No comment"})
        );
    }

    #[test]
    fn test_transfer_request_decodes_to_equal_value() {
        let req = TransferRequest::new("00042", 9_007_199_254_740_993, Some("за алмазы"));
        let bytes = serde_json::to_vec(&req).unwrap();
        let decoded: TransferRequest = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, req);
    }

    #[test]
    fn test_payment_request_uses_camel_case_urls() {
        let req = PaymentRequest {
            items: vec![PaymentItem::new("Diamond", 2, 5, "shiny")],
            redirect_url: "https://shop.example/done".to_string(),
            webhook_url: "https://shop.example/hook".to_string(),
            data: "order-1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "items": [{"name": "Diamond", "count": 2, "price": 5, "comment": "shiny"}],
                "redirectUrl": "https://shop.example/done",
                "webhookUrl": "https://shop.example/hook",
                "data": "order-1",
            })
        );
    }
}

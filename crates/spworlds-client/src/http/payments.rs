/*
[INPUT]:  Payment items, redirect/webhook URLs, opaque data string
[OUTPUT]: One-time payment page URL
[POS]:    HTTP layer - payment link creation
[UPDATE]: When the payments endpoint or its limits change
*/

use crate::http::endpoint::Endpoint;
use crate::http::transport::HttpTransport;
use crate::http::{Result, SpClient, SpError};
use crate::types::{MAX_PAYMENT_DATA_CHARS, PaymentItem, PaymentRequest, PaymentResponse};

impl<T: HttpTransport> SpClient<T> {
    /// Create a payment link for `items`; returns the URL to send the payer to
    ///
    /// POST /api/public/payments
    pub async fn create_payment(
        &self,
        items: Vec<PaymentItem>,
        redirect_url: &str,
        webhook_url: &str,
        data: &str,
    ) -> Result<String> {
        self.check_credentials()?;
        let req = PaymentRequest {
            items,
            redirect_url: redirect_url.to_string(),
            webhook_url: webhook_url.to_string(),
            data: data.to_string(),
        };
        validate_payment(&req)?;

        let response: PaymentResponse = self.post(Endpoint::Payment, &req).await?;
        Ok(response.url)
    }
}

fn validate_payment(req: &PaymentRequest) -> Result<()> {
    if req.items.is_empty() {
        return Err(SpError::Validation("payment needs at least one item".to_string()));
    }
    for item in &req.items {
        if item.count < 1 {
            return Err(SpError::Validation(format!(
                "item '{}' count must be at least 1",
                item.name
            )));
        }
        if item.price < 0 {
            return Err(SpError::Validation(format!(
                "item '{}' price must not be negative, got {}",
                item.name, item.price
            )));
        }
    }

    let data_chars = req.data.chars().count();
    if data_chars > MAX_PAYMENT_DATA_CHARS {
        return Err(SpError::Validation(format!(
            "payment data is {data_chars} characters, limit is {MAX_PAYMENT_DATA_CHARS}"
        )));
    }
    Ok(())
}

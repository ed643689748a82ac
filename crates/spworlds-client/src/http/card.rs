/*
[INPUT]:  Card credentials, transfer and webhook arguments
[OUTPUT]: Card balance, post-transfer balance, webhook configuration
[POS]:    HTTP layer - endpoints acting on the authenticated card
[UPDATE]: When adding card endpoints or changing their bodies
*/

use tracing::info;

use crate::http::endpoint::Endpoint;
use crate::http::transport::HttpTransport;
use crate::http::{Result, SpClient, SpError};
use crate::types::{CardInfo, TransferRequest, TransferResponse, WebhookConfig, WebhookRequest};

impl<T: HttpTransport> SpClient<T> {
    /// Query balance and webhook of the authenticated card
    ///
    /// GET /api/public/card
    pub async fn get_card_info(&self) -> Result<CardInfo> {
        self.get(Endpoint::GetBalance).await
    }

    /// Query the card balance in AR
    ///
    /// GET /api/public/card
    pub async fn get_balance(&self) -> Result<i64> {
        Ok(self.get_card_info().await?.balance)
    }

    /// Send `amount` AR to card number `receiver`; returns the new balance
    ///
    /// POST /api/public/transactions
    pub async fn transfer(&self, receiver: &str, amount: i64, comment: Option<&str>) -> Result<i64> {
        self.check_credentials()?;
        if amount < 1 {
            return Err(SpError::Validation(format!(
                "transfer amount must be at least 1, got {amount}"
            )));
        }
        if receiver.trim().is_empty() {
            return Err(SpError::Validation("receiver card must not be empty".to_string()));
        }

        let req = TransferRequest::new(receiver, amount, comment);
        let response: TransferResponse = self.post(Endpoint::Transaction, &req).await?;
        info!(amount, "transfer completed");
        Ok(response.balance)
    }

    /// Point payment callbacks for this card at `url`
    ///
    /// POST /api/public/card/webhook
    pub async fn set_webhook(&self, url: &str) -> Result<WebhookConfig> {
        self.check_credentials()?;
        if url.trim().is_empty() {
            return Err(SpError::Validation("webhook url must not be empty".to_string()));
        }

        let req = WebhookRequest {
            url: url.to_string(),
        };
        self.post(Endpoint::ChangeWebhook, &req).await
    }
}

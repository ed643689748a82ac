/*
[INPUT]:  Discord ids, player nicknames and card credentials
[OUTPUT]: Player identities, card lists, account details
[POS]:    HTTP layer - user and account lookup endpoints
[UPDATE]: When adding account endpoints or changing lookup semantics
*/

use crate::http::endpoint::Endpoint;
use crate::http::transport::HttpTransport;
use crate::http::{Result, SpClient, SpError};
use crate::types::{Account, CardSummary, UserIdentity};

impl<T: HttpTransport> SpClient<T> {
    /// Resolve a Discord user id to the player's nickname and UUID
    ///
    /// GET /api/public/users/{discordId}
    pub async fn resolve_identity(&self, discord_id: &str) -> Result<UserIdentity> {
        self.check_credentials()?;
        if discord_id.trim().is_empty() {
            return Err(SpError::Validation("discord id must not be empty".to_string()));
        }
        self.get(Endpoint::GetUserName { discord_id }).await
    }

    /// List the cards owned by player `nickname`
    ///
    /// GET /api/public/accounts/{nickname}/cards
    pub async fn list_cards(&self, nickname: &str) -> Result<Vec<CardSummary>> {
        self.check_credentials()?;
        if nickname.trim().is_empty() {
            return Err(SpError::Validation("nickname must not be empty".to_string()));
        }
        self.get(Endpoint::GetUserCards { nickname }).await
    }

    /// Details of the account owning the authenticated card
    ///
    /// GET /api/public/accounts/me
    pub async fn get_account_info(&self) -> Result<Account> {
        self.get(Endpoint::GetInfo).await
    }
}

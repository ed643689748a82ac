/*
[INPUT]:  Card id and token (SPWORLDS_CARD_ID / SPWORLDS_CARD_TOKEN)
[OUTPUT]: Card balance and owning account details
[POS]:    Examples - read-only card queries
[UPDATE]: When card or account endpoints change
*/

use spworlds_client::*;

/// Example: query balance and account info for one card
#[tokio::main]
async fn main() {
    println!("=== SPWorlds Card Example ===\n");

    let (Ok(card_id), Ok(token)) = (
        std::env::var("SPWORLDS_CARD_ID"),
        std::env::var("SPWORLDS_CARD_TOKEN"),
    ) else {
        eprintln!("Set SPWORLDS_CARD_ID and SPWORLDS_CARD_TOKEN first");
        return;
    };

    let client = match SpClient::new() {
        Ok(c) => c.with_credentials(Credentials::new(card_id, token)),
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    match client.get_balance().await {
        Ok(balance) => println!("✓ Balance: {} AR", balance),
        Err(SpError::Authentication) => {
            println!("✗ Card id or token rejected");
            return;
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.get_account_info().await {
        Ok(account) => {
            println!("✓ Account: {} ({})", account.username, account.status);
            for card in &account.cards {
                println!("  card {} '{}'", card.number, card.name);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Card example complete");
}

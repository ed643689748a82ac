/*
[INPUT]:  Card id and token, shop redirect and webhook URLs
[OUTPUT]: Payment page URL to hand to the payer
[POS]:    Examples - payment link creation
[UPDATE]: When the payments endpoint changes
*/

use spworlds_client::*;

/// Example: create a payment link for two items
#[tokio::main]
async fn main() {
    println!("=== SPWorlds Payment Example ===\n");

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

    let items = vec![
        PaymentItem::new("Diamond block", 2, 9, "delivered to spawn"),
        PaymentItem::new("Elytra", 1, 32, ""),
    ];

    match client
        .create_payment(
            items,
            "https://shop.example/thanks",
            "https://shop.example/spworlds/webhook",
            "order-1024",
        )
        .await
    {
        Ok(url) => println!("✓ Send the payer to: {}", url),
        Err(e) => println!("✗ Error: {}", e),
    }
}

//! Send a single notification and report the outcome
//!
//! Posts a validated request and prints the status lines to stdout.

use tracing::info;

use crate::client::{Delivery, PushoverClient};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::{FieldPolicy, NotificationRequest};

/// Send and print. Errors are returned for the caller to report.
pub async fn run(
    request: &NotificationRequest,
    config: ClientConfig,
    policy: FieldPolicy,
) -> Result<Delivery> {
    info!(
        device = ?request.device(),
        priority = %request.priority(),
        ?policy,
        "Sending request"
    );

    let client = PushoverClient::new(config)?.with_policy(policy);

    println!("Sending message: {}", request.message());
    let delivery = client.send(request).await?;

    print_delivery(&delivery);
    Ok(delivery)
}

fn print_delivery(delivery: &Delivery) {
    println!("Successfully sent message");
    println!(
        "Total Quota: {}",
        delivery.quota.limit.as_deref().unwrap_or("unknown")
    );
    println!(
        "Quota Remaining: {}",
        delivery.quota.remaining.as_deref().unwrap_or("unknown")
    );
}

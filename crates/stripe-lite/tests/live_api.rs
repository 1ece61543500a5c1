//! Tests against the real Stripe API in test mode.
//!
//! Skipped unless `STRIPE_API_KEY` is set (environment or `.env`). Use a
//! TEST secret key; these calls create real test-mode objects.
//!
//! Run:  STRIPE_API_KEY=sk_test_... cargo test --test live_api -- --nocapture

use stripe::{Client, ClientConfig, ERR_TYPE_CARD, ERR_TYPE_INVALID_REQUEST};

const TOKEN_AMEX: &str = "tok_amex";
const TOKEN_INVALID: &str = "tok_alsdkfja";
const TOKEN_CARD_EXPIRED: &str = "tok_chargeDeclinedExpiredCard";
const EMAIL: &str = "test@testwithgo.com";

fn live_client() -> Option<Client> {
    match ClientConfig::from_env() {
        Ok(config) => Some(Client::with_config(config)),
        Err(e) => {
            eprintln!("skipping live test: {e}");
            None
        }
    }
}

#[tokio::test]
async fn live_customer_with_amex() {
    let Some(client) = live_client() else { return };

    let customer = client.customer(TOKEN_AMEX, EMAIL).await.unwrap();

    assert!(
        customer.id.starts_with("cus_"),
        "id = {}; want prefix cus_",
        customer.id
    );
    assert!(
        customer.has_card_source(),
        "default_source = {:?}; want prefix card_",
        customer.default_source
    );
    assert_eq!(customer.email.as_deref(), Some(EMAIL));
}

#[tokio::test]
async fn live_customer_invalid_token() {
    let Some(client) = live_client() else { return };

    let err = client.customer(TOKEN_INVALID, EMAIL).await.unwrap_err();
    assert_eq!(err.error_type(), Some(ERR_TYPE_INVALID_REQUEST), "err = {err}");
}

#[tokio::test]
async fn live_customer_expired_card() {
    let Some(client) = live_client() else { return };

    let err = client.customer(TOKEN_CARD_EXPIRED, EMAIL).await.unwrap_err();
    assert_eq!(err.error_type(), Some(ERR_TYPE_CARD), "err = {err}");
}

#[tokio::test]
async fn live_charge() {
    let Some(client) = live_client() else { return };

    let customer = client.customer(TOKEN_AMEX, EMAIL).await.unwrap();

    let charge = client.charge(&customer.id, 1234).await.unwrap();
    assert_eq!(charge.amount, 1234);

    let err = client.charge("cus_missing", 1234).await.unwrap_err();
    assert_eq!(err.error_type(), Some(ERR_TYPE_INVALID_REQUEST), "err = {err}");
}

//! Minimal client for the Stripe REST API.
//!
//! Covers two calls: creating a customer from a payment token and creating a
//! charge against that customer. Each call is a single authenticated
//! form-encoded `POST`; the JSON response becomes either a typed entity or a
//! [`StripeError::Api`] carrying the structured error envelope.
//!
//! # Quick example
//!
//! ```no_run
//! use stripe::{Client, StripeError, ERR_TYPE_CARD};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let client = Client::new("sk_test_YOUR_KEY");
//!
//! match client.customer("tok_amex", "test@example.com").await {
//!     Ok(customer) => println!("created {}", customer.id),
//!     Err(StripeError::Api(e)) if e.is_type(ERR_TYPE_CARD) => eprintln!("declined: {}", e.message),
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! # }
//! ```

pub mod charge;
pub mod client;
pub mod config;
pub mod constants;
pub mod customer;
pub mod error;

pub use charge::Charge;
pub use client::Client;
pub use config::ClientConfig;
pub use constants::*;
pub use customer::Customer;
pub use error::{ApiError, StripeError};

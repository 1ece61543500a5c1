use std::fmt;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::{redact_key, ClientConfig};
use crate::constants::{CHARGES_PATH, CUSTOMERS_PATH};
use crate::{ApiError, Charge, Customer, StripeError};

/// Client for the Stripe REST API.
///
/// Every operation is one authenticated form-encoded `POST` followed by a
/// JSON decode of the response. The client holds no per-call state, so a
/// single instance can be cloned or shared across tasks freely.
#[derive(Clone)]
pub struct Client {
    key: String,
    base_url: String,
    currency: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for the public API using the given secret key.
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(key))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("failed to build HTTP client");
        Self::with_http_client(config, http)
    }

    /// Create a client with a custom reqwest::Client. The config's timeout is ignored.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            currency: config.currency,
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a customer whose default payment source is `token`.
    ///
    /// The email is sent as-is; the API does its own validation.
    pub async fn customer(&self, token: &str, email: &str) -> Result<Customer, StripeError> {
        let customer: Customer = self
            .post_form(CUSTOMERS_PATH, &[("source", token), ("email", email)])
            .await?;
        tracing::debug!(customer = %customer.id, "created customer");
        Ok(customer)
    }

    /// Charge `amount` (in minor units of the configured currency) to a customer's default source.
    ///
    /// The amount is not checked locally; the API rejects a zero amount with
    /// an `invalid_request_error`.
    pub async fn charge(&self, customer_id: &str, amount: u64) -> Result<Charge, StripeError> {
        let amount = amount.to_string();
        let charge: Charge = self
            .post_form(
                CHARGES_PATH,
                &[
                    ("customer", customer_id),
                    ("amount", amount.as_str()),
                    ("currency", self.currency.as_str()),
                ],
            )
            .await?;
        tracing::debug!(charge = %charge.id, amount = charge.amount, "created charge");
        Ok(charge)
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, StripeError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%path, "POST");

        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.key, Some(""))
            .form(params)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        let result = decode_response(status, &body);
        if let Err(StripeError::Api(err)) = &result {
            tracing::warn!(
                %path,
                status = status.as_u16(),
                error_type = %err.error_type,
                code = %err.code,
                "request rejected"
            );
        }
        result
    }
}

/// Map a response to either the success entity or the API error envelope.
///
/// A 2xx body must decode as `T`; anything else must decode as an
/// [`ApiError`]. A body that fails its expected shape is a
/// [`StripeError::Decode`], never a default-valued success.
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<T, StripeError> {
    let decode_err = |source: serde_json::Error| StripeError::Decode {
        status: status.as_u16(),
        source,
    };

    if status.is_success() {
        return serde_json::from_slice(body).map_err(decode_err);
    }

    let err: ApiError = serde_json::from_slice(body).map_err(decode_err)?;
    Err(StripeError::Api(err))
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("key", &redact_key(&self.key))
            .field("base_url", &self.base_url)
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

use std::fmt;
use std::time::Duration;

use crate::constants::{DEFAULT_API_BASE, DEFAULT_CURRENCY, DEFAULT_TIMEOUT_SECS};
use crate::error::StripeError;

/// Settings for a [`Client`](crate::Client).
///
/// Only the secret key is required; everything else has a default that
/// targets the public Stripe API.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub currency: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_BASE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Point the client at another host (a mock server, a proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Like [`with_base_url`](Self::with_base_url), but rejects anything
    /// that is not an absolute `http`/`https` URL.
    pub fn try_with_base_url(self, base_url: &str) -> Result<Self, StripeError> {
        validate_base_url(base_url)?;
        Ok(self.with_base_url(base_url.trim()))
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load config from the process environment (and a `.env` file, if present).
    ///
    /// Reads `STRIPE_API_KEY` (required), `STRIPE_API_BASE`, `STRIPE_CURRENCY`
    /// and `STRIPE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, StripeError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, StripeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = var("STRIPE_API_KEY")
            .ok_or_else(|| StripeError::Config("STRIPE_API_KEY is required".to_string()))?;

        let mut config = Self::new(api_key.trim());

        if let Some(base) = var("STRIPE_API_BASE") {
            config = config.try_with_base_url(&base)?;
        }

        if let Some(currency) = var("STRIPE_CURRENCY") {
            config = config.with_currency(currency.trim().to_lowercase());
        }

        if let Some(secs) = var("STRIPE_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                StripeError::Config(format!("invalid STRIPE_TIMEOUT_SECS {secs:?}: {e}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn validate_base_url(raw: &str) -> Result<(), StripeError> {
    let url = url::Url::parse(raw.trim())
        .map_err(|e| StripeError::Config(format!("invalid API base URL {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(StripeError::Config(format!(
            "unsupported API base URL scheme: {other}"
        ))),
    }
}

/// Shows only a recognised key prefix (`sk_test`, `rk_live`, ...) so it can be logged.
pub(crate) fn redact_key(key: &str) -> String {
    let mut parts = key.splitn(3, '_');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(kind @ ("sk" | "rk" | "pk")), Some(mode @ ("test" | "live")), Some(_)) => {
            format!("{kind}_{mode}_***")
        }
        _ => "***".to_string(),
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &redact_key(&self.api_key))
            .field("base_url", &self.base_url)
            .field("currency", &self.currency)
            .field("timeout", &self.timeout)
            .finish()
    }
}

use serde::{Deserialize, Serialize};

/// A customer record as returned by `POST /v1/customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Always prefixed `cus_`.
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Identifier of the default payment source; `card_...` when created from a card token.
    #[serde(default)]
    pub default_source: Option<String>,
    /// Unix timestamp (seconds).
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub livemode: bool,
}

impl Customer {
    pub fn has_card_source(&self) -> bool {
        self.default_source
            .as_deref()
            .is_some_and(|source| source.starts_with("card_"))
    }
}

use serde::{Deserialize, Serialize};

/// A single payment against a customer, as returned by `POST /v1/charges`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    pub id: String,
    #[serde(default)]
    pub object: String,
    /// Amount in the currency's minor unit (cents for `usd`).
    pub amount: u64,
    #[serde(default)]
    pub currency: String,
    /// ID of the customer this charge was made against.
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub paid: bool,
    /// `succeeded`, `pending` or `failed`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub failure_code: Option<String>,
    #[serde(default)]
    pub failure_message: Option<String>,
    #[serde(default)]
    pub created: i64,
}

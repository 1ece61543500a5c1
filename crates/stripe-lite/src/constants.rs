/// Base URL of the live Stripe API. Test-mode keys use the same host.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Endpoint for creating customers.
pub const CUSTOMERS_PATH: &str = "/v1/customers";

/// Endpoint for creating charges.
pub const CHARGES_PATH: &str = "/v1/charges";

/// Currency sent with every charge unless the config overrides it.
pub const DEFAULT_CURRENCY: &str = "usd";

/// Per-request timeout applied to the underlying HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Known values of the `type` field in an API error envelope.
// The remote service may add more; always compare against the raw string.

/// The request was malformed or referenced a resource that does not exist.
pub const ERR_TYPE_INVALID_REQUEST: &str = "invalid_request_error";

/// The payment method was declined (expired card, insufficient funds, ...).
pub const ERR_TYPE_CARD: &str = "card_error";

/// Something went wrong on the remote side.
pub const ERR_TYPE_API: &str = "api_error";

/// The secret key was missing, malformed or revoked.
pub const ERR_TYPE_AUTHENTICATION: &str = "authentication_error";

/// Too many requests hit the API in too short a time.
pub const ERR_TYPE_RATE_LIMIT: &str = "rate_limit_error";

/// An idempotency key was reused with different request parameters.
pub const ERR_TYPE_IDEMPOTENCY: &str = "idempotency_error";

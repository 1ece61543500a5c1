use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{ERR_TYPE_CARD, ERR_TYPE_INVALID_REQUEST};

/// Structured error returned by the Stripe API.
///
/// On the wire every field is nested under a single `error` key:
///
/// ```json
/// {"error": {"code": "...", "doc_url": "...", "message": "...", "param": "...", "type": "..."}}
/// ```
///
/// Serialization re-wraps the envelope, so `from_slice(to_vec(e)) == e` holds
/// for any field contents. Fields absent from a response decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(from = "ErrorEnvelope", into = "ErrorEnvelope")]
#[error("{error_type}: {message}")]
pub struct ApiError {
    pub code: String,
    pub doc_url: String,
    pub message: String,
    pub param: String,
    /// Error category, e.g. [`ERR_TYPE_INVALID_REQUEST`]. Open-ended.
    pub error_type: String,
}

impl ApiError {
    pub fn is_type(&self, error_type: &str) -> bool {
        self.error_type == error_type
    }

    pub fn is_invalid_request(&self) -> bool {
        self.is_type(ERR_TYPE_INVALID_REQUEST)
    }

    pub fn is_card_error(&self) -> bool {
        self.is_type(ERR_TYPE_CARD)
    }
}

#[derive(Serialize, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
struct ErrorBody {
    code: Option<String>,
    doc_url: Option<String>,
    message: Option<String>,
    param: Option<String>,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

impl From<ErrorEnvelope> for ApiError {
    fn from(envelope: ErrorEnvelope) -> Self {
        let body = envelope.error;
        Self {
            code: body.code.unwrap_or_default(),
            doc_url: body.doc_url.unwrap_or_default(),
            message: body.message.unwrap_or_default(),
            param: body.param.unwrap_or_default(),
            error_type: body.error_type.unwrap_or_default(),
        }
    }
}

impl From<ApiError> for ErrorEnvelope {
    fn from(err: ApiError) -> Self {
        Self {
            error: ErrorBody {
                code: Some(err.code),
                doc_url: Some(err.doc_url),
                message: Some(err.message),
                param: Some(err.param),
                error_type: Some(err.error_type),
            },
        }
    }
}

/// Errors returned by client operations.
#[derive(Debug, Error)]
pub enum StripeError {
    /// The API rejected the request with a structured error body.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body matched neither the expected entity nor the error envelope.
    #[error("failed to decode response (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

impl StripeError {
    /// The structured API error, if the remote service produced one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn error_type(&self) -> Option<&str> {
        self.api_error().map(|err| err.error_type.as_str())
    }
}

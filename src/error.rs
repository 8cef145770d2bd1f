use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use thiserror::Error;

/// The error object the action API embeds in an otherwise successful (HTTP 200) response.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ApiErrorPayload {
    code: String,
    info: String,
    #[serde(flatten)]
    context: HashMap<String, Value>,
}

impl ApiErrorPayload {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub const fn context(&self) -> &HashMap<String, Value> {
        &self.context
    }
}

impl std::fmt::Display for ApiErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {} / {}", self.code, self.info, json!(self.context))
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The action API reported an error in its response body.
    #[error("{payload}")]
    Api { payload: ApiErrorPayload },

    /// The HTTP layer answered with a non-success status.
    #[error("{status} {status_text}")]
    Http {
        status: reqwest::StatusCode,
        status_text: String,
    },

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error(transparent)]
    InvalidLanguage(#[from] crate::language_string::LanguageError),

    /// A target entity without an ID cannot identify anything on the wiki.
    #[error("target Entity must have an ID set")]
    MissingId,

    #[error("Entity ID is None")]
    IsNone,

    /// The wiki marked the requested entity as missing.
    #[error("no entity found for the requested identifier")]
    EntityMissing,

    #[error("cannot build entity content for entity type {0}")]
    UnsupportedEntityType(String),

    #[error("missing or invalid field {field}: {j}")]
    MissingOrInvalidField { field: String, j: Value },

    #[error("unrecognized entity ID letter: {0}")]
    UnknownEntityLetter(String),

    #[error("unknown data type: {0}")]
    UnknownDataType(String),

    #[error("API URL not set")]
    ApiNotSet,

    #[error("API URL does not contain '/api.php': {0}")]
    ApiUrlInvalid(String),

    #[error("unsupported method: {0}")]
    UnsupportedMethod(reqwest::Method),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(Value),
}

impl ApiError {
    /// Converts a non-success HTTP response into an error.
    pub fn from_response(response: &reqwest::Response) -> Self {
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_owned();
        ApiError::Http {
            status,
            status_text,
        }
    }
}

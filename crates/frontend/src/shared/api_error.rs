//! Errors surfaced at the workflow boundary.
//!
//! Every remote failure collapses into one of two kinds: the referenced
//! record is gone (`NotFound`) or anything else went wrong (`Generic`).

use serde_json::Value;
use thiserror::Error;

pub const NOT_FOUND_FALLBACK: &str = "El recurso solicitado no existe.";

/// What the failed request was trying to do; picks the fallback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    Load,
    Save,
    Delete,
}

impl ApiOperation {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            ApiOperation::Load => "Ocurrió un error al cargar los datos.",
            ApiOperation::Save => "Ocurrió un error al guardar los datos.",
            ApiOperation::Delete => "Ocurrió un error al eliminar los datos.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Generic { message: String },
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        ApiError::Generic {
            message: message.into(),
        }
    }

    /// Map a non-success HTTP response; the service's own message wins
    pub fn from_response(status: u16, body: &str, operation: ApiOperation) -> Self {
        let message = extract_message(body);
        if status == 404 {
            ApiError::not_found(message.unwrap_or_else(|| NOT_FOUND_FALLBACK.to_string()))
        } else {
            ApiError::generic(message.unwrap_or_else(|| operation.fallback_message().to_string()))
        }
    }

    /// Network failure, timeout or undecodable body
    pub fn transport(operation: ApiOperation) -> Self {
        ApiError::generic(operation.fallback_message())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound { message } | ApiError::Generic { message } => message,
        }
    }
}

/// `message`, then `error`, from a JSON error body
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

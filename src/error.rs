//! Error types for the wallet bridge.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use frame_wallet_bridge::{Connector, Result};
//!
//! async fn example(connector: &WalletConnector) -> Result<()> {
//!     let chain_id = connector.get_chain_id().await?;
//!     connector.switch_chain(chain_id).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Transport | [`Error::Transport`], [`Error::BridgeClosed`] |
//! | Protocol | [`Error::Protocol`], [`Error::InvalidResponse`] |
//! | Execution | [`Error::Timeout`] |
//! | Connector | [`Error::ChainNotFound`] |
//! | External | [`Error::Json`] |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use serde_json::Value;
use thiserror::Error;

use crate::identifiers::RequestId;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

/// Error text fragment a host produces when a proxy-call path is not callable.
const UNSUPPORTED_SHAPE_MARKER: &str = "apply";

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when bridge configuration is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// The window target could not be reached or the channel is down.
    ///
    /// The bridge logs these and lets the request run into its deadline.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },

    /// The bridge was disposed while the request was pending.
    #[error("Bridge closed")]
    BridgeClosed,

    // ========================================================================
    // Protocol Errors
    // ========================================================================
    /// The host answered with an error payload.
    #[error("Provider error: {message}")]
    Protocol {
        /// Numeric provider error code, if the host sent one.
        code: Option<i64>,
        /// Host-supplied message text.
        message: String,
    },

    /// The host answered successfully but the result has the wrong shape.
    #[error("Invalid response to {method}: {message}")]
    InvalidResponse {
        /// Method whose result could not be interpreted.
        method: String,
        /// What was wrong with it.
        message: String,
    },

    // ========================================================================
    // Execution Errors
    // ========================================================================
    /// No reply arrived before the deadline.
    #[error("Request {request_id} ({method}) timed out after {timeout_ms}ms")]
    Timeout {
        /// RPC method that timed out.
        method: String,
        /// Correlation id of the expired request.
        request_id: RequestId,
        /// Milliseconds waited before timeout.
        timeout_ms: u64,
    },

    // ========================================================================
    // Connector Errors
    // ========================================================================
    /// `switch_chain` was called with a chain the registry does not know.
    #[error("Chain not found: {chain_id}")]
    ChainNotFound {
        /// The unknown chain id.
        chain_id: u64,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a transport error.
    #[inline]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a protocol error without an error code.
    #[inline]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            code: None,
            message: message.into(),
        }
    }

    /// Creates an invalid response error.
    #[inline]
    pub fn invalid_response(method: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            method: method.into(),
            message: message.into(),
        }
    }

    /// Creates a request timeout error.
    #[inline]
    pub fn timeout(method: impl Into<String>, request_id: RequestId, timeout_ms: u64) -> Self {
        Self::Timeout {
            method: method.into(),
            request_id,
            timeout_ms,
        }
    }

    /// Creates a chain not found error.
    #[inline]
    pub fn chain_not_found(chain_id: u64) -> Self {
        Self::ChainNotFound { chain_id }
    }

    /// Normalizes a host error payload.
    ///
    /// Uses the `message` field when present, a bare string as-is, and the
    /// serialized payload otherwise. A numeric `code` field is preserved.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let code = payload.get("code").and_then(Value::as_i64);
        let message = match payload {
            Value::String(text) => text.clone(),
            Value::Object(map) => match map.get("message").and_then(Value::as_str) {
                Some(text) => text.to_string(),
                None => payload.to_string(),
            },
            other => other.to_string(),
        };

        Self::Protocol { code, message }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a timeout error.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns `true` if the host rejected the call.
    #[inline]
    #[must_use]
    pub fn is_protocol_error(&self) -> bool {
        matches!(self, Self::Protocol { .. })
    }

    /// Returns `true` if the host could not invoke the proxy-call path.
    ///
    /// Hosts that only expose the older provider entry point reject the
    /// newer path with an `apply` failure.
    #[must_use]
    pub fn is_unsupported_shape(&self) -> bool {
        match self {
            Self::Protocol { message, .. } => message.contains(UNSUPPORTED_SHAPE_MARKER),
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

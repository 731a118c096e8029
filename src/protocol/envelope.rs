//! Outbound wire envelopes.
//!
//! Every logical call can be carried by two envelope shapes. Hosts answer
//! using whichever one they understand.
//!
//! # Tagged request
//!
//! ```json
//! {
//!   "type": "providerRequest",
//!   "requestId": 3,
//!   "request": { "method": "eth_chainId", "params": [] }
//! }
//! ```
//!
//! # Proxy-call request
//!
//! ```json
//! {
//!   "type": "CALL",
//!   "id": 3,
//!   "path": ["ethProviderRequestV2"],
//!   "argumentList": [{ "id": 3, "method": "eth_chainId", "params": [] }]
//! }
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::identifiers::RequestId;

// ============================================================================
// RpcCall
// ============================================================================

/// A logical provider call: method name plus positional params.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcCall {
    /// Provider method, e.g. `eth_requestAccounts`.
    pub method: String,

    /// Positional parameters. Always a JSON array on the wire.
    pub params: Value,
}

impl RpcCall {
    /// Creates a call. Non-array params are wrapped into a one-element array.
    #[must_use]
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        let params = match params {
            Value::Array(_) => params,
            Value::Null => Value::Array(Vec::new()),
            other => Value::Array(vec![other]),
        };

        Self {
            method: method.into(),
            params,
        }
    }

    /// Creates a call without parameters.
    #[inline]
    #[must_use]
    pub fn bare(method: impl Into<String>) -> Self {
        Self::new(method, Value::Null)
    }
}

// ============================================================================
// ProxyPath
// ============================================================================

/// Remote function name a proxy-call envelope invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProxyPath {
    /// Original provider entry point.
    #[serde(rename = "ethProviderRequest")]
    V1,
    /// Current provider entry point.
    #[default]
    #[serde(rename = "ethProviderRequestV2")]
    V2,
}

impl ProxyPath {
    /// Returns the wire name.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "ethProviderRequest",
            Self::V2 => "ethProviderRequestV2",
        }
    }
}

// ============================================================================
// ProxyArgument
// ============================================================================

/// Single argument passed to the remote provider function.
#[derive(Debug, Clone, Serialize)]
pub struct ProxyArgument<'a> {
    /// Correlation id, repeated inside the argument.
    pub id: RequestId,
    /// Provider method.
    pub method: &'a str,
    /// Positional parameters.
    pub params: &'a Value,
}

// ============================================================================
// Envelope
// ============================================================================

/// Outbound message, discriminated by its `type` field.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Envelope<'a> {
    /// Tagged provider request.
    #[serde(rename = "providerRequest", rename_all = "camelCase")]
    Tagged {
        /// Correlation id.
        request_id: RequestId,
        /// The call being made.
        request: &'a RpcCall,
    },

    /// Proxy-style remote function call.
    #[serde(rename = "CALL", rename_all = "camelCase")]
    ProxyCall {
        /// Correlation id.
        id: RequestId,
        /// Remote function path.
        path: [ProxyPath; 1],
        /// Arguments for the remote function.
        argument_list: [ProxyArgument<'a>; 1],
    },
}

impl<'a> Envelope<'a> {
    /// Builds a tagged request envelope.
    #[inline]
    #[must_use]
    pub fn tagged(request_id: RequestId, request: &'a RpcCall) -> Self {
        Self::Tagged {
            request_id,
            request,
        }
    }

    /// Builds a proxy-call envelope for `path`.
    #[inline]
    #[must_use]
    pub fn proxy_call(id: RequestId, path: ProxyPath, call: &'a RpcCall) -> Self {
        Self::ProxyCall {
            id,
            path: [path],
            argument_list: [ProxyArgument {
                id,
                method: &call.method,
                params: &call.params,
            }],
        }
    }

    /// Returns the correlation id carried by the envelope.
    #[inline]
    #[must_use]
    pub fn request_id(&self) -> RequestId {
        match self {
            Self::Tagged { request_id, .. } => *request_id,
            Self::ProxyCall { id, .. } => *id,
        }
    }

    /// Serializes into the JSON value posted across the window boundary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

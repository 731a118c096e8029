//! Inbound message classification.
//!
//! The host window carries plenty of traffic that has nothing to do with
//! the bridge. Every message is classified into exactly one [`Inbound`]
//! variant by its `type` discriminant; anything unrecognized is
//! [`Inbound::Ignored`].
//!
//! | `type` | Classification |
//! |--------|----------------|
//! | `providerResponse` | [`Inbound::Reply`] via `requestId` |
//! | `providerEvent` | [`Inbound::Notification`] |
//! | `providerRequest`, `CALL` | [`Inbound::Ignored`] (our own requests echoed back) |
//! | anything else | [`Inbound::Reply`] if it has a numeric `id` and a `result` or `error` |

// ============================================================================
// Imports
// ============================================================================

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{Error, Result};
use crate::identifiers::RequestId;

// ============================================================================
// Constants
// ============================================================================

const PROVIDER_RESPONSE: &str = "providerResponse";
const PROVIDER_EVENT: &str = "providerEvent";
const PROVIDER_REQUEST: &str = "providerRequest";
const PROXY_CALL: &str = "CALL";

// ============================================================================
// WireProtocol
// ============================================================================

/// Which envelope family a reply arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireProtocol {
    /// `providerRequest` / `providerResponse`.
    Tagged,
    /// `CALL` and its id-keyed reply.
    ProxyCall,
}

// ============================================================================
// HostNotification
// ============================================================================

/// Unsolicited provider event pushed by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostNotification {
    /// The connected accounts changed. Raw, unvalidated address strings.
    AccountsChanged(Vec<String>),
    /// The active chain changed. Usually a hex string.
    ChainChanged(Value),
    /// The host provider disconnected.
    Disconnect,
}

// ============================================================================
// Inbound
// ============================================================================

/// Result of classifying one inbound message.
#[derive(Debug)]
pub enum Inbound {
    /// Reply to an outstanding request.
    Reply {
        /// Correlation id the reply is keyed by.
        id: RequestId,
        /// Envelope family it arrived in.
        protocol: WireProtocol,
        /// Result value or normalized host error.
        outcome: Result<Value>,
    },
    /// Unsolicited provider event.
    Notification(HostNotification),
    /// Unrelated traffic.
    Ignored,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaggedResponse {
    request_id: RequestId,
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ProviderEvent {
    event: String,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Deserialize)]
struct ProxyReply {
    id: RequestId,
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<Value>,
}

impl Inbound {
    /// Classifies an inbound message. Never fails.
    #[must_use]
    pub fn classify(message: &Value) -> Self {
        let Some(object) = message.as_object() else {
            return Self::Ignored;
        };

        match object.get("type").and_then(Value::as_str) {
            Some(PROVIDER_RESPONSE) => Self::tagged_reply(message),
            Some(PROVIDER_EVENT) => Self::notification(message),
            Some(PROVIDER_REQUEST | PROXY_CALL) => Self::Ignored,
            _ => Self::proxy_reply(message, object),
        }
    }

    fn tagged_reply(message: &Value) -> Self {
        match TaggedResponse::deserialize(message) {
            Ok(reply) => Self::Reply {
                id: reply.request_id,
                protocol: WireProtocol::Tagged,
                outcome: outcome(reply.result, reply.error),
            },
            Err(e) => {
                trace!(error = %e, "Malformed providerResponse ignored");
                Self::Ignored
            }
        }
    }

    fn proxy_reply(message: &Value, object: &Map<String, Value>) -> Self {
        if !object.contains_key("result") && !object.contains_key("error") {
            return Self::Ignored;
        }

        match ProxyReply::deserialize(message) {
            Ok(reply) => Self::Reply {
                id: reply.id,
                protocol: WireProtocol::ProxyCall,
                outcome: outcome(reply.result, reply.error),
            },
            Err(_) => Self::Ignored,
        }
    }

    fn notification(message: &Value) -> Self {
        let event = match ProviderEvent::deserialize(message) {
            Ok(event) => event,
            Err(e) => {
                trace!(error = %e, "Malformed providerEvent ignored");
                return Self::Ignored;
            }
        };

        match event.event.as_str() {
            "accountsChanged" => {
                let accounts = event
                    .data
                    .as_array()
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                Self::Notification(HostNotification::AccountsChanged(accounts))
            }
            "chainChanged" => Self::Notification(HostNotification::ChainChanged(event.data)),
            "disconnect" => Self::Notification(HostNotification::Disconnect),
            other => {
                trace!(event = other, "Unknown provider event ignored");
                Self::Ignored
            }
        }
    }
}

/// A non-null `error` wins over `result`.
fn outcome(result: Value, error: Option<Value>) -> Result<Value> {
    match error {
        Some(payload) if !payload.is_null() => Err(Error::from_payload(&payload)),
        _ => Ok(result),
    }
}

// ============================================================================
// Tests
// ============================================================================

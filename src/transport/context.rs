//! Browsing context abstraction.
//!
//! The bridge never touches a window directly. Whatever embeds it (a wasm
//! shim, a webview host, the in-process [`loopback`](super::loopback)
//! context) implements [`BrowsingContext`].

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use serde_json::Value;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::error::Result;

// ============================================================================
// Types
// ============================================================================

/// Receiving half of the inbound message channel.
pub type InboundReceiver = mpsc::UnboundedReceiver<Value>;

// ============================================================================
// WindowTarget
// ============================================================================

/// Browsing context the bridge talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowTarget {
    /// The top-level context.
    Top,
    /// The immediate parent context.
    Parent,
    /// The local context itself. Nobody answers here.
    Current,
}

// ============================================================================
// AccessDenied
// ============================================================================

/// A context could not be inspected, typically because it is cross-origin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("access denied: {reason}")]
pub struct AccessDenied {
    /// What the environment reported.
    pub reason: String,
}

impl AccessDenied {
    /// Creates an access denial.
    #[inline]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

// ============================================================================
// BrowsingContext
// ============================================================================

/// The environment the bridge runs in.
pub trait BrowsingContext: Send + Sync + 'static {
    /// Checks whether the top-level context can be read from here.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the read would raise an access fault.
    fn probe_top(&self) -> StdResult<(), AccessDenied>;

    /// Returns `true` if a parent context exists and is not this context.
    fn has_distinct_parent(&self) -> bool;

    /// Posts a message to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the message
    /// could not be handed to the environment.
    fn post_message(&self, target: WindowTarget, message: Value) -> Result<()>;

    /// Installs the inbound message listener.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if no listener
    /// can be installed.
    fn listen(&self) -> Result<InboundReceiver>;
}

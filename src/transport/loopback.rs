//! In-process browsing context.
//!
//! [`LoopbackContext`] plays the embedded side, [`HostHandle`] plays the
//! window that owns the wallet provider. Used for standalone mode, tests
//! and benches.
//!
//! # Example
//!
//! ```ignore
//! let (context, mut host) = LoopbackContext::new(Topology::Framed);
//! let bridge = Bridge::builder().context(context).build()?;
//!
//! let pending = tokio::spawn({
//!     let bridge = bridge.clone();
//!     async move { bridge.dispatch(RpcCall::bare("eth_chainId")).await }
//! });
//!
//! let posted = host.recv().await.expect("request");
//! host.push(json!({ "type": "providerResponse", "requestId": posted.request_id(), "result": "0x1" }))?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::trace;

use crate::error::{Error, Result};

use super::context::{AccessDenied, BrowsingContext, InboundReceiver, WindowTarget};

// ============================================================================
// Topology
// ============================================================================

/// Frame arrangement the loopback context pretends to live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// The top-level context is readable (same origin, or not framed at all).
    Framed,
    /// The top-level context is cross-origin but a parent exists.
    CrossOrigin,
    /// Nothing above this context is reachable.
    Isolated,
}

// ============================================================================
// Posted
// ============================================================================

/// A message the bridge posted, as seen by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Posted {
    /// Context it was addressed to.
    pub target: WindowTarget,
    /// The envelope.
    pub message: Value,
}

impl Posted {
    /// Returns the envelope `type` discriminant.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.message.get("type").and_then(Value::as_str)
    }

    /// Returns the correlation id from either envelope shape.
    #[must_use]
    pub fn request_id(&self) -> Option<u64> {
        self.message
            .get("requestId")
            .or_else(|| self.message.get("id"))
            .and_then(Value::as_u64)
    }

    /// Returns the provider method from either envelope shape.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.message
            .pointer("/request/method")
            .or_else(|| self.message.pointer("/argumentList/0/method"))
            .and_then(Value::as_str)
    }

    /// Returns the proxy-call path, if this is a proxy-call envelope.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.message.pointer("/path/0").and_then(Value::as_str)
    }
}

// ============================================================================
// LoopbackContext
// ============================================================================

/// Embedded side of an in-process window pair.
pub struct LoopbackContext {
    topology: Topology,
    /// Messages to the host.
    outbound_tx: mpsc::UnboundedSender<Posted>,
    /// Messages into the bridge.
    inbound_tx: mpsc::UnboundedSender<Value>,
    /// Handed out by the first `listen`.
    inbound_rx: Mutex<Option<InboundReceiver>>,
}

impl LoopbackContext {
    /// Creates a context and the host handle that answers it.
    #[must_use]
    pub fn new(topology: Topology) -> (Self, HostHandle) {
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();

        let context = Self {
            topology,
            outbound_tx,
            inbound_tx: inbound_tx.clone(),
            inbound_rx: Mutex::new(Some(inbound_rx)),
        };
        let host = HostHandle {
            outbound_rx,
            inbound_tx,
        };

        (context, host)
    }
}

impl BrowsingContext for LoopbackContext {
    fn probe_top(&self) -> StdResult<(), AccessDenied> {
        match self.topology {
            Topology::Framed => Ok(()),
            Topology::CrossOrigin | Topology::Isolated => Err(AccessDenied::new(
                "Blocked a frame from accessing a cross-origin frame",
            )),
        }
    }

    fn has_distinct_parent(&self) -> bool {
        matches!(self.topology, Topology::Framed | Topology::CrossOrigin)
    }

    fn post_message(&self, target: WindowTarget, message: Value) -> Result<()> {
        // Self-addressed messages come straight back to our own listener.
        if target == WindowTarget::Current {
            trace!("Loopback message delivered to self");
            return self
                .inbound_tx
                .send(message)
                .map_err(|_| Error::transport("Listener dropped"));
        }

        self.outbound_tx
            .send(Posted { target, message })
            .map_err(|_| Error::transport("Host window is gone"))
    }

    fn listen(&self) -> Result<InboundReceiver> {
        self.inbound_rx
            .lock()
            .take()
            .ok_or_else(|| Error::transport("Listener already installed"))
    }
}

// ============================================================================
// HostHandle
// ============================================================================

/// Host side of an in-process window pair.
#[derive(Debug)]
pub struct HostHandle {
    outbound_rx: mpsc::UnboundedReceiver<Posted>,
    inbound_tx: mpsc::UnboundedSender<Value>,
}

impl HostHandle {
    /// Waits for the next posted message. `None` once the context is gone.
    pub async fn recv(&mut self) -> Option<Posted> {
        self.outbound_rx.recv().await
    }

    /// Returns the next posted message if one is queued.
    pub fn try_recv(&mut self) -> Option<Posted> {
        self.outbound_rx.try_recv().ok()
    }

    /// Drains everything posted so far.
    pub fn drain(&mut self) -> Vec<Posted> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }

    /// Delivers a message to the bridge's listener.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the listener is gone.
    pub fn push(&self, message: Value) -> Result<()> {
        self.inbound_tx
            .send(message)
            .map_err(|_| Error::transport("Listener dropped"))
    }
}

// ============================================================================
// Tests
// ============================================================================

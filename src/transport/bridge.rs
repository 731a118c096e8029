//! Provider RPC bridge and response demultiplexer.
//!
//! # Event Loop
//!
//! The first dispatch or handler registration installs a single listener on
//! the browsing context and spawns a tokio task that handles, in arrival
//! order:
//!
//! - Replies in either envelope shape, settled through the registry
//! - Host notifications, forwarded to the notification handler. The handler
//!   runs outside the slot lock and may call back into the bridge.
//! - Everything else, dropped silently
//!
//! # Lifecycle
//!
//! [`Bridge::create`] builds an idle bridge; [`Bridge::dispose`] stops the
//! listener and fails whatever is still pending.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::protocol::{Envelope, HostNotification, Inbound, ProxyPath, RpcCall};

use super::builder::BridgeBuilder;
use super::context::{BrowsingContext, InboundReceiver, WindowTarget};
use super::options::{BridgeOptions, DispatchPolicy};
use super::registry::CorrelationRegistry;
use super::topology::TopologyResolver;

// ============================================================================
// Types
// ============================================================================

/// Notification handler callback type.
///
/// Called on the listener task for each host notification.
pub type NotificationHandler = Arc<dyn Fn(HostNotification) + Send + Sync>;

/// Handler slot shared with the listener task.
type HandlerSlot = Arc<Mutex<Option<NotificationHandler>>>;

// ============================================================================
// BridgeInner
// ============================================================================

struct BridgeInner {
    context: Arc<dyn BrowsingContext>,
    options: BridgeOptions,
    topology: TopologyResolver,
    registry: CorrelationRegistry,
    /// Set once the listener has been installed (or installation attempted).
    listening: AtomicBool,
    listener: Mutex<Option<JoinHandle<()>>>,
    handler: HandlerSlot,
    disposed: AtomicBool,
}

impl Drop for BridgeInner {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.lock().take() {
            listener.abort();
        }
    }
}

// ============================================================================
// Bridge
// ============================================================================

/// Cross-window wallet provider bridge.
///
/// Cheap to clone; clones share the registry, listener and handler.
#[derive(Clone)]
pub struct Bridge {
    inner: Arc<BridgeInner>,
}

impl fmt::Debug for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("target", &self.inner.topology.cached())
            .field("pending", &self.inner.registry.len())
            .field("options", &self.inner.options)
            .finish_non_exhaustive()
    }
}

impl Bridge {
    /// Creates a new [`BridgeBuilder`].
    #[inline]
    #[must_use]
    pub fn builder() -> BridgeBuilder {
        BridgeBuilder::new()
    }

    /// Creates an idle bridge. The listener is installed on first dispatch
    /// or handler registration.
    #[must_use]
    pub fn create(context: Arc<dyn BrowsingContext>, options: BridgeOptions) -> Self {
        let registry = CorrelationRegistry::new(options.request_timeout);

        Self {
            inner: Arc::new(BridgeInner {
                context,
                options,
                topology: TopologyResolver::new(),
                registry,
                listening: AtomicBool::new(false),
                listener: Mutex::new(None),
                handler: Arc::new(Mutex::new(None)),
                disposed: AtomicBool::new(false),
            }),
        }
    }

    /// Returns the bridge options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &BridgeOptions {
        &self.inner.options
    }

    /// Returns the partner context, resolving it on first use.
    #[inline]
    #[must_use]
    pub fn target(&self) -> WindowTarget {
        self.inner.topology.resolve(self.inner.context.as_ref())
    }

    /// Returns the correlation registry.
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &CorrelationRegistry {
        &self.inner.registry
    }

    /// Returns `true` once [`dispose`](Self::dispose) has run.
    #[inline]
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }

    /// Sets the handler for unsolicited host notifications and starts
    /// listening, so notifications arrive before any request is sent.
    ///
    /// Outside a tokio runtime the listener waits for the first dispatch.
    pub fn set_notification_handler(&self, handler: NotificationHandler) {
        *self.inner.handler.lock() = Some(handler);
        self.ensure_listening();
    }

    /// Clears the notification handler.
    pub fn clear_notification_handler(&self) {
        *self.inner.handler.lock() = None;
    }

    /// Sends a provider call and waits for its reply.
    ///
    /// # Errors
    ///
    /// - [`Error::BridgeClosed`] if the bridge is disposed
    /// - [`Error::Protocol`] if the host rejected the call
    /// - [`Error::Timeout`] if no reply arrived before the deadline
    pub async fn dispatch(&self, call: RpcCall) -> Result<Value> {
        if self.is_disposed() {
            return Err(Error::BridgeClosed);
        }

        self.ensure_listening();

        match self.inner.options.policy {
            DispatchPolicy::Broadcast => self.broadcast(&call).await,
            DispatchPolicy::Fallback => self.call_with_fallback(&call).await,
        }
    }

    /// Stops the listener, fails pending requests and drops the handler.
    ///
    /// Idempotent.
    pub fn dispose(&self) {
        if self.inner.disposed.swap(true, Ordering::AcqRel) {
            return;
        }

        if let Some(listener) = self.inner.listener.lock().take() {
            listener.abort();
        }
        let cancelled = self.inner.registry.close();
        self.clear_notification_handler();

        debug!(cancelled, "Bridge disposed");
    }

    /// Both envelope shapes, one id.
    async fn broadcast(&self, call: &RpcCall) -> Result<Value> {
        let registration = self.inner.registry.register(call);
        let id = registration.id;

        self.post(&Envelope::tagged(id, call));
        self.post(&Envelope::proxy_call(
            id,
            self.inner.options.broadcast_path,
            call,
        ));

        registration.settlement.wait().await
    }

    /// V2 proxy call, repeated on V1 if the host cannot invoke V2.
    async fn call_with_fallback(&self, call: &RpcCall) -> Result<Value> {
        match self.proxy_call(call, ProxyPath::V2).await {
            Err(e) if e.is_unsupported_shape() => {
                debug!(method = %call.method, error = %e, "Falling back to v1 provider path");
                self.proxy_call(call, ProxyPath::V1).await
            }
            other => other,
        }
    }

    async fn proxy_call(&self, call: &RpcCall, path: ProxyPath) -> Result<Value> {
        let registration = self.inner.registry.register(call);
        self.post(&Envelope::proxy_call(registration.id, path, call));
        registration.settlement.wait().await
    }

    /// Posting failures degrade into the request's timeout.
    fn post(&self, envelope: &Envelope<'_>) {
        let target = self.target();
        let request_id = envelope.request_id();

        let posted = envelope
            .to_value()
            .and_then(|message| self.inner.context.post_message(target, message));

        match posted {
            Ok(()) => trace!(%request_id, ?target, "Envelope posted"),
            Err(e) => warn!(
                %request_id,
                ?target,
                error = %e,
                "Failed to post envelope, request will time out"
            ),
        }
    }

    /// Installs the listener at most once.
    fn ensure_listening(&self) {
        if self.is_disposed() {
            return;
        }
        if tokio::runtime::Handle::try_current().is_err() {
            trace!("No runtime yet, deferring listener");
            return;
        }
        if self.inner.listening.swap(true, Ordering::AcqRel) {
            return;
        }

        match self.inner.context.listen() {
            Ok(inbound) => {
                let listener = tokio::spawn(Self::run_demultiplexer(
                    inbound,
                    self.inner.registry.clone(),
                    Arc::clone(&self.inner.handler),
                ));
                *self.inner.listener.lock() = Some(listener);
                debug!("Inbound listener installed");
            }
            Err(e) => {
                warn!(error = %e, "Could not install listener, requests will time out");
            }
        }
    }

    /// Listener task body.
    async fn run_demultiplexer(
        mut inbound: InboundReceiver,
        registry: CorrelationRegistry,
        handler: HandlerSlot,
    ) {
        while let Some(message) = inbound.recv().await {
            Self::handle_inbound(&message, &registry, &handler);
        }

        debug!("Inbound channel closed");
    }

    /// Routes one inbound message. Never fails.
    fn handle_inbound(message: &Value, registry: &CorrelationRegistry, handler: &HandlerSlot) {
        match Inbound::classify(message) {
            Inbound::Reply {
                id,
                protocol,
                outcome,
            } => {
                if registry.settle(id, outcome) {
                    trace!(request_id = %id, ?protocol, "Reply matched");
                }
            }

            Inbound::Notification(notification) => {
                let current = handler.lock().clone();
                match current {
                    Some(handler) => handler(notification),
                    None => trace!(?notification, "No notification handler"),
                }
            }

            Inbound::Ignored => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

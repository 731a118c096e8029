//! Correlation registry and timeout guard.
//!
//! Every outstanding request lives here from registration until exactly one
//! of two things removes it: a reply ([`CorrelationRegistry::settle`]) or its
//! deadline task. Removal happens under the map lock, so whichever event
//! gets there first wins and the other finds nothing to do.
//!
//! [`CorrelationRegistry::close`] drains the map and refuses later entries
//! under the same lock, so nothing registered after teardown can linger.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tokio::sync::oneshot;
use tokio::task::AbortHandle;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::identifiers::RequestId;
use crate::protocol::RpcCall;

// ============================================================================
// Types
// ============================================================================

/// Map of request ids to pending entries.
type CorrelationMap = FxHashMap<RequestId, PendingRequest>;

/// Entries plus the closed flag, guarded together.
#[derive(Default)]
struct PendingTable {
    entries: CorrelationMap,
    closed: bool,
}

// ============================================================================
// PendingRequest
// ============================================================================

/// One outstanding request. Owned by the registry until settlement.
struct PendingRequest {
    method: String,
    params: Value,
    created_at: Instant,
    response_tx: oneshot::Sender<Result<Value>>,
    /// Attached right after the deadline task is spawned.
    deadline: Option<AbortHandle>,
}

impl PendingRequest {
    /// Cancels the deadline and hands the outcome to the caller.
    fn complete(self, outcome: Result<Value>) {
        if let Some(deadline) = self.deadline {
            deadline.abort();
        }
        // Caller may have stopped waiting.
        let _ = self.response_tx.send(outcome);
    }
}

// ============================================================================
// Registration
// ============================================================================

/// Handle returned by [`CorrelationRegistry::register`].
#[derive(Debug)]
pub struct Registration {
    /// Correlation id to put on the wire.
    pub id: RequestId,
    /// Resolves when the request settles.
    pub settlement: Settlement,
}

/// Eventual outcome of a registered request.
#[derive(Debug)]
pub struct Settlement {
    rx: oneshot::Receiver<Result<Value>>,
}

impl Settlement {
    /// Waits for the reply, the deadline, or registry teardown.
    ///
    /// # Errors
    ///
    /// - [`Error::Protocol`] if the host answered with an error
    /// - [`Error::Timeout`] if the deadline fired first
    /// - [`Error::BridgeClosed`] if the registry was torn down
    pub async fn wait(self) -> Result<Value> {
        self.rx.await.unwrap_or(Err(Error::BridgeClosed))
    }
}

// ============================================================================
// CorrelationRegistry
// ============================================================================

/// Outstanding requests keyed by correlation id.
///
/// Cheap to clone; clones share the same map.
#[derive(Clone)]
pub struct CorrelationRegistry {
    pending: Arc<Mutex<PendingTable>>,
    timeout: Duration,
}

impl CorrelationRegistry {
    /// Creates an empty registry whose entries expire after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            pending: Arc::new(Mutex::new(PendingTable::default())),
            timeout,
        }
    }

    /// Returns the deadline applied to new entries.
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Registers a request and starts its deadline.
    ///
    /// On a closed registry the settlement fails at once with
    /// [`Error::BridgeClosed`]. Must be called from within a tokio runtime.
    pub fn register(&self, call: &RpcCall) -> Registration {
        let id = RequestId::next();
        let (response_tx, rx) = oneshot::channel();
        let entry = PendingRequest {
            method: call.method.clone(),
            params: call.params.clone(),
            created_at: Instant::now(),
            response_tx,
            deadline: None,
        };

        {
            let mut table = self.pending.lock();
            if table.closed {
                drop(table);
                trace!(request_id = %id, method = %call.method, "Registry closed, rejecting");
                entry.complete(Err(Error::BridgeClosed));
                return Registration {
                    id,
                    settlement: Settlement { rx },
                };
            }
            table.entries.insert(id, entry);
        }

        let registry = self.clone();
        let timeout = self.timeout;
        let deadline = tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            registry.expire(id);
        })
        .abort_handle();

        // A reply may already have settled the entry on another thread.
        match self.pending.lock().entries.get_mut(&id) {
            Some(entry) => entry.deadline = Some(deadline),
            None => deadline.abort(),
        }

        trace!(request_id = %id, method = %call.method, "Request registered");

        Registration {
            id,
            settlement: Settlement { rx },
        }
    }

    /// Settles a pending request.
    ///
    /// Returns `false` if no entry exists (already settled, expired, or never
    /// registered). That case is a no-op.
    pub fn settle(&self, id: RequestId, outcome: Result<Value>) -> bool {
        let Some(entry) = self.pending.lock().entries.remove(&id) else {
            trace!(request_id = %id, "Reply for unknown or settled request");
            return false;
        };

        debug!(
            request_id = %id,
            method = %entry.method,
            elapsed_ms = entry.created_at.elapsed().as_millis() as u64,
            ok = outcome.is_ok(),
            "Request settled"
        );
        entry.complete(outcome);
        true
    }

    /// Fails every pending request with [`Error::BridgeClosed`].
    ///
    /// Returns how many entries were cancelled.
    pub fn cancel_all(&self) -> usize {
        // Snapshot first so completion never runs under the lock.
        let pending: Vec<_> = self.pending.lock().entries.drain().collect();
        Self::fail_all(pending)
    }

    /// Cancels everything pending and rejects all later registrations.
    ///
    /// Returns how many entries were cancelled.
    pub fn close(&self) -> usize {
        let pending: Vec<_> = {
            let mut table = self.pending.lock();
            table.closed = true;
            table.entries.drain().collect()
        };
        Self::fail_all(pending)
    }

    /// Returns `true` once [`close`](Self::close) has run.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.pending.lock().closed
    }

    fn fail_all(pending: Vec<(RequestId, PendingRequest)>) -> usize {
        let count = pending.len();

        for (_, entry) in pending {
            entry.complete(Err(Error::BridgeClosed));
        }

        if count > 0 {
            debug!(count, "Cancelled pending requests");
        }
        count
    }

    /// Returns `true` if `id` is still outstanding.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: RequestId) -> bool {
        self.pending.lock().entries.contains_key(&id)
    }

    /// Returns the number of outstanding requests.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.lock().entries.len()
    }

    /// Returns `true` if nothing is outstanding.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.lock().entries.is_empty()
    }

    /// Deadline path: removes the entry and rejects with a timeout.
    fn expire(&self, id: RequestId) -> bool {
        let Some(entry) = self.pending.lock().entries.remove(&id) else {
            return false;
        };

        let timeout_ms = self.timeout.as_millis() as u64;
        warn!(
            request_id = %id,
            method = %entry.method,
            params = %entry.params,
            timeout_ms,
            "Request timed out"
        );

        let error = Error::timeout(entry.method.clone(), id, timeout_ms);
        // Deadline already fired; nothing to abort.
        let _ = entry.response_tx.send(Err(error));
        true
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Events published to the connector framework.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use alloy_primitives::Address;

// ============================================================================
// ConnectorEvent
// ============================================================================

/// Upstream notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorEvent {
    /// Accounts and/or chain changed. Unchanged fields are `None`.
    Change {
        /// New account list.
        accounts: Option<Vec<Address>>,
        /// New chain id.
        chain_id: Option<u64>,
    },
    /// The session ended.
    Disconnect,
}

impl ConnectorEvent {
    /// Accounts-only change.
    #[inline]
    #[must_use]
    pub fn accounts(accounts: Vec<Address>) -> Self {
        Self::Change {
            accounts: Some(accounts),
            chain_id: None,
        }
    }

    /// Chain-only change.
    #[inline]
    #[must_use]
    pub fn chain(chain_id: u64) -> Self {
        Self::Change {
            accounts: None,
            chain_id: Some(chain_id),
        }
    }
}

// ============================================================================
// Types
// ============================================================================

/// Event emitter supplied by the connector framework.
pub type EventEmitter = Arc<dyn Fn(ConnectorEvent) + Send + Sync>;

//! Connector session state.

// ============================================================================
// Imports
// ============================================================================

use alloy_primitives::Address;

// ============================================================================
// Phase
// ============================================================================

/// Connection phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No session.
    #[default]
    Disconnected,
    /// `connect` in flight.
    Connecting,
    /// Accounts granted.
    Connected,
}

// ============================================================================
// ConnectorState
// ============================================================================

/// Session state held by the connector. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectorState {
    /// Connection phase.
    pub phase: Phase,
    /// Connected accounts, in provider order.
    pub accounts: Vec<Address>,
    /// Active chain, once known.
    pub chain_id: Option<u64>,
}

impl ConnectorState {
    /// Returns `true` when connected.
    #[inline]
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.phase == Phase::Connected
    }

    /// Drops the session, keeping nothing.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

//! Bridge configuration.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use frame_wallet_bridge::{BridgeOptions, DispatchPolicy};
//!
//! let options = BridgeOptions::new()
//!     .with_request_timeout(Duration::from_secs(10))
//!     .with_policy(DispatchPolicy::Fallback);
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use crate::protocol::ProxyPath;

// ============================================================================
// Constants
// ============================================================================

/// Default deadline for a provider request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(30_000);

// ============================================================================
// DispatchPolicy
// ============================================================================

/// How a call is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchPolicy {
    /// Post both envelope shapes under one correlation id and take whichever
    /// reply arrives. No negotiation round trip.
    #[default]
    Broadcast,
    /// Post a proxy call on [`ProxyPath::V2`]; if the host cannot invoke it,
    /// repeat the call on [`ProxyPath::V1`] under a fresh id.
    Fallback,
}

// ============================================================================
// BridgeOptions
// ============================================================================

/// Bridge configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeOptions {
    /// Deadline for each request.
    pub request_timeout: Duration,

    /// Wire policy.
    pub policy: DispatchPolicy,

    /// Proxy path used for the proxy-call envelope in broadcast mode.
    pub broadcast_path: ProxyPath,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl BridgeOptions {
    /// Creates options with default settings.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            policy: DispatchPolicy::Broadcast,
            broadcast_path: ProxyPath::V2,
        }
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl BridgeOptions {
    /// Sets the request deadline.
    #[inline]
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the wire policy.
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the proxy path used in broadcast mode.
    #[inline]
    #[must_use]
    pub fn with_broadcast_path(mut self, path: ProxyPath) -> Self {
        self.broadcast_path = path;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BridgeOptions::default();
        assert_eq!(options.request_timeout, Duration::from_secs(30));
        assert_eq!(options.policy, DispatchPolicy::Broadcast);
        assert_eq!(options.broadcast_path, ProxyPath::V2);
    }

    #[test]
    fn test_builder_methods() {
        let options = BridgeOptions::new()
            .with_request_timeout(Duration::from_secs(5))
            .with_policy(DispatchPolicy::Fallback)
            .with_broadcast_path(ProxyPath::V1);

        assert_eq!(options.request_timeout.as_secs(), 5);
        assert_eq!(options.policy, DispatchPolicy::Fallback);
        assert_eq!(options.broadcast_path, ProxyPath::V1);
    }
}

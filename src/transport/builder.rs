//! Builder pattern for bridge configuration.
//!
//! # Example
//!
//! ```ignore
//! use frame_wallet_bridge::{Bridge, LoopbackContext, Topology};
//!
//! let (context, host) = LoopbackContext::new(Topology::Framed);
//! let bridge = Bridge::builder().context(context).build()?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, Result};

use super::bridge::Bridge;
use super::context::BrowsingContext;
use super::options::{BridgeOptions, DispatchPolicy};

// ============================================================================
// BridgeBuilder
// ============================================================================

/// Builder for configuring a [`Bridge`] instance.
///
/// Use [`Bridge::builder()`] to create a new builder.
#[derive(Default, Clone)]
pub struct BridgeBuilder {
    /// Environment the bridge runs in.
    context: Option<Arc<dyn BrowsingContext>>,
    /// Options.
    options: BridgeOptions,
}

impl fmt::Debug for BridgeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeBuilder")
            .field("context", &self.context.is_some())
            .field("options", &self.options)
            .finish()
    }
}

// ============================================================================
// BridgeBuilder Implementation
// ============================================================================

impl BridgeBuilder {
    /// Creates a builder with default options and no context.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the browsing context.
    #[inline]
    #[must_use]
    pub fn context(mut self, context: impl BrowsingContext) -> Self {
        self.context = Some(Arc::new(context));
        self
    }

    /// Sets an already shared browsing context.
    #[inline]
    #[must_use]
    pub fn shared_context(mut self, context: Arc<dyn BrowsingContext>) -> Self {
        self.context = Some(context);
        self
    }

    /// Replaces all options.
    #[inline]
    #[must_use]
    pub fn options(mut self, options: BridgeOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the request deadline.
    #[inline]
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.options.request_timeout = timeout;
        self
    }

    /// Sets the wire policy.
    #[inline]
    #[must_use]
    pub fn policy(mut self, policy: DispatchPolicy) -> Self {
        self.options.policy = policy;
        self
    }

    /// Builds the bridge with validation.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if no context was set
    /// - [`Error::Config`] if the request timeout is zero
    pub fn build(self) -> Result<Bridge> {
        let context = self.context.ok_or_else(|| {
            Error::config(
                "A browsing context is required. Use .context() to set it.\n\
                 Example: Bridge::builder().context(LoopbackContext::new(Topology::Framed).0)",
            )
        })?;

        if self.options.request_timeout.is_zero() {
            return Err(Error::config("Request timeout must be greater than zero"));
        }

        Ok(Bridge::create(context, self.options))
    }
}

// ============================================================================
// Tests
// ============================================================================

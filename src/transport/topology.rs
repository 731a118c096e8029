//! Window topology resolution.
//!
//! Picks the partner context once: the top-level context if it is
//! reachable, else the parent, else the local context.

// ============================================================================
// Imports
// ============================================================================

use std::sync::OnceLock;

use tracing::{debug, warn};

use super::context::{BrowsingContext, WindowTarget};

// ============================================================================
// TopologyResolver
// ============================================================================

/// Lazily resolved, cached [`WindowTarget`].
///
/// Topology is not expected to change after load, so the first answer is
/// kept for the lifetime of the resolver.
#[derive(Debug, Default)]
pub struct TopologyResolver {
    target: OnceLock<WindowTarget>,
}

impl TopologyResolver {
    /// Creates an unresolved resolver.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: OnceLock::new(),
        }
    }

    /// Returns the partner context, resolving it on first use. Never fails.
    pub fn resolve(&self, context: &dyn BrowsingContext) -> WindowTarget {
        *self.target.get_or_init(|| Self::probe(context))
    }

    /// Returns the cached target without resolving.
    #[inline]
    #[must_use]
    pub fn cached(&self) -> Option<WindowTarget> {
        self.target.get().copied()
    }

    fn probe(context: &dyn BrowsingContext) -> WindowTarget {
        let target = match context.probe_top() {
            Ok(()) => WindowTarget::Top,
            Err(denied) if context.has_distinct_parent() => {
                debug!(reason = %denied.reason, "Top context unreachable, using parent");
                WindowTarget::Parent
            }
            Err(denied) => {
                warn!(
                    reason = %denied.reason,
                    "No reachable ancestor, requests will be self-addressed"
                );
                WindowTarget::Current
            }
        };

        debug!(?target, "Resolved window target");
        target
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::transport::loopback::{LoopbackContext, Topology};

    #[test]
    fn test_prefers_top() {
        let (context, _host) = LoopbackContext::new(Topology::Framed);
        assert_eq!(TopologyResolver::new().resolve(&context), WindowTarget::Top);
    }

    #[test]
    fn test_falls_back_to_parent() {
        let (context, _host) = LoopbackContext::new(Topology::CrossOrigin);
        assert_eq!(
            TopologyResolver::new().resolve(&context),
            WindowTarget::Parent
        );
    }

    #[test]
    fn test_degrades_to_current() {
        let (context, _host) = LoopbackContext::new(Topology::Isolated);
        assert_eq!(
            TopologyResolver::new().resolve(&context),
            WindowTarget::Current
        );
    }

    #[test]
    fn test_result_is_cached() {
        let resolver = TopologyResolver::new();
        assert_eq!(resolver.cached(), None);

        let (framed, _host) = LoopbackContext::new(Topology::Framed);
        let (isolated, _other) = LoopbackContext::new(Topology::Isolated);

        assert_eq!(resolver.resolve(&framed), WindowTarget::Top);
        assert_eq!(resolver.resolve(&isolated), WindowTarget::Top);
        assert_eq!(resolver.cached(), Some(WindowTarget::Top));
    }
}

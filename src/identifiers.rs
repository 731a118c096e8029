//! Type-safe identifiers.
//!
//! Correlation ids are plain integers on the wire; wrapping them keeps them
//! from being confused with chain ids or other numeric fields.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

// ============================================================================
// RequestId
// ============================================================================

/// Process-wide correlation counter. Seeded at 0 and incremented before use,
/// so the first id handed out is 1.
static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(0);

/// Correlation id linking a request to its reply.
///
/// Ids are strictly increasing for the lifetime of the process and never
/// reused, even across bridges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    /// Allocates the next id.
    #[inline]
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Wraps an id read off the wire.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_ids_start_above_zero() {
        assert!(RequestId::next().as_u64() >= 1);
    }

    #[test]
    fn test_serializes_as_integer() {
        let id = RequestId::from_raw(42);
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "42");

        let parsed: RequestId = serde_json::from_str("42").expect("parse");
        assert_eq!(parsed, id);
    }

    proptest! {
        #[test]
        fn prop_ids_strictly_increase(count in 1usize..64) {
            let ids: Vec<RequestId> = (0..count).map(|_| RequestId::next()).collect();
            for pair in ids.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }
}

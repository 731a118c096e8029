//! Cross-window transport layer.
//!
//! This module turns a provider call into posted envelopes and correlates
//! the replies.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐                              ┌─────────────────┐
//! │  Embedded app   │                              │  Host window    │
//! │                 │        postMessage           │                 │
//! │  Bridge         │─────────────────────────────►│  Wallet         │
//! │  → Registry     │◄─────────────────────────────│  provider       │
//! │  → Listener     │   replies + notifications    │                 │
//! └─────────────────┘                              └─────────────────┘
//! ```
//!
//! # Request Lifecycle
//!
//! 1. `TopologyResolver` picks the partner window (once)
//! 2. `CorrelationRegistry::register` allocates an id and starts the deadline
//! 3. `Bridge` posts the envelope(s) for the configured `DispatchPolicy`
//! 4. The listener task classifies inbound traffic and settles the entry
//! 5. The caller resumes with the result, a host error, or a timeout
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `bridge` | Dispatch, listener task, lifecycle |
//! | `builder` | Bridge builder |
//! | `context` | Browsing context trait |
//! | `loopback` | In-process context pair |
//! | `options` | Timeout and dispatch policy |
//! | `registry` | Pending requests and deadlines |
//! | `topology` | Partner window resolution |

// ============================================================================
// Submodules
// ============================================================================

/// Dispatch, listener task and lifecycle.
pub mod bridge;

/// Builder for bridge configuration.
pub mod builder;

/// Browsing context abstraction.
pub mod context;

/// In-process browsing context pair.
pub mod loopback;

/// Bridge options.
pub mod options;

/// Pending request registry.
pub mod registry;

/// Partner window resolution.
pub mod topology;

// ============================================================================
// Re-exports
// ============================================================================

pub use bridge::{Bridge, NotificationHandler};
pub use builder::BridgeBuilder;
pub use context::{AccessDenied, BrowsingContext, InboundReceiver, WindowTarget};
pub use loopback::{HostHandle, LoopbackContext, Posted, Topology};
pub use options::{BridgeOptions, DEFAULT_REQUEST_TIMEOUT, DispatchPolicy};
pub use registry::{CorrelationRegistry, Registration, Settlement};
pub use topology::TopologyResolver;

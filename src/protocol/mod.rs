//! Cross-window wire protocol.
//!
//! This module defines the messages exchanged with the host window that
//! owns the wallet provider.
//!
//! # Protocol Overview
//!
//! | Message | Direction | Purpose |
//! |---------|-----------|---------|
//! | `providerRequest` | Bridge → Host | Tagged RPC request |
//! | `CALL` | Bridge → Host | Proxy-style RPC request |
//! | `providerResponse` | Host → Bridge | Tagged RPC reply |
//! | id-keyed reply | Host → Bridge | Proxy-call reply |
//! | `providerEvent` | Host → Bridge | Account/chain/disconnect notification |
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `envelope` | Outbound envelope shapes |
//! | `inbound` | Inbound classification |

// ============================================================================
// Submodules
// ============================================================================

/// Outbound envelope shapes.
pub mod envelope;

/// Inbound message classification.
pub mod inbound;

// ============================================================================
// Re-exports
// ============================================================================

pub use envelope::{Envelope, ProxyArgument, ProxyPath, RpcCall};
pub use inbound::{HostNotification, Inbound, WireProtocol};

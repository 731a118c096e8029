//! Frame Wallet Bridge - wallet provider RPC across window boundaries.
//!
//! An app embedded in a host page (standalone, widget, or an iframe inside a
//! social client) often has no wallet provider of its own. The provider
//! lives in an ancestor window, possibly several frames up and
//! cross-origin. This crate carries provider calls to that window and
//! brings the replies back.
//!
//! # Architecture
//!
//! - **Topology**: pick the partner window once (top, else parent, else self)
//! - **Registry**: correlate replies by integer id, expire after 30s
//! - **Dispatch**: post each call as tagged and proxy-call envelopes
//! - **Listener**: one inbound task classifying every message by its `type`
//! - **Connector**: the connect/accounts/chain capability set on top
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use frame_wallet_bridge::{
//!     Bridge, Chain, ChainRegistry, Connector, LoopbackContext, Result, Topology,
//!     WalletConnector,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let (context, _host) = LoopbackContext::new(Topology::Framed);
//!     let bridge = Bridge::builder().context(context).build()?;
//!
//!     let chains: ChainRegistry = [Chain::new(1, "Ethereum")].into_iter().collect();
//!     let connector = WalletConnector::new(bridge, chains, Arc::new(|_| {}));
//!
//!     let session = connector.connect(None).await?;
//!     println!("Connected: {:?}", session.checksummed_accounts());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`connector`] | [`WalletConnector`] and the [`Connector`] capability set |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Correlation ids |
//! | [`protocol`] | Wire envelopes and inbound classification |
//! | [`transport`] | [`Bridge`], registry, topology, browsing context |

// ============================================================================
// Modules
// ============================================================================

/// Wallet connector capability surface.
pub mod connector;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Correlation identifiers.
pub mod identifiers;

/// Cross-window wire protocol.
pub mod protocol;

/// Cross-window transport layer.
///
/// Dispatch, correlation, deadlines and the inbound listener.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Connector types
pub use connector::{
    Chain, ChainRegistry, Connector, ConnectorEvent, ConnectorState, EventEmitter, Phase,
    Provider, Session, WalletConnector,
};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::RequestId;

// Protocol types
pub use protocol::{HostNotification, ProxyPath, RpcCall};

// Transport types
pub use transport::{
    Bridge, BridgeBuilder, BridgeOptions, BrowsingContext, DispatchPolicy, HostHandle,
    LoopbackContext, Topology, WindowTarget,
};

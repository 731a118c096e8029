//! Wallet connector capability surface.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`WalletConnector`] | Adapter implementing [`Connector`] over a bridge |
//! | [`ChainRegistry`] | Chains `switch_chain` may target |
//! | [`ConnectorState`] | Session phase, accounts and chain |
//! | [`ConnectorEvent`] | Change/disconnect notifications published upstream |
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use frame_wallet_bridge::{
//!     Bridge, Chain, ChainRegistry, Connector, LoopbackContext, Topology, WalletConnector,
//! };
//!
//! # async fn example() -> frame_wallet_bridge::Result<()> {
//! let (context, _host) = LoopbackContext::new(Topology::Framed);
//! let bridge = Bridge::builder().context(context).build()?;
//! let chains: ChainRegistry = [Chain::new(8453, "Base")].into_iter().collect();
//!
//! let connector = WalletConnector::new(bridge, chains, Arc::new(|event| println!("{event:?}")));
//! if connector.is_authorized().await {
//!     let session = connector.connect(Some(8453)).await?;
//!     println!("{:?}", session.checksummed_accounts());
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Chain descriptors and registry.
pub mod chain;

/// Upstream events.
pub mod event;

/// Session state.
pub mod state;

/// Connector adapter.
pub mod wallet;

// ============================================================================
// Re-exports
// ============================================================================

pub use chain::{Chain, ChainRegistry, NativeCurrency, format_chain_id, parse_chain_id};
pub use event::{ConnectorEvent, EventEmitter};
pub use state::{ConnectorState, Phase};
pub use wallet::{Connector, Provider, Session, WalletConnector};

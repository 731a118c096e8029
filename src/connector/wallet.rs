//! Wallet connector adapter.
//!
//! [`WalletConnector`] implements the [`Connector`] capability set on top
//! of a [`Bridge`]. It owns the session state and keeps it in sync with
//! both completed requests and host notifications.
//!
//! # Example
//!
//! ```ignore
//! let connector = WalletConnector::new(bridge, chains, emitter);
//!
//! let session = connector.connect(Some(8453)).await?;
//! println!("connected {:?} on {}", session.checksummed_accounts(), session.chain_id);
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::{Arc, Weak};

use alloy_primitives::Address;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::protocol::{HostNotification, RpcCall};
use crate::transport::Bridge;

use super::chain::{Chain, ChainRegistry, parse_chain_id};
use super::event::{ConnectorEvent, EventEmitter};
use super::state::{ConnectorState, Phase};

// ============================================================================
// Constants
// ============================================================================

const CONNECTOR_ID: &str = "hostWallet";
const CONNECTOR_NAME: &str = "Host Wallet";

// ============================================================================
// Session
// ============================================================================

/// Result of a successful [`Connector::connect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Granted accounts, in provider order.
    pub accounts: Vec<Address>,
    /// Active chain.
    pub chain_id: u64,
}

impl Session {
    /// Returns the accounts in EIP-55 checksummed form.
    #[must_use]
    pub fn checksummed_accounts(&self) -> Vec<String> {
        self.accounts
            .iter()
            .map(|account| account.to_checksum(None))
            .collect()
    }
}

// ============================================================================
// Connector
// ============================================================================

/// Capability set expected by the wallet-connector framework.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Stable connector id.
    fn id(&self) -> &'static str;

    /// Display name.
    fn name(&self) -> &'static str;

    /// Requests accounts and optionally moves to `chain_id`.
    async fn connect(&self, chain_id: Option<u64>) -> Result<Session>;

    /// Ends the session locally. No round trip.
    async fn disconnect(&self) -> Result<()>;

    /// Currently exposed accounts. Empty on any failure.
    async fn get_accounts(&self) -> Vec<Address>;

    /// Active chain id.
    async fn get_chain_id(&self) -> Result<u64>;

    /// `true` iff the host exposes at least one account. Never fails.
    async fn is_authorized(&self) -> bool;

    /// Switches to a chain from the local registry.
    async fn switch_chain(&self, chain_id: u64) -> Result<Chain>;

    /// Raw request entry point.
    fn get_provider(&self) -> Provider;

    /// Host reported new accounts.
    fn on_accounts_changed(&self, accounts: &[String]);

    /// Host reported a new chain.
    fn on_chain_changed(&self, chain: &Value);

    /// Host reported a disconnect.
    fn on_disconnect(&self);
}

// ============================================================================
// Provider
// ============================================================================

/// EIP-1193 style `request` entry point backed by the bridge.
#[derive(Debug, Clone)]
pub struct Provider {
    bridge: Bridge,
}

impl Provider {
    /// Forwards a raw provider request.
    ///
    /// # Errors
    ///
    /// Whatever [`Bridge::dispatch`] returns.
    pub async fn request(&self, method: impl Into<String>, params: Value) -> Result<Value> {
        self.bridge.dispatch(RpcCall::new(method, params)).await
    }
}

// ============================================================================
// WalletConnector
// ============================================================================

struct ConnectorInner {
    bridge: Bridge,
    chains: ChainRegistry,
    state: Mutex<ConnectorState>,
    emitter: EventEmitter,
}

/// Connector adapter over a [`Bridge`].
///
/// Cheap to clone; clones share the session state.
#[derive(Clone)]
pub struct WalletConnector {
    inner: Arc<ConnectorInner>,
}

impl fmt::Debug for WalletConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletConnector")
            .field("state", &*self.inner.state.lock())
            .field("chains", &self.inner.chains.len())
            .finish_non_exhaustive()
    }
}

impl WalletConnector {
    /// Creates a disconnected connector and subscribes it to host
    /// notifications on `bridge`. Inside a tokio runtime the bridge starts
    /// listening right away.
    #[must_use]
    pub fn new(bridge: Bridge, chains: ChainRegistry, emitter: EventEmitter) -> Self {
        let inner = Arc::new(ConnectorInner {
            bridge,
            chains,
            state: Mutex::new(ConnectorState::default()),
            emitter,
        });

        // Weak so the bridge's handler slot does not keep the connector alive.
        let weak: Weak<ConnectorInner> = Arc::downgrade(&inner);
        inner
            .bridge
            .set_notification_handler(Arc::new(move |notification| {
                if let Some(inner) = weak.upgrade() {
                    WalletConnector { inner }.handle_notification(notification);
                }
            }));

        Self { inner }
    }

    /// Returns a snapshot of the session state.
    #[must_use]
    pub fn state(&self) -> ConnectorState {
        self.inner.state.lock().clone()
    }

    /// Returns the chain registry.
    #[inline]
    #[must_use]
    pub fn chains(&self) -> &ChainRegistry {
        &self.inner.chains
    }

    fn handle_notification(&self, notification: HostNotification) {
        match notification {
            HostNotification::AccountsChanged(accounts) => self.on_accounts_changed(&accounts),
            HostNotification::ChainChanged(chain) => self.on_chain_changed(&chain),
            HostNotification::Disconnect => self.on_disconnect(),
        }
    }

    fn emit(&self, event: ConnectorEvent) {
        debug!(?event, "Emitting connector event");
        (self.inner.emitter)(event);
    }

    async fn request(&self, call: RpcCall) -> Result<Value> {
        self.inner.bridge.dispatch(call).await
    }

    async fn establish(&self, desired: Option<u64>) -> Result<Session> {
        let method = "eth_requestAccounts";
        let value = self.request(RpcCall::bare(method)).await?;
        let accounts = parse_accounts_strict(method, &value)?;
        if accounts.is_empty() {
            return Err(Error::invalid_response(method, "no accounts returned"));
        }

        let cached = self.inner.state.lock().chain_id;
        let current = match cached {
            Some(id) => id,
            None => self.get_chain_id().await?,
        };

        let chain_id = match desired {
            Some(desired) if desired != current => self.switch_chain(desired).await?.id,
            _ => current,
        };

        Ok(Session { accounts, chain_id })
    }
}

#[async_trait]
impl Connector for WalletConnector {
    fn id(&self) -> &'static str {
        CONNECTOR_ID
    }

    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    async fn connect(&self, chain_id: Option<u64>) -> Result<Session> {
        self.inner.state.lock().phase = Phase::Connecting;
        debug!(?chain_id, "Connecting");

        match self.establish(chain_id).await {
            Ok(session) => {
                {
                    let mut state = self.inner.state.lock();
                    state.phase = Phase::Connected;
                    state.accounts = session.accounts.clone();
                    state.chain_id = Some(session.chain_id);
                }
                info!(
                    accounts = session.accounts.len(),
                    chain_id = session.chain_id,
                    "Connected"
                );
                Ok(session)
            }
            Err(e) => {
                self.inner.state.lock().phase = Phase::Disconnected;
                warn!(error = %e, "Connect failed");
                Err(e)
            }
        }
    }

    async fn disconnect(&self) -> Result<()> {
        self.on_disconnect();
        Ok(())
    }

    async fn get_accounts(&self) -> Vec<Address> {
        match self.request(RpcCall::bare("eth_accounts")).await {
            Ok(value) => parse_accounts_lenient(&value),
            Err(e) => {
                debug!(error = %e, "eth_accounts failed, reporting no accounts");
                Vec::new()
            }
        }
    }

    async fn get_chain_id(&self) -> Result<u64> {
        let method = "eth_chainId";
        let value = self.request(RpcCall::bare(method)).await?;
        let chain_id = parse_chain_id(&value)
            .ok_or_else(|| Error::invalid_response(method, format!("not a chain id: {value}")))?;

        self.inner.state.lock().chain_id = Some(chain_id);
        Ok(chain_id)
    }

    async fn is_authorized(&self) -> bool {
        !self.get_accounts().await.is_empty()
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<Chain> {
        let chain = self
            .inner
            .chains
            .get(chain_id)
            .cloned()
            .ok_or_else(|| Error::chain_not_found(chain_id))?;

        debug!(chain_id, name = %chain.name, "Switching chain");
        self.request(RpcCall::new(
            "wallet_switchEthereumChain",
            json!([{ "chainId": chain.hex_id() }]),
        ))
        .await?;

        self.inner.state.lock().chain_id = Some(chain.id);
        self.emit(ConnectorEvent::chain(chain.id));
        Ok(chain)
    }

    fn get_provider(&self) -> Provider {
        Provider {
            bridge: self.inner.bridge.clone(),
        }
    }

    fn on_accounts_changed(&self, accounts: &[String]) {
        let accounts: Vec<Address> = accounts
            .iter()
            .filter_map(|account| parse_address(account))
            .collect();

        // An empty list means the host revoked access.
        if accounts.is_empty() {
            self.on_disconnect();
            return;
        }

        {
            let mut state = self.inner.state.lock();
            // Only `connect` starts a session.
            if state.phase == Phase::Disconnected {
                debug!(accounts = accounts.len(), "Ignoring accountsChanged while disconnected");
                return;
            }
            state.accounts = accounts.clone();
        }
        self.emit(ConnectorEvent::accounts(accounts));
    }

    fn on_chain_changed(&self, chain: &Value) {
        let Some(chain_id) = parse_chain_id(chain) else {
            warn!(%chain, "Ignoring chainChanged with unparseable chain id");
            return;
        };

        self.inner.state.lock().chain_id = Some(chain_id);
        self.emit(ConnectorEvent::chain(chain_id));
    }

    fn on_disconnect(&self) {
        self.inner.state.lock().reset();
        info!("Disconnected");
        self.emit(ConnectorEvent::Disconnect);
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_address(text: &str) -> Option<Address> {
    match text.parse::<Address>() {
        Ok(address) => Some(address),
        Err(e) => {
            warn!(account = text, error = %e, "Dropping malformed account");
            None
        }
    }
}

/// Every entry must be an address.
fn parse_accounts_strict(method: &str, value: &Value) -> Result<Vec<Address>> {
    let items = value
        .as_array()
        .ok_or_else(|| Error::invalid_response(method, format!("expected an array: {value}")))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .and_then(|text| text.parse::<Address>().ok())
                .ok_or_else(|| Error::invalid_response(method, format!("not an address: {item}")))
        })
        .collect()
}

/// Malformed entries are dropped.
fn parse_accounts_lenient(value: &Value) -> Vec<Address> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(parse_address)
                .collect()
        })
        .unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use alloy_primitives::address;
    use tokio::sync::mpsc;
    use tokio::task::JoinHandle;

    use crate::transport::{HostHandle, LoopbackContext, Topology};

    const ACCOUNT: &str = "0xabc0000000000000000000000000000000000001";

    /// Host reply: `Some(Ok(result))`, `Some(Err(error))`, or silence.
    type Reply = Option<std::result::Result<Value, Value>>;

    struct Harness {
        connector: WalletConnector,
        events: mpsc::UnboundedReceiver<ConnectorEvent>,
        methods: Arc<Mutex<Vec<String>>>,
        _host: JoinHandle<()>,
    }

    fn chains() -> ChainRegistry {
        [Chain::new(1, "Ethereum"), Chain::new(8453, "Base")]
            .into_iter()
            .collect()
    }

    /// Answers tagged envelopes only, so each logical call is seen once.
    fn spawn_host<F>(mut host: HostHandle, respond: F) -> (JoinHandle<()>, Arc<Mutex<Vec<String>>>)
    where
        F: Fn(&str) -> Reply + Send + 'static,
    {
        let methods = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&methods);

        let task = tokio::spawn(async move {
            while let Some(posted) = host.recv().await {
                if posted.kind() != Some("providerRequest") {
                    continue;
                }
                let method = posted.method().unwrap_or_default().to_string();
                seen.lock().push(method.clone());

                let reply = match respond(method.as_str()) {
                    Some(Ok(result)) => json!({
                        "type": "providerResponse",
                        "requestId": posted.request_id(),
                        "result": result
                    }),
                    Some(Err(error)) => json!({
                        "type": "providerResponse",
                        "requestId": posted.request_id(),
                        "error": error
                    }),
                    None => continue,
                };
                if host.push(reply).is_err() {
                    break;
                }
            }
        });

        (task, methods)
    }

    fn harness<F>(respond: F) -> Harness
    where
        F: Fn(&str) -> Reply + Send + 'static,
    {
        let (context, host) = LoopbackContext::new(Topology::Framed);
        let bridge = Bridge::builder().context(context).build().expect("bridge");

        let (tx, events) = mpsc::unbounded_channel();
        let emitter: EventEmitter = Arc::new(move |event| {
            let _ = tx.send(event);
        });

        let (task, methods) = spawn_host(host, respond);
        Harness {
            connector: WalletConnector::new(bridge, chains(), emitter),
            events,
            methods,
            _host: task,
        }
    }

    async fn next_event(
        events: &mut mpsc::UnboundedReceiver<ConnectorEvent>,
    ) -> Option<ConnectorEvent> {
        tokio::time::timeout(Duration::from_secs(1), events.recv())
            .await
            .expect("event in time")
    }

    fn wallet(method: &str) -> Reply {
        match method {
            "eth_requestAccounts" | "eth_accounts" => Some(Ok(json!([ACCOUNT]))),
            "eth_chainId" => Some(Ok(json!("0x1"))),
            "wallet_switchEthereumChain" => Some(Ok(Value::Null)),
            _ => Some(Err(json!({ "code": 4200, "message": "Unsupported method" }))),
        }
    }

    #[tokio::test]
    async fn test_connect_returns_checksummed_accounts() {
        let h = harness(wallet);

        let session = h.connector.connect(None).await.expect("connect");

        let expected = address!("0xabc0000000000000000000000000000000000001");
        assert_eq!(session.accounts, vec![expected]);
        assert_eq!(session.chain_id, 1);

        let checksummed = &session.checksummed_accounts()[0];
        assert!(Address::parse_checksummed(checksummed, None).is_ok());
        assert_eq!(checksummed.to_lowercase(), ACCOUNT);

        let state = h.connector.state();
        assert!(state.is_connected());
        assert_eq!(state.accounts, vec![expected]);
        assert_eq!(
            h.methods.lock().first().map(String::as_str),
            Some("eth_requestAccounts")
        );
    }

    #[tokio::test]
    async fn test_connect_switches_to_requested_chain() {
        let mut h = harness(wallet);

        let session = h.connector.connect(Some(8453)).await.expect("connect");
        assert_eq!(session.chain_id, 8453);
        assert_eq!(h.connector.state().chain_id, Some(8453));

        assert_eq!(
            *h.methods.lock(),
            vec![
                "eth_requestAccounts".to_string(),
                "eth_chainId".to_string(),
                "wallet_switchEthereumChain".to_string(),
            ]
        );
        assert_eq!(h.events.recv().await, Some(ConnectorEvent::chain(8453)));
    }

    #[tokio::test]
    async fn test_connect_skips_switch_on_same_chain() {
        let h = harness(wallet);

        let session = h.connector.connect(Some(1)).await.expect("connect");
        assert_eq!(session.chain_id, 1);
        assert!(
            !h.methods
                .lock()
                .iter()
                .any(|method| method == "wallet_switchEthereumChain")
        );
    }

    #[tokio::test]
    async fn test_connect_failure_returns_to_disconnected() {
        let h = harness(|method| match method {
            "eth_requestAccounts" => Some(Err(json!({
                "code": 4001,
                "message": "User rejected the request."
            }))),
            other => wallet(other),
        });

        let err = h.connector.connect(None).await.expect_err("rejected");
        assert!(matches!(err, Error::Protocol { code: Some(4001), .. }));
        assert_eq!(h.connector.state().phase, Phase::Disconnected);
    }

    #[tokio::test]
    async fn test_connect_with_no_accounts_fails() {
        let h = harness(|method| match method {
            "eth_requestAccounts" => Some(Ok(json!([]))),
            other => wallet(other),
        });

        let err = h.connector.connect(None).await.expect_err("empty");
        assert!(matches!(err, Error::InvalidResponse { .. }));
        assert_eq!(h.connector.state().phase, Phase::Disconnected);
    }

    #[tokio::test]
    async fn test_switch_to_unknown_chain_sends_nothing() {
        let h = harness(wallet);

        let err = h
            .connector
            .switch_chain(999_999)
            .await
            .expect_err("unknown chain");

        assert!(matches!(err, Error::ChainNotFound { chain_id: 999_999 }));
        tokio::task::yield_now().await;
        assert!(h.methods.lock().is_empty());
        assert!(h.connector.inner.bridge.registry().is_empty());
    }

    #[tokio::test]
    async fn test_switch_chain_emits_change() {
        let mut h = harness(wallet);

        let chain = h.connector.switch_chain(8453).await.expect("switch");
        assert_eq!(chain.name, "Base");
        assert_eq!(h.events.recv().await, Some(ConnectorEvent::chain(8453)));
        assert_eq!(h.connector.state().chain_id, Some(8453));
    }

    #[tokio::test]
    async fn test_get_chain_id_parses_hex() {
        let h = harness(|method| match method {
            "eth_chainId" => Some(Ok(json!("0x2105"))),
            other => wallet(other),
        });

        assert_eq!(h.connector.get_chain_id().await.expect("chain id"), 8453);
    }

    #[tokio::test]
    async fn test_get_chain_id_rejects_garbage() {
        let h = harness(|method| match method {
            "eth_chainId" => Some(Ok(json!({ "chain": "mainnet" }))),
            other => wallet(other),
        });

        let err = h.connector.get_chain_id().await.expect_err("garbage");
        assert!(matches!(err, Error::InvalidResponse { ref method, .. } if method == "eth_chainId"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_chain_id_times_out() {
        let h = harness(|method| match method {
            "eth_chainId" => None,
            other => wallet(other),
        });

        let err = h.connector.get_chain_id().await.expect_err("silent host");
        match err {
            Error::Timeout {
                method, timeout_ms, ..
            } => {
                assert_eq!(method, "eth_chainId");
                assert_eq!(timeout_ms, 30_000);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(h.connector.inner.bridge.registry().is_empty());
    }

    #[tokio::test]
    async fn test_is_authorized() {
        let h = harness(wallet);
        assert!(h.connector.is_authorized().await);

        let h = harness(|method| match method {
            "eth_accounts" => Some(Ok(json!([]))),
            other => wallet(other),
        });
        assert!(!h.connector.is_authorized().await);
    }

    #[tokio::test]
    async fn test_is_authorized_swallows_failures() {
        let h = harness(|method| match method {
            "eth_accounts" => Some(Err(json!("boom"))),
            other => wallet(other),
        });

        assert!(h.connector.get_accounts().await.is_empty());
        assert!(!h.connector.is_authorized().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_authorized_false_on_timeout() {
        let h = harness(|_| None);
        assert!(!h.connector.is_authorized().await);
    }

    #[tokio::test]
    async fn test_get_accounts_drops_malformed_entries() {
        let h = harness(|method| match method {
            "eth_accounts" => Some(Ok(json!([ACCOUNT, "not-an-address", 7]))),
            other => wallet(other),
        });

        assert_eq!(
            h.connector.get_accounts().await,
            vec![address!("0xabc0000000000000000000000000000000000001")]
        );
    }

    #[tokio::test]
    async fn test_empty_accounts_changed_means_disconnect() {
        let mut h = harness(wallet);
        h.connector.connect(None).await.expect("connect");

        h.connector.on_accounts_changed(&[]);

        assert_eq!(h.events.recv().await, Some(ConnectorEvent::Disconnect));
        assert_eq!(h.connector.state(), ConnectorState::default());
    }

    #[tokio::test]
    async fn test_accounts_changed_updates_state() {
        let mut h = harness(wallet);
        let other = "0x0000000000000000000000000000000000000002";
        h.connector.connect(None).await.expect("connect");

        h.connector.on_accounts_changed(&[other.to_string()]);

        let expected = vec![address!("0x0000000000000000000000000000000000000002")];
        assert_eq!(
            h.events.recv().await,
            Some(ConnectorEvent::accounts(expected.clone()))
        );
        assert_eq!(h.connector.state().accounts, expected);
        assert!(h.connector.state().is_connected());
    }

    #[tokio::test]
    async fn test_accounts_changed_ignored_while_disconnected() {
        let mut h = harness(wallet);

        h.connector
            .on_accounts_changed(&["0x0000000000000000000000000000000000000002".to_string()]);

        assert_eq!(h.connector.state(), ConnectorState::default());
        assert!(h.events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_disconnect_is_local() {
        let mut h = harness(wallet);
        h.connector.connect(None).await.expect("connect");
        let calls = h.methods.lock().len();

        h.connector.disconnect().await.expect("disconnect");

        assert_eq!(h.events.recv().await, Some(ConnectorEvent::Disconnect));
        assert_eq!(h.connector.state().phase, Phase::Disconnected);
        assert_eq!(h.methods.lock().len(), calls);
    }

    #[tokio::test]
    async fn test_host_notifications_flow_through_bridge() {
        let (context, host) = LoopbackContext::new(Topology::Framed);
        let bridge = Bridge::builder().context(context).build().expect("bridge");
        let (tx, mut events) = mpsc::unbounded_channel();
        let _connector = WalletConnector::new(
            bridge.clone(),
            chains(),
            Arc::new(move |event| {
                let _ = tx.send(event);
            }),
        );

        host.push(json!({ "type": "providerEvent", "event": "chainChanged", "data": "0xa" }))
            .expect("push");
        host.push(json!({ "type": "providerEvent", "event": "accountsChanged", "data": [] }))
            .expect("push");

        assert_eq!(next_event(&mut events).await, Some(ConnectorEvent::chain(10)));
        assert_eq!(next_event(&mut events).await, Some(ConnectorEvent::Disconnect));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_emitter_may_dispose_bridge_on_disconnect() {
        let (context, mut host) = LoopbackContext::new(Topology::Framed);
        let bridge = Bridge::builder().context(context).build().expect("bridge");
        let (tx, mut events) = mpsc::unbounded_channel();

        let handle = bridge.clone();
        let connector = WalletConnector::new(
            bridge.clone(),
            chains(),
            Arc::new(move |event| {
                if event == ConnectorEvent::Disconnect {
                    handle.dispose();
                }
                let _ = tx.send(event);
            }),
        );

        let provider = connector.get_provider();
        let pending = tokio::spawn(async move { provider.request("eth_accounts", Value::Null).await });
        host.recv().await.expect("request posted");

        host.push(json!({ "type": "providerEvent", "event": "disconnect" }))
            .expect("push");

        assert_eq!(next_event(&mut events).await, Some(ConnectorEvent::Disconnect));
        assert!(bridge.is_disposed());
        assert!(matches!(
            pending.await.expect("join"),
            Err(Error::BridgeClosed)
        ));
    }

    #[tokio::test]
    async fn test_provider_request_passthrough() {
        let h = harness(|method| match method {
            "eth_blockNumber" => Some(Ok(json!("0x10"))),
            other => wallet(other),
        });

        let provider = h.connector.get_provider();
        let value = provider
            .request("eth_blockNumber", Value::Null)
            .await
            .expect("request");
        assert_eq!(value, json!("0x10"));
    }

    #[test]
    fn test_connector_metadata() {
        let (context, _host) = LoopbackContext::new(Topology::Framed);
        let bridge = Bridge::builder().context(context).build().expect("bridge");
        let connector = WalletConnector::new(bridge, ChainRegistry::new(), Arc::new(|_| {}));

        assert_eq!(connector.id(), "hostWallet");
        assert_eq!(connector.name(), "Host Wallet");
        assert_eq!(connector.state().phase, Phase::Disconnected);
    }
}

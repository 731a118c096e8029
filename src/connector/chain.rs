//! Chain descriptors and the static chain registry.

// ============================================================================
// Imports
// ============================================================================

use rustc_hash::FxHashMap;
use serde_json::Value;

// ============================================================================
// Chain
// ============================================================================

/// Native currency of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Decimal places.
    pub decimals: u8,
}

impl Default for NativeCurrency {
    fn default() -> Self {
        Self {
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        }
    }
}

/// Chain descriptor supplied by the connector framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    /// EIP-155 chain id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Native currency.
    pub native_currency: NativeCurrency,
    /// Public RPC endpoints.
    pub rpc_urls: Vec<String>,
}

impl Chain {
    /// Creates a chain with an ETH native currency and no RPC endpoints.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            native_currency: NativeCurrency::default(),
            rpc_urls: Vec::new(),
        }
    }

    /// Sets the native currency.
    #[inline]
    #[must_use]
    pub fn with_native_currency(mut self, currency: NativeCurrency) -> Self {
        self.native_currency = currency;
        self
    }

    /// Adds an RPC endpoint.
    #[inline]
    #[must_use]
    pub fn with_rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_urls.push(url.into());
        self
    }

    /// Returns the id in `0x`-prefixed hex, as providers expect it.
    #[inline]
    #[must_use]
    pub fn hex_id(&self) -> String {
        format_chain_id(self.id)
    }
}

// ============================================================================
// ChainRegistry
// ============================================================================

/// Chains the connector is allowed to switch to.
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    chains: FxHashMap<u64, Chain>,
}

impl ChainRegistry {
    /// Creates an empty registry.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a chain, replacing any chain with the same id.
    #[must_use]
    pub fn with_chain(mut self, chain: Chain) -> Self {
        self.chains.insert(chain.id, chain);
        self
    }

    /// Looks a chain up by id.
    #[inline]
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Chain> {
        self.chains.get(&id)
    }

    /// Returns `true` if `id` is known.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.chains.contains_key(&id)
    }

    /// Returns the number of chains.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Returns `true` if no chains are registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl FromIterator<Chain> for ChainRegistry {
    fn from_iter<I: IntoIterator<Item = Chain>>(iter: I) -> Self {
        Self {
            chains: iter.into_iter().map(|chain| (chain.id, chain)).collect(),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Formats a chain id as `0x`-prefixed lowercase hex.
#[inline]
#[must_use]
pub fn format_chain_id(id: u64) -> String {
    format!("{id:#x}")
}

/// Parses a chain id from a provider value.
///
/// Accepts `0x` hex strings, decimal strings and JSON integers.
#[must_use]
pub fn parse_chain_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => {
            let text = text.trim();
            match text
                .strip_prefix("0x")
                .or_else(|| text.strip_prefix("0X"))
            {
                Some(hex) => u64::from_str_radix(hex, 16).ok(),
                None => text.parse().ok(),
            }
        }
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id(&json!("0x1")), Some(1));
        assert_eq!(parse_chain_id(&json!("0x2105")), Some(8453));
        assert_eq!(parse_chain_id(&json!("0XA")), Some(10));
        assert_eq!(parse_chain_id(&json!("137")), Some(137));
        assert_eq!(parse_chain_id(&json!(42161)), Some(42161));
        assert_eq!(parse_chain_id(&json!("0xzz")), None);
        assert_eq!(parse_chain_id(&json!(null)), None);
        assert_eq!(parse_chain_id(&json!(-1)), None);
    }

    #[test]
    fn test_format_chain_id() {
        assert_eq!(format_chain_id(1), "0x1");
        assert_eq!(format_chain_id(8453), "0x2105");
        assert_eq!(Chain::new(10, "OP Mainnet").hex_id(), "0xa");
    }

    #[test]
    fn test_registry_lookup() {
        let registry: ChainRegistry = [Chain::new(1, "Ethereum"), Chain::new(8453, "Base")]
            .into_iter()
            .collect();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(8453));
        assert!(!registry.contains(999_999));
        assert_eq!(registry.get(1).map(|chain| chain.name.as_str()), Some("Ethereum"));
    }

    #[test]
    fn test_native_currency_override() {
        let default = Chain::new(1, "Ethereum");
        assert_eq!(default.native_currency.symbol, "ETH");

        let polygon = Chain::new(137, "Polygon").with_native_currency(NativeCurrency {
            name: "POL".to_string(),
            symbol: "POL".to_string(),
            decimals: 18,
        });
        assert_eq!(polygon.native_currency.symbol, "POL");
        assert_eq!(polygon.hex_id(), "0x89");
    }

    #[test]
    fn test_with_chain_replaces() {
        let registry = ChainRegistry::new()
            .with_chain(Chain::new(1, "Old"))
            .with_chain(Chain::new(1, "Ethereum").with_rpc_url("https://eth.example"));

        assert_eq!(registry.len(), 1);
        let chain = registry.get(1).expect("chain");
        assert_eq!(chain.name, "Ethereum");
        assert_eq!(chain.rpc_urls, vec!["https://eth.example"]);
    }
}

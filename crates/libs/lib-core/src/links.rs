//! Block explorer links for submitted deposits.

use crate::deposit::LinkFactory;
use crate::network::Network;

/// Etherscan-style link builder rooted at a network's explorer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerLinks {
    base: String,
}

impl ExplorerLinks {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn for_network(network: Network) -> Self {
        Self::new(network.explorer_base())
    }

}

impl LinkFactory for ExplorerLinks {
    fn transaction_url(&self, hash: &str) -> String {
        format!("{}/tx/{}", self.base, hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_url_per_network() {
        let links = ExplorerLinks::for_network(Network::Sepolia);
        assert_eq!(
            links.transaction_url("0xabc"),
            "https://sepolia.etherscan.io/tx/0xabc"
        );

        let links = ExplorerLinks::for_network(Network::Mainnet);
        assert_eq!(links.transaction_url("0xabc"), "https://etherscan.io/tx/0xabc");
    }

    #[test]
    fn test_custom_base_trailing_slash() {
        let links = ExplorerLinks::new("http://localhost:5100/");
        assert_eq!(
            links.transaction_url("0xabc"),
            "http://localhost:5100/tx/0xabc"
        );
    }
}

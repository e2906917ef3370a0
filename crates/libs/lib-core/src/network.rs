//! # Networks
//!
//! Ethereum networks the staking contract is deployed on, keyed by chain id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported Ethereum networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Goerli,
    Sepolia,
    Holesky,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Goerli,
        Network::Sepolia,
        Network::Holesky,
    ];

    /// EIP-155 chain id.
    pub const fn chain_id(self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Goerli => 5,
            Network::Sepolia => 11_155_111,
            Network::Holesky => 17_000,
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|network| network.chain_id() == chain_id)
    }

    /// Lowercase identifier, the same text serde uses.
    pub const fn slug(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Goerli => "goerli",
            Network::Sepolia => "sepolia",
            Network::Holesky => "holesky",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "Ethereum",
            Network::Goerli => "Goerli",
            Network::Sepolia => "Sepolia",
            Network::Holesky => "Holesky",
        }
    }

    /// Block explorer root for this network (no trailing slash).
    pub const fn explorer_base(self) -> &'static str {
        match self {
            Network::Mainnet => "https://etherscan.io",
            Network::Goerli => "https://goerli.etherscan.io",
            Network::Sepolia => "https://sepolia.etherscan.io",
            Network::Holesky => "https://holesky.etherscan.io",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for chain ids or names that do not map to a supported network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported network: {0}")]
pub struct UnknownNetwork(pub String);

/// Accepts a decimal chain id (`"11155111"`), a hex chain id (`"0xaa36a7"`)
/// or a network name (`"mainnet"`, `"Ethereum"`, `"sepolia"`).
impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let chain_id = match raw.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => raw.parse::<u64>().ok(),
        };

        let network = match chain_id {
            Some(id) => Network::from_chain_id(id),
            None => Network::ALL
                .into_iter()
                .find(|network| {
                    network.slug().eq_ignore_ascii_case(raw)
                        || network.name().eq_ignore_ascii_case(raw)
                }),
        };

        network.ok_or_else(|| UnknownNetwork(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_roundtrip() {
        for network in Network::ALL {
            assert_eq!(Network::from_chain_id(network.chain_id()), Some(network));
        }
        assert_eq!(Network::from_chain_id(137), None);
    }

    #[test]
    fn test_parse_decimal_hex_and_name() {
        assert_eq!("1".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!("0xaa36a7".parse::<Network>(), Ok(Network::Sepolia));
        assert_eq!("holesky".parse::<Network>(), Ok(Network::Holesky));
        assert_eq!("mainnet".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!("Ethereum".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!(" Goerli ".parse::<Network>(), Ok(Network::Goerli));
        assert_eq!(
            "137".parse::<Network>(),
            Err(UnknownNetwork("137".to_string()))
        );
    }

    #[test]
    fn test_serde_name_parses_back() {
        for network in Network::ALL {
            let json = serde_json::to_string(&network).expect("Network should serialize");
            assert_eq!(json, format!("\"{}\"", network.slug()));
            assert_eq!(network.slug().parse::<Network>(), Ok(network));
        }
    }

    #[test]
    fn test_unknown_network_message() {
        assert_eq!(
            UnknownNetwork("polygon".to_string()).to_string(),
            "unsupported network: polygon"
        );
    }
}

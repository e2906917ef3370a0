//! Ethereum Wallet Integration via wasm-bindgen
//!
//! JavaScript interop with the injected EIP-1193 provider (`window.ethereum`),
//! plus the browser implementations of the deposit collaborators.

use async_trait::async_trait;
use chrono::Utc;
use lib_core::deposit::{BalanceProvider, DepositSubmitter};
use lib_core::{EthAmount, Network, StakingConfig, StakingError, SubmissionError};
use serde::Deserialize;
use shared::{BalanceSnapshot, DepositRequest, TransactionResult};
use wasm_bindgen::prelude::*;

// ============================================================================
// EIP-1193 PROVIDER (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function provider() {
    if (typeof window === 'undefined' || !window.ethereum) {
        throw new Error('No Ethereum wallet found. Install MetaMask or another browser wallet.');
    }
    return window.ethereum;
}

export function hasEthereum() {
    return typeof window !== 'undefined' && !!window.ethereum;
}

export async function requestAccounts() {
    return await provider().request({ method: 'eth_requestAccounts' });
}

export async function connectedAccounts() {
    return await provider().request({ method: 'eth_accounts' });
}

export async function chainId() {
    return await provider().request({ method: 'eth_chainId' });
}

export async function getBalance(account) {
    return await provider().request({ method: 'eth_getBalance', params: [account, 'latest'] });
}

export async function sendTransaction(from, to, value, data) {
    return await provider().request({
        method: 'eth_sendTransaction',
        params: [{ from: from, to: to, value: value, data: data }],
    });
}

export function onAccountsChanged(callback) {
    if (typeof window !== 'undefined' && window.ethereum && window.ethereum.on) {
        window.ethereum.on('accountsChanged', callback);
        window.ethereum.on('chainChanged', () => callback(null));
    }
}
")]
extern "C" {
    /// Whether an injected provider exists
    pub fn hasEthereum() -> bool;

    /// Prompt the user to connect; resolves to the account list
    #[wasm_bindgen(catch)]
    async fn requestAccounts() -> Result<JsValue, JsValue>;

    /// Accounts already authorized for this site (no prompt)
    #[wasm_bindgen(catch)]
    async fn connectedAccounts() -> Result<JsValue, JsValue>;

    /// Active chain id as a hex string
    #[wasm_bindgen(catch)]
    async fn chainId() -> Result<JsValue, JsValue>;

    /// Balance of `account` in hex wei
    #[wasm_bindgen(catch)]
    async fn getBalance(account: &str) -> Result<JsValue, JsValue>;

    /// Send a transaction; resolves to its hash
    #[wasm_bindgen(catch)]
    async fn sendTransaction(from: &str, to: &str, value: &str, data: &str) -> Result<JsValue, JsValue>;

    /// Register for account and chain changes
    pub fn onAccountsChanged(callback: &js_sys::Function);
}

// ============================================================================
// PROVIDER ERRORS
// ============================================================================

/// `reason` arrives as a string from most wallets and as a list from some libraries.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReasonField {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorData {
    message: Option<String>,
}

/// Fields of a rejected provider request that carry a readable reason.
#[derive(Debug, Default, Deserialize)]
struct ProviderError {
    reason: Option<ReasonField>,
    data: Option<ErrorData>,
    message: Option<String>,
}

impl ProviderError {
    /// Reasons in order of preference: `reason`, `data.message`, `message`.
    fn into_reasons(self) -> Vec<String> {
        let reasons = match self.reason {
            Some(ReasonField::One(reason)) => vec![reason],
            Some(ReasonField::Many(reasons)) => reasons,
            None => Vec::new(),
        };
        if reasons.iter().any(|r| !r.trim().is_empty()) {
            return reasons;
        }

        self.data
            .and_then(|data| data.message)
            .into_iter()
            .chain(self.message)
            .filter(|m| !m.trim().is_empty())
            .collect()
    }
}

/// Turn a rejected JS promise value into a [`SubmissionError`].
fn submission_error(err: JsValue) -> SubmissionError {
    if let Some(text) = err.as_string() {
        return SubmissionError::new(text);
    }

    let mut reasons = serde_wasm_bindgen::from_value::<ProviderError>(err.clone())
        .map(ProviderError::into_reasons)
        .unwrap_or_default();
    if reasons.is_empty() {
        if let Some(text) = js_sys::JSON::stringify(&err).ok().and_then(|s| s.as_string()) {
            reasons.push(text);
        }
    }
    SubmissionError::from_reasons(reasons)
}

/// Readable text for a failed connect or read request.
fn js_error_text(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    serde_wasm_bindgen::from_value::<ProviderError>(err.clone())
        .map(ProviderError::into_reasons)
        .ok()
        .and_then(|reasons| reasons.into_iter().next())
        .unwrap_or_else(|| format!("{:?}", err))
}

// ============================================================================
// WALLET CONNECTION
// ============================================================================

fn first_account(value: JsValue) -> Result<Option<String>, String> {
    let accounts: Vec<String> = serde_wasm_bindgen::from_value(value)
        .map_err(|e| format!("Unexpected accounts response: {}", e))?;
    Ok(accounts.into_iter().next())
}

/// Ask the wallet for an account. Returns the address and the chain id.
pub async fn connect() -> Result<(String, u64), String> {
    let accounts = requestAccounts().await.map_err(|e| js_error_text(&e))?;
    let address = first_account(accounts)?.ok_or_else(|| "Wallet returned no accounts".to_string())?;
    let chain_id = current_chain_id().await?;
    log::info!("Wallet connected: {} on chain {}", address, chain_id);
    Ok((address, chain_id))
}

/// Account already authorized for this site, if any.
pub async fn restore() -> Result<Option<(String, u64)>, String> {
    if !hasEthereum() {
        return Ok(None);
    }
    let accounts = connectedAccounts().await.map_err(|e| js_error_text(&e))?;
    match first_account(accounts)? {
        Some(address) => Ok(Some((address, current_chain_id().await?))),
        None => Ok(None),
    }
}

pub async fn current_chain_id() -> Result<u64, String> {
    let value = chainId().await.map_err(|e| js_error_text(&e))?;
    let hex = value
        .as_string()
        .ok_or_else(|| "Chain id is not a string".to_string())?;
    parse_chain_id(&hex)
}

fn parse_chain_id(hex: &str) -> Result<u64, String> {
    hex.strip_prefix("0x")
        .and_then(|digits| u64::from_str_radix(digits, 16).ok())
        .ok_or_else(|| format!("Malformed chain id: {}", hex))
}

/// The wallet must be on `expected` before anything is read or sent.
fn ensure_chain(chain_id: u64, expected: Network) -> Result<(), String> {
    if chain_id == expected.chain_id() {
        return Ok(());
    }
    Err(format!(
        "switch your wallet to {} (wallet is on chain {})",
        expected, chain_id
    ))
}

// ============================================================================
// DEPOSIT COLLABORATORS
// ============================================================================

/// Balance provider backed by `eth_getBalance`.
pub struct EthereumBalances;

#[async_trait(?Send)]
impl BalanceProvider for EthereumBalances {
    async fn balance(&self, account: &str, network: Network) -> lib_core::Result<BalanceSnapshot> {
        let chain_id = current_chain_id().await.map_err(StakingError::Provider)?;
        ensure_chain(chain_id, network).map_err(StakingError::Provider)?;

        let value = getBalance(account)
            .await
            .map_err(|e| StakingError::Provider(js_error_text(&e)))?;
        let hex = value
            .as_string()
            .ok_or_else(|| StakingError::Provider("balance is not a string".to_string()))?;
        let balance = EthAmount::from_hex_wei(&hex)
            .map_err(|e| StakingError::Provider(format!("bad balance {}: {}", hex, e)))?;

        Ok(BalanceSnapshot {
            formatted: balance.to_decimal_string(),
            wei: balance.wei().to_string(),
        })
    }
}

/// Deposit submitter sending `eth_sendTransaction` to the staking contract.
///
/// The wallet's chain is re-read right before sending, so a network switch
/// after the page loaded cannot move the deposit to another chain.
pub struct EthereumDepositSubmitter {
    network: Network,
    contract: Option<String>,
    selector: String,
}

impl EthereumDepositSubmitter {
    pub fn from_config(config: &StakingConfig) -> Self {
        Self {
            network: config.network,
            contract: config.staking_contract.clone(),
            selector: config.deposit_selector.clone(),
        }
    }

    fn transaction_value(request: &DepositRequest) -> Result<String, SubmissionError> {
        EthAmount::from_wei_str(&request.value_wei)
            .map(EthAmount::to_hex_wei)
            .map_err(|e| SubmissionError::new(format!("invalid deposit value: {}", e)))
    }
}

#[async_trait(?Send)]
impl DepositSubmitter for EthereumDepositSubmitter {
    async fn submit_deposit(
        &self,
        request: &DepositRequest,
    ) -> Result<TransactionResult, SubmissionError> {
        let contract = self
            .contract
            .as_deref()
            .ok_or_else(|| SubmissionError::new("staking contract is not configured"))?;
        let value = Self::transaction_value(request)?;

        let chain_id = current_chain_id().await.map_err(SubmissionError::new)?;
        if let Err(reason) = ensure_chain(chain_id, self.network) {
            log::warn!("Deposit blocked: {}", reason);
            return Err(SubmissionError::new(reason));
        }

        let hash = sendTransaction(&request.account, contract, &value, &self.selector)
            .await
            .map_err(submission_error)?
            .as_string()
            .ok_or_else(|| SubmissionError::new("wallet returned no transaction hash"))?;

        Ok(TransactionResult::new(hash)
            .for_request(request)
            .submitted_at(Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reasons(json: &str) -> Vec<String> {
        serde_json::from_str::<ProviderError>(json)
            .expect("Provider error JSON should deserialize")
            .into_reasons()
    }

    #[test]
    fn test_reason_list_wins() {
        assert_eq!(
            reasons(r#"{"reason":["insufficient funds"],"message":"execution reverted"}"#),
            vec!["insufficient funds".to_string()]
        );
    }

    #[test]
    fn test_reason_string() {
        assert_eq!(
            reasons(r#"{"reason":"user rejected transaction"}"#),
            vec!["user rejected transaction".to_string()]
        );
    }

    #[test]
    fn test_data_message_before_message() {
        assert_eq!(
            reasons(r#"{"code":-32000,"message":"Internal JSON-RPC error.","data":{"message":"insufficient funds for gas * price + value"}}"#),
            vec![
                "insufficient funds for gas * price + value".to_string(),
                "Internal JSON-RPC error.".to_string(),
            ]
        );
    }

    #[test]
    fn test_blank_reason_falls_through() {
        assert_eq!(
            reasons(r#"{"reason":[""],"message":"User denied transaction signature."}"#),
            vec!["User denied transaction signature.".to_string()]
        );
        assert!(reasons("{}").is_empty());
    }

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id("0xaa36a7"), Ok(11_155_111));
        assert_eq!(parse_chain_id("0x1"), Ok(1));
        assert!(parse_chain_id("1").is_err());
    }

    #[test]
    fn test_ensure_chain_matches_configured_network() {
        assert_eq!(ensure_chain(11_155_111, Network::Sepolia), Ok(()));
        assert_eq!(ensure_chain(1, Network::Mainnet), Ok(()));
    }

    #[test]
    fn test_ensure_chain_rejects_other_chains() {
        let reason = ensure_chain(1, Network::Sepolia).expect_err("Mainnet wallet should be refused");
        assert_eq!(reason, "switch your wallet to Sepolia (wallet is on chain 1)");

        // What the failure modal shows
        assert_eq!(
            SubmissionError::new(reason).display_message(),
            "Switch your wallet to Sepolia (wallet is on chain 1)"
        );
        assert!(ensure_chain(137, Network::Sepolia).is_err());
    }

    #[test]
    fn test_transaction_value_is_hex_wei() {
        let request = DepositRequest {
            account: "0x52908400098527886E0F7030069857D2E4169EE7".to_string(),
            amount: "2.5".to_string(),
            value_wei: "2500000000000000000".to_string(),
        };
        assert_eq!(
            EthereumDepositSubmitter::transaction_value(&request),
            Ok("0x22b1c8c1227a0000".to_string())
        );
    }

    #[test]
    fn test_submitter_takes_config() {
        let config = StakingConfig::default();
        let submitter = EthereumDepositSubmitter::from_config(&config);
        assert_eq!(submitter.network, Network::Sepolia);
        assert!(submitter.contract.is_none());
        assert_eq!(submitter.selector, "0xd0e30db0");
    }
}

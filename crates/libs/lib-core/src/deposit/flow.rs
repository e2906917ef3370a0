//! # Deposit Flow
//!
//! Async calls into the collaborators, with logging and result normalization.
//! State changes stay in [`super::DepositForm`]; these helpers only talk to the
//! outside world.
//!
//! ```rust,no_run
//! # use lib_core::deposit::{DepositForm, DepositSubmitter, flow};
//! # async fn example(form: &mut DepositForm, submitter: &dyn DepositSubmitter) -> lib_core::Result<()> {
//! let request = form.begin_submit("0x52908400098527886E0F7030069857D2E4169EE7")?;
//! let outcome = flow::submit_deposit(submitter, &request).await;
//! form.settle(outcome)?;
//! # Ok(())
//! # }
//! ```

use crate::amount::EthAmount;
use crate::deposit::ports::{BalanceProvider, DepositSubmitter};
use crate::error::{Result, StakingError, SubmissionError};
use crate::network::Network;
use shared::{DepositRequest, TransactionResult};
use tracing::{debug, info, instrument, warn};

/// Hand the request to the submitter.
///
/// A success without a hash is treated as a failure, since there is nothing
/// to link to. Missing sender/value fields are filled from the request.
#[instrument(skip(submitter, request), fields(account = %request.account, amount = %request.amount))]
pub async fn submit_deposit(
    submitter: &dyn DepositSubmitter,
    request: &DepositRequest,
) -> std::result::Result<TransactionResult, SubmissionError> {
    debug!(value_wei = %request.value_wei, "Submitting deposit");

    match submitter.submit_deposit(request).await {
        Ok(result) if result.hash.trim().is_empty() => {
            warn!("Submitter returned no transaction hash");
            Err(SubmissionError::new("no transaction hash returned"))
        }
        Ok(mut result) => {
            result.from.get_or_insert_with(|| request.account.clone());
            result.value_wei.get_or_insert_with(|| request.value_wei.clone());
            info!(hash = %result.hash, "Deposit submitted");
            Ok(result)
        }
        Err(err) => {
            warn!(reason = ?err.reason, "Deposit failed");
            Err(err)
        }
    }
}

/// Fetch the account balance as an exact amount.
#[instrument(skip(provider, network), fields(network = %network))]
pub async fn refresh_balance(
    provider: &dyn BalanceProvider,
    account: &str,
    network: Network,
) -> Result<EthAmount> {
    let snapshot = provider.balance(account, network).await?;
    let balance = EthAmount::from_wei_str(&snapshot.wei).map_err(|e| {
        StakingError::Provider(format!("bad balance {:?}: {}", snapshot.wei, e))
    })?;
    debug!(balance = %balance, "Balance refreshed");
    Ok(balance)
}

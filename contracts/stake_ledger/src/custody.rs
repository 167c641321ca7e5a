//! Token custody: every movement of the staked asset in or out of the ledger.
//!
//! Calls go through the generated `try_*` token client methods so that a
//! failing token contract surfaces as `ContractError::TransferFailed`
//! instead of trapping. Returning that error from the entry point makes the
//! host discard every storage write made earlier in the same invocation.

use soroban_sdk::{token, Address, Env};

use crate::ContractError;

/// Pull `amount` from `from` into the ledger using a prior allowance.
///
/// `from` must have called `approve(from, ledger, amount, ..)` on the token.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), ContractError> {
    let ledger = env.current_contract_address();
    match token::Client::new(env, token).try_transfer_from(&ledger, from, &ledger, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}

/// Send `amount` from ledger custody to `to`.
pub fn pay_out(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    let ledger = env.current_contract_address();
    match token::Client::new(env, token).try_transfer(&ledger, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}

/// Tokens currently held by the ledger: staked principal and reward
/// liquidity together.
pub fn balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}

//! Base fungible-token ledger: balances, supply, fee-free moves and burns

use soroban_sdk::{Address, Env};

use crate::analytics;
use crate::error::TokenError;
use crate::events;
use crate::storage;

pub fn require_positive(amount: i128) -> Result<(), TokenError> {
    if amount <= 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

pub fn debit(env: &Env, account: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = storage::get_balance(env, account);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    storage::set_balance(env, account, balance - amount);
    Ok(())
}

pub fn credit(env: &Env, account: &Address, amount: i128) -> Result<(), TokenError> {
    if amount == 0 {
        return Ok(());
    }
    let balance = storage::get_balance(env, account)
        .checked_add(amount)
        .ok_or(TokenError::ArithmeticOverflow)?;
    storage::set_balance(env, account, balance);
    analytics::note_holder(env, account);
    Ok(())
}

/// Move `amount` without fees or limits and emit a `Transfer` event.
///
/// Used for escrow into and out of the contract and for treasury spends.
pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    require_positive(amount)?;
    debit(env, from, amount)?;
    credit(env, to, amount)?;
    events::emit_transfer(env, from, to, amount);
    Ok(())
}

/// Create the initial supply. Only called from `initialize`.
pub fn mint_initial(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    require_positive(amount)?;
    credit(env, to, amount)?;
    storage::set_total_supply(env, amount);
    storage::set_initial_supply(env, amount);
    Ok(())
}

/// Remove tokens that were already debited from circulation.
pub fn destroy(env: &Env, amount: i128) -> Result<(), TokenError> {
    if amount == 0 {
        return Ok(());
    }
    let supply = storage::get_total_supply(env)
        .checked_sub(amount)
        .ok_or(TokenError::ArithmeticOverflow)?;
    storage::set_total_supply(env, supply);
    analytics::record_burn(env, amount)
}

pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    require_positive(amount)?;
    debit(env, from, amount)?;
    destroy(env, amount)?;
    events::emit_burn(env, from, amount);
    Ok(())
}

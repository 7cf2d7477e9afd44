//! Transfer protections: transaction/wallet limits, nonce replay, same-ledger and cooldown checks

use soroban_sdk::{Address, Env, Vec};

use crate::error::TokenError;
use crate::events;
use crate::fees::{self, FeeSplit};
use crate::ledger;
use crate::storage;
use crate::types::{LastProtectedTx, TransactionLimits};

fn check_tx_limit(
    env: &Env,
    from: &Address,
    amount: i128,
    limits: &TransactionLimits,
) -> Result<(), TokenError> {
    if amount > limits.max_tx_amount && !storage::is_fee_exempt(env, from) {
        return Err(TokenError::TransactionLimitExceeded);
    }
    Ok(())
}

/// A self-transfer never grows the balance, so it is not checked.
fn check_wallet_limit(
    env: &Env,
    from: &Address,
    to: &Address,
    split: &FeeSplit,
    limits: &TransactionLimits,
) -> Result<(), TokenError> {
    if !limits.limits_active || from == to || storage::is_fee_exempt(env, to) {
        return Ok(());
    }
    let after = storage::get_balance(env, to)
        .checked_add(split.net)
        .ok_or(TokenError::ArithmeticOverflow)?;
    if after > limits.max_wallet_amount {
        return Err(TokenError::WalletLimitExceeded);
    }
    Ok(())
}

/// Ordinary transfer. Limits apply only while `limits_active` is set.
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    let limits = storage::get_limits(env)?;
    let split = fees::quote(env, from, to, amount)?;
    if limits.limits_active {
        check_tx_limit(env, from, amount, &limits)?;
    }
    check_wallet_limit(env, from, to, &split, &limits)?;
    fees::settle(env, from, to, amount, &split)
}

/// Transfer bound to a single-use nonce. The per-transaction limit always applies.
///
/// Checks run in a fixed order: same ledger, nonce, cooldown, amount.
pub fn protected_transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
    nonce: u64,
) -> Result<(), TokenError> {
    let limits = storage::get_limits(env)?;
    let sequence = env.ledger().sequence();
    let now = env.ledger().timestamp();
    let last = storage::get_last_protected(env, from);

    if let Some(last) = &last {
        if last.sequence == sequence {
            return Err(TokenError::SameBlockTransaction);
        }
    }
    if storage::is_nonce_used(env, from, nonce) {
        return Err(TokenError::NonceUsed);
    }
    if let Some(last) = &last {
        if now < last.timestamp.saturating_add(limits.tx_cooldown) {
            return Err(TokenError::CooldownNotMet);
        }
    }
    check_tx_limit(env, from, amount, &limits)?;

    let split = fees::quote(env, from, to, amount)?;
    check_wallet_limit(env, from, to, &split, &limits)?;
    fees::settle(env, from, to, amount, &split)?;

    storage::set_nonce_used(env, from, nonce);
    storage::set_last_protected(
        env,
        from,
        &LastProtectedTx {
            sequence,
            timestamp: now,
        },
    );
    Ok(())
}

/// Pay several recipients in one call. Either every leg settles or none does.
pub fn batch_transfer(
    env: &Env,
    from: &Address,
    recipients: &Vec<Address>,
    amounts: &Vec<i128>,
) -> Result<i128, TokenError> {
    if recipients.len() != amounts.len() {
        return Err(TokenError::ArrayLengthMismatch);
    }
    if recipients.is_empty() {
        return Err(TokenError::EmptyBatch);
    }

    let limits = storage::get_limits(env)?;
    let mut total: i128 = 0;
    for amount in amounts.iter() {
        ledger::require_positive(amount)?;
        check_tx_limit(env, from, amount, &limits)?;
        total = total
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;
    }
    if storage::get_balance(env, from) < total {
        return Err(TokenError::InsufficientBalance);
    }

    for (to, amount) in recipients.iter().zip(amounts.iter()) {
        let split = fees::quote(env, from, &to, amount)?;
        check_wallet_limit(env, from, &to, &split, &limits)?;
        fees::settle(env, from, &to, amount, &split)?;
    }

    events::emit_batch_transfer(env, from, recipients.len(), total);
    Ok(total)
}

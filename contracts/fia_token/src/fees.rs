//! Fee-on-transfer engine.
//!
//! Every transfer between two non-exempt accounts pays `amount * total_fee_bp / 10_000`.
//! The fee is split by basis points: the treasury and founder shares are floored and the
//! burn share takes the remainder, so the three shares always add up to the fee.

use soroban_sdk::{Address, Env};

use crate::analytics;
use crate::config::{BASIS_POINTS, FEE_CHANGE_DELAY, MAX_TOTAL_FEE_BP};
use crate::error::TokenError;
use crate::events;
use crate::ledger;
use crate::storage;
use crate::types::FeeConfig;

/// Outcome of charging a fee on one transfer
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FeeSplit {
    pub fee: i128,
    pub treasury: i128,
    pub founder: i128,
    pub burn: i128,
    /// Amount credited to the recipient
    pub net: i128,
}

impl FeeSplit {
    pub fn exempt(amount: i128) -> Self {
        Self {
            net: amount,
            ..Self::default()
        }
    }
}

pub fn split(config: &FeeConfig, amount: i128) -> Result<FeeSplit, TokenError> {
    if config.total_fee_bp == 0 {
        return Ok(FeeSplit::exempt(amount));
    }
    let fee = amount
        .checked_mul(config.total_fee_bp as i128)
        .ok_or(TokenError::ArithmeticOverflow)?
        / BASIS_POINTS;
    let total = config.total_fee_bp as i128;
    let treasury = fee * config.treasury_bp as i128 / total;
    let founder = fee * config.founder_bp as i128 / total;
    Ok(FeeSplit {
        fee,
        treasury,
        founder,
        burn: fee - treasury - founder,
        net: amount - fee,
    })
}

/// Compute the split a transfer from `from` to `to` would pay.
pub fn quote(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<FeeSplit, TokenError> {
    ledger::require_positive(amount)?;
    if storage::is_fee_exempt(env, from) || storage::is_fee_exempt(env, to) {
        return Ok(FeeSplit::exempt(amount));
    }
    split(&storage::get_fee_config(env)?, amount)
}

/// Apply a quoted transfer: debit the sender, credit recipient and fee receivers, burn.
pub fn settle(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
    split: &FeeSplit,
) -> Result<(), TokenError> {
    ledger::debit(env, from, amount)?;
    ledger::credit(env, to, split.net)?;
    events::emit_transfer(env, from, to, split.net);

    if split.fee > 0 {
        let treasury = storage::get_treasury(env)?;
        let founder = storage::get_founder(env)?;
        ledger::credit(env, &treasury, split.treasury)?;
        ledger::credit(env, &founder, split.founder)?;
        ledger::destroy(env, split.burn)?;
        analytics::record_fee(env, from, split.fee)?;
        events::emit_fee_distributed(
            env,
            from,
            split.fee,
            split.treasury,
            split.founder,
            split.burn,
        );
    }

    analytics::record_transfer(env, from, to, amount, split.net)
}

// ============================================================================
// Configuration
// ============================================================================

/// Change the total fee rate, rescaling the shares to the new total.
pub fn set_total_fee_bp(env: &Env, new_fee_bp: u32) -> Result<FeeConfig, TokenError> {
    if new_fee_bp > MAX_TOTAL_FEE_BP {
        return Err(TokenError::FeeTooHigh);
    }
    let current = storage::get_fee_config(env)?;
    let now = env.ledger().timestamp();
    if let Some(changed_at) = current.rate_changed_at {
        if now < changed_at.saturating_add(FEE_CHANGE_DELAY) {
            return Err(TokenError::FeeChangeTooFrequent);
        }
    }

    let (treasury_bp, founder_bp) = if current.total_fee_bp == 0 {
        let initial = FeeConfig::initial();
        (
            new_fee_bp * initial.treasury_bp / initial.total_fee_bp,
            new_fee_bp * initial.founder_bp / initial.total_fee_bp,
        )
    } else {
        (
            (current.treasury_bp as u64 * new_fee_bp as u64 / current.total_fee_bp as u64) as u32,
            (current.founder_bp as u64 * new_fee_bp as u64 / current.total_fee_bp as u64) as u32,
        )
    };

    let config = FeeConfig {
        total_fee_bp: new_fee_bp,
        treasury_bp,
        founder_bp,
        burn_bp: new_fee_bp - treasury_bp - founder_bp,
        version: current.version.saturating_add(1),
        rate_changed_at: Some(now),
    };
    storage::set_fee_config(env, &config);
    events::emit_fee_config_updated(env, &config);
    Ok(config)
}

pub fn set_fee_distribution(
    env: &Env,
    treasury_bp: u32,
    founder_bp: u32,
    burn_bp: u32,
) -> Result<FeeConfig, TokenError> {
    let current = storage::get_fee_config(env)?;
    let config = FeeConfig {
        treasury_bp,
        founder_bp,
        burn_bp,
        version: current.version.saturating_add(1),
        ..current
    };
    if !config.is_balanced() {
        return Err(TokenError::InvalidFeeDistribution);
    }
    storage::set_fee_config(env, &config);
    events::emit_fee_config_updated(env, &config);
    Ok(config)
}

pub fn set_fee_exempt(env: &Env, account: &Address, exempt: bool) {
    storage::set_fee_exempt(env, account, exempt);
    events::emit_fee_exemption_set(env, account, exempt);
}

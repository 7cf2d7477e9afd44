//! Staking engine.
//!
//! Stakes are kept per account in insertion order and are never removed: a withdrawn
//! stake stays at its index with `amount == 0`. Rewards accrue linearly from the last
//! claim and are paid from the shared reward pool:
//!
//! `reward = amount * apy_bp * elapsed / (SECONDS_PER_YEAR * 10_000)`
//!
//! All multiplications happen before the single floor division.

use soroban_sdk::{log, Address, Env, Vec};

use crate::analytics;
use crate::config::{
    is_valid_lock_period, percent_of, BASIS_POINTS, DEFAULT_APY_BP,
    EARLY_UNSTAKE_PENALTY_PERCENT, LOCK_PERIODS, MAX_APY_BP, SECONDS_PER_YEAR,
};
use crate::error::TokenError;
use crate::events;
use crate::ledger;
use crate::storage;
use crate::types::StakeRecord;

pub fn install_default_apys(env: &Env) {
    for (lock_period, apy_bp) in LOCK_PERIODS.iter().zip(DEFAULT_APY_BP.iter()) {
        storage::set_apy(env, *lock_period, *apy_bp);
    }
}

pub fn set_apy(env: &Env, lock_period: u64, apy_bp: u32) -> Result<(), TokenError> {
    if !is_valid_lock_period(lock_period) {
        return Err(TokenError::InvalidLockPeriod);
    }
    if apy_bp > MAX_APY_BP {
        return Err(TokenError::InvalidApy);
    }
    storage::set_apy(env, lock_period, apy_bp);
    events::emit_staking_apy_updated(env, lock_period, apy_bp);
    Ok(())
}

fn validate(amount: i128, lock_period: u64) -> Result<(), TokenError> {
    ledger::require_positive(amount)?;
    if !is_valid_lock_period(lock_period) {
        return Err(TokenError::InvalidLockPeriod);
    }
    Ok(())
}

fn add_total_staked(env: &Env, delta: i128) -> Result<(), TokenError> {
    let total = storage::get_total_staked(env)
        .checked_add(delta)
        .ok_or(TokenError::ArithmeticOverflow)?;
    storage::set_total_staked(env, total);
    Ok(())
}

fn open_stake(
    env: &Env,
    user: &Address,
    amount: i128,
    lock_period: u64,
    auto_compound: bool,
) -> Result<u32, TokenError> {
    ledger::move_balance(env, user, &env.current_contract_address(), amount)?;

    let now = env.ledger().timestamp();
    let index = storage::get_stake_count(env, user);
    let stake = StakeRecord {
        amount,
        lock_period,
        auto_compound,
        staking_time: now,
        last_reward_claim: now,
    };
    storage::set_stake(env, user, index, &stake);
    storage::set_stake_count(env, user, index + 1);
    add_total_staked(env, amount)?;
    analytics::record_stake_change(env, user, amount)?;

    events::emit_staked(env, user, index, amount, lock_period, auto_compound);
    Ok(index)
}

pub fn stake(
    env: &Env,
    user: &Address,
    amount: i128,
    lock_period: u64,
    auto_compound: bool,
) -> Result<u32, TokenError> {
    validate(amount, lock_period)?;
    open_stake(env, user, amount, lock_period, auto_compound)
}

/// Open one stake per element; every element is validated before the first is opened.
pub fn batch_stake(
    env: &Env,
    user: &Address,
    amounts: &Vec<i128>,
    lock_periods: &Vec<u64>,
    auto_compounds: &Vec<bool>,
) -> Result<Vec<u32>, TokenError> {
    if amounts.len() != lock_periods.len() || amounts.len() != auto_compounds.len() {
        return Err(TokenError::ArrayLengthMismatch);
    }
    if amounts.is_empty() {
        return Err(TokenError::EmptyBatch);
    }

    let mut total: i128 = 0;
    for (amount, lock_period) in amounts.iter().zip(lock_periods.iter()) {
        validate(amount, lock_period)?;
        total = total
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;
    }
    if storage::get_balance(env, user) < total {
        return Err(TokenError::InsufficientBalance);
    }

    let mut indices = Vec::new(env);
    for i in 0..amounts.len() {
        let (Some(amount), Some(lock_period), Some(auto_compound)) =
            (amounts.get(i), lock_periods.get(i), auto_compounds.get(i))
        else {
            return Err(TokenError::ArrayLengthMismatch);
        };
        indices.push_back(open_stake(env, user, amount, lock_period, auto_compound)?);
    }
    Ok(indices)
}

fn load_active(env: &Env, user: &Address, index: u32) -> Result<StakeRecord, TokenError> {
    let stake = storage::get_stake(env, user, index).ok_or(TokenError::InvalidStakeIndex)?;
    if !stake.is_active() {
        return Err(TokenError::StakeNotActive);
    }
    Ok(stake)
}

pub fn accrued(env: &Env, stake: &StakeRecord) -> Result<i128, TokenError> {
    let now = env.ledger().timestamp();
    let elapsed = now.saturating_sub(stake.last_reward_claim) as i128;
    let apy_bp = storage::get_apy(env, stake.lock_period) as i128;
    let reward = stake
        .amount
        .checked_mul(apy_bp)
        .and_then(|v| v.checked_mul(elapsed))
        .ok_or(TokenError::ArithmeticOverflow)?;
    Ok(reward / (SECONDS_PER_YEAR * BASIS_POINTS))
}

pub fn calculate_rewards(env: &Env, user: &Address, index: u32) -> Result<i128, TokenError> {
    let stake = load_active(env, user, index)?;
    accrued(env, &stake)
}

/// Pay or compound the accrued reward of `stake`, updating it in place.
///
/// Returns the amount paid. When the pool cannot cover the full reward, or the accrual
/// does not fit in an i128, nothing changes and 0 is returned.
fn settle_reward(
    env: &Env,
    user: &Address,
    index: u32,
    stake: &mut StakeRecord,
) -> Result<i128, TokenError> {
    let reward = match accrued(env, stake) {
        Ok(reward) => reward,
        Err(TokenError::ArithmeticOverflow) => {
            log!(env, "reward accrual overflowed, skipping payout", user.clone(), index);
            return Ok(0);
        }
        Err(err) => return Err(err),
    };
    if reward == 0 {
        return Ok(0);
    }
    let pool = storage::get_reward_pool(env);
    if reward > pool {
        log!(env, "reward pool too small, skipping payout", user.clone(), index, reward, pool);
        return Ok(0);
    }

    storage::set_reward_pool(env, pool - reward);
    if stake.auto_compound {
        stake.amount = stake
            .amount
            .checked_add(reward)
            .ok_or(TokenError::ArithmeticOverflow)?;
        add_total_staked(env, reward)?;
        analytics::record_stake_change(env, user, reward)?;
    } else {
        ledger::move_balance(env, &env.current_contract_address(), user, reward)?;
    }
    stake.last_reward_claim = env.ledger().timestamp();
    analytics::record_reward(env, user, reward)?;

    events::emit_reward_claimed(env, user, index, reward, stake.auto_compound);
    Ok(reward)
}

pub fn claim_rewards(env: &Env, user: &Address, index: u32) -> Result<i128, TokenError> {
    let mut stake = load_active(env, user, index)?;
    let reward = settle_reward(env, user, index, &mut stake)?;
    if reward > 0 {
        storage::set_stake(env, user, index, &stake);
    }
    Ok(reward)
}

/// Close a stake. Before the unlock time a 10% penalty on the principal is moved
/// into the reward pool. Returns the principal paid back to the user.
pub fn unstake(env: &Env, user: &Address, index: u32) -> Result<i128, TokenError> {
    let mut stake = load_active(env, user, index)?;
    settle_reward(env, user, index, &mut stake)?;

    let principal = stake.amount;
    let penalty = if env.ledger().timestamp() < stake.unlock_time() {
        percent_of(principal, EARLY_UNSTAKE_PENALTY_PERCENT)
    } else {
        0
    };
    let returned = principal - penalty;

    stake.amount = 0;
    storage::set_stake(env, user, index, &stake);
    add_total_staked(env, -principal)?;
    analytics::record_stake_change(env, user, -principal)?;

    if penalty > 0 {
        let pool = storage::get_reward_pool(env)
            .checked_add(penalty)
            .ok_or(TokenError::ArithmeticOverflow)?;
        storage::set_reward_pool(env, pool);
    }
    ledger::move_balance(env, &env.current_contract_address(), user, returned)?;

    events::emit_unstaked(env, user, index, returned, penalty);
    Ok(returned)
}

/// Move tokens from `funder` into the contract and credit them to the reward pool.
pub fn add_to_reward_pool(env: &Env, funder: &Address, amount: i128) -> Result<i128, TokenError> {
    ledger::move_balance(env, funder, &env.current_contract_address(), amount)?;
    let pool = storage::get_reward_pool(env)
        .checked_add(amount)
        .ok_or(TokenError::ArithmeticOverflow)?;
    storage::set_reward_pool(env, pool);
    events::emit_reward_pool_funded(env, funder, amount, pool);
    Ok(pool)
}

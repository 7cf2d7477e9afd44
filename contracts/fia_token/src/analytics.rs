//! Passive counters updated as a side effect of transfers, fees, burns and staking

use soroban_sdk::{Address, Env};

use crate::error::TokenError;
use crate::storage;
use crate::types::{TokenStats, UserStats};

fn add(a: i128, b: i128) -> Result<i128, TokenError> {
    a.checked_add(b).ok_or(TokenError::ArithmeticOverflow)
}

fn update_user<F>(env: &Env, account: &Address, f: F) -> Result<(), TokenError>
where
    F: FnOnce(&mut UserStats) -> Result<(), TokenError>,
{
    let mut stats = storage::get_user_stats(env, account);
    f(&mut stats)?;
    stats.last_activity = env.ledger().timestamp();
    storage::set_user_stats(env, account, &stats);
    Ok(())
}

/// Count an account the first time its balance becomes positive.
pub fn note_holder(env: &Env, account: &Address) {
    if account == &env.current_contract_address() || storage::is_holder_seen(env, account) {
        return;
    }
    storage::set_holder_seen(env, account);
    storage::set_holder_count(env, storage::get_holder_count(env).saturating_add(1));
}

pub fn record_transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    sent: i128,
    received: i128,
) -> Result<(), TokenError> {
    storage::set_tx_count(env, storage::get_tx_count(env).saturating_add(1));
    update_user(env, from, |s| {
        s.tx_count = s.tx_count.saturating_add(1);
        s.total_sent = add(s.total_sent, sent)?;
        Ok(())
    })?;
    update_user(env, to, |s| {
        s.total_received = add(s.total_received, received)?;
        Ok(())
    })
}

pub fn record_fee(env: &Env, payer: &Address, fee: i128) -> Result<(), TokenError> {
    if fee == 0 {
        return Ok(());
    }
    storage::set_total_fees(env, add(storage::get_total_fees(env), fee)?);
    update_user(env, payer, |s| {
        s.total_fees_paid = add(s.total_fees_paid, fee)?;
        Ok(())
    })
}

pub fn record_burn(env: &Env, amount: i128) -> Result<(), TokenError> {
    storage::set_total_burned(env, add(storage::get_total_burned(env), amount)?);
    Ok(())
}

/// Signed change of an account's currently staked principal.
pub fn record_stake_change(env: &Env, user: &Address, delta: i128) -> Result<(), TokenError> {
    update_user(env, user, |s| {
        s.total_staked = add(s.total_staked, delta)?;
        Ok(())
    })
}

pub fn record_reward(env: &Env, user: &Address, reward: i128) -> Result<(), TokenError> {
    update_user(env, user, |s| {
        s.rewards_claimed = add(s.rewards_claimed, reward)?;
        Ok(())
    })
}

pub fn token_stats(env: &Env) -> TokenStats {
    TokenStats {
        total_supply: storage::get_total_supply(env),
        initial_supply: storage::get_initial_supply(env),
        total_burned: storage::get_total_burned(env),
        total_fees_collected: storage::get_total_fees(env),
        total_staked: storage::get_total_staked(env),
        reward_pool: storage::get_reward_pool(env),
        holder_count: storage::get_holder_count(env),
        tx_count: storage::get_tx_count(env),
    }
}

pub fn user_stats(env: &Env, account: &Address) -> UserStats {
    storage::get_user_stats(env, account)
}

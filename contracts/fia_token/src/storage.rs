//! Storage keys and helpers for the FIACoin token contract

use soroban_sdk::{contracttype, Address, Env};

use crate::config::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use crate::error::TokenError;
use crate::types::{
    FeeConfig, LastProtectedTx, Proposal, StakeRecord, TransactionLimits, UserStats,
};

/// Storage keys for the token contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    // Instance storage
    Admin,
    Treasury,
    Founder,
    Executor,
    Paused,
    CallLock,
    FeeConfig,
    Limits,
    TotalSupply,
    InitialSupply,
    TotalBurned,
    TotalFees,
    TotalStaked,
    RewardPool,
    HolderCount,
    TxCount,
    ProposalCount,

    // Persistent storage
    Balance(Address),
    FeeExempt(Address),
    NonceUsed(Address, u64),
    LastProtected(Address),
    Stake(Address, u32),
    StakeCount(Address),
    Apy(u64),
    Proposal(u64),
    Vote(u64, Address),
    UserStats(Address),
    HolderSeen(Address),
}

// ============================================================================
// TTL Helpers
// ============================================================================

/// Keep the contract instance alive
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ============================================================================
// Role Helpers
// ============================================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(TokenError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_treasury(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Treasury)
        .ok_or(TokenError::NotInitialized)
}

pub fn set_treasury(env: &Env, treasury: &Address) {
    env.storage().instance().set(&DataKey::Treasury, treasury);
}

pub fn get_founder(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Founder)
        .ok_or(TokenError::NotInitialized)
}

pub fn set_founder(env: &Env, founder: &Address) {
    env.storage().instance().set(&DataKey::Founder, founder);
}

pub fn get_executor(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Executor)
}

pub fn set_executor(env: &Env, executor: &Option<Address>) {
    match executor {
        Some(executor) => env.storage().instance().set(&DataKey::Executor, executor),
        None => env.storage().instance().remove(&DataKey::Executor),
    }
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<DataKey, bool>(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

// ============================================================================
// Configuration Helpers
// ============================================================================

pub fn get_fee_config(env: &Env) -> Result<FeeConfig, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::FeeConfig)
        .ok_or(TokenError::NotInitialized)
}

pub fn set_fee_config(env: &Env, config: &FeeConfig) {
    env.storage().instance().set(&DataKey::FeeConfig, config);
}

pub fn get_limits(env: &Env) -> Result<TransactionLimits, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Limits)
        .ok_or(TokenError::NotInitialized)
}

pub fn set_limits(env: &Env, limits: &TransactionLimits) {
    env.storage().instance().set(&DataKey::Limits, limits);
}

pub fn is_fee_exempt(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<DataKey, bool>(&DataKey::FeeExempt(account.clone()))
        .unwrap_or(false)
}

pub fn set_fee_exempt(env: &Env, account: &Address, exempt: bool) {
    let key = DataKey::FeeExempt(account.clone());
    if exempt {
        set_persistent(env, &key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ============================================================================
// Counter Helpers
// ============================================================================

fn get_i128(env: &Env, key: &DataKey) -> i128 {
    env.storage().instance().get(key).unwrap_or(0)
}

pub fn get_total_supply(env: &Env) -> i128 {
    get_i128(env, &DataKey::TotalSupply)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_initial_supply(env: &Env) -> i128 {
    get_i128(env, &DataKey::InitialSupply)
}

pub fn set_initial_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::InitialSupply, &supply);
}

pub fn get_total_burned(env: &Env) -> i128 {
    get_i128(env, &DataKey::TotalBurned)
}

pub fn set_total_burned(env: &Env, burned: i128) {
    env.storage().instance().set(&DataKey::TotalBurned, &burned);
}

pub fn get_total_fees(env: &Env) -> i128 {
    get_i128(env, &DataKey::TotalFees)
}

pub fn set_total_fees(env: &Env, fees: i128) {
    env.storage().instance().set(&DataKey::TotalFees, &fees);
}

pub fn get_total_staked(env: &Env) -> i128 {
    get_i128(env, &DataKey::TotalStaked)
}

pub fn set_total_staked(env: &Env, staked: i128) {
    env.storage().instance().set(&DataKey::TotalStaked, &staked);
}

pub fn get_reward_pool(env: &Env) -> i128 {
    get_i128(env, &DataKey::RewardPool)
}

pub fn set_reward_pool(env: &Env, pool: i128) {
    env.storage().instance().set(&DataKey::RewardPool, &pool);
}

pub fn get_holder_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::HolderCount)
        .unwrap_or(0)
}

pub fn set_holder_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::HolderCount, &count);
}

pub fn get_tx_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::TxCount).unwrap_or(0)
}

pub fn set_tx_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::TxCount, &count);
}

// ============================================================================
// Balance Helpers
// ============================================================================

pub fn get_balance(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(account.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, account: &Address, balance: i128) {
    set_persistent(env, &DataKey::Balance(account.clone()), &balance);
}

pub fn is_holder_seen(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::HolderSeen(account.clone()))
}

pub fn set_holder_seen(env: &Env, account: &Address) {
    set_persistent(env, &DataKey::HolderSeen(account.clone()), &true);
}

// ============================================================================
// Anti-MEV Helpers
// ============================================================================

pub fn is_nonce_used(env: &Env, account: &Address, nonce: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::NonceUsed(account.clone(), nonce))
}

pub fn set_nonce_used(env: &Env, account: &Address, nonce: u64) {
    set_persistent(env, &DataKey::NonceUsed(account.clone(), nonce), &true);
}

pub fn get_last_protected(env: &Env, account: &Address) -> Option<LastProtectedTx> {
    env.storage()
        .persistent()
        .get(&DataKey::LastProtected(account.clone()))
}

pub fn set_last_protected(env: &Env, account: &Address, last: &LastProtectedTx) {
    set_persistent(env, &DataKey::LastProtected(account.clone()), last);
}

// ============================================================================
// Staking Helpers
// ============================================================================

pub fn get_stake_count(env: &Env, account: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::StakeCount(account.clone()))
        .unwrap_or(0)
}

pub fn set_stake_count(env: &Env, account: &Address, count: u32) {
    set_persistent(env, &DataKey::StakeCount(account.clone()), &count);
}

pub fn get_stake(env: &Env, account: &Address, index: u32) -> Option<StakeRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Stake(account.clone(), index))
}

pub fn set_stake(env: &Env, account: &Address, index: u32, stake: &StakeRecord) {
    set_persistent(env, &DataKey::Stake(account.clone(), index), stake);
}

pub fn get_apy(env: &Env, lock_period: u64) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Apy(lock_period))
        .unwrap_or(0)
}

pub fn set_apy(env: &Env, lock_period: u64, apy_bp: u32) {
    set_persistent(env, &DataKey::Apy(lock_period), &apy_bp);
}

// ============================================================================
// Proposal Helpers
// ============================================================================

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    set_persistent(env, &DataKey::Proposal(proposal.id), proposal);
}

pub fn has_voted(env: &Env, proposal_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Vote(proposal_id, voter.clone()))
}

pub fn set_voted(env: &Env, proposal_id: u64, voter: &Address) {
    set_persistent(env, &DataKey::Vote(proposal_id, voter.clone()), &true);
}

// ============================================================================
// Analytics Helpers
// ============================================================================

pub fn get_user_stats(env: &Env, account: &Address) -> UserStats {
    env.storage()
        .persistent()
        .get(&DataKey::UserStats(account.clone()))
        .unwrap_or_default()
}

pub fn set_user_stats(env: &Env, account: &Address, stats: &UserStats) {
    set_persistent(env, &DataKey::UserStats(account.clone()), stats);
}

#![no_std]

//! # FIACoin Token
//!
//! A Soroban token contract that layers fee distribution, transfer protections,
//! staking and token-weighted governance over a plain fungible ledger.
//!
//! ## Features
//! - Fee on transfer split between treasury, founder and burn
//! - Nonce-bound protected transfers with same-ledger and cooldown checks
//! - Global transaction and wallet limits
//! - Lock-period staking with APY rewards from a shared pool and early-exit penalty
//! - Balance-weighted proposals with quorum, majority and execution delay
//! - Analytics counters for supply, fees, burns, holders and per-user activity
//!
//! ## Security
//! - Every mutating call holds a reentrancy lock for its whole body
//! - Inputs are validated before any write; failed calls leave no trace
//! - Admin controls stay available while user operations are paused

use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, String, Vec};

mod analytics;
mod config;
mod error;
mod events;
mod fees;
mod governance;
mod guard;
mod ledger;
mod mev_guard;
mod staking;
mod storage;
mod types;

pub use config::{
    DAY, EXECUTION_DELAY, FEE_CHANGE_DELAY, LOCK_180_DAYS, LOCK_30_DAYS, LOCK_365_DAYS,
    LOCK_90_DAYS, MAX_APY_BP, MAX_TOTAL_FEE_BP, ONE_TOKEN, PROPOSAL_THRESHOLD, QUORUM_PERCENTAGE,
    VOTING_PERIOD,
};
pub use error::TokenError;
pub use types::{
    FeeConfig, Proposal, ProposalAction, ProposalState, ProposalType, StakeRecord, TokenStats,
    TransactionLimits, UserStats,
};

use guard::{enter, enter_admin};

#[contract]
pub struct FiaToken;

#[contractimpl]
impl FiaToken {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the token and mint the whole supply to `admin`
    ///
    /// # Errors
    /// * `AlreadyInitialized` - Contract has already been initialized
    /// * `InvalidAmount` - Initial supply is not positive
    pub fn initialize(
        env: Env,
        admin: Address,
        treasury: Address,
        founder: Address,
        initial_supply: i128,
    ) -> Result<(), TokenError> {
        if storage::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        admin.require_auth();
        ledger::require_positive(initial_supply)?;

        storage::set_admin(&env, &admin);
        storage::set_treasury(&env, &treasury);
        storage::set_founder(&env, &founder);
        storage::set_fee_config(&env, &FeeConfig::initial());
        storage::set_limits(&env, &TransactionLimits::initial(initial_supply));
        staking::install_default_apys(&env);

        let this = env.current_contract_address();
        for account in [&admin, &treasury, &founder, &this] {
            storage::set_fee_exempt(&env, account, true);
        }
        ledger::mint_initial(&env, &admin, initial_supply)?;
        storage::bump_instance(&env);

        events::emit_initialized(&env, &admin, &treasury, &founder, initial_supply);
        Ok(())
    }

    // ========================================================================
    // Base Ledger
    // ========================================================================

    pub fn name(env: Env) -> String {
        String::from_str(&env, config::TOKEN_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, config::TOKEN_SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        config::DECIMALS
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    /// Fee-bearing transfer. Limits apply while they are active.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        let _guard = enter(&env)?;
        from.require_auth();
        mev_guard::transfer(&env, &from, &to, amount)
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        let _guard = enter(&env)?;
        from.require_auth();
        ledger::burn(&env, &from, amount)
    }

    // ========================================================================
    // Protected Transfers
    // ========================================================================

    /// Transfer bound to a single-use `nonce`
    ///
    /// # Errors
    /// * `SameBlockTransaction` - Sender already made a protected transfer in this ledger
    /// * `NonceUsed` - Sender already consumed this nonce
    /// * `CooldownNotMet` - Cooldown since the last protected transfer has not elapsed
    /// * `TransactionLimitExceeded` - Amount exceeds the transaction limit
    pub fn protected_transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
        nonce: u64,
    ) -> Result<(), TokenError> {
        let _guard = enter(&env)?;
        from.require_auth();
        mev_guard::protected_transfer(&env, &from, &to, amount, nonce)
    }

    /// Pay several recipients atomically. Returns the total sent.
    pub fn batch_transfer(
        env: Env,
        from: Address,
        recipients: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<i128, TokenError> {
        let _guard = enter(&env)?;
        from.require_auth();
        mev_guard::batch_transfer(&env, &from, &recipients, &amounts)
    }

    /// Ordinary transfer that also publishes `data` in a `TransferWithData` event
    pub fn transfer_with_data(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
        data: Bytes,
    ) -> Result<(), TokenError> {
        let _guard = enter(&env)?;
        from.require_auth();
        mev_guard::transfer(&env, &from, &to, amount)?;
        events::emit_transfer_with_data(&env, &from, &to, amount, data);
        Ok(())
    }

    pub fn is_nonce_used(env: Env, id: Address, nonce: u64) -> bool {
        storage::is_nonce_used(&env, &id, nonce)
    }

    // ========================================================================
    // Governance
    // ========================================================================

    /// Create a proposal. Returns its sequential id.
    ///
    /// # Errors
    /// * `InsufficientBalanceForProposal` - Proposer holds less than the threshold
    /// * `InvalidProposalAction` - Action fails validation
    pub fn propose(
        env: Env,
        proposer: Address,
        description: String,
        action: ProposalAction,
    ) -> Result<u64, TokenError> {
        let _guard = enter(&env)?;
        proposer.require_auth();
        governance::propose(&env, &proposer, description, action)
    }

    /// Vote with the caller's current balance
    ///
    /// # Errors
    /// * `ProposalNotFound` - Proposal does not exist
    /// * `VotingPeriodEnded` - Voting period is over
    /// * `AlreadyVoted` - Caller already voted on this proposal
    /// * `NoVotingPower` - Caller holds no tokens
    pub fn vote(env: Env, voter: Address, proposal_id: u64, support: bool) -> Result<(), TokenError> {
        let _guard = enter(&env)?;
        voter.require_auth();
        governance::vote(&env, &voter, proposal_id, support)?;
        Ok(())
    }

    /// Apply a passed proposal
    ///
    /// # Errors
    /// * `NotExecutor` - An executor is set and the caller is not it
    /// * `VotingStillActive` - Voting has not ended
    /// * `ExecutionDelayNotMet` - Execution delay has not passed
    /// * `AlreadyExecuted` - Proposal has already been executed
    /// * `QuorumNotMet` - Too few tokens voted
    /// * `ProposalRejected` - For-votes did not exceed against-votes
    pub fn execute(env: Env, caller: Address, proposal_id: u64) -> Result<(), TokenError> {
        let _guard = enter(&env)?;
        caller.require_auth();
        governance::execute(&env, &caller, proposal_id)
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, TokenError> {
        storage::get_proposal(&env, proposal_id).ok_or(TokenError::ProposalNotFound)
    }

    pub fn proposal_count(env: Env) -> u64 {
        storage::get_proposal_count(&env)
    }

    pub fn proposal_state(env: Env, proposal_id: u64) -> Result<ProposalState, TokenError> {
        governance::proposal_state(&env, proposal_id)
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        storage::has_voted(&env, proposal_id, &voter)
    }

    /// Spendable balance of `id`. Staked tokens are held by the contract and do not count.
    pub fn get_voting_power(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    // ========================================================================
    // Staking
    // ========================================================================

    /// Lock `amount` for `lock_period` seconds. Returns the stake index.
    pub fn stake(
        env: Env,
        user: Address,
        amount: i128,
        lock_period: u64,
        auto_compound: bool,
    ) -> Result<u32, TokenError> {
        let _guard = enter(&env)?;
        user.require_auth();
        staking::stake(&env, &user, amount, lock_period, auto_compound)
    }

    pub fn batch_stake(
        env: Env,
        user: Address,
        amounts: Vec<i128>,
        lock_periods: Vec<u64>,
        auto_compounds: Vec<bool>,
    ) -> Result<Vec<u32>, TokenError> {
        let _guard = enter(&env)?;
        user.require_auth();
        staking::batch_stake(&env, &user, &amounts, &lock_periods, &auto_compounds)
    }

    /// Close a stake. Returns the principal paid back.
    pub fn unstake(env: Env, user: Address, index: u32) -> Result<i128, TokenError> {
        let _guard = enter(&env)?;
        user.require_auth();
        staking::unstake(&env, &user, index)
    }

    /// Pay or compound accrued rewards. Returns 0 when the pool cannot cover them.
    pub fn claim_rewards(env: Env, user: Address, index: u32) -> Result<i128, TokenError> {
        let _guard = enter(&env)?;
        user.require_auth();
        staking::claim_rewards(&env, &user, index)
    }

    pub fn calculate_rewards(env: Env, user: Address, index: u32) -> Result<i128, TokenError> {
        staking::calculate_rewards(&env, &user, index)
    }

    pub fn add_to_reward_pool(env: Env, funder: Address, amount: i128) -> Result<i128, TokenError> {
        let _guard = enter(&env)?;
        funder.require_auth();
        staking::add_to_reward_pool(&env, &funder, amount)
    }

    pub fn get_stake(env: Env, user: Address, index: u32) -> Result<StakeRecord, TokenError> {
        storage::get_stake(&env, &user, index).ok_or(TokenError::InvalidStakeIndex)
    }

    pub fn get_stake_count(env: Env, user: Address) -> u32 {
        storage::get_stake_count(&env, &user)
    }

    pub fn staking_apy(env: Env, lock_period: u64) -> u32 {
        storage::get_apy(&env, lock_period)
    }

    pub fn total_staked(env: Env) -> i128 {
        storage::get_total_staked(&env)
    }

    pub fn reward_pool(env: Env) -> i128 {
        storage::get_reward_pool(&env)
    }

    // ========================================================================
    // Admin Controls
    // ========================================================================

    pub fn set_fee_exempt(
        env: Env,
        admin: Address,
        account: Address,
        exempt: bool,
    ) -> Result<(), TokenError> {
        let _guard = enter_admin(&env, &admin)?;
        fees::set_fee_exempt(&env, &account, exempt);
        Ok(())
    }

    pub fn batch_set_fee_exempt(
        env: Env,
        admin: Address,
        accounts: Vec<Address>,
        exempt: bool,
    ) -> Result<(), TokenError> {
        let _guard = enter_admin(&env, &admin)?;
        for account in accounts.iter() {
            fees::set_fee_exempt(&env, &account, exempt);
        }
        Ok(())
    }

    /// # Errors
    /// * `InvalidFeeDistribution` - Shares do not sum to the current total fee
    pub fn set_fee_distribution(
        env: Env,
        admin: Address,
        treasury_bp: u32,
        founder_bp: u32,
        burn_bp: u32,
    ) -> Result<(), TokenError> {
        let _guard = enter_admin(&env, &admin)?;
        fees::set_fee_distribution(&env, treasury_bp, founder_bp, burn_bp)?;
        Ok(())
    }

    /// # Errors
    /// * `FeeTooHigh` - New fee exceeds the cap
    /// * `FeeChangeTooFrequent` - Previous rate change is less than a day old
    pub fn set_total_fee_bp(env: Env, admin: Address, total_fee_bp: u32) -> Result<(), TokenError> {
        let _guard = enter_admin(&env, &admin)?;
        fees::set_total_fee_bp(&env, total_fee_bp)?;
        Ok(())
    }

    pub fn set_transaction_limits(
        env: Env,
        admin: Address,
        max_tx_amount: i128,
        max_wallet_amount: i128,
        tx_cooldown: u64,
        limits_active: bool,
    ) -> Result<(), TokenError> {
        let _guard = enter_admin(&env, &admin)?;
        let current = storage::get_limits(&env)?;
        let limits = TransactionLimits {
            max_tx_amount,
            max_wallet_amount,
            tx_cooldown,
            limits_active,
            version: current.version.saturating_add(1),
        };
        if !limits.is_valid() {
            return Err(TokenError::InvalidLimits);
        }
        storage::set_limits(&env, &limits);
        events::emit_limits_updated(&env, &limits);
        Ok(())
    }

    /// # Errors
    /// * `InvalidLockPeriod` - Lock period is not one of the supported values
    /// * `InvalidApy` - Rate exceeds `MAX_APY_BP`
    pub fn set_staking_apy(
        env: Env,
        admin: Address,
        lock_period: u64,
        apy_bp: u32,
    ) -> Result<(), TokenError> {
        let _guard = enter_admin(&env, &admin)?;
        staking::set_apy(&env, lock_period, apy_bp)
    }

    /// Restrict `execute` to one account, or lift the restriction with `None`
    pub fn set_executor(
        env: Env,
        admin: Address,
        executor: Option<Address>,
    ) -> Result<(), TokenError> {
        let _guard = enter_admin(&env, &admin)?;
        storage::set_executor(&env, &executor);
        events::emit_executor_set(&env, &executor);
        Ok(())
    }

    pub fn emergency_pause(env: Env, admin: Address) -> Result<(), TokenError> {
        let _guard = enter_admin(&env, &admin)?;
        storage::set_paused(&env, true);
        events::emit_emergency_action(&env, &admin, true);
        Ok(())
    }

    pub fn emergency_unpause(env: Env, admin: Address) -> Result<(), TokenError> {
        let _guard = enter_admin(&env, &admin)?;
        storage::set_paused(&env, false);
        events::emit_emergency_action(&env, &admin, false);
        Ok(())
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    pub fn get_token_stats(env: Env) -> TokenStats {
        analytics::token_stats(&env)
    }

    pub fn get_user_stats(env: Env, id: Address) -> UserStats {
        analytics::user_stats(&env, &id)
    }

    pub fn tx_limits(env: Env) -> Result<TransactionLimits, TokenError> {
        storage::get_limits(&env)
    }

    pub fn fee_config(env: Env) -> Result<FeeConfig, TokenError> {
        storage::get_fee_config(&env)
    }

    pub fn is_fee_exempt(env: Env, id: Address) -> bool {
        storage::is_fee_exempt(&env, &id)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn executor(env: Env) -> Option<Address> {
        storage::get_executor(&env)
    }

    pub fn admin(env: Env) -> Result<Address, TokenError> {
        storage::get_admin(&env)
    }

    pub fn treasury(env: Env) -> Result<Address, TokenError> {
        storage::get_treasury(&env)
    }

    pub fn founder(env: Env) -> Result<Address, TokenError> {
        storage::get_founder(&env)
    }
}

#[cfg(test)]
mod test;

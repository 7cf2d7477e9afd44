use soroban_sdk::{contractevent, Address, Bytes, Env};

use crate::types::{FeeConfig, ProposalType, TransactionLimits};

#[contractevent(topics = ["FIACoin", "INIT"])]
struct Initialized {
    admin: Address,
    treasury: Address,
    founder: Address,
    initial_supply: i128,
}

#[contractevent(topics = ["FIACoin", "TRANSFER"])]
struct Transfer {
    from: Address,
    to: Address,
    amount: i128,
}

#[contractevent(topics = ["FIACoin", "FEE_DIST"])]
struct FeeDistributed {
    payer: Address,
    fee: i128,
    treasury_share: i128,
    founder_share: i128,
    burn_share: i128,
}

#[contractevent(topics = ["FIACoin", "BURN"])]
struct Burn {
    from: Address,
    amount: i128,
}

#[contractevent(topics = ["FIACoin", "BATCH"])]
struct BatchTransfer {
    from: Address,
    recipients: u32,
    total_amount: i128,
}

#[contractevent(topics = ["FIACoin", "XFER_DATA"])]
struct TransferWithData {
    from: Address,
    to: Address,
    amount: i128,
    data: Bytes,
}

#[contractevent(topics = ["FIACoin", "PROPOSED"])]
struct ProposalCreated {
    proposal_id: u64,
    proposer: Address,
    proposal_type: ProposalType,
    end_time: u64,
}

#[contractevent(topics = ["FIACoin", "VOTED"])]
struct VoteCast {
    proposal_id: u64,
    voter: Address,
    support: bool,
    weight: i128,
}

#[contractevent(topics = ["FIACoin", "EXECUTED"])]
struct ProposalExecuted {
    proposal_id: u64,
    executor: Address,
    proposal_type: ProposalType,
}

#[contractevent(topics = ["FIACoin", "STAKED"])]
struct Staked {
    user: Address,
    index: u32,
    amount: i128,
    lock_period: u64,
    auto_compound: bool,
}

#[contractevent(topics = ["FIACoin", "UNSTAKED"])]
struct Unstaked {
    user: Address,
    index: u32,
    returned: i128,
    penalty: i128,
}

#[contractevent(topics = ["FIACoin", "CLAIMED"])]
struct RewardClaimed {
    user: Address,
    index: u32,
    reward: i128,
    compounded: bool,
}

#[contractevent(topics = ["FIACoin", "POOL_FUND"])]
struct RewardPoolFunded {
    funder: Address,
    amount: i128,
    pool: i128,
}

#[contractevent(topics = ["FIACoin", "EMERGENCY"])]
struct EmergencyAction {
    admin: Address,
    paused: bool,
    timestamp: u64,
}

#[contractevent(topics = ["FIACoin", "FEE_CFG"])]
struct FeeConfigUpdated {
    config: FeeConfig,
}

#[contractevent(topics = ["FIACoin", "LIMITS"])]
struct LimitsUpdated {
    limits: TransactionLimits,
}

#[contractevent(topics = ["FIACoin", "EXEMPT"])]
struct FeeExemptionSet {
    account: Address,
    exempt: bool,
}

#[contractevent(topics = ["FIACoin", "EXECUTOR"])]
struct ExecutorSet {
    executor: Option<Address>,
}

#[contractevent(topics = ["FIACoin", "APY"])]
struct StakingApyUpdated {
    lock_period: u64,
    apy_bp: u32,
}

pub fn emit_initialized(
    env: &Env,
    admin: &Address,
    treasury: &Address,
    founder: &Address,
    initial_supply: i128,
) {
    Initialized {
        admin: admin.clone(),
        treasury: treasury.clone(),
        founder: founder.clone(),
        initial_supply,
    }
    .publish(env);
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    Transfer {
        from: from.clone(),
        to: to.clone(),
        amount,
    }
    .publish(env);
}

pub fn emit_fee_distributed(
    env: &Env,
    payer: &Address,
    fee: i128,
    treasury_share: i128,
    founder_share: i128,
    burn_share: i128,
) {
    FeeDistributed {
        payer: payer.clone(),
        fee,
        treasury_share,
        founder_share,
        burn_share,
    }
    .publish(env);
}

pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    Burn {
        from: from.clone(),
        amount,
    }
    .publish(env);
}

pub fn emit_batch_transfer(env: &Env, from: &Address, recipients: u32, total_amount: i128) {
    BatchTransfer {
        from: from.clone(),
        recipients,
        total_amount,
    }
    .publish(env);
}

pub fn emit_transfer_with_data(env: &Env, from: &Address, to: &Address, amount: i128, data: Bytes) {
    TransferWithData {
        from: from.clone(),
        to: to.clone(),
        amount,
        data,
    }
    .publish(env);
}

pub fn emit_proposal_created(
    env: &Env,
    proposal_id: u64,
    proposer: &Address,
    proposal_type: ProposalType,
    end_time: u64,
) {
    ProposalCreated {
        proposal_id,
        proposer: proposer.clone(),
        proposal_type,
        end_time,
    }
    .publish(env);
}

pub fn emit_vote_cast(env: &Env, proposal_id: u64, voter: &Address, support: bool, weight: i128) {
    VoteCast {
        proposal_id,
        voter: voter.clone(),
        support,
        weight,
    }
    .publish(env);
}

pub fn emit_proposal_executed(
    env: &Env,
    proposal_id: u64,
    executor: &Address,
    proposal_type: ProposalType,
) {
    ProposalExecuted {
        proposal_id,
        executor: executor.clone(),
        proposal_type,
    }
    .publish(env);
}

pub fn emit_staked(
    env: &Env,
    user: &Address,
    index: u32,
    amount: i128,
    lock_period: u64,
    auto_compound: bool,
) {
    Staked {
        user: user.clone(),
        index,
        amount,
        lock_period,
        auto_compound,
    }
    .publish(env);
}

pub fn emit_unstaked(env: &Env, user: &Address, index: u32, returned: i128, penalty: i128) {
    Unstaked {
        user: user.clone(),
        index,
        returned,
        penalty,
    }
    .publish(env);
}

pub fn emit_reward_claimed(env: &Env, user: &Address, index: u32, reward: i128, compounded: bool) {
    RewardClaimed {
        user: user.clone(),
        index,
        reward,
        compounded,
    }
    .publish(env);
}

pub fn emit_reward_pool_funded(env: &Env, funder: &Address, amount: i128, pool: i128) {
    RewardPoolFunded {
        funder: funder.clone(),
        amount,
        pool,
    }
    .publish(env);
}

pub fn emit_emergency_action(env: &Env, admin: &Address, paused: bool) {
    EmergencyAction {
        admin: admin.clone(),
        paused,
        timestamp: env.ledger().timestamp(),
    }
    .publish(env);
}

pub fn emit_fee_config_updated(env: &Env, config: &FeeConfig) {
    FeeConfigUpdated {
        config: config.clone(),
    }
    .publish(env);
}

pub fn emit_limits_updated(env: &Env, limits: &TransactionLimits) {
    LimitsUpdated {
        limits: limits.clone(),
    }
    .publish(env);
}

pub fn emit_fee_exemption_set(env: &Env, account: &Address, exempt: bool) {
    FeeExemptionSet {
        account: account.clone(),
        exempt,
    }
    .publish(env);
}

pub fn emit_executor_set(env: &Env, executor: &Option<Address>) {
    ExecutorSet {
        executor: executor.clone(),
    }
    .publish(env);
}

pub fn emit_staking_apy_updated(env: &Env, lock_period: u64, apy_bp: u32) {
    StakingApyUpdated {
        lock_period,
        apy_bp,
    }
    .publish(env);
}

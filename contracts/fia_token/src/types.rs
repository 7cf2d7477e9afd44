//! Data types for the FIACoin token contract

use soroban_sdk::{contracttype, Address, String};

// ============================================================================
// Configuration
// ============================================================================

/// Transfer fee configuration, replaced wholesale on every change.
///
/// `treasury_bp + founder_bp + burn_bp == total_fee_bp` holds for every stored value.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfig {
    /// Total fee charged on a transfer, in basis points
    pub total_fee_bp: u32,
    /// Share of the fee credited to the treasury
    pub treasury_bp: u32,
    /// Share of the fee credited to the founder
    pub founder_bp: u32,
    /// Share of the fee destroyed
    pub burn_bp: u32,
    /// Incremented on every replacement
    pub version: u32,
    /// Timestamp of the last `total_fee_bp` change, `None` until the first one
    pub rate_changed_at: Option<u64>,
}

/// Global transaction limits
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionLimits {
    /// Largest amount a non-exempt sender may move in one transfer
    pub max_tx_amount: i128,
    /// Largest balance a non-exempt recipient may hold after a transfer
    pub max_wallet_amount: i128,
    /// Seconds between two protected transfers of the same sender
    pub tx_cooldown: u64,
    /// Whether ordinary transfers are checked against the limits
    pub limits_active: bool,
    /// Incremented on every replacement
    pub version: u32,
}

/// Ledger position of an account's last protected transfer
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LastProtectedTx {
    pub sequence: u32,
    pub timestamp: u64,
}

// ============================================================================
// Staking
// ============================================================================

/// A single stake. Withdrawn stakes stay in place with `amount == 0`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    /// Principal currently locked (grows when rewards are compounded)
    pub amount: i128,
    /// Lock period in seconds
    pub lock_period: u64,
    /// Whether claimed rewards are added to the principal
    pub auto_compound: bool,
    /// Timestamp when the stake was created
    pub staking_time: u64,
    /// Timestamp from which the next reward accrues
    pub last_reward_claim: u64,
}

impl StakeRecord {
    pub fn is_active(&self) -> bool {
        self.amount > 0
    }

    pub fn unlock_time(&self) -> u64 {
        self.staking_time.saturating_add(self.lock_period)
    }
}

// ============================================================================
// Governance
// ============================================================================

/// Kind of a governance proposal
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalType {
    FeeChange = 0,
    FeeDistribution = 1,
    TreasurySpend = 2,
    ParameterChange = 3,
    StakingApyChange = 4,
    Signal = 5,
}

/// Typed payload applied when a proposal is executed
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalAction {
    /// New total fee in basis points
    FeeChange(u32),
    /// New treasury, founder and burn shares
    FeeDistribution(u32, u32, u32),
    /// Pay `amount` from the treasury account to `recipient`
    TreasurySpend(Address, i128),
    /// Replace the transaction limits
    ParameterChange(TransactionLimits),
    /// Set the APY (basis points) of one lock period
    StakingApyChange(u64, u32),
    /// No on-chain effect
    Signal,
}

impl ProposalAction {
    pub fn proposal_type(&self) -> ProposalType {
        match self {
            ProposalAction::FeeChange(_) => ProposalType::FeeChange,
            ProposalAction::FeeDistribution(..) => ProposalType::FeeDistribution,
            ProposalAction::TreasurySpend(..) => ProposalType::TreasurySpend,
            ProposalAction::ParameterChange(_) => ProposalType::ParameterChange,
            ProposalAction::StakingApyChange(..) => ProposalType::StakingApyChange,
            ProposalAction::Signal => ProposalType::Signal,
        }
    }
}

/// A token-weighted governance proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Sequential identifier starting at 0
    pub id: u64,
    /// Account that created the proposal
    pub proposer: Address,
    /// Free-form description
    pub description: String,
    /// Discriminant of `action`
    pub proposal_type: ProposalType,
    /// Effect applied on execution
    pub action: ProposalAction,
    /// Timestamp when voting opened
    pub start_time: u64,
    /// Timestamp when voting closes
    pub end_time: u64,
    /// Token weight voting for
    pub for_votes: i128,
    /// Token weight voting against
    pub against_votes: i128,
    /// Whether the action has been applied
    pub executed: bool,
    /// Timestamp of execution
    pub executed_at: Option<u64>,
}

/// Lifecycle stage of a proposal, derived from its tallies and the ledger time
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalState {
    /// Voting is open
    Active = 0,
    /// Voting closed, execution delay running
    AwaitingExecution = 1,
    /// Too few tokens voted
    QuorumFailed = 2,
    /// For-votes did not exceed against-votes
    Rejected = 3,
    /// Executable now
    Ready = 4,
    /// Action applied
    Executed = 5,
}

// ============================================================================
// Analytics
// ============================================================================

/// Global counters
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenStats {
    pub total_supply: i128,
    pub initial_supply: i128,
    pub total_burned: i128,
    pub total_fees_collected: i128,
    pub total_staked: i128,
    pub reward_pool: i128,
    pub holder_count: u32,
    pub tx_count: u64,
}

/// Per-account counters
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserStats {
    pub tx_count: u64,
    pub total_sent: i128,
    pub total_received: i128,
    pub total_fees_paid: i128,
    pub total_staked: i128,
    pub rewards_claimed: i128,
    pub last_activity: u64,
}

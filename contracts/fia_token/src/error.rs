//! Error types for the FIACoin token contract

use soroban_sdk::contracterror;

/// Token contract errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller is not the admin
    Unauthorized = 3,
    /// Amount must be strictly positive
    InvalidAmount = 4,
    /// Account balance does not cover the amount
    InsufficientBalance = 5,
    /// Contract is paused
    ContractPaused = 6,
    /// A state-mutating call is already in flight
    Reentrancy = 7,
    /// Checked arithmetic overflowed
    ArithmeticOverflow = 8,

    /// Total fee exceeds the hard cap
    FeeTooHigh = 10,
    /// Fee rate changed again before the cool-down elapsed
    FeeChangeTooFrequent = 11,
    /// Treasury, founder and burn shares do not sum to the total fee
    InvalidFeeDistribution = 12,

    /// Nonce already consumed by this sender
    NonceUsed = 20,
    /// Sender already made a protected transfer in this ledger
    SameBlockTransaction = 21,
    /// Protected transfer cooldown has not elapsed
    CooldownNotMet = 22,
    /// Transaction amount exceeds limit
    TransactionLimitExceeded = 23,
    /// Recipient balance would exceed the wallet limit
    WalletLimitExceeded = 24,
    /// Batch input vectors differ in length
    ArrayLengthMismatch = 25,
    /// Batch input is empty
    EmptyBatch = 26,
    /// Transaction limits must be strictly positive
    InvalidLimits = 27,

    /// Lock period is not one of the supported values
    InvalidLockPeriod = 30,
    /// No stake exists at this index
    InvalidStakeIndex = 31,
    /// Stake at this index was already withdrawn
    StakeNotActive = 32,
    /// APY exceeds the maximum rate
    InvalidApy = 33,

    /// Insufficient balance for proposal
    InsufficientBalanceForProposal = 40,
    /// Proposal with given ID was not found
    ProposalNotFound = 41,
    /// Voting period ended
    VotingPeriodEnded = 42,
    /// Account already voted on this proposal
    AlreadyVoted = 43,
    /// Voting still active
    VotingStillActive = 44,
    /// Execution delay not met
    ExecutionDelayNotMet = 45,
    /// Proposal has already been executed
    AlreadyExecuted = 46,
    /// Not enough tokens took part in the vote
    QuorumNotMet = 47,
    /// For-votes did not exceed against-votes
    ProposalRejected = 48,
    /// An executor is configured and the caller is not it
    NotExecutor = 49,
    /// Proposal action failed validation
    InvalidProposalAction = 50,
    /// Voter holds no tokens
    NoVotingPower = 51,
}

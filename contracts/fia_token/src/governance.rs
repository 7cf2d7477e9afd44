//! Token-weighted governance.
//!
//! Voting power is the voter's spendable balance at the moment of voting. Quorum and
//! majority are evaluated only when `execute` is called; a proposal that fails either
//! check is never marked, it just keeps failing. `proposal_state` reports the derived
//! stage without writing anything.

use soroban_sdk::{log, Address, Env, String};

use crate::config::{
    is_valid_lock_period, percent_of, EXECUTION_DELAY, MAX_APY_BP, MAX_TOTAL_FEE_BP,
    PROPOSAL_THRESHOLD, QUORUM_PERCENTAGE, VOTING_PERIOD,
};
use crate::error::TokenError;
use crate::events;
use crate::fees;
use crate::ledger;
use crate::staking;
use crate::storage;
use crate::types::{Proposal, ProposalAction, ProposalState, TransactionLimits};

/// Static checks on an action, run before a proposal is accepted.
pub fn validate_action(action: &ProposalAction) -> Result<(), TokenError> {
    let valid = match action {
        ProposalAction::FeeChange(fee_bp) => *fee_bp <= MAX_TOTAL_FEE_BP,
        ProposalAction::FeeDistribution(treasury_bp, founder_bp, burn_bp) => {
            *treasury_bp as u64 + *founder_bp as u64 + *burn_bp as u64
                <= MAX_TOTAL_FEE_BP as u64
        }
        ProposalAction::TreasurySpend(_, amount) => *amount > 0,
        ProposalAction::ParameterChange(limits) => limits.is_valid(),
        ProposalAction::StakingApyChange(lock_period, apy_bp) => {
            is_valid_lock_period(*lock_period) && *apy_bp <= MAX_APY_BP
        }
        ProposalAction::Signal => true,
    };
    if !valid {
        return Err(TokenError::InvalidProposalAction);
    }
    Ok(())
}

pub fn propose(
    env: &Env,
    proposer: &Address,
    description: String,
    action: ProposalAction,
) -> Result<u64, TokenError> {
    if storage::get_balance(env, proposer) < PROPOSAL_THRESHOLD {
        return Err(TokenError::InsufficientBalanceForProposal);
    }
    validate_action(&action)?;

    let id = storage::get_proposal_count(env);
    let start_time = env.ledger().timestamp();
    let end_time = start_time
        .checked_add(VOTING_PERIOD)
        .ok_or(TokenError::ArithmeticOverflow)?;

    let proposal = Proposal {
        id,
        proposer: proposer.clone(),
        description,
        proposal_type: action.proposal_type(),
        action,
        start_time,
        end_time,
        for_votes: 0,
        against_votes: 0,
        executed: false,
        executed_at: None,
    };
    storage::set_proposal(env, &proposal);
    storage::set_proposal_count(env, id + 1);

    events::emit_proposal_created(env, id, proposer, proposal.proposal_type, end_time);
    Ok(id)
}

pub fn vote(env: &Env, voter: &Address, proposal_id: u64, support: bool) -> Result<i128, TokenError> {
    let mut proposal =
        storage::get_proposal(env, proposal_id).ok_or(TokenError::ProposalNotFound)?;

    if env.ledger().timestamp() > proposal.end_time {
        return Err(TokenError::VotingPeriodEnded);
    }
    if storage::has_voted(env, proposal_id, voter) {
        return Err(TokenError::AlreadyVoted);
    }
    let weight = storage::get_balance(env, voter);
    if weight <= 0 {
        return Err(TokenError::NoVotingPower);
    }

    if support {
        proposal.for_votes = proposal
            .for_votes
            .checked_add(weight)
            .ok_or(TokenError::ArithmeticOverflow)?;
    } else {
        proposal.against_votes = proposal
            .against_votes
            .checked_add(weight)
            .ok_or(TokenError::ArithmeticOverflow)?;
    }
    storage::set_proposal(env, &proposal);
    storage::set_voted(env, proposal_id, voter);

    events::emit_vote_cast(env, proposal_id, voter, support, weight);
    Ok(weight)
}

fn quorum(env: &Env) -> i128 {
    percent_of(storage::get_total_supply(env), QUORUM_PERCENTAGE)
}

fn total_votes(proposal: &Proposal) -> Result<i128, TokenError> {
    proposal
        .for_votes
        .checked_add(proposal.against_votes)
        .ok_or(TokenError::ArithmeticOverflow)
}

pub fn execute(env: &Env, caller: &Address, proposal_id: u64) -> Result<(), TokenError> {
    if let Some(executor) = storage::get_executor(env) {
        if caller != &executor {
            return Err(TokenError::NotExecutor);
        }
    }

    let mut proposal =
        storage::get_proposal(env, proposal_id).ok_or(TokenError::ProposalNotFound)?;
    let now = env.ledger().timestamp();

    if now <= proposal.end_time {
        return Err(TokenError::VotingStillActive);
    }
    if now <= proposal.end_time.saturating_add(EXECUTION_DELAY) {
        return Err(TokenError::ExecutionDelayNotMet);
    }
    if proposal.executed {
        return Err(TokenError::AlreadyExecuted);
    }
    if total_votes(&proposal)? < quorum(env) {
        return Err(TokenError::QuorumNotMet);
    }
    if proposal.for_votes <= proposal.against_votes {
        return Err(TokenError::ProposalRejected);
    }

    proposal.executed = true;
    proposal.executed_at = Some(now);
    storage::set_proposal(env, &proposal);

    apply_action(env, &proposal.action)?;

    events::emit_proposal_executed(env, proposal_id, caller, proposal.proposal_type);
    Ok(())
}

fn apply_action(env: &Env, action: &ProposalAction) -> Result<(), TokenError> {
    log!(env, "applying proposal action", action.proposal_type());
    match action {
        ProposalAction::FeeChange(fee_bp) => {
            fees::set_total_fee_bp(env, *fee_bp)?;
        }
        ProposalAction::FeeDistribution(treasury_bp, founder_bp, burn_bp) => {
            fees::set_fee_distribution(env, *treasury_bp, *founder_bp, *burn_bp)?;
        }
        ProposalAction::TreasurySpend(recipient, amount) => {
            let treasury = storage::get_treasury(env)?;
            ledger::move_balance(env, &treasury, recipient, *amount)?;
        }
        ProposalAction::ParameterChange(limits) => {
            let current = storage::get_limits(env)?;
            let limits = TransactionLimits {
                version: current.version.saturating_add(1),
                ..limits.clone()
            };
            storage::set_limits(env, &limits);
            events::emit_limits_updated(env, &limits);
        }
        ProposalAction::StakingApyChange(lock_period, apy_bp) => {
            staking::set_apy(env, *lock_period, *apy_bp)?;
        }
        ProposalAction::Signal => {}
    }
    Ok(())
}

pub fn proposal_state(env: &Env, proposal_id: u64) -> Result<ProposalState, TokenError> {
    let proposal =
        storage::get_proposal(env, proposal_id).ok_or(TokenError::ProposalNotFound)?;
    let now = env.ledger().timestamp();

    let state = if proposal.executed {
        ProposalState::Executed
    } else if now <= proposal.end_time {
        ProposalState::Active
    } else if total_votes(&proposal)? < quorum(env) {
        ProposalState::QuorumFailed
    } else if proposal.for_votes <= proposal.against_votes {
        ProposalState::Rejected
    } else if now <= proposal.end_time.saturating_add(EXECUTION_DELAY) {
        ProposalState::AwaitingExecution
    } else {
        ProposalState::Ready
    };
    Ok(state)
}

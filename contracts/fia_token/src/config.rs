//! Protocol constants and default configuration

use crate::types::{FeeConfig, TransactionLimits};

pub const TOKEN_NAME: &str = "FIACoin";
pub const TOKEN_SYMBOL: &str = "FIA";
pub const DECIMALS: u32 = 18;
pub const ONE_TOKEN: i128 = 1_000_000_000_000_000_000;

pub const DAY: u64 = 24 * 60 * 60;

// Fees
pub const BASIS_POINTS: i128 = 10_000;
pub const MAX_TOTAL_FEE_BP: u32 = 200; // 2%
pub const FEE_CHANGE_DELAY: u64 = DAY;

// Governance
pub const PROPOSAL_THRESHOLD: i128 = 1_000_000 * ONE_TOKEN;
pub const VOTING_PERIOD: u64 = 7 * DAY;
pub const EXECUTION_DELAY: u64 = 2 * DAY;
pub const QUORUM_PERCENTAGE: i128 = 10;

// Staking
pub const LOCK_30_DAYS: u64 = 30 * DAY;
pub const LOCK_90_DAYS: u64 = 90 * DAY;
pub const LOCK_180_DAYS: u64 = 180 * DAY;
pub const LOCK_365_DAYS: u64 = 365 * DAY;
pub const LOCK_PERIODS: [u64; 4] = [LOCK_30_DAYS, LOCK_90_DAYS, LOCK_180_DAYS, LOCK_365_DAYS];
pub const DEFAULT_APY_BP: [u32; 4] = [300, 500, 700, 1_000];
pub const MAX_APY_BP: u32 = 5_000; // 50%
pub const SECONDS_PER_YEAR: i128 = 365 * DAY as i128;
pub const EARLY_UNSTAKE_PENALTY_PERCENT: i128 = 10;

// Storage TTL (ledgers)
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 34_560;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 259_200;

pub fn is_valid_lock_period(lock_period: u64) -> bool {
    LOCK_PERIODS.contains(&lock_period)
}

/// `percent`% of `amount`, rounded down.
///
/// When `amount * percent` does not fit in an i128 the division runs first, which can
/// round down by less than `percent` units.
pub fn percent_of(amount: i128, percent: i128) -> i128 {
    match amount.checked_mul(percent) {
        Some(product) => product / 100,
        None => amount / 100 * percent,
    }
}

impl FeeConfig {
    /// 1% fee split 50 / 20 / 30 between treasury, founder and burn.
    pub fn initial() -> Self {
        Self {
            total_fee_bp: 100,
            treasury_bp: 50,
            founder_bp: 20,
            burn_bp: 30,
            version: 1,
            rate_changed_at: None,
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.treasury_bp as u64 + self.founder_bp as u64 + self.burn_bp as u64
            == self.total_fee_bp as u64
    }
}

impl TransactionLimits {
    /// Limits of 1% (transaction) and 2% (wallet) of the supply, inactive for ordinary transfers.
    pub fn initial(supply: i128) -> Self {
        Self {
            max_tx_amount: (supply / 100).max(1),
            max_wallet_amount: (supply / 50).max(1),
            tx_cooldown: 60,
            limits_active: false,
            version: 1,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.max_tx_amount > 0 && self.max_wallet_amount > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_is_exact_for_ordinary_amounts() {
        assert_eq!(percent_of(1_000, 10), 100);
        assert_eq!(percent_of(999, 10), 99);
    }

    #[test]
    fn percent_of_divides_first_near_i128_max() {
        let amount = i128::MAX / 2;
        assert_eq!(percent_of(amount, 10), amount / 100 * 10);
        assert!(percent_of(i128::MAX, 100) > 0);
    }
}

#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger as _},
    Address, Env, IntoVal, Map, String, Symbol, TryFromVal, Val, Vec,
};

use crate::guard::CallGuard;
use crate::{FiaToken, FiaTokenClient, TokenError, ONE_TOKEN};

mod analytics;

// ============================================================================
// Test Helpers
// ============================================================================

pub const SUPPLY: i128 = 1_000_000_000 * ONE_TOKEN;
pub const START_TIME: u64 = 1_000;

pub struct Accounts {
    pub admin: Address,
    pub treasury: Address,
    pub founder: Address,
    pub alice: Address,
    pub bob: Address,
    pub carol: Address,
}

pub fn create_env() -> Env {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = START_TIME;
        li.sequence_number = 1;
    });
    env
}

pub fn setup(env: &Env) -> (FiaTokenClient<'_>, Accounts) {
    let contract_id = env.register(FiaToken, ());
    let client = FiaTokenClient::new(env, &contract_id);

    let accounts = Accounts {
        admin: Address::generate(env),
        treasury: Address::generate(env),
        founder: Address::generate(env),
        alice: Address::generate(env),
        bob: Address::generate(env),
        carol: Address::generate(env),
    };
    client.initialize(
        &accounts.admin,
        &accounts.treasury,
        &accounts.founder,
        &SUPPLY,
    );
    (client, accounts)
}

/// Fee-free transfer from the (exempt) admin.
pub fn fund(client: &FiaTokenClient, accounts: &Accounts, to: &Address, amount: i128) {
    client.transfer(&accounts.admin, to, &amount);
}

/// Data of the latest `["FIACoin", action]` event published by `contract`.
pub fn last_event(env: &Env, contract: &Address, action: &str) -> Option<Map<Symbol, Val>> {
    let topics: Vec<Val> = (Symbol::new(env, "FIACoin"), Symbol::new(env, action)).into_val(env);
    env.events()
        .all()
        .iter()
        .filter(|(address, event_topics, _)| address == contract && event_topics == &topics)
        .last()
        .map(|(_, _, data)| Map::try_from_val(env, &data).unwrap())
}

pub fn event_field<T: TryFromVal<Env, Val>>(env: &Env, data: &Map<Symbol, Val>, name: &str) -> T {
    let value = data.get(Symbol::new(env, name)).unwrap();
    T::try_from_val(env, &value).unwrap()
}

/// Move to the next ledger, `seconds` later.
pub fn advance(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
        li.sequence_number += 1;
    });
}

// ============================================================================
// Initialization Tests
// ============================================================================

#[test]
fn test_initialize_success() {
    let env = create_env();
    let (client, accounts) = setup(&env);

    assert_eq!(client.total_supply(), SUPPLY);
    assert_eq!(client.balance(&accounts.admin), SUPPLY);
    assert_eq!(client.admin(), accounts.admin);
    assert_eq!(client.treasury(), accounts.treasury);
    assert_eq!(client.founder(), accounts.founder);
    assert_eq!(client.name(), String::from_str(&env, "FIACoin"));
    assert_eq!(client.symbol(), String::from_str(&env, "FIA"));
    assert_eq!(client.decimals(), 18);

    assert!(client.is_fee_exempt(&accounts.admin));
    assert!(client.is_fee_exempt(&accounts.treasury));
    assert!(client.is_fee_exempt(&accounts.founder));
    assert!(client.is_fee_exempt(&client.address));
    assert!(!client.is_fee_exempt(&accounts.alice));

    let config = client.fee_config();
    assert_eq!(config.total_fee_bp, 100);
    assert_eq!(config.treasury_bp, 50);
    assert_eq!(config.founder_bp, 20);
    assert_eq!(config.burn_bp, 30);

    let limits = client.tx_limits();
    assert_eq!(limits.max_tx_amount, SUPPLY / 100);
    assert_eq!(limits.max_wallet_amount, SUPPLY / 50);
    assert!(!limits.limits_active);
    assert!(!client.is_paused());
    assert_eq!(client.executor(), None);
}

#[test]
fn test_initialize_twice_fails() {
    let env = create_env();
    let (client, accounts) = setup(&env);

    let result = client.try_initialize(
        &accounts.admin,
        &accounts.treasury,
        &accounts.founder,
        &SUPPLY,
    );
    assert_eq!(result, Err(Ok(TokenError::AlreadyInitialized)));
}

#[test]
fn test_initialize_zero_supply_fails() {
    let env = create_env();
    let contract_id = env.register(FiaToken, ());
    let client = FiaTokenClient::new(&env, &contract_id);
    let admin = Address::generate(&env);

    let result = client.try_initialize(&admin, &admin, &admin, &0);
    assert_eq!(result, Err(Ok(TokenError::InvalidAmount)));
}

#[test]
fn test_operations_before_initialize_fail() {
    let env = create_env();
    let contract_id = env.register(FiaToken, ());
    let client = FiaTokenClient::new(&env, &contract_id);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let result = client.try_transfer(&alice, &bob, &10);
    assert_eq!(result, Err(Ok(TokenError::NotInitialized)));
}

// ============================================================================
// Base Ledger Tests
// ============================================================================

#[test]
fn test_transfer_insufficient_balance() {
    let env = create_env();
    let (client, accounts) = setup(&env);
    fund(&client, &accounts, &accounts.alice, 100);

    let result = client.try_transfer(&accounts.alice, &accounts.bob, &101);
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    assert_eq!(client.balance(&accounts.alice), 100);
}

#[test]
fn test_transfer_non_positive_amount() {
    let env = create_env();
    let (client, accounts) = setup(&env);

    let result = client.try_transfer(&accounts.admin, &accounts.bob, &0);
    assert_eq!(result, Err(Ok(TokenError::InvalidAmount)));
    let result = client.try_transfer(&accounts.admin, &accounts.bob, &-5);
    assert_eq!(result, Err(Ok(TokenError::InvalidAmount)));
}

#[test]
fn test_burn_reduces_supply() {
    let env = create_env();
    let (client, accounts) = setup(&env);

    client.burn(&accounts.admin, &(1_000 * ONE_TOKEN));

    assert_eq!(client.total_supply(), SUPPLY - 1_000 * ONE_TOKEN);
    assert_eq!(client.balance(&accounts.admin), SUPPLY - 1_000 * ONE_TOKEN);
    assert_eq!(client.get_token_stats().total_burned, 1_000 * ONE_TOKEN);
}

#[test]
fn test_burn_more_than_balance_fails() {
    let env = create_env();
    let (client, accounts) = setup(&env);
    fund(&client, &accounts, &accounts.alice, 50);

    let result = client.try_burn(&accounts.alice, &51);
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
}

// ============================================================================
// Admin & Pause Tests
// ============================================================================

#[test]
fn test_admin_functions_reject_non_admin() {
    let env = create_env();
    let (client, accounts) = setup(&env);

    assert_eq!(
        client.try_set_total_fee_bp(&accounts.alice, &150),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(
        client.try_set_fee_exempt(&accounts.alice, &accounts.alice, &true),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(
        client.try_emergency_pause(&accounts.alice),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(
        client.try_set_executor(&accounts.alice, &Some(accounts.alice.clone())),
        Err(Ok(TokenError::Unauthorized))
    );
}

#[test]
fn test_pause_blocks_user_operations() {
    let env = create_env();
    let (client, accounts) = setup(&env);
    fund(&client, &accounts, &accounts.alice, 10_000);

    client.emergency_pause(&accounts.admin);
    assert!(client.is_paused());

    assert_eq!(
        client.try_transfer(&accounts.alice, &accounts.bob, &100),
        Err(Ok(TokenError::ContractPaused))
    );
    assert_eq!(
        client.try_protected_transfer(&accounts.alice, &accounts.bob, &100, &1),
        Err(Ok(TokenError::ContractPaused))
    );
    assert_eq!(
        client.try_burn(&accounts.alice, &100),
        Err(Ok(TokenError::ContractPaused))
    );
    assert_eq!(
        client.try_stake(&accounts.alice, &100, &crate::LOCK_30_DAYS, &false),
        Err(Ok(TokenError::ContractPaused))
    );

    // Admin controls stay available
    client.set_fee_exempt(&accounts.admin, &accounts.alice, &true);

    client.emergency_unpause(&accounts.admin);
    assert!(!client.is_paused());
    client.transfer(&accounts.alice, &accounts.bob, &100);
    assert_eq!(client.balance(&accounts.bob), 100);
}

#[test]
fn test_batch_set_fee_exempt() {
    let env = create_env();
    let (client, accounts) = setup(&env);

    let accounts_vec = soroban_sdk::vec![&env, accounts.alice.clone(), accounts.bob.clone()];
    client.batch_set_fee_exempt(&accounts.admin, &accounts_vec, &true);
    assert!(client.is_fee_exempt(&accounts.alice));
    assert!(client.is_fee_exempt(&accounts.bob));

    client.batch_set_fee_exempt(&accounts.admin, &accounts_vec, &false);
    assert!(!client.is_fee_exempt(&accounts.alice));
    assert!(!client.is_fee_exempt(&accounts.bob));
}

// ============================================================================
// Reentrancy Guard Tests
// ============================================================================

#[test]
fn test_call_guard_blocks_reentry() {
    let env = Env::default();
    let contract_id = env.register(FiaToken, ());

    env.as_contract(&contract_id, || {
        let guard = CallGuard::acquire(&env).unwrap();
        assert_eq!(CallGuard::acquire(&env).err(), Some(TokenError::Reentrancy));

        drop(guard);
        assert!(CallGuard::acquire(&env).is_ok());
    });
}

#[test]
fn test_guard_released_after_failed_call() {
    let env = create_env();
    let (client, accounts) = setup(&env);

    let result = client.try_transfer(&accounts.alice, &accounts.bob, &1);
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));

    // A following call must not see a stale lock
    fund(&client, &accounts, &accounts.alice, 10);
    assert_eq!(client.balance(&accounts.alice), 10);
}

use soroban_sdk::vec;

use super::{advance, create_env, fund, setup, SUPPLY, START_TIME};
use crate::{LOCK_30_DAYS, ONE_TOKEN};

#[test]
fn test_initial_token_stats() {
    let env = create_env();
    let (client, _) = setup(&env);

    let stats = client.get_token_stats();
    assert_eq!(stats.total_supply, SUPPLY);
    assert_eq!(stats.initial_supply, SUPPLY);
    assert_eq!(stats.total_burned, 0);
    assert_eq!(stats.total_fees_collected, 0);
    assert_eq!(stats.total_staked, 0);
    assert_eq!(stats.reward_pool, 0);
    assert_eq!(stats.holder_count, 1);
    assert_eq!(stats.tx_count, 0);
}

#[test]
fn test_supply_plus_burned_equals_initial_supply() {
    let env = create_env();
    let (client, accounts) = setup(&env);
    fund(&client, &accounts, &accounts.alice, 1_000_000);

    client.transfer(&accounts.alice, &accounts.bob, &123_457);
    client.transfer(&accounts.bob, &accounts.carol, &50_001);
    client.burn(&accounts.alice, &777);
    client.protected_transfer(&accounts.carol, &accounts.alice, &10_000, &1);

    let stats = client.get_token_stats();
    assert!(stats.total_burned > 777);
    assert_eq!(stats.total_supply + stats.total_burned, stats.initial_supply);
    assert_eq!(client.total_supply(), stats.total_supply);
}

#[test]
fn test_holder_count_tracks_first_positive_balance() {
    let env = create_env();
    let (client, accounts) = setup(&env);
    fund(&client, &accounts, &accounts.alice, 10_000);
    assert_eq!(client.get_token_stats().holder_count, 2);

    // Fee-bearing transfer reaches bob, treasury and founder
    client.transfer(&accounts.alice, &accounts.bob, &1_000);
    assert_eq!(client.get_token_stats().holder_count, 5);

    // Emptying and refilling an account does not count it twice
    client.transfer(&accounts.bob, &accounts.alice, &990);
    client.transfer(&accounts.alice, &accounts.bob, &1_000);
    assert_eq!(client.get_token_stats().holder_count, 5);

    // The contract itself is never counted
    client.stake(&accounts.alice, &1_000, &LOCK_30_DAYS, &false);
    assert_eq!(client.get_token_stats().holder_count, 5);
}

#[test]
fn test_tx_count_counts_each_recipient() {
    let env = create_env();
    let (client, accounts) = setup(&env);
    fund(&client, &accounts, &accounts.alice, 10_000);
    client.transfer(&accounts.alice, &accounts.bob, &1_000);

    let recipients = vec![&env, accounts.bob.clone(), accounts.carol.clone()];
    let amounts = vec![&env, 100_i128, 200_i128];
    client.batch_transfer(&accounts.alice, &recipients, &amounts);

    assert_eq!(client.get_token_stats().tx_count, 4);
    assert_eq!(client.get_user_stats(&accounts.alice).tx_count, 3);
    assert_eq!(client.get_user_stats(&accounts.bob).tx_count, 0);
}

#[test]
fn test_user_stats_for_transfers() {
    let env = create_env();
    let (client, accounts) = setup(&env);
    fund(&client, &accounts, &accounts.alice, 10_000);

    advance(&env, 5);
    client.transfer(&accounts.alice, &accounts.bob, &1_000);

    let alice = client.get_user_stats(&accounts.alice);
    assert_eq!(alice.total_received, 10_000);
    assert_eq!(alice.total_sent, 1_000);
    assert_eq!(alice.total_fees_paid, 10);
    assert_eq!(alice.last_activity, START_TIME + 5);

    let bob = client.get_user_stats(&accounts.bob);
    assert_eq!(bob.total_received, 990);
    assert_eq!(bob.total_sent, 0);
    assert_eq!(bob.last_activity, START_TIME + 5);

    let unknown = client.get_user_stats(&accounts.carol);
    assert_eq!(unknown.tx_count, 0);
    assert_eq!(unknown.last_activity, 0);
}

#[test]
fn test_user_stats_for_staking() {
    let env = create_env();
    let (client, accounts) = setup(&env);
    fund(&client, &accounts, &accounts.alice, 10_000 * ONE_TOKEN);
    client.add_to_reward_pool(&accounts.admin, &(1_000 * ONE_TOKEN));

    client.stake(&accounts.alice, &(4_000 * ONE_TOKEN), &LOCK_30_DAYS, &false);
    client.stake(&accounts.alice, &(1_000 * ONE_TOKEN), &LOCK_30_DAYS, &false);
    assert_eq!(
        client.get_user_stats(&accounts.alice).total_staked,
        5_000 * ONE_TOKEN
    );

    advance(&env, LOCK_30_DAYS);
    let reward = client.claim_rewards(&accounts.alice, &0);
    client.unstake(&accounts.alice, &1);

    let stats = client.get_user_stats(&accounts.alice);
    assert_eq!(stats.total_staked, 4_000 * ONE_TOKEN);
    assert!(stats.rewards_claimed >= reward);
    assert_eq!(client.get_token_stats().total_staked, 4_000 * ONE_TOKEN);
}

#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the ledger is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub token: Address,
    pub timestamp: u64,
}

/// Fired when a participant locks tokens.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeExecutedEvent {
    pub participant: Address,
    pub amount: i128,
    pub duration_years: u32,
    pub timestamp: u64,
}

/// Fired when a participant exits with principal plus owed reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakeExecutedEvent {
    pub participant: Address,
    pub principal: i128,
    pub reward: i128,
    pub timestamp: u64,
}

/// Fired when completed terms are paid out while the stake stays locked.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub participant: Address,
    pub amount: i128,
    pub term: u64,
    pub timestamp: u64,
}

/// Fired when the owner funds the reward pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityAddedEvent {
    pub owner: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a claim is attempted before the first term completes.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NoRewardsYetEvent {
    pub participant: Address,
    pub timestamp: u64,
}

/// Fired when every completed term has already been paid.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsAlreadyClaimedEvent {
    pub participant: Address,
    pub term: u64,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, token: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_stake_executed(env: &Env, participant: Address, amount: i128, duration_years: u32) {
    env.events().publish(
        (symbol_short!("STAKED"), participant.clone()),
        StakeExecutedEvent {
            participant,
            amount,
            duration_years,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstake_executed(env: &Env, participant: Address, principal: i128, reward: i128) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), participant.clone()),
        UnstakeExecutedEvent {
            participant,
            principal,
            reward,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, participant: Address, amount: i128, term: u64) {
    env.events().publish(
        (symbol_short!("CLAIMED"), participant.clone()),
        RewardClaimedEvent {
            participant,
            amount,
            term,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_liquidity_added(env: &Env, owner: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("LIQ_ADD"),),
        LiquidityAddedEvent {
            owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_no_rewards_yet(env: &Env, participant: Address) {
    env.events().publish(
        (symbol_short!("NO_RWD"), participant.clone()),
        NoRewardsYetEvent {
            participant,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_already_claimed(env: &Env, participant: Address, term: u64) {
    env.events().publish(
        (symbol_short!("RWD_DONE"), participant.clone()),
        RewardsAlreadyClaimedEvent {
            participant,
            term,
            timestamp: env.ledger().timestamp(),
        },
    );
}

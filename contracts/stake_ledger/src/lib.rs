#![no_std]

pub mod custody;
pub mod events;
pub mod storage;
pub mod terms;

use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, Symbol};

pub use storage::StakeRecord;

// ── Storage key constants ────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const TOKEN: Symbol = symbol_short!("TOKEN");
const INITIALIZED: Symbol = symbol_short!("INIT");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidAmount = 3,
    InvalidDuration = 4,
    OnlyActiveStaker = 5,
    OnlyOwner = 6,
    TransferFailed = 7,
    MathOverflow = 8,
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// Result of `claim_reward`. The two non-paying variants are successful
/// calls that move no tokens and leave the record untouched.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClaimOutcome {
    /// Reward for every newly completed term was transferred.
    Paid(i128),
    /// The first term has not completed.
    NoneYet,
    /// Every completed term was already paid.
    AlreadyClaimed,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakeLedgerContract;

#[contractimpl]
impl StakeLedgerContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the ledger.
    ///
    /// * `owner` – the only address allowed to fund the reward pool.
    /// * `token` – SAC address of the token that is staked and paid out.
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&OWNER, &owner);
        env.storage().instance().set(&TOKEN, &token);
        env.storage().instance().set(&INITIALIZED, &true);
        storage::extend_instance_ttl(&env);

        events::publish_initialized(&env, owner, token);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Lock `amount` tokens for `duration_years` (1, 2 or 3).
    ///
    /// The participant must have approved the ledger for at least `amount`.
    /// Any existing record for the participant is replaced without paying
    /// it out; the replaced principal stays in ledger custody.
    pub fn stake(
        env: Env,
        participant: Address,
        amount: i128,
        duration_years: u32,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        participant.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        if !terms::is_valid_duration(duration_years) {
            return Err(ContractError::InvalidDuration);
        }

        // Tokens move before the record is written; a failed pull leaves
        // nothing behind.
        let token = Self::token(&env)?;
        custody::pull(&env, &token, &participant, amount)?;

        let record = StakeRecord {
            amount,
            duration_years,
            start_timestamp: env.ledger().timestamp(),
            last_claimed_term: 0,
        };
        storage::store_stake(&env, &participant, &record);
        storage::extend_instance_ttl(&env);

        events::publish_stake_executed(&env, participant, amount, duration_years);

        Ok(())
    }

    // ── Unstaking ───────────────────────────────────────────────────────────

    /// Close the participant's stake and return principal plus the reward
    /// for every completed, unpaid term. A partially elapsed term earns
    /// nothing.
    ///
    /// Returns the total amount transferred.
    pub fn unstake(env: Env, participant: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        participant.require_auth();

        let record = Self::require_active(&env, &participant)?;
        storage::extend_instance_ttl(&env);

        let reward = terms::unclaimed_reward(&record, env.ledger().timestamp())
            .ok_or(ContractError::MathOverflow)?;
        let payout = record
            .amount
            .checked_add(reward)
            .ok_or(ContractError::MathOverflow)?;

        // Clear the record before tokens leave custody.
        storage::remove_stake(&env, &participant);

        let token = Self::token(&env)?;
        custody::pay_out(&env, &token, &participant, payout)?;

        events::publish_unstake_executed(&env, participant, record.amount, reward);

        Ok(payout)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay the reward for completed terms while the principal stays locked.
    pub fn claim_reward(env: Env, participant: Address) -> Result<ClaimOutcome, ContractError> {
        Self::require_initialized(&env)?;
        participant.require_auth();

        let mut record = Self::require_active(&env, &participant)?;
        storage::extend_instance_ttl(&env);

        let term = terms::current_term(&record, env.ledger().timestamp());

        if term == 0 {
            events::publish_no_rewards_yet(&env, participant);
            return Ok(ClaimOutcome::NoneYet);
        }
        if term <= record.last_claimed_term {
            events::publish_rewards_already_claimed(&env, participant, term);
            return Ok(ClaimOutcome::AlreadyClaimed);
        }

        let owed = terms::reward(&record, term.saturating_sub(record.last_claimed_term))
            .ok_or(ContractError::MathOverflow)?;

        record.last_claimed_term = term;
        storage::store_stake(&env, &participant, &record);

        let token = Self::token(&env)?;
        custody::pay_out(&env, &token, &participant, owed)?;

        events::publish_reward_claimed(&env, participant, owed, term);

        Ok(ClaimOutcome::Paid(owed))
    }

    // ── Owner ────────────────────────────────────────────────────────────────

    /// Fund the reward pool. Only the owner may call this, after approving
    /// the ledger for `amount`.
    pub fn owner_deposit(env: Env, caller: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let token = Self::token(&env)?;
        custody::pull(&env, &token, &caller, amount)?;
        storage::extend_instance_ttl(&env);

        events::publish_liquidity_added(&env, caller, amount);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Raw record for `participant`; all fields zero when there is none.
    pub fn get_stake_details(env: Env, participant: Address) -> StakeRecord {
        storage::load_stake(&env, &participant)
    }

    /// Reward that `unstake` or `claim_reward` would pay right now.
    pub fn get_pending_rewards(env: Env, participant: Address) -> Result<i128, ContractError> {
        let record = storage::load_stake(&env, &participant);
        if !record.is_active() {
            return Ok(0);
        }
        terms::unclaimed_reward(&record, env.ledger().timestamp())
            .ok_or(ContractError::MathOverflow)
    }

    /// Number of full terms completed by the participant's stake.
    pub fn get_current_term(env: Env, participant: Address) -> u64 {
        let record = storage::load_stake(&env, &participant);
        terms::current_term(&record, env.ledger().timestamp())
    }

    /// Ledger balance minus `get_available_rewards_pool`.
    ///
    /// The pool is reported as the whole balance, so this is always zero.
    /// Principal and liquidity are not tracked separately.
    pub fn get_total_staked(env: Env) -> Result<i128, ContractError> {
        let balance = custody::balance(&env, &Self::token(&env)?);
        let pool = Self::get_available_rewards_pool(env)?;
        balance
            .checked_sub(pool)
            .ok_or(ContractError::MathOverflow)
    }

    /// Entire token balance held by the ledger, principal included.
    pub fn get_available_rewards_pool(env: Env) -> Result<i128, ContractError> {
        Ok(custody::balance(&env, &Self::token(&env)?))
    }

    /// Whether the participant's first full term has elapsed. `false` when
    /// there is no active stake.
    pub fn is_term_complete(env: Env, participant: Address) -> bool {
        let record = storage::load_stake(&env, &participant);
        terms::is_term_complete(&record, env.ledger().timestamp())
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn get_token(env: Env) -> Result<Address, ContractError> {
        Self::token(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the ledger is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the owner fixed at initialization.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != owner {
            return Err(ContractError::OnlyOwner);
        }
        Ok(())
    }

    /// Guard: load the participant's record, reverting if it is not active.
    fn require_active(env: &Env, participant: &Address) -> Result<StakeRecord, ContractError> {
        let record = storage::load_stake(env, participant);
        if !record.is_active() {
            return Err(ContractError::OnlyActiveStaker);
        }
        Ok(record)
    }

    fn token(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&TOKEN)
            .ok_or(ContractError::NotInitialized)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

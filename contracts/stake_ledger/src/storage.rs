use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage key constants ───────────────────────────────────────────────────

const STAKE: Symbol = symbol_short!("STAKE");

const TTL_THRESHOLD: u32 = 17_280;
const TTL_EXTEND_TO: u32 = 518_400;

// ── Types ───────────────────────────────────────────────────────────────────

/// A participant's single position in the ledger.
///
/// `amount == 0` is the absence sentinel: a participant with no entry reads
/// back as `StakeRecord::default()`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakeRecord {
    /// Principal locked by the participant.
    pub amount: i128,
    /// Lock duration in years, one of 1, 2 or 3.
    pub duration_years: u32,
    /// Ledger timestamp at which the stake was created.
    pub start_timestamp: u64,
    /// Highest term index already paid out through a claim or unstake.
    pub last_claimed_term: u64,
}

impl StakeRecord {
    pub fn is_active(&self) -> bool {
        self.amount > 0
    }
}

// ── Storage helpers ─────────────────────────────────────────────────────────

fn stake_key(participant: &Address) -> (Symbol, Address) {
    (STAKE, participant.clone())
}

/// Keep the contract instance (configuration) alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Fetch the participant's record, zeroed when absent.
pub fn load_stake(env: &Env, participant: &Address) -> StakeRecord {
    env.storage()
        .persistent()
        .get(&stake_key(participant))
        .unwrap_or_default()
}

/// Overwrite the participant's record and extend its TTL.
pub fn store_stake(env: &Env, participant: &Address, record: &StakeRecord) {
    let key = stake_key(participant);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Reset the participant to "no active stake".
pub fn remove_stake(env: &Env, participant: &Address) {
    env.storage().persistent().remove(&stake_key(participant));
}

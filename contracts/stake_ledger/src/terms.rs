//! Term counting and reward arithmetic.
//!
//! A term is one full `duration_years * 365` day window since the stake
//! started. Both divisions below are integer floor divisions, so a stake
//! only earns for windows that have fully elapsed:
//!
//! ```text
//! elapsed_days  = (now - start) / 86_400
//! current_term  = elapsed_days / (duration_years * 365)
//! per_term      = amount * duration_years * 25 / 100
//! reward        = per_term * terms_to_claim
//! ```

use crate::storage::StakeRecord;

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const DAYS_PER_YEAR: u64 = 365;

/// Reward paid per year of lock duration, in percent of principal.
pub const REWARD_PERCENT_PER_YEAR: i128 = 25;
pub const PERCENT: i128 = 100;

pub const MIN_DURATION_YEARS: u32 = 1;
pub const MAX_DURATION_YEARS: u32 = 3;

pub fn is_valid_duration(duration_years: u32) -> bool {
    (MIN_DURATION_YEARS..=MAX_DURATION_YEARS).contains(&duration_years)
}

/// Length of one term in days. No leap-year adjustment.
pub fn term_length_days(duration_years: u32) -> u64 {
    u64::from(duration_years).saturating_mul(DAYS_PER_YEAR)
}

/// Number of full terms completed between `start` and `now`.
///
/// Returns 0 for a zero-length term (absent record) and when the clock
/// reads earlier than `start`.
#[allow(clippy::arithmetic_side_effects)]
pub fn current_term(record: &StakeRecord, now: u64) -> u64 {
    let term_days = term_length_days(record.duration_years);
    if term_days == 0 {
        return 0;
    }
    let elapsed_days = now.saturating_sub(record.start_timestamp) / SECONDS_PER_DAY;
    elapsed_days / term_days
}

/// Reward owed for a single completed term, truncated toward zero.
pub fn per_term_reward(record: &StakeRecord) -> Option<i128> {
    record
        .amount
        .checked_mul(i128::from(record.duration_years))?
        .checked_mul(REWARD_PERCENT_PER_YEAR)?
        .checked_div(PERCENT)
}

/// Reward owed for `terms` completed terms. `None` on overflow.
pub fn reward(record: &StakeRecord, terms: u64) -> Option<i128> {
    per_term_reward(record)?.checked_mul(i128::from(terms))
}

/// Reward for every completed term not yet paid out, or 0 when the
/// participant is caught up.
pub fn unclaimed_reward(record: &StakeRecord, now: u64) -> Option<i128> {
    let term = current_term(record, now);
    if term <= record.last_claimed_term {
        return Some(0);
    }
    reward(record, term.saturating_sub(record.last_claimed_term))
}

/// Whether the first full term has elapsed.
pub fn is_term_complete(record: &StakeRecord, now: u64) -> bool {
    if record.amount <= 0 {
        return false;
    }
    let term_secs = term_length_days(record.duration_years).saturating_mul(SECONDS_PER_DAY);
    now >= record.start_timestamp.saturating_add(term_secs)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure arithmetic; no Soroban environment needed.

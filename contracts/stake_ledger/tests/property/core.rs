#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for single-participant ledger behaviour.
//!
//! Invariants tested:
//! - `get_stake_details` returns exactly what `stake` stored
//! - `stake` rejects non-positive amounts and durations outside 1..=3
//! - pending rewards never decrease as time passes, and reset after a claim
//! - unstaking before the first term completes returns exactly the principal
//! - unstaking pays principal plus 25% per duration-year for each full term

use proptest::prelude::*;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::Address;
use stake_ledger::{ClaimOutcome, ContractError, StakeRecord};

use crate::support::{balance, expected_reward, fund, setup, DAY, YEAR};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_stake_details_round_trip(
        amount in 1i128..=1_000_000_000i128,
        duration in 1u32..=3u32,
        start in 0u64..=10 * YEAR,
    ) {
        let ctx = setup(0);
        let participant = Address::generate(&ctx.env);
        fund(&ctx, &participant, amount);

        ctx.env.ledger().set_timestamp(start);
        ctx.client.stake(&participant, &amount, &duration);

        prop_assert_eq!(
            ctx.client.get_stake_details(&participant),
            StakeRecord {
                amount,
                duration_years: duration,
                start_timestamp: start,
                last_claimed_term: 0,
            }
        );
    }

    #[test]
    fn prop_non_positive_amount_rejected(amount in i128::MIN..=0i128, duration in 1u32..=3u32) {
        let ctx = setup(0);
        let participant = Address::generate(&ctx.env);

        match ctx.client.try_stake(&participant, &amount, &duration) {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::InvalidAmount),
            _ => prop_assert!(false, "Expected InvalidAmount error"),
        }
    }

    #[test]
    fn prop_out_of_range_duration_rejected(
        amount in 1i128..=1_000_000i128,
        duration in prop_oneof![Just(0u32), 4u32..=u32::MAX],
    ) {
        let ctx = setup(0);
        let participant = Address::generate(&ctx.env);
        fund(&ctx, &participant, amount);

        match ctx.client.try_stake(&participant, &amount, &duration) {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::InvalidDuration),
            _ => prop_assert!(false, "Expected InvalidDuration error"),
        }
    }

    #[test]
    fn prop_pending_rewards_monotonic_then_reset_by_claim(
        amount in 1i128..=1_000_000i128,
        duration in 1u32..=3u32,
        steps in prop::collection::vec(0u64..=4 * YEAR, 1..8),
    ) {
        let mut steps = steps;
        let ctx = setup(1_000_000_000);
        let participant = Address::generate(&ctx.env);
        fund(&ctx, &participant, amount);
        ctx.env.ledger().set_timestamp(0);
        ctx.client.stake(&participant, &amount, &duration);

        steps.sort_unstable();
        let mut last = 0i128;
        for t in steps {
            ctx.env.ledger().set_timestamp(t);
            let pending = ctx.client.get_pending_rewards(&participant);
            prop_assert!(pending >= last);
            last = pending;
        }

        if let ClaimOutcome::Paid(paid) = ctx.client.claim_reward(&participant) {
            prop_assert_eq!(paid, last);
        }
        prop_assert_eq!(ctx.client.get_pending_rewards(&participant), 0);
    }

    #[test]
    fn prop_unstake_before_first_term_returns_principal(
        amount in 1i128..=1_000_000i128,
        duration in 1u32..=3u32,
        days in 0u64..365,
    ) {
        let ctx = setup(0);
        let participant = Address::generate(&ctx.env);
        fund(&ctx, &participant, amount);
        ctx.env.ledger().set_timestamp(0);
        ctx.client.stake(&participant, &amount, &duration);

        ctx.env.ledger().set_timestamp(days * DAY);
        prop_assert_eq!(ctx.client.unstake(&participant), amount);
        prop_assert_eq!(balance(&ctx, &participant), amount);
        prop_assert!(!ctx.client.get_stake_details(&participant).is_active());
    }

    #[test]
    fn prop_unstake_pays_full_terms(
        amount in 1i128..=1_000_000i128,
        duration in 1u32..=3u32,
        elapsed in 0u64..=12 * YEAR,
    ) {
        let ctx = setup(1_000_000_000);
        let participant = Address::generate(&ctx.env);
        fund(&ctx, &participant, amount);
        ctx.env.ledger().set_timestamp(0);
        ctx.client.stake(&participant, &amount, &duration);

        ctx.env.ledger().set_timestamp(elapsed);
        let terms = elapsed / DAY / (u64::from(duration) * 365);
        let expected = amount + expected_reward(amount, duration, terms);

        prop_assert_eq!(ctx.client.unstake(&participant), expected);
        prop_assert_eq!(balance(&ctx, &participant), expected);
    }
}

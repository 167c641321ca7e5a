#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use stake_ledger::{StakeLedgerContract, StakeLedgerContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { amount: i64, duration_years: u8 },
    Unstake,
    ClaimReward,
    Deposit { amount: i64 },
    Advance { seconds: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(StakeLedgerContract, ());
    let client = StakeLedgerContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &token);

    let mut users = vec![owner.clone()];
    for _ in 0..4 {
        users.push(Address::generate(&env));
    }

    // Every user holds a large balance and a matching allowance so that
    // transfer failures only come from the ledger's own accounting.
    let minter = StellarAssetClient::new(&env, &token);
    let token_client = TokenClient::new(&env, &token);
    for user in users.iter() {
        minter.mint(user, &i128::from(i64::MAX));
        token_client.approve(user, &contract_id, &i128::from(i64::MAX), &10_000);
    }

    let mut now = 0u64;
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Stake { amount, duration_years } => {
                let _ = client.try_stake(caller, &i128::from(amount), &u32::from(duration_years));
            }
            FuzzAction::Unstake => {
                let _ = client.try_unstake(caller);
            }
            FuzzAction::ClaimReward => {
                let _ = client.try_claim_reward(caller);
            }
            FuzzAction::Deposit { amount } => {
                let _ = client.try_owner_deposit(caller, &i128::from(amount));
            }
            FuzzAction::Advance { seconds } => {
                now = now.saturating_add(u64::from(seconds));
                env.ledger().set_timestamp(now);
            }
        }

        // A recorded term index may never run ahead of the clock.
        for user in users.iter() {
            let record = client.get_stake_details(user);
            assert!(record.last_claimed_term <= client.get_current_term(user));
        }
        assert_eq!(client.get_total_staked(), 0);
    }
});

#![no_std]

use por_common::{ReserveFeed, RoundData};
use soroban_sdk::{contract, contractimpl, contractmeta, contracttype, Env};

contractmeta!(
    key = "Description",
    val = "Settable reserve feed for exercising Proof of Reserve consumers"
);

#[derive(Clone)]
#[contracttype]
enum MKey {
    Decimals,
    Round,
}

#[contract]
pub struct MockReserveFeed;

#[contractimpl]
impl MockReserveFeed {
    pub fn initialize(env: Env, decimals: u32) {
        env.storage().instance().set(&MKey::Decimals, &decimals);
    }

    pub fn set_round_data(
        env: Env,
        round_id: u128,
        answer: i128,
        started_at: u64,
        updated_at: u64,
        answered_in_round: u128,
    ) {
        let round = RoundData {
            round_id,
            answer,
            started_at,
            updated_at,
            answered_in_round,
        };
        env.storage().instance().set(&MKey::Round, &round);
    }
}

#[contractimpl]
impl ReserveFeed for MockReserveFeed {
    fn latest_round_data(env: Env) -> RoundData {
        env.storage()
            .instance()
            .get(&MKey::Round)
            .unwrap_or(RoundData {
                round_id: 0,
                answer: 0,
                started_at: 0,
                updated_at: 0,
                answered_in_round: 0,
            })
    }

    fn decimals(env: Env) -> u32 {
        env.storage().instance().get(&MKey::Decimals).unwrap_or(0)
    }
}

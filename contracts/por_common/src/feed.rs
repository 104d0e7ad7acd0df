use soroban_sdk::{contractclient, contracttype, Env};

/// One answer of a reserve feed, in the shape of an aggregator round.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RoundData {
    pub round_id: u128,
    pub answer: i128, // scaled by the feed's `decimals()`
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u128,
}

/// Interface every reserve feed contract exposes to consumers.
#[contractclient(name = "ReserveFeedClient")]
pub trait ReserveFeed {
    fn latest_round_data(env: Env) -> RoundData;
    fn decimals(env: Env) -> u32;
}

/// Rescales a feed answer from `from_decimals` to `to_decimals`.
///
/// Scaling down truncates toward zero. Scaling up saturates at the `i128`
/// bounds.
pub fn normalize_answer(answer: i128, from_decimals: u32, to_decimals: u32) -> i128 {
    if to_decimals >= from_decimals {
        10i128
            .checked_pow(to_decimals - from_decimals)
            .and_then(|factor| answer.checked_mul(factor))
            .unwrap_or(if answer < 0 { i128::MIN } else { i128::MAX })
    } else {
        match 10i128.checked_pow(from_decimals - to_decimals) {
            Some(factor) => answer / factor,
            None => 0,
        }
    }
}

use soroban_sdk::{contracttype, Address, String};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenState {
    pub name: String,
    pub symbol: String,
    pub owner: Address,
    pub feed: Address,
    pub heartbeat: u64,     // Max age of a feed answer in seconds
    pub feed_decimals: u32, // Cached from the feed at initialization
    pub total_supply: i128,
}

#[contracttype]
pub enum DataKey {
    State,
    Balance(Address),
    Allowance(Address, Address),
}

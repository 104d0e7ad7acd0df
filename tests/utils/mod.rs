/// Testing utilities for the Proof of Reserve example contracts

pub mod test_data;

pub use contract_utils::*;
pub use test_data::*;

/// Common test constants
pub mod constants {
    pub const TOKEN_NAME: &str = "WrappedToken";
    pub const TOKEN_SYMBOL: &str = "WTO";
    pub const HEARTBEAT: u64 = 3600 * 24; // 1 day
    pub const FEED_DECIMALS: u32 = 8;
    pub const GENESIS_TIMESTAMP: u64 = 1_700_000_000;
}

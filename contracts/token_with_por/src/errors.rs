use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidFeedAnswer = 4,
    StaleFeedAnswer = 5,
    ReserveExceeded = 6,
    InvalidAmount = 7,
    InsufficientBalance = 8,
    InsufficientAllowance = 9,
}

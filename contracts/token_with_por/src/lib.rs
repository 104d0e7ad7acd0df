#![no_std]

mod contract;
mod errors;
mod events;
mod storage;
mod types;


pub use contract::{TokenWithPor, TokenWithPorClient, TOKEN_DECIMALS};
pub use errors::Error;
pub use types::TokenState;

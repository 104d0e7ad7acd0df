#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, symbol_short, BytesN, Env, Vec,
};

mod storage;


use storage::{get_addresses, has_addresses, set_addresses};

/// A 20-byte EVM account address.
pub type EvmAddress = BytesN<20>;

contractmeta!(
    key = "Description",
    val = "Proof of Reserve address list of EVM custodial addresses"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
}

#[contract]
pub struct EvmPorAddressList;

#[contractimpl]
impl EvmPorAddressList {
    /// Stores the reserve address list. The list is fixed once stored.
    pub fn initialize(env: Env, addresses: Vec<BytesN<20>>) -> Result<(), Error> {
        if has_addresses(&env) {
            return Err(Error::AlreadyInitialized);
        }

        set_addresses(&env, &addresses);

        env.events().publish((symbol_short!("init"),), addresses.len());
        Ok(())
    }

    pub fn get_por_address_list_length(env: Env) -> u32 {
        get_addresses(&env).len()
    }

    /// Returns the addresses at indices `start..=end`.
    ///
    /// An `end` past the last index is clamped. A `start` past the last index,
    /// or after `end`, returns an empty list.
    pub fn get_por_address_list(env: Env, start: u32, end: u32) -> Vec<BytesN<20>> {
        por_common::page(&env, &get_addresses(&env), start, end)
    }
}

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Env, String,
    Vec,
};


contractmeta!(
    key = "Description",
    val = "Proof of Reserve address list of non-EVM string identifiers"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
}

#[contracttype]
pub enum DataKey {
    Addresses,
}

#[contract]
pub struct StringPorAddressList;

#[contractimpl]
impl StringPorAddressList {
    pub fn initialize(env: Env, addresses: Vec<String>) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Addresses) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Addresses, &addresses);

        env.events().publish((symbol_short!("init"),), addresses.len());
        Ok(())
    }

    pub fn get_por_address_list_length(env: Env) -> u32 {
        Self::addresses(&env).len()
    }

    pub fn get_por_address_list(env: Env, start: u32, end: u32) -> Vec<String> {
        por_common::page(&env, &Self::addresses(&env), start, end)
    }
}

impl StringPorAddressList {
    fn addresses(env: &Env) -> Vec<String> {
        env.storage()
            .instance()
            .get(&DataKey::Addresses)
            .unwrap_or_else(|| Vec::new(env))
    }
}

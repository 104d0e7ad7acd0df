use soroban_sdk::{contracttype, Env, Vec};

use crate::EvmAddress;

#[contracttype]
pub enum DataKey {
    Addresses,
}

pub fn has_addresses(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Addresses)
}

pub fn get_addresses(env: &Env) -> Vec<EvmAddress> {
    env.storage()
        .instance()
        .get(&DataKey::Addresses)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_addresses(env: &Env, addresses: &Vec<EvmAddress>) {
    env.storage().instance().set(&DataKey::Addresses, addresses);
}

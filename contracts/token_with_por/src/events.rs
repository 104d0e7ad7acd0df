use soroban_sdk::{symbol_short, Address, Env};

pub fn initialized(env: &Env, feed: &Address, heartbeat: u64, feed_decimals: u32) {
    env.events().publish((symbol_short!("init"),), (feed.clone(), heartbeat, feed_decimals));
}

pub fn owner_set(env: &Env, previous: Option<Address>, owner: &Address) {
    env.events().publish((symbol_short!("owner_set"),), (previous, owner.clone()));
}

pub fn mint(env: &Env, to: &Address, amount: i128) {
    env.events().publish((symbol_short!("mint"), to.clone()), amount);
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish((symbol_short!("transfer"), from.clone(), to.clone()), amount);
}

pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    env.events().publish((symbol_short!("approve"), owner.clone(), spender.clone()), amount);
}

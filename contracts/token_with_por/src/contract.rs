use crate::errors::Error;
use crate::events;
use crate::storage::*;
use crate::types::TokenState;
use por_common::{normalize_answer, ReserveFeedClient};
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String};

/// Fixed-point scale of token amounts.
pub const TOKEN_DECIMALS: u32 = 18;

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Fungible token whose supply is capped by a Proof of Reserve feed"
);

#[contract]
pub struct TokenWithPor;

#[contractimpl]
impl TokenWithPor {
    /// Initialize the token against a reserve feed.
    ///
    /// The feed's decimals are read once here and cached; `heartbeat` is the
    /// maximum age in seconds a feed answer may have when minting.
    pub fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        feed: Address,
        heartbeat: u64,
    ) -> Result<(), Error> {
        if has_state(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        let feed_decimals = ReserveFeedClient::new(&env, &feed).decimals();
        let state = TokenState {
            name,
            symbol,
            owner: owner.clone(),
            feed: feed.clone(),
            heartbeat,
            feed_decimals,
            total_supply: 0,
        };
        set_state(&env, &state);

        events::initialized(&env, &feed, heartbeat, feed_decimals);
        events::owner_set(&env, None, &owner);
        Ok(())
    }

    /// Mint `amount` to `to`, provided the reserve feed attests enough backing.
    ///
    /// Owner only. Fails if the latest feed answer is non-positive, older than
    /// the heartbeat, or if the new total supply would exceed the reserve.
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        let mut state = get_state(&env)?;
        if caller != state.owner {
            return Err(Error::Unauthorized);
        }

        let reserve = Self::attested_reserve(&env, &state)?;
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let new_supply = state
            .total_supply
            .checked_add(amount)
            .ok_or(Error::ReserveExceeded)?;
        if new_supply > reserve {
            return Err(Error::ReserveExceeded);
        }

        state.total_supply = new_supply;
        set_state(&env, &state);
        set_balance(&env, &to, get_balance(&env, &to) + amount);

        events::mint(&env, &to, amount);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Self::move_balance(&env, &from, &to, amount)?;
        events::transfer(&env, &from, &to, amount);
        Ok(())
    }

    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), Error> {
        owner.require_auth();
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        set_allowance(&env, &owner, &spender, amount);
        events::approve(&env, &owner, &spender, amount);
        Ok(())
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        get_allowance(&env, &owner, &spender)
    }

    /// Move `amount` from `from` to `to` out of the allowance `from` granted
    /// to `spender`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();

        let allowance = get_allowance(&env, &from, &spender);
        if allowance < amount {
            return Err(Error::InsufficientAllowance);
        }

        Self::move_balance(&env, &from, &to, amount)?;
        set_allowance(&env, &from, &spender, allowance - amount);
        events::transfer(&env, &from, &to, amount);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();
        let mut state = get_state(&env)?;
        if caller != state.owner {
            return Err(Error::Unauthorized);
        }

        let previous = state.owner;
        state.owner = new_owner.clone();
        set_state(&env, &state);

        events::owner_set(&env, Some(previous), &new_owner);
        Ok(())
    }

    // Views

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(get_state(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(get_state(&env)?.symbol)
    }

    pub fn decimals(_env: Env) -> u32 {
        TOKEN_DECIMALS
    }

    pub fn total_supply(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.total_supply)
    }

    pub fn balance_of(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        Ok(get_state(&env)?.owner)
    }

    pub fn get_feed(env: Env) -> Result<Address, Error> {
        Ok(get_state(&env)?.feed)
    }

    pub fn get_heartbeat(env: Env) -> Result<u64, Error> {
        Ok(get_state(&env)?.heartbeat)
    }

    pub fn get_feed_decimals(env: Env) -> Result<u32, Error> {
        Ok(get_state(&env)?.feed_decimals)
    }
}

impl TokenWithPor {
    /// Reads the latest reserve answer and returns it in token decimals.
    fn attested_reserve(env: &Env, state: &TokenState) -> Result<i128, Error> {
        let round = ReserveFeedClient::new(env, &state.feed).latest_round_data();
        if round.answer <= 0 {
            return Err(Error::InvalidFeedAnswer);
        }

        let now = env.ledger().timestamp();
        if now.saturating_sub(round.updated_at) > state.heartbeat {
            return Err(Error::StaleFeedAnswer);
        }

        Ok(normalize_answer(round.answer, state.feed_decimals, TOKEN_DECIMALS))
    }

    fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let from_balance = get_balance(env, from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }
        set_balance(env, from, from_balance - amount);
        set_balance(env, to, get_balance(env, to) + amount);
        Ok(())
    }
}

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod errors;
mod events;
mod ledger;
mod metadata;
mod storage;

#[cfg(test)]
mod test;

pub use errors::LeanTokenError;
use events::TokenEvents;
use metadata::INITIAL_SUPPLY;
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

#[contract]
pub struct LeanToken;

fn require_initialized(env: &Env) -> Result<(), LeanTokenError> {
    if !storage::is_initialized(env) {
        return Err(LeanTokenError::NotInitialized);
    }
    Ok(())
}

#[contractimpl]
impl LeanToken {
    /// Credits the entire fixed supply to `creator`. Callable once.
    pub fn initialize(env: Env, creator: Address) -> Result<(), LeanTokenError> {
        if storage::is_initialized(&env) {
            return Err(LeanTokenError::AlreadyInitialized);
        }
        creator.require_auth();

        metadata::write_metadata(&env);
        storage::write_total_supply(&env, INITIAL_SUPPLY);
        storage::write_balance(&env, &creator, INITIAL_SUPPLY);
        storage::extend_instance_ttl(&env);

        TokenEvents::initialized(&env, &creator, INITIAL_SUPPLY);
        Ok(())
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, metadata::NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, metadata::SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        metadata::DECIMALS
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::read_total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), LeanTokenError> {
        from.require_auth();
        require_initialized(&env)?;

        ledger::transfer(&env, &from, &to, amount)?;
        storage::extend_instance_ttl(&env);

        TokenEvents::transfer(&env, &from, &to, amount);
        Ok(())
    }

    /// Sends `amounts[i]` to `recipients[i]` for every index, all or nothing.
    ///
    /// `from` authorizes once for the whole batch. Emits one `transfer`
    /// event per pair followed by a `batch_transfer` summary.
    pub fn batch_transfer(
        env: Env,
        from: Address,
        recipients: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), LeanTokenError> {
        from.require_auth();
        require_initialized(&env)?;

        let total = ledger::batch_transfer(&env, &from, &recipients, &amounts)?;
        storage::extend_instance_ttl(&env);

        for (to, amount) in recipients.iter().zip(amounts.iter()) {
            TokenEvents::transfer(&env, &from, &to, amount);
        }
        TokenEvents::batch_transfer(&env, &from, recipients.len(), total);
        Ok(())
    }

    /// Burns `amount` from the caller's own balance. Open to any holder.
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), LeanTokenError> {
        from.require_auth();
        require_initialized(&env)?;

        ledger::burn(&env, &from, amount)?;
        storage::extend_instance_ttl(&env);

        TokenEvents::burn(&env, &from, amount);
        Ok(())
    }
}

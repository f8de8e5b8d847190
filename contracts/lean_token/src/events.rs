use soroban_sdk::{Address, Env, Symbol};
use soroban_token_sdk::TokenUtils;

pub struct TokenEvents;

impl TokenEvents {
    /// Emits the initial `mint` of the whole supply to the creator.
    ///
    /// Topics: `("mint", creator, creator)`
    /// Data:   `amount`
    pub fn initialized(env: &Env, creator: &Address, amount: i128) {
        TokenUtils::new(env).events().mint(creator.clone(), creator.clone(), amount);
    }

    /// Topics: `("transfer", from, to)`
    /// Data:   `amount`
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        TokenUtils::new(env).events().transfer(from.clone(), to.clone(), amount);
    }

    /// Topics: `("burn", from)`
    /// Data:   `amount`
    pub fn burn(env: &Env, from: &Address, amount: i128) {
        TokenUtils::new(env).events().burn(from.clone(), amount);
    }

    /// Summary emitted after the per-recipient `transfer` events of a batch.
    ///
    /// Topics: `("batch_transfer", from)`
    /// Data:   `(count, total)`
    ///
    /// "batch_transfer" is longer than the 9-char `symbol_short!` limit.
    pub fn batch_transfer(env: &Env, from: &Address, count: u32, total: i128) {
        env.events().publish(
            (Symbol::new(env, "batch_transfer"), from.clone()),
            (count, total),
        );
    }
}

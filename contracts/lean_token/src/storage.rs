use soroban_sdk::{contracttype, Address, Env};

pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = 17280;
pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 518400;

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    TotalSupply,
    Balance(Address),
}

/// The total supply entry is written exactly once, by `initialize`.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::TotalSupply)
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

/// Reads a holder's balance, treating a missing entry as zero.
///
/// A hit also bumps the entry's TTL so active holders never expire.
pub fn read_balance(env: &Env, holder: &Address) -> i128 {
    let key = DataKey::Balance(holder.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, holder: &Address, balance: i128) {
    let key = DataKey::Balance(holder.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

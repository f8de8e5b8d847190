use soroban_sdk::{Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

pub const NAME: &str = "Lean Management Token";
pub const SYMBOL: &str = "LEAN";
pub const DECIMALS: u32 = 18;

/// Smallest units per whole token (10^18).
pub const UNIT: i128 = 10_i128.pow(DECIMALS);

/// 3 million LEAN, credited to the creator at initialization.
pub const INITIAL_SUPPLY: i128 = 3_000_000 * UNIT;

pub fn token_metadata(env: &Env) -> TokenMetadata {
    TokenMetadata {
        decimal: DECIMALS,
        name: String::from_str(env, NAME),
        symbol: String::from_str(env, SYMBOL),
    }
}

/// Writes the standard token metadata entry read by wallets and indexers.
pub fn write_metadata(env: &Env) {
    TokenUtils::new(env).metadata().set_metadata(&token_metadata(env));
}

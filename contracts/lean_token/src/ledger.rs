use soroban_sdk::{log, Address, Env, Map, Vec};

use crate::{
    errors::LeanTokenError,
    storage::{read_balance, read_total_supply, write_balance, write_total_supply},
};

/// Maximum number of recipients accepted by a single `batch_transfer`.
///
/// Every distinct recipient is one persistent ledger write on top of the
/// sender's, and network settings bound the entries a transaction may write.
/// 100 is the widest distribution the token is expected to run in one call;
/// larger lists are split across several calls.
pub const MAX_BATCH_SIZE: u32 = 100;

pub fn check_nonnegative(amount: i128) -> Result<(), LeanTokenError> {
    if amount < 0 {
        return Err(LeanTokenError::NegativeAmount);
    }
    Ok(())
}

/// Moves `amount` from `from` to `to`.
///
/// Both new balances are computed before either is written, so a rejected
/// transfer leaves storage untouched.
pub fn transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), LeanTokenError> {
    check_nonnegative(amount)?;

    let from_balance = read_balance(env, from);
    if from_balance < amount {
        log!(env, "transfer amount exceeds balance", amount, from_balance);
        return Err(LeanTokenError::InsufficientBalance);
    }

    if from == to {
        return Ok(());
    }

    let to_balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(LeanTokenError::Overflow)?;

    write_balance(env, from, from_balance - amount);
    write_balance(env, to, to_balance);
    Ok(())
}

/// Validates the shape of a batch and returns the sum of its amounts.
///
/// # Errors
/// | Error            | Condition                                   |
/// |------------------|---------------------------------------------|
/// | `LengthMismatch` | `recipients.len() != amounts.len()`         |
/// | `BatchTooLarge`  | more than `MAX_BATCH_SIZE` recipients       |
/// | `NegativeAmount` | any amount below zero                       |
/// | `Overflow`       | the sum does not fit in `i128`              |
pub fn batch_total(recipients: &Vec<Address>, amounts: &Vec<i128>) -> Result<i128, LeanTokenError> {
    if recipients.len() != amounts.len() {
        return Err(LeanTokenError::LengthMismatch);
    }
    if recipients.len() > MAX_BATCH_SIZE {
        return Err(LeanTokenError::BatchTooLarge);
    }

    let mut total: i128 = 0;
    for amount in amounts.iter() {
        check_nonnegative(amount)?;
        total = total.checked_add(amount).ok_or(LeanTokenError::Overflow)?;
    }
    Ok(total)
}

/// Applies every `(recipients[i], amounts[i])` pair as one atomic unit and
/// returns the total debited from `from`.
///
/// The sender is debited the whole batch up front. New balances are then
/// accumulated in a local map (so repeated recipients, and the sender
/// appearing as a recipient, see earlier credits) and committed only once
/// every credit has been computed.
pub fn batch_transfer(
    env: &Env,
    from: &Address,
    recipients: &Vec<Address>,
    amounts: &Vec<i128>,
) -> Result<i128, LeanTokenError> {
    let total = batch_total(recipients, amounts)?;

    let from_balance = read_balance(env, from);
    if from_balance < total {
        log!(env, "batch total exceeds balance", total, from_balance);
        return Err(LeanTokenError::InsufficientBalance);
    }

    let mut pending: Map<Address, i128> = Map::new(env);
    pending.set(from.clone(), from_balance - total);

    for (to, amount) in recipients.iter().zip(amounts.iter()) {
        let current = match pending.get(to.clone()) {
            Some(balance) => balance,
            None => read_balance(env, &to),
        };
        let credited = current.checked_add(amount).ok_or(LeanTokenError::Overflow)?;
        pending.set(to, credited);
    }

    for (holder, balance) in pending.iter() {
        write_balance(env, &holder, balance);
    }
    Ok(total)
}

/// Destroys `amount` of `from`'s balance, reducing total supply by the same.
pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), LeanTokenError> {
    check_nonnegative(amount)?;

    let balance = read_balance(env, from);
    if balance < amount {
        log!(env, "burn amount exceeds balance", amount, balance);
        return Err(LeanTokenError::InsufficientBalance);
    }

    let supply = read_total_supply(env)
        .checked_sub(amount)
        .ok_or(LeanTokenError::Overflow)?;

    write_balance(env, from, balance - amount);
    write_total_supply(env, supply);
    Ok(())
}

#![cfg(test)]

// ---------------------------------------------------------------------------
// LEAN token test suite
//
// Structure
// ---------
// initialize      - settings, metadata entry, double-init guard
// transfer        - single transfers, even distribution, guards
// batch_transfer  - batch validation unit tests and end-to-end batches
// burn            - deployer and non-deployer burns, failure leaves state
// events          - topics and payloads of every emitted event
// ttl             - instance and balance entries are kept alive
// ---------------------------------------------------------------------------


use soroban_sdk::{testutils::Address as _, Address, Env, Vec};

use crate::{metadata::UNIT, LeanToken, LeanTokenClient};

/// `n` whole LEAN expressed in smallest units.
pub(crate) fn lean(n: i128) -> i128 {
    n * UNIT
}

/// Registers and initializes a fresh token. Returns the env, client, contract
/// id and the creator holding the full supply.
///
/// The budget is lifted because the 100-recipient scenarios exceed the
/// default per-invocation CPU allowance of the test host.
pub(crate) fn setup<'a>() -> (Env, LeanTokenClient<'a>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.budget().reset_unlimited();

    let token_id = env.register_contract(None, LeanToken);
    let client = LeanTokenClient::new(&env, &token_id);

    let creator = Address::generate(&env);
    client.initialize(&creator);

    (env, client, token_id, creator)
}

pub(crate) fn generate_holders(env: &Env, n: u32) -> Vec<Address> {
    let mut holders = Vec::new(env);
    for _ in 0..n {
        holders.push_back(Address::generate(env));
    }
    holders
}

/// Sums the balances of `holders`; callers include every account that has
/// ever held tokens so the result must equal total supply.
pub(crate) fn sum_balances(client: &LeanTokenClient, holders: &Vec<Address>) -> i128 {
    holders.iter().map(|h| client.balance(&h)).sum()
}

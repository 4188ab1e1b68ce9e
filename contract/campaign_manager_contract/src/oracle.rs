use soroban_sdk::{contractclient, Address, Env};

use crate::storage_types::RequestId;

/// Randomness provider the campaign depends on.
///
/// A provider accepts a request and later delivers exactly one 32-byte value
/// for it by invoking `on_randomness(oracle, request_id, random_value)` on
/// `requester` as a separate transaction.
#[contractclient(name = "RandomnessOracleClient")]
pub trait RandomnessOracle {
    fn request_randomness(env: Env, requester: Address, callback_gas_limit: u32) -> RequestId;
}

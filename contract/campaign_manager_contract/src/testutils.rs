//! Synchronous stand-in for the randomness oracle.
//!
//! `request_randomness` only records the requester; nothing is delivered
//! until the test calls `fulfill` (the honest path) or `deliver` (arbitrary
//! ids, for stray and duplicate callbacks).

use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env};

use crate::{CampaignManagerContractClient, RequestId};

#[derive(Clone)]
#[contracttype]
enum MockOracleKey {
    NextRequestId,
    Requester(RequestId),
    GasLimit(RequestId),
}

#[contract]
pub struct MockRandomnessOracle;

#[contractimpl]
impl MockRandomnessOracle {
    pub fn request_randomness(env: Env, requester: Address, callback_gas_limit: u32) -> RequestId {
        let request_id: RequestId = env
            .storage()
            .instance()
            .get(&MockOracleKey::NextRequestId)
            .unwrap_or(1);
        env.storage()
            .instance()
            .set(&MockOracleKey::NextRequestId, &(request_id + 1));
        env.storage()
            .instance()
            .set(&MockOracleKey::Requester(request_id), &requester);
        env.storage()
            .instance()
            .set(&MockOracleKey::GasLimit(request_id), &callback_gas_limit);
        request_id
    }

    /// Deliver `random_value` to whoever issued `request_id`.
    pub fn fulfill(env: Env, request_id: RequestId, random_value: BytesN<32>) {
        let requester: Address = env
            .storage()
            .instance()
            .get(&MockOracleKey::Requester(request_id))
            .expect("unknown request");
        Self::deliver(env, requester, request_id, random_value);
    }

    /// Call back `consumer` without checking that the request exists.
    pub fn deliver(env: Env, consumer: Address, request_id: RequestId, random_value: BytesN<32>) {
        CampaignManagerContractClient::new(&env, &consumer).on_randomness(
            &env.current_contract_address(),
            &request_id,
            &random_value,
        );
    }

    pub fn requester_of(env: Env, request_id: RequestId) -> Option<Address> {
        env.storage()
            .instance()
            .get(&MockOracleKey::Requester(request_id))
    }

    pub fn gas_limit_of(env: Env, request_id: RequestId) -> Option<u32> {
        env.storage()
            .instance()
            .get(&MockOracleKey::GasLimit(request_id))
    }
}

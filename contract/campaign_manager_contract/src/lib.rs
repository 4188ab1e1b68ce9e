#![no_std]

mod events;
mod oracle;
mod selection;
mod storage_types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;


pub use oracle::{RandomnessOracle, RandomnessOracleClient};
pub use selection::{select_winners, SeedStream};
pub use storage_types::{
    CampaignConfig, CampaignError, CampaignState, CampaignStatus, RequestId, MAX_PARTICIPANTS,
};

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Map, Vec};
use storage_types::{DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT};

#[contract]
pub struct CampaignManagerContract;

#[contractimpl]
impl CampaignManagerContract {
    /// Bind the campaign to its randomness oracle and owner. Neither changes
    /// after deployment.
    pub fn __constructor(env: Env, oracle: Address, owner: Address) {
        env.storage().instance().set(&DataKey::Oracle, &oracle);
        env.storage().instance().set(&DataKey::Owner, &owner);
        extend_instance(&env);
    }

    /// Store the whitelist and the number of winners to draw from it.
    ///
    /// Allowed while unconfigured or configured (the latter replaces the
    /// previous whitelist). Rejected once a request is outstanding or the
    /// draw has completed.
    pub fn setup_campaign(
        env: Env,
        caller: Address,
        participants: Vec<Address>,
        winner_count: u32,
    ) -> Result<(), CampaignError> {
        require_owner(&env, &caller)?;

        match read_state(&env) {
            CampaignState::Unconfigured | CampaignState::Configured(_) => {}
            CampaignState::Pending(_, _) => return Err(CampaignError::SelectionPending),
            CampaignState::Finalized(_, _) => return Err(CampaignError::AlreadyFinalized),
        }

        validate_participants(&env, &participants, winner_count)?;

        let config = CampaignConfig {
            participants: participants.clone(),
            winner_count,
        };
        write_state(&env, &CampaignState::Configured(config));
        extend_instance(&env);

        log!(&env, "campaign configured", participants.len(), winner_count);
        events::emit_campaign_setup(
            &env,
            events::CampaignSetup {
                participants,
                winner_count,
            },
        );

        Ok(())
    }

    /// Ask the oracle for the randomness that will decide the winners.
    /// Exactly one request is ever outstanding.
    pub fn request_selection(
        env: Env,
        caller: Address,
        callback_gas_limit: u32,
    ) -> Result<RequestId, CampaignError> {
        require_owner(&env, &caller)?;

        let config = match read_state(&env) {
            CampaignState::Unconfigured => return Err(CampaignError::NotConfigured),
            CampaignState::Configured(config) => config,
            CampaignState::Pending(_, _) => return Err(CampaignError::SelectionPending),
            CampaignState::Finalized(_, _) => return Err(CampaignError::AlreadyFinalized),
        };

        let oracle = read_oracle(&env);
        let request_id = RandomnessOracleClient::new(&env, &oracle)
            .request_randomness(&env.current_contract_address(), &callback_gas_limit);

        write_state(&env, &CampaignState::Pending(config, request_id));
        extend_instance(&env);

        log!(&env, "selection requested", request_id);
        events::emit_selection_requested(
            &env,
            events::SelectionRequested {
                request_id,
                callback_gas_limit,
            },
        );

        Ok(request_id)
    }

    /// Oracle callback. The first delivery matching the pending request
    /// freezes the winner set; any other delivery is accepted and ignored.
    pub fn on_randomness(
        env: Env,
        oracle: Address,
        request_id: RequestId,
        random_value: BytesN<32>,
    ) -> Result<(), CampaignError> {
        oracle.require_auth();
        if oracle != read_oracle(&env) {
            return Err(CampaignError::Unauthorized);
        }

        let config = match read_state(&env) {
            CampaignState::Pending(config, pending) if pending == request_id => config,
            _ => {
                log!(&env, "ignoring randomness delivery", request_id);
                return Ok(());
            }
        };

        let winners =
            selection::select_winners(&env, &config.participants, config.winner_count, &random_value);
        for winner in winners.iter() {
            let key = PersistentKey::Winner(winner);
            env.storage().persistent().set(&key, &true);
            extend_persistent(&env, &key);
        }
        write_state(&env, &CampaignState::Finalized(config, winners.clone()));
        extend_instance(&env);

        log!(&env, "winners selected", request_id, winners.len());
        events::emit_winners_selected(
            &env,
            events::WinnersSelected {
                request_id,
                winners,
            },
        );

        Ok(())
    }

    /// View functions
    pub fn get_winners(env: Env) -> Vec<Address> {
        match read_state(&env) {
            CampaignState::Finalized(_, winners) => winners,
            _ => Vec::new(&env),
        }
    }

    pub fn is_winner(env: Env, account: Address) -> bool {
        env.storage()
            .persistent()
            .get(&PersistentKey::Winner(account))
            .unwrap_or(false)
    }

    pub fn get_winner_count(env: Env) -> u32 {
        match read_state(&env) {
            CampaignState::Finalized(_, winners) => winners.len(),
            _ => 0,
        }
    }

    pub fn get_eligible_participants(env: Env) -> Vec<Address> {
        read_state(&env)
            .config()
            .map(|config| config.participants.clone())
            .unwrap_or_else(|| Vec::new(&env))
    }

    pub fn get_eligible_participant_count(env: Env) -> u32 {
        read_state(&env)
            .config()
            .map(|config| config.participants.len())
            .unwrap_or(0)
    }

    pub fn is_selection_complete(env: Env) -> bool {
        matches!(read_state(&env), CampaignState::Finalized(_, _))
    }

    /// Number of winners the campaign was configured to draw.
    pub fn configured_winner_count(env: Env) -> u32 {
        read_state(&env)
            .config()
            .map(|config| config.winner_count)
            .unwrap_or(0)
    }

    pub fn pending_request_id(env: Env) -> Option<RequestId> {
        match read_state(&env) {
            CampaignState::Pending(_, request_id) => Some(request_id),
            _ => None,
        }
    }

    pub fn campaign_status(env: Env) -> CampaignStatus {
        read_state(&env).status()
    }

    pub fn owner(env: Env) -> Address {
        read_owner(&env)
    }

    pub fn randomness_oracle(env: Env) -> Address {
        read_oracle(&env)
    }
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

// Owner and oracle are written by the constructor, so they are always present.
fn read_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

fn read_oracle(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Oracle).unwrap()
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), CampaignError> {
    caller.require_auth();
    if *caller != read_owner(env) {
        return Err(CampaignError::Unauthorized);
    }
    Ok(())
}

fn read_state(env: &Env) -> CampaignState {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign)
        .unwrap_or(CampaignState::Unconfigured)
}

fn write_state(env: &Env, state: &CampaignState) {
    env.storage().persistent().set(&PersistentKey::Campaign, state);
    extend_persistent(env, &PersistentKey::Campaign);
}

fn validate_participants(
    env: &Env,
    participants: &Vec<Address>,
    winner_count: u32,
) -> Result<(), CampaignError> {
    let len = participants.len();
    if len == 0 || len > MAX_PARTICIPANTS {
        return Err(CampaignError::InvalidInput);
    }
    if winner_count == 0 || winner_count > len {
        return Err(CampaignError::InvalidInput);
    }

    let mut seen: Map<Address, bool> = Map::new(env);
    for participant in participants.iter() {
        if seen.contains_key(participant.clone()) {
            return Err(CampaignError::InvalidInput);
        }
        seen.set(participant, true);
    }
    Ok(())
}

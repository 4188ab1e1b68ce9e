#![no_std]

mod events;
mod storage_types;
mod winner_set;


pub use storage_types::{EscrowError, RewardRelease};
pub use winner_set::{WinnerSet, WinnerSetClient};

use soroban_sdk::{contract, contractimpl, log, token, Address, Env};
use storage_types::{DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT};

#[contract]
pub struct RewardEscrowContract;

#[contractimpl]
impl RewardEscrowContract {
    /// `campaign_manager` supplies the winner set; `authorized_signer` is the
    /// only identity that can release the pool.
    pub fn __constructor(
        env: Env,
        owner: Address,
        campaign_manager: Address,
        reward_token: Address,
        authorized_signer: Address,
    ) {
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::CampaignManager, &campaign_manager);
        env.storage().instance().set(&DataKey::RewardToken, &reward_token);
        env.storage().instance().set(&DataKey::AuthorizedSigner, &authorized_signer);
        env.storage().instance().set(&DataKey::TotalDeposited, &0i128);
        env.storage().instance().set(&DataKey::TotalClaimed, &0i128);
        extend_instance(&env);
    }

    /// Pull `amount` reward tokens from the owner. The owner must have
    /// approved this contract for at least `amount` beforehand.
    pub fn deposit(env: Env, caller: Address, amount: i128) -> Result<(), EscrowError> {
        require_owner(&env, &caller)?;
        if amount <= 0 {
            return Err(EscrowError::InvalidInput);
        }
        if read_release(&env).is_some() {
            return Err(EscrowError::AlreadyUnlocked);
        }

        let total = read_amount(&env, &DataKey::TotalDeposited)
            .checked_add(amount)
            .ok_or(EscrowError::InvalidInput)?;
        env.storage().instance().set(&DataKey::TotalDeposited, &total);
        extend_instance(&env);

        let escrow = env.current_contract_address();
        token::Client::new(&env, &read_address(&env, &DataKey::RewardToken))
            .transfer_from(&escrow, &caller, &escrow, &amount);

        log!(&env, "rewards deposited", amount, total);
        events::emit_rewards_deposited(
            &env,
            events::RewardsDeposited {
                depositor: caller,
                amount,
            },
        );

        Ok(())
    }

    /// Freeze the pool and fix the per-winner share at
    /// `total_deposited / winner_count`. Any remainder stays in the escrow.
    pub fn unlock_rewards(env: Env, signer: Address) -> Result<(), EscrowError> {
        signer.require_auth();
        if signer != read_address(&env, &DataKey::AuthorizedSigner) {
            return Err(EscrowError::Unauthorized);
        }
        if read_release(&env).is_some() {
            return Err(EscrowError::AlreadyUnlocked);
        }

        let total_deposited = read_amount(&env, &DataKey::TotalDeposited);
        if total_deposited <= 0 {
            return Err(EscrowError::NoFunds);
        }

        let winner_count = winner_set(&env).get_winner_count();
        if winner_count == 0 {
            return Err(EscrowError::WinnersNotSelected);
        }

        let share = total_deposited / winner_count as i128;
        let release = RewardRelease {
            share,
            winner_count,
            total_deposited,
        };
        env.storage().instance().set(&DataKey::Release, &release);
        extend_instance(&env);

        log!(&env, "rewards unlocked", total_deposited, winner_count, share);
        events::emit_rewards_unlocked(&env, events::RewardsUnlocked { signer, share });

        Ok(())
    }

    /// Pay the caller one share. Returns the amount transferred.
    pub fn claim_reward(env: Env, winner: Address) -> Result<i128, EscrowError> {
        winner.require_auth();

        let release = read_release(&env).ok_or(EscrowError::NotUnlocked)?;
        if !winner_set(&env).is_winner(&winner) {
            return Err(EscrowError::NotAWinner);
        }

        let key = PersistentKey::Claimed(winner.clone());
        if env.storage().persistent().get(&key).unwrap_or(false) {
            return Err(EscrowError::AlreadyClaimed);
        }

        // Flag before the transfer; a failed transfer reverts both.
        env.storage().persistent().set(&key, &true);
        extend_persistent(&env, &key);

        let total_claimed = read_amount(&env, &DataKey::TotalClaimed)
            .checked_add(release.share)
            .ok_or(EscrowError::InvalidInput)?;
        env.storage().instance().set(&DataKey::TotalClaimed, &total_claimed);
        extend_instance(&env);

        token::Client::new(&env, &read_address(&env, &DataKey::RewardToken)).transfer(
            &env.current_contract_address(),
            &winner,
            &release.share,
        );

        log!(&env, "reward claimed", release.share);
        events::emit_reward_claimed(
            &env,
            events::RewardClaimed {
                winner,
                amount: release.share,
            },
        );

        Ok(release.share)
    }

    /// Recover any token held by the escrow while the pool is still funding.
    /// Does not reduce `total_rewards_deposited`.
    pub fn emergency_withdraw(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), EscrowError> {
        require_owner(&env, &caller)?;
        if read_release(&env).is_some() {
            return Err(EscrowError::AlreadyUnlocked);
        }
        if amount <= 0 {
            return Err(EscrowError::InvalidInput);
        }

        token::Client::new(&env, &token).transfer(&env.current_contract_address(), &caller, &amount);

        log!(&env, "emergency withdrawal", amount);
        events::emit_emergency_withdrawal(&env, events::EmergencyWithdrawal { token, amount });

        Ok(())
    }

    /// Repoint the winner-set source. Only possible before unlock.
    pub fn update_campaign_manager(
        env: Env,
        caller: Address,
        new_manager: Address,
    ) -> Result<(), EscrowError> {
        require_owner(&env, &caller)?;
        if read_release(&env).is_some() {
            return Err(EscrowError::AlreadyUnlocked);
        }
        // No zero address on Soroban; the escrow itself is the null source.
        if new_manager == env.current_contract_address() {
            return Err(EscrowError::InvalidInput);
        }

        let previous = read_address(&env, &DataKey::CampaignManager);
        env.storage().instance().set(&DataKey::CampaignManager, &new_manager);
        extend_instance(&env);

        events::emit_campaign_manager_updated(
            &env,
            events::CampaignManagerUpdated {
                previous,
                current: new_manager,
            },
        );

        Ok(())
    }

    /// View functions
    pub fn are_rewards_unlocked(env: Env) -> bool {
        read_release(&env).is_some()
    }

    pub fn total_rewards_deposited(env: Env) -> i128 {
        read_amount(&env, &DataKey::TotalDeposited)
    }

    pub fn total_claimed(env: Env) -> i128 {
        read_amount(&env, &DataKey::TotalClaimed)
    }

    /// Per-winner share; zero until unlocked.
    pub fn get_reward_amount(env: Env) -> i128 {
        read_release(&env).map(|release| release.share).unwrap_or(0)
    }

    pub fn get_release(env: Env) -> Option<RewardRelease> {
        read_release(&env)
    }

    pub fn can_claim(env: Env, account: Address) -> bool {
        if read_release(&env).is_none() {
            return false;
        }
        if read_claimed(&env, &account) {
            return false;
        }
        winner_set(&env).is_winner(&account)
    }

    pub fn has_claimed(env: Env, account: Address) -> bool {
        read_claimed(&env, &account)
    }

    pub fn get_winner_count(env: Env) -> u32 {
        winner_set(&env).get_winner_count()
    }

    pub fn owner(env: Env) -> Address {
        read_address(&env, &DataKey::Owner)
    }

    pub fn campaign_manager(env: Env) -> Address {
        read_address(&env, &DataKey::CampaignManager)
    }

    pub fn reward_token(env: Env) -> Address {
        read_address(&env, &DataKey::RewardToken)
    }

    pub fn authorized_signer(env: Env) -> Address {
        read_address(&env, &DataKey::AuthorizedSigner)
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

// Every address key is written by the constructor.
fn read_address(env: &Env, key: &DataKey) -> Address {
    env.storage().instance().get(key).unwrap()
}

fn read_amount(env: &Env, key: &DataKey) -> i128 {
    env.storage().instance().get(key).unwrap_or(0)
}

fn read_release(env: &Env) -> Option<RewardRelease> {
    env.storage().instance().get(&DataKey::Release)
}

fn read_claimed(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&PersistentKey::Claimed(account.clone()))
        .unwrap_or(false)
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), EscrowError> {
    caller.require_auth();
    if *caller != read_address(env, &DataKey::Owner) {
        return Err(EscrowError::Unauthorized);
    }
    Ok(())
}

fn winner_set(env: &Env) -> WinnerSetClient<'_> {
    WinnerSetClient::new(env, &read_address(env, &DataKey::CampaignManager))
}

use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
pub struct RewardsDeposited {
    #[topic]
    pub depositor: Address,
    pub amount: i128,
}

#[contractevent]
pub struct RewardsUnlocked {
    #[topic]
    pub signer: Address,
    pub share: i128,
}

#[contractevent]
pub struct RewardClaimed {
    #[topic]
    pub winner: Address,
    pub amount: i128,
}

#[contractevent]
pub struct CampaignManagerUpdated {
    pub previous: Address,
    pub current: Address,
}

#[contractevent]
pub struct EmergencyWithdrawal {
    #[topic]
    pub token: Address,
    pub amount: i128,
}

pub fn emit_rewards_deposited(env: &Env, event: RewardsDeposited) {
    event.publish(env);
}

pub fn emit_rewards_unlocked(env: &Env, event: RewardsUnlocked) {
    event.publish(env);
}

pub fn emit_reward_claimed(env: &Env, event: RewardClaimed) {
    event.publish(env);
}

pub fn emit_campaign_manager_updated(env: &Env, event: CampaignManagerUpdated) {
    event.publish(env);
}

pub fn emit_emergency_withdrawal(env: &Env, event: EmergencyWithdrawal) {
    event.publish(env);
}

use soroban_sdk::{contractevent, Address, Env, Vec};

use crate::storage_types::RequestId;

#[contractevent]
pub struct CampaignSetup {
    pub participants: Vec<Address>,
    pub winner_count: u32,
}

#[contractevent]
pub struct SelectionRequested {
    #[topic]
    pub request_id: RequestId,
    pub callback_gas_limit: u32,
}

#[contractevent]
pub struct WinnersSelected {
    #[topic]
    pub request_id: RequestId,
    pub winners: Vec<Address>,
}

pub fn emit_campaign_setup(env: &Env, event: CampaignSetup) {
    event.publish(env);
}

pub fn emit_selection_requested(env: &Env, event: SelectionRequested) {
    event.publish(env);
}

pub fn emit_winners_selected(env: &Env, event: WinnersSelected) {
    event.publish(env);
}

use soroban_sdk::{contracterror, contracttype, Address, Vec};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Oracle,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign,
    Winner(Address),
}

pub type RequestId = u64;

/// Whitelist and draw size fixed by `setup_campaign`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignConfig {
    pub participants: Vec<Address>,
    pub winner_count: u32,
}

/// Lifecycle of the single campaign this contract instance runs.
///
/// Winners only exist inside `Finalized`, so a populated winner list with an
/// incomplete selection cannot be stored.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub enum CampaignState {
    Unconfigured,
    Configured(CampaignConfig),
    Pending(CampaignConfig, RequestId),
    Finalized(CampaignConfig, Vec<Address>),
}

impl CampaignState {
    pub fn status(&self) -> CampaignStatus {
        match self {
            CampaignState::Unconfigured => CampaignStatus::Unconfigured,
            CampaignState::Configured(_) => CampaignStatus::Configured,
            CampaignState::Pending(_, _) => CampaignStatus::RequestPending,
            CampaignState::Finalized(_, _) => CampaignStatus::Finalized,
        }
    }

    pub fn config(&self) -> Option<&CampaignConfig> {
        match self {
            CampaignState::Unconfigured => None,
            CampaignState::Configured(config)
            | CampaignState::Pending(config, _)
            | CampaignState::Finalized(config, _) => Some(config),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum CampaignStatus {
    Unconfigured,
    Configured,
    RequestPending,
    Finalized,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    Unauthorized = 1,
    InvalidInput = 2,
    AlreadyFinalized = 3,
    NotConfigured = 4,
    SelectionPending = 5,
}

// Constants
pub const MAX_PARTICIPANTS: u32 = 500; // bounds the selection loop
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days

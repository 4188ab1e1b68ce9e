use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    CampaignManager,
    RewardToken,
    AuthorizedSigner,
    TotalDeposited,
    TotalClaimed,
    Release,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Claimed(Address),
}

/// Frozen by `unlock_rewards`; its presence is what makes the pool unlocked.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct RewardRelease {
    pub share: i128,
    pub winner_count: u32,
    pub total_deposited: i128,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    Unauthorized = 1,
    InvalidInput = 2,
    AlreadyUnlocked = 3,
    NotUnlocked = 4,
    NoFunds = 5,
    NotAWinner = 6,
    AlreadyClaimed = 7,
    WinnersNotSelected = 8,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days

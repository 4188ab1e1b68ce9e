use soroban_sdk::{contractclient, Address, Env};

/// Read-only view of a finalized winner set. The campaign manager contract
/// satisfies it; the escrow never caches what it returns.
#[contractclient(name = "WinnerSetClient")]
pub trait WinnerSet {
    fn is_winner(env: Env, account: Address) -> bool;
    fn get_winner_count(env: Env) -> u32;
}

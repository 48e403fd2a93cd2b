//! Data types for the BLTZ gameplay contract

use soroban_sdk::{contracttype, Address, String};

/// Per-player counters. Created on the first admitted play, never deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlayerRecord {
    pub player: Address,
    pub total_plays: u64,
    /// Always `<= total_plays`
    pub total_wins: u64,
    /// Most recently admitted nonce (informational only)
    pub last_nonce: String,
    pub last_played_at: u64,
}

/// A consumed nonce. Blocks re-admission of the same value until it ages
/// past the retention window.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NonceEntry {
    pub nonce: String,
    pub player: Address,
    pub admitted_at: u64,
    /// Position of this entry in the admission-order queue
    pub slot: u64,
}

/// One position in the admission-order queue of nonces.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NonceSlot {
    pub nonce: String,
    pub admitted_at: u64,
}

/// Bounds of the nonce queue: slots `head..tail` are live.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NonceCursor {
    pub head: u64,
    pub tail: u64,
}

/// A play waiting for its randomness.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingRequest {
    pub request_id: u64,
    pub player: Address,
    pub nonce: String,
    /// Opaque value handed to the oracle alongside the request id
    pub correlation: u64,
    pub created_at: u64,
}

/// Stored form of a pending request: the row plus its creation-order links.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingNode {
    pub request: PendingRequest,
    pub prev: Option<u64>,
    pub next: Option<u64>,
}

/// Ends of the creation-order list of live pending requests.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PendingOrder {
    pub head: Option<u64>,
    pub tail: Option<u64>,
    pub len: u32,
}

/// Game configuration, owned by the admin.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameConfig {
    /// Token ledger that pays rewards; this contract must be its issuer
    pub token_ledger: Option<Address>,
    /// The only account allowed to deliver randomness
    pub oracle: Option<Address>,
    /// A roll strictly below this value (out of 100) wins
    pub win_threshold: u32,
    /// Quantity issued to the player on a win
    pub reward_amount: i128,
}

/// Config with both collaborators present, as required by play and resolve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActiveConfig {
    pub token_ledger: Address,
    pub oracle: Address,
    pub win_threshold: u32,
    pub reward_amount: i128,
}

//! Storage keys and helpers for the BLTZ gameplay contract
//!
//! Singletons and cursors live in instance storage. Every per-key row lives in
//! persistent storage and has its TTL bumped on write, so pending plays and
//! consumed nonces never silently disappear.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::constants::{
    INSTANCE_BUMP_LEDGERS, INSTANCE_BUMP_THRESHOLD, PERSISTENT_BUMP_LEDGERS,
    PERSISTENT_BUMP_THRESHOLD,
};
use crate::types::{
    GameConfig, NonceCursor, NonceEntry, NonceSlot, PendingNode, PendingOrder, PlayerRecord,
};

/// Storage keys. Each table gets its own variant so a request id, a nonce and
/// an account can never address each other's rows.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Controlling authority (instance storage)
    Admin,
    /// Game configuration (instance storage)
    Config,
    /// Bounds of the nonce admission queue (instance storage)
    NonceCursor,
    /// Ends of the pending creation-order list (instance storage)
    PendingOrder,
    /// Next request id to hand out (instance storage)
    NextRequestId,
    /// Player counters (persistent storage)
    Player(Address),
    /// Consumed nonce (persistent storage)
    Nonce(String),
    /// Nonce queue position (persistent storage)
    NonceSlot(u64),
    /// Pending request with its order links (persistent storage)
    Pending(u64),
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_BUMP_LEDGERS);
}

fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_BUMP_LEDGERS);
}

// ============================================================================
// Admin & Config
// ============================================================================

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_config(env: &Env) -> Option<GameConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &GameConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ============================================================================
// Players
// ============================================================================

pub fn get_player(env: &Env, player: &Address) -> Option<PlayerRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Player(player.clone()))
}

pub fn set_player(env: &Env, record: &PlayerRecord) {
    set_persistent(env, &DataKey::Player(record.player.clone()), record);
}

// ============================================================================
// Nonces
// ============================================================================

pub fn get_nonce_cursor(env: &Env) -> NonceCursor {
    env.storage()
        .instance()
        .get(&DataKey::NonceCursor)
        .unwrap_or_default()
}

pub fn set_nonce_cursor(env: &Env, cursor: &NonceCursor) {
    env.storage().instance().set(&DataKey::NonceCursor, cursor);
}

pub fn get_nonce(env: &Env, nonce: &String) -> Option<NonceEntry> {
    env.storage()
        .persistent()
        .get(&DataKey::Nonce(nonce.clone()))
}

pub fn set_nonce(env: &Env, entry: &NonceEntry) {
    set_persistent(env, &DataKey::Nonce(entry.nonce.clone()), entry);
}

pub fn remove_nonce(env: &Env, nonce: &String) {
    env.storage()
        .persistent()
        .remove(&DataKey::Nonce(nonce.clone()));
}

pub fn get_nonce_slot(env: &Env, slot: u64) -> Option<NonceSlot> {
    env.storage().persistent().get(&DataKey::NonceSlot(slot))
}

pub fn set_nonce_slot(env: &Env, slot: u64, value: &NonceSlot) {
    set_persistent(env, &DataKey::NonceSlot(slot), value);
}

pub fn remove_nonce_slot(env: &Env, slot: u64) {
    env.storage().persistent().remove(&DataKey::NonceSlot(slot));
}

// ============================================================================
// Pending requests
// ============================================================================

pub fn next_request_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextRequestId)
        .unwrap_or(0)
}

pub fn set_next_request_id(env: &Env, id: u64) {
    env.storage().instance().set(&DataKey::NextRequestId, &id);
}

pub fn get_pending_order(env: &Env) -> PendingOrder {
    env.storage()
        .instance()
        .get(&DataKey::PendingOrder)
        .unwrap_or_default()
}

pub fn set_pending_order(env: &Env, order: &PendingOrder) {
    env.storage().instance().set(&DataKey::PendingOrder, order);
}

pub fn has_pending(env: &Env, request_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Pending(request_id))
}

pub fn get_pending(env: &Env, request_id: u64) -> Option<PendingNode> {
    env.storage().persistent().get(&DataKey::Pending(request_id))
}

pub fn set_pending(env: &Env, node: &PendingNode) {
    set_persistent(env, &DataKey::Pending(node.request.request_id), node);
}

pub fn remove_pending(env: &Env, request_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Pending(request_id));
}

//! Storage keys and helpers for the DBP reward token
//!
//! Asset metadata lives in instance storage; each balance is its own
//! persistent row, bumped whenever it is written.

use soroban_sdk::{contracttype, Address, Env, Symbol};

/// Persistent balance TTL in ledgers (~30 days at 5s/ledger).
pub const BALANCE_BUMP_LEDGERS: u32 = 518_400;
pub const BALANCE_BUMP_THRESHOLD: u32 = BALANCE_BUMP_LEDGERS - 17_280;

pub const INSTANCE_BUMP_LEDGERS: u32 = 518_400;
pub const INSTANCE_BUMP_THRESHOLD: u32 = INSTANCE_BUMP_LEDGERS - 17_280;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Info,
    Balance(Address),
}

/// Asset metadata and supply counters, kept in instance storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenInfo {
    pub issuer: Address,
    pub symbol: Symbol,
    pub decimals: u32,
    pub supply: i128,
    pub max_supply: i128,
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_BUMP_LEDGERS);
}

pub fn get_info(env: &Env) -> Option<TokenInfo> {
    env.storage().instance().get(&DataKey::Info)
}

pub fn set_info(env: &Env, info: &TokenInfo) {
    env.storage().instance().set(&DataKey::Info, info);
}

pub fn get_balance(env: &Env, owner: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, owner: &Address, balance: i128) {
    let key = DataKey::Balance(owner.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_BUMP_THRESHOLD, BALANCE_BUMP_LEDGERS);
}

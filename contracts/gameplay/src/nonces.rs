//! Nonce registry.
//!
//! Nonces are globally unique (not per player) for `NONCE_RETENTION_SECS`
//! after admission. Admissions are appended to a FIFO of slots; ledger time
//! never goes backwards, so slot order is admission-time order and eviction
//! only ever looks at the front of the queue.

use soroban_sdk::{Address, Env, String};

use crate::constants::NONCE_RETENTION_SECS;
use crate::error::GameError;
use crate::storage;
use crate::types::{NonceEntry, NonceSlot};

fn retention_cutoff(now: u64) -> u64 {
    now.saturating_sub(NONCE_RETENTION_SECS)
}

/// Whether `entry` still blocks its nonce at time `now`.
pub fn is_live(entry: &NonceEntry, now: u64) -> bool {
    entry.admitted_at >= retention_cutoff(now)
}

/// Record `nonce` as consumed by `player` at `now`.
///
/// An entry that has aged out but was not evicted yet is replaced; its old
/// slot turns stale and is dropped by the next eviction pass without touching
/// the new entry.
pub fn admit(
    env: &Env,
    player: &Address,
    nonce: &String,
    now: u64,
) -> Result<NonceEntry, GameError> {
    if let Some(existing) = storage::get_nonce(env, nonce) {
        if is_live(&existing, now) {
            return Err(GameError::DuplicateNonce);
        }
    }

    let mut cursor = storage::get_nonce_cursor(env);
    let slot = cursor.tail;

    let entry = NonceEntry {
        nonce: nonce.clone(),
        player: player.clone(),
        admitted_at: now,
        slot,
    };
    storage::set_nonce(env, &entry);
    storage::set_nonce_slot(
        env,
        slot,
        &NonceSlot {
            nonce: nonce.clone(),
            admitted_at: now,
        },
    );

    cursor.tail = cursor
        .tail
        .checked_add(1)
        .ok_or(GameError::ArithmeticOverflow)?;
    storage::set_nonce_cursor(env, &cursor);

    Ok(entry)
}

/// Evict aged nonces from the front of the queue.
///
/// Reads at most `max_rows` slots and stops at the first one still inside the
/// retention window. Returns the number of slots removed.
pub fn evict_expired(env: &Env, now: u64, max_rows: u32) -> u32 {
    let cutoff = retention_cutoff(now);
    let mut cursor = storage::get_nonce_cursor(env);
    let mut evicted = 0;

    while evicted < max_rows && cursor.head < cursor.tail {
        let slot_id = cursor.head;
        if let Some(slot) = storage::get_nonce_slot(env, slot_id) {
            if slot.admitted_at >= cutoff {
                break;
            }
            storage::remove_nonce_slot(env, slot_id);

            // Only drop the entry if it was not re-admitted under a newer slot.
            if let Some(entry) = storage::get_nonce(env, &slot.nonce) {
                if entry.slot == slot_id {
                    storage::remove_nonce(env, &slot.nonce);
                }
            }
        }
        cursor.head += 1;
        evicted += 1;
    }

    if evicted > 0 {
        storage::set_nonce_cursor(env, &cursor);
    }
    evicted
}

/// Slots not yet evicted, including stale ones.
pub fn backlog(env: &Env) -> u64 {
    let cursor = storage::get_nonce_cursor(env);
    cursor.tail - cursor.head
}

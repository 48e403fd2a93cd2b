//! Pending request ledger.
//!
//! Live requests form a doubly linked list in creation order. Resolution
//! unlinks a row from anywhere in the list in constant time, and the expiry
//! sweep walks from the head, so it only ever reads live rows.

use soroban_sdk::{Address, Env, String};

use crate::constants::PENDING_TIMEOUT_SECS;
use crate::error::GameError;
use crate::storage;
use crate::types::{PendingNode, PendingRequest};

/// Hand out the next request id.
pub fn allocate_id(env: &Env) -> Result<u64, GameError> {
    let id = storage::next_request_id(env);
    let next = id.checked_add(1).ok_or(GameError::ArithmeticOverflow)?;
    storage::set_next_request_id(env, next);
    Ok(id)
}

/// Insert a new pending request at the tail of the creation order.
pub fn open(
    env: &Env,
    request_id: u64,
    player: &Address,
    nonce: &String,
    correlation: u64,
    now: u64,
) -> Result<PendingRequest, GameError> {
    if storage::has_pending(env, request_id) {
        return Err(GameError::DuplicateRequestId);
    }

    let mut order = storage::get_pending_order(env);
    let request = PendingRequest {
        request_id,
        player: player.clone(),
        nonce: nonce.clone(),
        correlation,
        created_at: now,
    };

    if let Some(tail_id) = order.tail {
        if let Some(mut tail) = storage::get_pending(env, tail_id) {
            tail.next = Some(request_id);
            storage::set_pending(env, &tail);
        }
    } else {
        order.head = Some(request_id);
    }

    storage::set_pending(
        env,
        &PendingNode {
            request: request.clone(),
            prev: order.tail,
            next: None,
        },
    );

    order.tail = Some(request_id);
    order.len = order
        .len
        .checked_add(1)
        .ok_or(GameError::ArithmeticOverflow)?;
    storage::set_pending_order(env, &order);

    Ok(request)
}

/// Remove and return a pending request.
///
/// `None` covers an unknown id, a second delivery for a resolved id and an id
/// that was swept; callers cannot and must not tell these apart.
pub fn take(env: &Env, request_id: u64) -> Option<PendingRequest> {
    let node = storage::get_pending(env, request_id)?;
    storage::remove_pending(env, request_id);

    let mut order = storage::get_pending_order(env);

    match node.prev {
        Some(prev_id) => {
            if let Some(mut prev) = storage::get_pending(env, prev_id) {
                prev.next = node.next;
                storage::set_pending(env, &prev);
            }
        }
        None => order.head = node.next,
    }

    match node.next {
        Some(next_id) => {
            if let Some(mut next) = storage::get_pending(env, next_id) {
                next.prev = node.prev;
                storage::set_pending(env, &next);
            }
        }
        None => order.tail = node.prev,
    }

    order.len = order.len.saturating_sub(1);
    storage::set_pending_order(env, &order);

    Some(node.request)
}

pub fn get(env: &Env, request_id: u64) -> Option<PendingRequest> {
    storage::get_pending(env, request_id).map(|node| node.request)
}

pub fn len(env: &Env) -> u32 {
    storage::get_pending_order(env).len
}

pub fn is_expired(request: &PendingRequest, now: u64) -> bool {
    request.created_at < now.saturating_sub(PENDING_TIMEOUT_SECS)
}

/// Purge expired requests, oldest first.
///
/// Reads at most `max_rows` rows and stops at the first request that has not
/// timed out. Returns the number of requests removed.
pub fn sweep_expired(env: &Env, now: u64, max_rows: u32) -> u32 {
    let mut swept = 0;

    while swept < max_rows {
        let Some(head_id) = storage::get_pending_order(env).head else {
            break;
        };
        let Some(head) = get(env, head_id) else {
            break;
        };
        if !is_expired(&head, now) {
            break;
        }
        take(env, head_id);
        swept += 1;
    }

    swept
}

//! Outbound messages.
//!
//! The contract never waits on the oracle. It states what it wants delivered
//! and the surrounding environment does the delivery: the oracle relayer
//! follows `RAND_REQ` events and answers by calling `resolve` on `callback`.

use soroban_sdk::{Address, Env};

use crate::events;

pub enum Outbound {
    RequestRandom {
        oracle: Address,
        request_id: u64,
        correlation: u64,
        callback: Address,
    },
}

pub fn send(env: &Env, message: Outbound) {
    match message {
        Outbound::RequestRandom {
            oracle,
            request_id,
            correlation,
            callback,
        } => events::emit_randomness_requested(env, &oracle, request_id, correlation, &callback),
    }
}

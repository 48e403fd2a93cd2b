#![no_std]

//! # BLTZ Gameplay
//!
//! A Soroban smart contract running a two-phase wager against an external
//! randomness oracle. A player pays nothing to play; a win mints a fixed DBP
//! reward through the token ledger.
//!
//! ## Flow
//! 1. `play` (player-authorized): admits the nonce, opens a pending request
//!    and asks the oracle for randomness through the outbox.
//! 2. `resolve` / `resolve_digest` (oracle-authorized): consumes the pending
//!    request, evaluates the roll and, on a win, issues the reward.
//! 3. `sweep_expired` / `evict_nonces` (admin): bounded maintenance of the
//!    pending ledger and the nonce registry. `play` also runs a small round of
//!    both.
//!
//! ## Guarantees
//! - A nonce is admitted at most once per retention window (global, not per
//!   player)
//! - A pending request is consumed exactly once: resolved or swept, never both
//! - A reward is issued at most once per request, and only together with the
//!   removal of its pending row
//! - Every scan reads a bounded number of rows
//! - Any failure aborts the call with no partial writes

use soroban_sdk::{contract, contractimpl, xdr::ToXdr, Address, BytesN, Env, String};

mod access;
mod constants;
mod error;
mod events;
mod nonces;
mod outbox;
pub mod outcome;
mod pending;
mod rewards;
mod storage;
mod types;

pub use error::GameError;
pub use types::{GameConfig, NonceEntry, PendingRequest, PlayerRecord};

use constants::{
    DEFAULT_REWARD_AMOUNT, DEFAULT_WIN_THRESHOLD, MAX_MAINTENANCE_ROWS, MAX_NONCE_LEN,
    PLAY_NONCE_EVICTION_ROWS, PLAY_PENDING_SWEEP_ROWS, REWARD_MEMO,
};
use outbox::Outbound;
use types::ActiveConfig;

#[contract]
pub struct BltzGameplay;

#[contractimpl]
impl BltzGameplay {
    // ========================================================================
    // Initialization & Configuration
    // ========================================================================

    /// Initialize the contract with its controlling authority.
    ///
    /// The token ledger and oracle start unset; plays are refused until both
    /// are configured.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - Contract has already been initialized
    pub fn initialize(env: Env, admin: Address) -> Result<(), GameError> {
        if storage::has_admin(&env) {
            return Err(GameError::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_config(
            &env,
            &GameConfig {
                token_ledger: None,
                oracle: None,
                win_threshold: DEFAULT_WIN_THRESHOLD,
                reward_amount: DEFAULT_REWARD_AMOUNT,
            },
        );
        storage::bump_instance(&env);

        events::emit_initialized(&env, &admin, env.ledger().timestamp());
        Ok(())
    }

    /// Point rewards at a token ledger. This contract must be its issuer.
    pub fn set_token_ledger(
        env: Env,
        caller: Address,
        token_ledger: Address,
    ) -> Result<(), GameError> {
        access::require_admin(&env, &caller)?;

        let mut config = load_config(&env)?;
        config.token_ledger = Some(token_ledger.clone());
        storage::set_config(&env, &config);
        storage::bump_instance(&env);

        events::emit_token_ledger_set(&env, &token_ledger);
        Ok(())
    }

    /// Set the only account allowed to deliver randomness.
    pub fn set_oracle(env: Env, caller: Address, oracle: Address) -> Result<(), GameError> {
        access::require_admin(&env, &caller)?;

        let mut config = load_config(&env)?;
        config.oracle = Some(oracle.clone());
        storage::set_config(&env, &config);
        storage::bump_instance(&env);

        events::emit_oracle_set(&env, &oracle);
        Ok(())
    }

    /// Update the win probability (percent) and the per-win reward.
    ///
    /// # Errors
    /// * `InvalidThreshold` - `win_threshold` above 100
    /// * `InvalidRewardAmount` - `reward_amount` not positive
    pub fn set_payout(
        env: Env,
        caller: Address,
        win_threshold: u32,
        reward_amount: i128,
    ) -> Result<(), GameError> {
        access::require_admin(&env, &caller)?;

        if win_threshold as u64 > constants::ROLL_RANGE {
            return Err(GameError::InvalidThreshold);
        }
        if reward_amount <= 0 {
            return Err(GameError::InvalidRewardAmount);
        }

        let mut config = load_config(&env)?;
        config.win_threshold = win_threshold;
        config.reward_amount = reward_amount;
        storage::set_config(&env, &config);
        storage::bump_instance(&env);

        events::emit_payout_set(&env, win_threshold, reward_amount);
        Ok(())
    }

    // ========================================================================
    // Play
    // ========================================================================

    /// Start a play and request randomness for it.
    ///
    /// Returns the request id the oracle will answer to.
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `NotConfigured` - Token ledger or oracle not set
    /// * `MalformedInput` - Nonce empty or longer than `MAX_NONCE_LEN`
    /// * `DuplicateNonce` - Nonce already admitted within the retention window
    pub fn play(env: Env, player: Address, nonce: String) -> Result<u64, GameError> {
        let config = active_config(&env)?;

        player.require_auth();

        if nonce.is_empty() || nonce.len() > MAX_NONCE_LEN {
            return Err(GameError::MalformedInput);
        }

        let now = env.ledger().timestamp();

        nonces::evict_expired(&env, now, PLAY_NONCE_EVICTION_ROWS);
        pending::sweep_expired(&env, now, PLAY_PENDING_SWEEP_ROWS);

        nonces::admit(&env, &player, &nonce, now)?;
        record_play(&env, &player, &nonce, now)?;

        let request_id = pending::allocate_id(&env)?;
        let correlation = correlation_value(&env, &player, &nonce, now);
        pending::open(&env, request_id, &player, &nonce, correlation, now)?;

        outbox::send(
            &env,
            Outbound::RequestRandom {
                oracle: config.oracle,
                request_id,
                correlation,
                callback: env.current_contract_address(),
            },
        );

        storage::bump_instance(&env);
        events::emit_play_admitted(&env, &player, request_id, &nonce, now);
        Ok(request_id)
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Oracle callback carrying a raw random integer.
    ///
    /// Returns whether the play won.
    ///
    /// # Errors
    /// * `NotConfigured` - Token ledger or oracle not set
    /// * `Unauthorized` - Caller is not the configured oracle
    /// * `RequestNotFound` - Unknown, already resolved or swept request
    /// * `InsufficientSupply` / `OverdrawnBalance` / `RewardDispatchFailed` -
    ///   The token ledger refused the reward
    pub fn resolve(
        env: Env,
        caller: Address,
        request_id: u64,
        random_value: u64,
    ) -> Result<bool, GameError> {
        settle(&env, &caller, request_id, outcome::roll(random_value))
    }

    /// Oracle callback carrying a 32-byte random digest. The roll is taken
    /// from the digest's high-order bytes.
    pub fn resolve_digest(
        env: Env,
        caller: Address,
        request_id: u64,
        random_value: BytesN<32>,
    ) -> Result<bool, GameError> {
        settle(
            &env,
            &caller,
            request_id,
            outcome::roll_from_digest(&random_value.to_array()),
        )
    }

    /// Result notification for off-chain observers. Only this contract can
    /// authorize it.
    pub fn log_result(env: Env, player: Address, won: bool, roll: u32) {
        env.current_contract_address().require_auth();
        events::emit_result_logged(&env, &player, won, roll);
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Remove pending requests that timed out, oldest first, examining at
    /// most `max_rows` rows. Returns how many were removed.
    pub fn sweep_expired(env: Env, caller: Address, max_rows: u32) -> Result<u32, GameError> {
        access::require_admin(&env, &caller)?;
        check_row_cap(max_rows)?;

        let now = env.ledger().timestamp();
        let swept = pending::sweep_expired(&env, now, max_rows);

        storage::bump_instance(&env);
        if swept > 0 {
            events::emit_pending_swept(&env, swept, now);
        }
        Ok(swept)
    }

    /// Evict nonces older than the retention window, oldest first, examining
    /// at most `max_rows` rows. Returns how many were evicted.
    pub fn evict_nonces(env: Env, caller: Address, max_rows: u32) -> Result<u32, GameError> {
        access::require_admin(&env, &caller)?;
        check_row_cap(max_rows)?;

        let now = env.ledger().timestamp();
        let evicted = nonces::evict_expired(&env, now, max_rows);

        storage::bump_instance(&env);
        if evicted > 0 {
            events::emit_nonces_evicted(&env, evicted, now);
        }
        Ok(evicted)
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    pub fn get_admin(env: Env) -> Result<Address, GameError> {
        storage::get_admin(&env).ok_or(GameError::NotInitialized)
    }

    pub fn get_config(env: Env) -> Result<GameConfig, GameError> {
        load_config(&env)
    }

    pub fn get_player(env: Env, player: Address) -> Option<PlayerRecord> {
        storage::get_player(&env, &player)
    }

    pub fn get_pending(env: Env, request_id: u64) -> Option<PendingRequest> {
        pending::get(&env, request_id)
    }

    /// Nonce entry if one is stored, live or awaiting eviction.
    pub fn get_nonce(env: Env, nonce: String) -> Option<NonceEntry> {
        storage::get_nonce(&env, &nonce)
    }

    pub fn pending_count(env: Env) -> u32 {
        pending::len(&env)
    }

    /// Nonce queue slots not yet evicted.
    pub fn nonce_backlog(env: Env) -> u64 {
        nonces::backlog(&env)
    }

    pub fn next_request_id(env: Env) -> u64 {
        storage::next_request_id(&env)
    }
}

// ============================================================================
// Internal transitions
// ============================================================================

fn load_config(env: &Env) -> Result<GameConfig, GameError> {
    storage::get_config(env).ok_or(GameError::NotInitialized)
}

fn active_config(env: &Env) -> Result<ActiveConfig, GameError> {
    let config = load_config(env)?;
    match (config.token_ledger, config.oracle) {
        (Some(token_ledger), Some(oracle)) => Ok(ActiveConfig {
            token_ledger,
            oracle,
            win_threshold: config.win_threshold,
            reward_amount: config.reward_amount,
        }),
        _ => Err(GameError::NotConfigured),
    }
}

fn check_row_cap(max_rows: u32) -> Result<(), GameError> {
    if max_rows > MAX_MAINTENANCE_ROWS {
        return Err(GameError::MalformedInput);
    }
    Ok(())
}

fn record_play(env: &Env, player: &Address, nonce: &String, now: u64) -> Result<(), GameError> {
    let mut record = storage::get_player(env, player).unwrap_or_else(|| PlayerRecord {
        player: player.clone(),
        total_plays: 0,
        total_wins: 0,
        last_nonce: String::from_str(env, ""),
        last_played_at: 0,
    });

    record.total_plays = record
        .total_plays
        .checked_add(1)
        .ok_or(GameError::ArithmeticOverflow)?;
    record.last_nonce = nonce.clone();
    record.last_played_at = now;

    storage::set_player(env, &record);
    Ok(())
}

/// `now ^ H(player) ^ H(nonce)`, H being the leading 8 bytes of the SHA-256
/// of the XDR encoding.
fn correlation_value(env: &Env, player: &Address, nonce: &String, now: u64) -> u64 {
    let player_digest = env.crypto().sha256(&player.clone().to_xdr(env));
    let nonce_digest = env.crypto().sha256(&nonce.clone().to_xdr(env));
    now ^ fold_digest(&player_digest.to_array()) ^ fold_digest(&nonce_digest.to_array())
}

fn fold_digest(digest: &[u8; 32]) -> u64 {
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}

fn settle(env: &Env, caller: &Address, request_id: u64, roll: u32) -> Result<bool, GameError> {
    let config = active_config(env)?;
    access::require_oracle(&config.oracle, caller)?;

    let request = pending::take(env, request_id).ok_or(GameError::RequestNotFound)?;
    let won = outcome::is_win(roll, config.win_threshold);

    if won {
        let mut record =
            storage::get_player(env, &request.player).ok_or(GameError::PlayerNotFound)?;
        record.total_wins = record
            .total_wins
            .checked_add(1)
            .ok_or(GameError::ArithmeticOverflow)?;
        storage::set_player(env, &record);

        rewards::dispatch(
            env,
            &config.token_ledger,
            &request.player,
            config.reward_amount,
            &String::from_str(env, REWARD_MEMO),
        )?;
        events::emit_reward_issued(env, &request.player, request_id, config.reward_amount);
    }

    storage::bump_instance(env);
    events::emit_result_logged(env, &request.player, won, roll);
    Ok(won)
}

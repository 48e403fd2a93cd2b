use soroban_sdk::{contractevent, Address, Env, String};

#[contractevent(topics = ["BltzGameplay", "INIT"])]
struct GameplayInitialized {
    admin: Address,
    timestamp: u64,
}

#[contractevent(topics = ["BltzGameplay", "TOKEN_SET"])]
struct TokenLedgerSet {
    token_ledger: Address,
}

#[contractevent(topics = ["BltzGameplay", "ORACLE_SET"])]
struct OracleSet {
    oracle: Address,
}

#[contractevent(topics = ["BltzGameplay", "PAYOUT_SET"])]
struct PayoutSet {
    win_threshold: u32,
    reward_amount: i128,
}

#[contractevent(topics = ["BltzGameplay", "PLAYED"])]
struct PlayAdmitted {
    player: Address,
    request_id: u64,
    nonce: String,
    timestamp: u64,
}

#[contractevent(topics = ["BltzGameplay", "RAND_REQ"])]
struct RandomnessRequested {
    oracle: Address,
    request_id: u64,
    correlation: u64,
    callback: Address,
}

#[contractevent(topics = ["BltzGameplay", "RESULT"])]
struct ResultLogged {
    player: Address,
    won: bool,
    roll: u32,
}

#[contractevent(topics = ["BltzGameplay", "REWARDED"])]
struct RewardIssued {
    player: Address,
    request_id: u64,
    amount: i128,
}

#[contractevent(topics = ["BltzGameplay", "SWEPT"])]
struct PendingSwept {
    swept: u32,
    timestamp: u64,
}

#[contractevent(topics = ["BltzGameplay", "EVICTED"])]
struct NoncesEvicted {
    evicted: u32,
    timestamp: u64,
}

pub fn emit_initialized(env: &Env, admin: &Address, timestamp: u64) {
    GameplayInitialized {
        admin: admin.clone(),
        timestamp,
    }
    .publish(env);
}

pub fn emit_token_ledger_set(env: &Env, token_ledger: &Address) {
    TokenLedgerSet {
        token_ledger: token_ledger.clone(),
    }
    .publish(env);
}

pub fn emit_oracle_set(env: &Env, oracle: &Address) {
    OracleSet {
        oracle: oracle.clone(),
    }
    .publish(env);
}

pub fn emit_payout_set(env: &Env, win_threshold: u32, reward_amount: i128) {
    PayoutSet {
        win_threshold,
        reward_amount,
    }
    .publish(env);
}

pub fn emit_play_admitted(
    env: &Env,
    player: &Address,
    request_id: u64,
    nonce: &String,
    timestamp: u64,
) {
    PlayAdmitted {
        player: player.clone(),
        request_id,
        nonce: nonce.clone(),
        timestamp,
    }
    .publish(env);
}

pub fn emit_randomness_requested(
    env: &Env,
    oracle: &Address,
    request_id: u64,
    correlation: u64,
    callback: &Address,
) {
    RandomnessRequested {
        oracle: oracle.clone(),
        request_id,
        correlation,
        callback: callback.clone(),
    }
    .publish(env);
}

pub fn emit_result_logged(env: &Env, player: &Address, won: bool, roll: u32) {
    ResultLogged {
        player: player.clone(),
        won,
        roll,
    }
    .publish(env);
}

pub fn emit_reward_issued(env: &Env, player: &Address, request_id: u64, amount: i128) {
    RewardIssued {
        player: player.clone(),
        request_id,
        amount,
    }
    .publish(env);
}

pub fn emit_pending_swept(env: &Env, swept: u32, timestamp: u64) {
    PendingSwept { swept, timestamp }.publish(env);
}

pub fn emit_nonces_evicted(env: &Env, evicted: u32, timestamp: u64) {
    NoncesEvicted { evicted, timestamp }.publish(env);
}

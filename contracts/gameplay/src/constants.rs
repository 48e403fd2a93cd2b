//! Fixed protocol parameters.

/// Window during which an admitted nonce cannot be admitted again (24 hours).
pub const NONCE_RETENTION_SECS: u64 = 24 * 60 * 60;

/// Age after which an unresolved pending request may be swept (5 minutes).
pub const PENDING_TIMEOUT_SECS: u64 = 5 * 60;

/// Nonces are opaque strings of 1..=MAX_NONCE_LEN bytes.
pub const MAX_NONCE_LEN: u32 = 64;

/// Upper bound on `max_rows` accepted by the maintenance entry points.
pub const MAX_MAINTENANCE_ROWS: u32 = 100;

/// Rows examined by the opportunistic maintenance that runs inside `play`.
pub const PLAY_NONCE_EVICTION_ROWS: u32 = 10;
pub const PLAY_PENDING_SWEEP_ROWS: u32 = 5;

/// Roll values are reduced into 0..ROLL_RANGE.
pub const ROLL_RANGE: u64 = 100;

pub const DEFAULT_WIN_THRESHOLD: u32 = 35;
/// 1.0000 DBP at 4 decimals.
pub const DEFAULT_REWARD_AMOUNT: i128 = 10_000;

pub const REWARD_MEMO: &str = "BLTZ win reward";

// Ledger is ~5s; persistent rows live ~30 days and are bumped on every write.
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
pub const PERSISTENT_BUMP_THRESHOLD: u32 = PERSISTENT_BUMP_LEDGERS - 17_280;
pub const INSTANCE_BUMP_LEDGERS: u32 = 518_400;
pub const INSTANCE_BUMP_THRESHOLD: u32 = INSTANCE_BUMP_LEDGERS - 17_280;

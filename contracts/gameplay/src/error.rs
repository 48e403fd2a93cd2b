//! Error types for the BLTZ gameplay contract

use soroban_sdk::contracterror;

/// Gameplay contract errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GameError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller does not hold the role this operation requires
    Unauthorized = 3,
    /// Token ledger or oracle account has not been set
    NotConfigured = 4,
    /// Nonce was already admitted within the retention window
    DuplicateNonce = 5,
    /// A pending request with this id is already live
    DuplicateRequestId = 6,
    /// No pending request with this id (unknown, already resolved, or swept)
    RequestNotFound = 7,
    /// Nonce length or row cap out of bounds
    MalformedInput = 8,
    /// Pending request refers to a player without a record
    PlayerNotFound = 9,
    /// Win threshold must be within 0..=100
    InvalidThreshold = 10,
    /// Reward amount must be positive
    InvalidRewardAmount = 11,
    ArithmeticOverflow = 12,
    /// Token ledger refused to issue: max supply reached
    InsufficientSupply = 13,
    /// Token ledger reported an overdrawn balance
    OverdrawnBalance = 14,
    /// Token ledger call failed for any other reason
    RewardDispatchFailed = 15,
}

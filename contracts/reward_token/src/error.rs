use soroban_sdk::contracterror;

/// Token ledger errors. Codes are part of the public interface: the gameplay
/// contract maps `InsufficientSupply` and `OverdrawnBalance` by number.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// `create` was already called for this contract
    AlreadyCreated = 1,
    /// The token has not been created yet
    NotCreated = 2,
    /// Quantity must be strictly positive
    InvalidAmount = 3,
    /// Maximum supply must be strictly positive
    InvalidMaxSupply = 4,
    /// Issuing would push supply above the maximum
    InsufficientSupply = 5,
    /// Account balance is lower than the requested quantity
    OverdrawnBalance = 6,
    /// Memo exceeds `MAX_MEMO_LEN` bytes
    MemoTooLong = 7,
    /// Sender and recipient are the same account
    SelfTransfer = 8,
    /// Decimals exceed `MAX_DECIMALS`
    InvalidDecimals = 9,
    ArithmeticOverflow = 10,
}

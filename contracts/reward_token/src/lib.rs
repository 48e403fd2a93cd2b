#![no_std]

//! # DBP Reward Token
//!
//! Single-asset fungible token ledger used to pay BLTZ wins. One deployed
//! instance is one asset, so every quantity is implicitly denominated in the
//! symbol fixed at `create`.
//!
//! ## Invariants
//! - `0 <= supply <= max_supply`
//! - every balance is `>= 0`
//! - `supply` equals the sum of all balances

use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol};

mod error;
mod events;
mod storage;

pub use error::TokenError;
pub use storage::TokenInfo;

/// Longest memo accepted by `issue` and `transfer`, in bytes.
pub const MAX_MEMO_LEN: u32 = 256;
/// Largest decimal precision a token may declare.
pub const MAX_DECIMALS: u32 = 18;

#[contract]
pub struct RewardToken;

#[contractimpl]
impl RewardToken {
    /// Create the asset. Can only be called once; the issuer must authorize.
    ///
    /// # Errors
    /// * `AlreadyCreated` - The asset already exists
    /// * `InvalidMaxSupply` - `max_supply` is not positive
    /// * `InvalidDecimals` - `decimals` exceeds `MAX_DECIMALS`
    pub fn create(
        env: Env,
        issuer: Address,
        symbol: Symbol,
        decimals: u32,
        max_supply: i128,
    ) -> Result<(), TokenError> {
        if storage::get_info(&env).is_some() {
            return Err(TokenError::AlreadyCreated);
        }

        issuer.require_auth();

        if max_supply <= 0 {
            return Err(TokenError::InvalidMaxSupply);
        }
        if decimals > MAX_DECIMALS {
            return Err(TokenError::InvalidDecimals);
        }

        let info = TokenInfo {
            issuer: issuer.clone(),
            symbol: symbol.clone(),
            decimals,
            supply: 0,
            max_supply,
        };
        storage::set_info(&env, &info);

        storage::bump_instance(&env);
        events::emit_created(&env, &issuer, &symbol, max_supply);
        Ok(())
    }

    /// Mint `quantity` new units to `to`. Only the issuer may issue.
    ///
    /// # Errors
    /// * `NotCreated` - `create` has not been called
    /// * `InvalidAmount` - `quantity` is not positive
    /// * `MemoTooLong` - memo exceeds `MAX_MEMO_LEN`
    /// * `InsufficientSupply` - issuing would exceed `max_supply`
    pub fn issue(env: Env, to: Address, quantity: i128, memo: String) -> Result<(), TokenError> {
        let mut info = storage::get_info(&env).ok_or(TokenError::NotCreated)?;

        info.issuer.require_auth();

        check_quantity(quantity)?;
        check_memo(&memo)?;

        if quantity > info.max_supply - info.supply {
            return Err(TokenError::InsufficientSupply);
        }

        info.supply += quantity;
        storage::set_info(&env, &info);

        let balance = storage::get_balance(&env, &to)
            .checked_add(quantity)
            .ok_or(TokenError::ArithmeticOverflow)?;
        storage::set_balance(&env, &to, balance);

        storage::bump_instance(&env);
        events::emit_issued(&env, &to, quantity, &memo);
        Ok(())
    }

    /// Move `quantity` units from `from` to `to`.
    ///
    /// # Errors
    /// * `SelfTransfer` - `from == to`
    /// * `NotCreated` - `create` has not been called
    /// * `InvalidAmount` - `quantity` is not positive
    /// * `MemoTooLong` - memo exceeds `MAX_MEMO_LEN`
    /// * `OverdrawnBalance` - `from` holds less than `quantity`
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        quantity: i128,
        memo: String,
    ) -> Result<(), TokenError> {
        if from == to {
            return Err(TokenError::SelfTransfer);
        }

        from.require_auth();

        storage::get_info(&env).ok_or(TokenError::NotCreated)?;
        check_quantity(quantity)?;
        check_memo(&memo)?;

        sub_balance(&env, &from, quantity)?;
        let balance = storage::get_balance(&env, &to)
            .checked_add(quantity)
            .ok_or(TokenError::ArithmeticOverflow)?;
        storage::set_balance(&env, &to, balance);

        storage::bump_instance(&env);
        events::emit_transferred(&env, &from, &to, quantity, &memo);
        Ok(())
    }

    /// Destroy `quantity` units held by `owner`, shrinking the supply.
    ///
    /// # Errors
    /// * `NotCreated` - `create` has not been called
    /// * `InvalidAmount` - `quantity` is not positive
    /// * `OverdrawnBalance` - `owner` holds less than `quantity`
    pub fn burn(env: Env, owner: Address, quantity: i128) -> Result<(), TokenError> {
        owner.require_auth();

        let mut info = storage::get_info(&env).ok_or(TokenError::NotCreated)?;
        check_quantity(quantity)?;

        sub_balance(&env, &owner, quantity)?;
        info.supply -= quantity;
        storage::set_info(&env, &info);

        storage::bump_instance(&env);
        events::emit_burned(&env, &owner, quantity);
        Ok(())
    }

    pub fn balance(env: Env, owner: Address) -> i128 {
        storage::get_balance(&env, &owner)
    }

    pub fn supply(env: Env) -> Result<i128, TokenError> {
        Ok(storage::get_info(&env).ok_or(TokenError::NotCreated)?.supply)
    }

    pub fn token_info(env: Env) -> Result<TokenInfo, TokenError> {
        storage::get_info(&env).ok_or(TokenError::NotCreated)
    }
}

fn check_quantity(quantity: i128) -> Result<(), TokenError> {
    if quantity <= 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

fn check_memo(memo: &String) -> Result<(), TokenError> {
    if memo.len() > MAX_MEMO_LEN {
        return Err(TokenError::MemoTooLong);
    }
    Ok(())
}

fn sub_balance(env: &Env, owner: &Address, quantity: i128) -> Result<(), TokenError> {
    let balance = storage::get_balance(env, owner);
    if balance < quantity {
        return Err(TokenError::OverdrawnBalance);
    }
    storage::set_balance(env, owner, balance - quantity);
    Ok(())
}

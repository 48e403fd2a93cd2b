//! Reward dispatch through the token ledger's `issue` entry point.
//!
//! This contract is the token's issuer, so the direct call carries its
//! authorization. A failed issue aborts the whole resolution.

use soroban_sdk::{contractclient, Address, Env, Error, String};

use crate::error::GameError;

// Error codes reported by the token ledger.
const LEDGER_INSUFFICIENT_SUPPLY: u32 = 5;
const LEDGER_OVERDRAWN_BALANCE: u32 = 6;

#[allow(dead_code)]
#[contractclient(name = "TokenLedgerClient")]
pub trait TokenLedger {
    fn issue(env: Env, to: Address, quantity: i128, memo: String);
}

pub fn dispatch(
    env: &Env,
    token_ledger: &Address,
    player: &Address,
    amount: i128,
    memo: &String,
) -> Result<(), GameError> {
    let ledger = TokenLedgerClient::new(env, token_ledger);
    match ledger.try_issue(player, &amount, memo) {
        Ok(Ok(())) => Ok(()),
        Err(Ok(err)) => Err(map_ledger_error(err)),
        _ => Err(GameError::RewardDispatchFailed),
    }
}

fn map_ledger_error(err: Error) -> GameError {
    if err == Error::from_contract_error(LEDGER_INSUFFICIENT_SUPPLY) {
        GameError::InsufficientSupply
    } else if err == Error::from_contract_error(LEDGER_OVERDRAWN_BALANCE) {
        GameError::OverdrawnBalance
    } else {
        GameError::RewardDispatchFailed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_errors_map_to_game_errors() {
        assert_eq!(
            map_ledger_error(Error::from_contract_error(5)),
            GameError::InsufficientSupply
        );
        assert_eq!(
            map_ledger_error(Error::from_contract_error(6)),
            GameError::OverdrawnBalance
        );
        assert_eq!(
            map_ledger_error(Error::from_contract_error(7)),
            GameError::RewardDispatchFailed
        );
    }
}

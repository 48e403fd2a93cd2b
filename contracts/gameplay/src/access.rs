//! Role checks. Every transition takes the acting account explicitly; the
//! account must authorize the call and then match the role the transition
//! expects.

use soroban_sdk::{Address, Env};

use crate::error::GameError;
use crate::storage;

/// Pure role precondition: `caller` must be `expected`.
pub fn ensure_role(expected: &Address, caller: &Address) -> Result<(), GameError> {
    if expected != caller {
        return Err(GameError::Unauthorized);
    }
    Ok(())
}

/// Authorize `caller` and require it to be the controlling authority.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), GameError> {
    let admin = storage::get_admin(env).ok_or(GameError::NotInitialized)?;
    caller.require_auth();
    ensure_role(&admin, caller)
}

/// Authorize `caller` and require it to be the configured oracle.
pub fn require_oracle(oracle: &Address, caller: &Address) -> Result<(), GameError> {
    caller.require_auth();
    ensure_role(oracle, caller)
}

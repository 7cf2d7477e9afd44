//! Call guards shared by every state-mutating entry point

use soroban_sdk::{Address, Env};

use crate::error::TokenError;
use crate::storage::{self, DataKey};

/// Scoped reentrancy lock on the token ledger.
///
/// Held for the whole body of a mutating call; released on drop, including early returns.
pub struct CallGuard {
    env: Env,
}

impl CallGuard {
    pub fn acquire(env: &Env) -> Result<Self, TokenError> {
        if env.storage().instance().has(&DataKey::CallLock) {
            return Err(TokenError::Reentrancy);
        }
        env.storage().instance().set(&DataKey::CallLock, &true);
        Ok(Self { env: env.clone() })
    }
}

impl Drop for CallGuard {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&DataKey::CallLock);
    }
}

/// Entry check for user operations: initialized, not paused, not reentered.
pub fn enter(env: &Env) -> Result<CallGuard, TokenError> {
    if !storage::is_initialized(env) {
        return Err(TokenError::NotInitialized);
    }
    if storage::is_paused(env) {
        return Err(TokenError::ContractPaused);
    }
    let guard = CallGuard::acquire(env)?;
    storage::bump_instance(env);
    Ok(guard)
}

/// Entry check for admin controls. These stay available while paused.
pub fn enter_admin(env: &Env, caller: &Address) -> Result<CallGuard, TokenError> {
    require_admin(env, caller)?;
    let guard = CallGuard::acquire(env)?;
    storage::bump_instance(env);
    Ok(guard)
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), TokenError> {
    let admin = storage::get_admin(env)?;
    caller.require_auth();
    if caller != &admin {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

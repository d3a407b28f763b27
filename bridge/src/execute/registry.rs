//! Chain & token registry and role management handlers.
//!
//! Registry mutation is gated by the chain manager role; role grants and the
//! validator key are gated by the admin.

use cosmwasm_std::{Deps, DepsMut, HexBinary, MessageInfo, Response, StdError};

use crate::error::ContractError;
use crate::state::{CHAIN_MANAGER_ROLE, CONFIG, ROLES, SUPPORTED_CHAINS, TOKEN_CHAINS, VALIDATOR};

// ============================================================================
// Guards
// ============================================================================

/// Check whether the sender holds the chain manager role.
pub fn ensure_chain_manager(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let granted = ROLES
        .may_load(deps.storage, (CHAIN_MANAGER_ROLE, &info.sender))?
        .unwrap_or(false);
    if !granted {
        return Err(ContractError::NotManager);
    }
    Ok(())
}

/// Check that `token` is an instantiated contract, not a plain account.
fn ensure_contract(deps: Deps, token: &str) -> Result<(), ContractError> {
    deps.querier
        .query_wasm_contract_info(token)
        .map_err(|_| ContractError::NotContract)?;
    Ok(())
}

// ============================================================================
// Role Management
// ============================================================================

/// Grant a role to an address.
pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: String,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let grantee = deps.api.addr_validate(&address)?;
    ROLES.save(deps.storage, (&role, &grantee), &true)?;

    Ok(Response::new()
        .add_attribute("method", "grant_role")
        .add_attribute("role", role)
        .add_attribute("address", address))
}

/// Revoke a role from an address.
pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: String,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let grantee = deps.api.addr_validate(&address)?;
    ROLES.remove(deps.storage, (&role, &grantee));

    Ok(Response::new()
        .add_attribute("method", "revoke_role")
        .add_attribute("role", role)
        .add_attribute("address", address))
}

// ============================================================================
// Chain Management
// ============================================================================

/// Mark a chain ID as supported. Idempotent: re-marking raises no error.
pub fn execute_update_chain_by_id(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
) -> Result<Response, ContractError> {
    ensure_chain_manager(deps.as_ref(), &info)?;

    SUPPORTED_CHAINS.save(deps.storage, chain_id, &true)?;

    Ok(Response::new()
        .add_attribute("method", "update_chain_by_id")
        .add_attribute("chain_id", chain_id.to_string()))
}

// ============================================================================
// Token Management
// ============================================================================

/// Enable a token for a destination chain.
///
/// Re-including an already-enabled pair is an error, not a no-op. The chain
/// ID is marked supported as a side effect, so an enabled pair never
/// references an unrecognized chain.
pub fn execute_include_token(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    chain_id: u64,
) -> Result<Response, ContractError> {
    ensure_chain_manager(deps.as_ref(), &info)?;
    ensure_contract(deps.as_ref(), &token)?;

    let enabled = TOKEN_CHAINS
        .may_load(deps.storage, (&token, chain_id))?
        .unwrap_or(false);
    if enabled {
        return Err(ContractError::TokenAlreadySupported);
    }

    TOKEN_CHAINS.save(deps.storage, (&token, chain_id), &true)?;
    SUPPORTED_CHAINS.save(deps.storage, chain_id, &true)?;

    Ok(Response::new()
        .add_attribute("method", "include_token")
        .add_attribute("token", token)
        .add_attribute("chain_id", chain_id.to_string()))
}

/// Disable a token for a destination chain.
pub fn execute_exclude_token(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    chain_id: u64,
) -> Result<Response, ContractError> {
    ensure_chain_manager(deps.as_ref(), &info)?;
    ensure_contract(deps.as_ref(), &token)?;

    let enabled = TOKEN_CHAINS
        .may_load(deps.storage, (&token, chain_id))?
        .unwrap_or(false);
    if !enabled {
        return Err(ContractError::TokenNotSupported);
    }

    TOKEN_CHAINS.save(deps.storage, (&token, chain_id), &false)?;

    Ok(Response::new()
        .add_attribute("method", "exclude_token")
        .add_attribute("token", token)
        .add_attribute("chain_id", chain_id.to_string()))
}

// ============================================================================
// Validator Management
// ============================================================================

/// Replace the trusted validator's signer address.
pub fn execute_set_validator(
    deps: DepsMut,
    info: MessageInfo,
    validator: HexBinary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    validate_validator(&validator)?;
    VALIDATOR.save(deps.storage, &validator)?;

    Ok(Response::new()
        .add_attribute("method", "set_validator")
        .add_attribute("validator", validator.to_hex()))
}

/// Reject validator values that are not a 20-byte non-zero signer address.
///
/// A wrong-length value would never match a recovered signer, leaving every
/// redeem stuck behind "check sign failure".
pub fn validate_validator(validator: &HexBinary) -> Result<(), ContractError> {
    let bytes = validator.as_slice();
    if bytes.len() != 20 {
        return Err(StdError::generic_err("validator must be 20 bytes").into());
    }
    if bytes.iter().all(|b| *b == 0) {
        return Err(ContractError::ZeroAddress);
    }
    Ok(())
}

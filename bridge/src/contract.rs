//! GIS Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_exclude_token, execute_grant_role, execute_include_token, execute_redeem,
    execute_revoke_role, execute_set_validator, execute_swap, execute_update_chain_by_id,
    validate_validator,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_has_role, query_is_chain_supports, query_is_token_supports_chain_id,
    query_redeem_digest, query_transfer_status, query_validator,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, SUPPORTED_CHAINS, VALIDATOR};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    validate_validator(&msg.validator)?;

    let config = Config {
        admin: info.sender.clone(),
        chain_id: msg.chain_id,
    };
    CONFIG.save(deps.storage, &config)?;
    VALIDATOR.save(deps.storage, &msg.validator)?;

    // This instance's own chain is recognized from the start
    SUPPORTED_CHAINS.save(deps.storage, msg.chain_id, &true)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", info.sender)
        .add_attribute("chain_id", msg.chain_id.to_string())
        .add_attribute("validator", msg.validator.to_hex()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfers
        ExecuteMsg::Swap {
            token,
            to,
            amount,
            nonce,
            chain_id_from,
            chain_id_to,
        } => execute_swap(deps, info, token, to, amount, nonce, chain_id_from, chain_id_to),
        ExecuteMsg::Redeem {
            token,
            from,
            amount,
            nonce,
            chain_id_from,
            chain_id_to,
            signature,
        } => execute_redeem(
            deps,
            info,
            token,
            from,
            amount,
            nonce,
            chain_id_from,
            chain_id_to,
            signature,
        ),

        // Chain & token registry
        ExecuteMsg::UpdateChainById { chain_id } => {
            execute_update_chain_by_id(deps, info, chain_id)
        }
        ExecuteMsg::IncludeToken { token, chain_id } => {
            execute_include_token(deps, info, token, chain_id)
        }
        ExecuteMsg::ExcludeToken { token, chain_id } => {
            execute_exclude_token(deps, info, token, chain_id)
        }

        // Role management
        ExecuteMsg::GrantRole { role, address } => execute_grant_role(deps, info, role, address),
        ExecuteMsg::RevokeRole { role, address } => execute_revoke_role(deps, info, role, address),

        // Validator management
        ExecuteMsg::SetValidator { validator } => execute_set_validator(deps, info, validator),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Validator {} => to_json_binary(&query_validator(deps)?),
        QueryMsg::IsChainSupports { chain_id } => {
            to_json_binary(&query_is_chain_supports(deps, chain_id)?)
        }
        QueryMsg::IsTokenSupportsChainId { token, chain_id } => {
            to_json_binary(&query_is_token_supports_chain_id(deps, token, chain_id)?)
        }
        QueryMsg::HasRole { role, address } => to_json_binary(&query_has_role(deps, role, address)?),
        QueryMsg::TransferStatus {
            token,
            from,
            amount,
            nonce,
            chain_id_from,
            chain_id_to,
        } => to_json_binary(&query_transfer_status(
            deps,
            token,
            from,
            amount,
            nonce,
            chain_id_from,
            chain_id_to,
        )?),
        QueryMsg::RedeemDigest {
            from,
            to,
            amount,
            nonce,
            chain_id_from,
            chain_id_to,
        } => to_json_binary(&query_redeem_digest(
            from,
            to,
            amount,
            nonce,
            chain_id_from,
            chain_id_to,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

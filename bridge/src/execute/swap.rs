//! Outbound swap handler.
//!
//! A swap removes tokens from circulation on this chain (cw20 burn) and emits
//! the transfer record that an off-chain relay carries to the destination
//! chain together with the validator's signature.

use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Event, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, swap_key};
use crate::state::{TransferStatus, TOKEN_CHAINS, TRANSFERS};

/// Execute handler for swapping tokens out to another chain.
#[allow(clippy::too_many_arguments)]
pub fn execute_swap(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    to: String,
    amount: Uint128,
    nonce: u64,
    chain_id_from: u64,
    chain_id_to: u64,
) -> Result<Response, ContractError> {
    // Route must be enabled for this token
    let supported = TOKEN_CHAINS
        .may_load(deps.storage, (&token, chain_id_to))?
        .unwrap_or(false);
    if !supported {
        return Err(ContractError::ChainNotSupported);
    }

    // In-flight guard: the same (token, nonce, route) tuple must not be
    // swapped again before its matching redeem completes
    let key = swap_key(&token, nonce, chain_id_from, chain_id_to);
    if TRANSFERS.may_load(deps.storage, &key)?.is_some() {
        return Err(ContractError::TransferInProgress);
    }
    TRANSFERS.save(deps.storage, &key, &TransferStatus::Pending)?;

    // Burn from the caller; insufficient balance or allowance aborts the
    // whole transition when the submessage executes
    let burn_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.clone(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    // The swap event is the observable transfer record relayers read
    let swap_event = Event::new("swap")
        .add_attribute("from", info.sender.to_string())
        .add_attribute("to", to.clone())
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("chain_id_from", chain_id_from.to_string())
        .add_attribute("chain_id_to", chain_id_to.to_string());

    Ok(Response::new()
        .add_message(burn_msg)
        .add_event(swap_event)
        .add_attribute("method", "swap")
        .add_attribute("token", token)
        .add_attribute("transfer_key", bytes32_to_hex(&key)))
}

//! Inbound redeem handler with signature verification.
//!
//! A redeem verifies the validator's signature over the transfer record,
//! marks the transfer key redeemed, and mints the tokens to the caller. The
//! whole handler is one atomic transition: any failure, including the mint
//! submessage, rolls back every state change.

use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, Deps, DepsMut, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, keccak256, redeem_digest, signed_message_hash, transfer_key};
use crate::state::{TransferStatus, TOKEN_CHAINS, TRANSFERS, VALIDATOR};

/// Execute handler for redeeming a transfer swapped on another chain.
#[allow(clippy::too_many_arguments)]
pub fn execute_redeem(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    from: String,
    amount: Uint128,
    nonce: u64,
    chain_id_from: u64,
    chain_id_to: u64,
    signature: Binary,
) -> Result<Response, ContractError> {
    // The route back must be recognized on this side
    let supported = TOKEN_CHAINS
        .may_load(deps.storage, (&token, chain_id_from))?
        .unwrap_or(false);
    if !supported {
        return Err(ContractError::ChainNotSupported);
    }

    // Recompute the signed digest with the caller as recipient. Any mutation
    // of a signed field between swap and redeem invalidates the signature.
    let digest = redeem_digest(
        &from,
        info.sender.as_str(),
        amount.u128(),
        nonce,
        chain_id_from,
        chain_id_to,
    );
    let message_hash = signed_message_hash(&digest);

    let signer = recover_signer(deps.as_ref(), &message_hash, signature.as_slice())?;
    let validator = VALIDATOR.load(deps.storage)?;
    if signer.as_slice() != validator.as_slice() {
        return Err(ContractError::CheckSignFailure);
    }

    // Replay guard: each transfer key is redeemable exactly once
    let key = transfer_key(&token, &from, amount.u128(), nonce, chain_id_from, chain_id_to);
    if TRANSFERS.may_load(deps.storage, &key)?.is_some() {
        return Err(ContractError::TransferInProgress);
    }
    TRANSFERS.save(deps.storage, &key, &TransferStatus::Redeemed)?;

    let mint_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.clone(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(mint_msg)
        .add_attribute("method", "redeem")
        .add_attribute("token", token)
        .add_attribute("from", from)
        .add_attribute("to", info.sender)
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("chain_id_from", chain_id_from.to_string())
        .add_attribute("chain_id_to", chain_id_to.to_string())
        .add_attribute("transfer_key", bytes32_to_hex(&key)))
}

/// Recover the 20-byte signer address from a 65-byte recoverable signature.
///
/// Accepts `v` as a raw recovery id (0/1) or in Ethereum form (27/28). The
/// signer address is `keccak256(uncompressed_pubkey[1..])[12..]`.
fn recover_signer(
    deps: Deps,
    message_hash: &[u8; 32],
    signature: &[u8],
) -> Result<[u8; 20], ContractError> {
    if signature.len() != 65 {
        return Err(ContractError::CheckSignFailure);
    }

    let v = signature[64];
    let recovery_id = if v >= 27 { v - 27 } else { v };

    let pubkey = deps
        .api
        .secp256k1_recover_pubkey(message_hash, &signature[..64], recovery_id)
        .map_err(|_| ContractError::CheckSignFailure)?;

    // 65-byte uncompressed key; drop the 0x04 tag before hashing
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Ok(address)
}

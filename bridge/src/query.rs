//! Query handlers for the GIS Bridge contract.

use cosmwasm_std::{Deps, HexBinary, StdResult, Uint128};

use crate::hash::{redeem_digest, signed_message_hash, transfer_key};
use crate::msg::{
    ChainSupportResponse, ConfigResponse, HasRoleResponse, RedeemDigestResponse,
    TokenSupportResponse, TransferStatusResponse, ValidatorResponse,
};
use crate::state::{CONFIG, ROLES, SUPPORTED_CHAINS, TOKEN_CHAINS, TRANSFERS, VALIDATOR};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let validator = VALIDATOR.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        chain_id: config.chain_id,
        validator,
    })
}

/// Query the trusted validator signer address.
pub fn query_validator(deps: Deps) -> StdResult<ValidatorResponse> {
    let validator = VALIDATOR.load(deps.storage)?;
    Ok(ValidatorResponse { validator })
}

/// Query whether a chain ID is recognized.
pub fn query_is_chain_supports(deps: Deps, chain_id: u64) -> StdResult<ChainSupportResponse> {
    let supported = SUPPORTED_CHAINS
        .may_load(deps.storage, chain_id)?
        .unwrap_or(false);
    Ok(ChainSupportResponse { supported })
}

/// Query whether a token is enabled for a destination chain.
pub fn query_is_token_supports_chain_id(
    deps: Deps,
    token: String,
    chain_id: u64,
) -> StdResult<TokenSupportResponse> {
    let supported = TOKEN_CHAINS
        .may_load(deps.storage, (&token, chain_id))?
        .unwrap_or(false);
    Ok(TokenSupportResponse { supported })
}

/// Query whether an address holds a role.
pub fn query_has_role(deps: Deps, role: String, address: String) -> StdResult<HasRoleResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let has_role = ROLES
        .may_load(deps.storage, (&role, &addr))?
        .unwrap_or(false);
    Ok(HasRoleResponse { has_role })
}

/// Query the ledger status for a transfer tuple.
pub fn query_transfer_status(
    deps: Deps,
    token: String,
    from: String,
    amount: Uint128,
    nonce: u64,
    chain_id_from: u64,
    chain_id_to: u64,
) -> StdResult<TransferStatusResponse> {
    let key = transfer_key(&token, &from, amount.u128(), nonce, chain_id_from, chain_id_to);
    let status = TRANSFERS.may_load(deps.storage, &key)?;
    Ok(TransferStatusResponse { status })
}

/// Compute the canonical digest for a transfer record.
///
/// Off-chain validators sign `digest` directly (prehash signing); wallets
/// that apply the signed-message envelope themselves sign over `message`.
pub fn query_redeem_digest(
    from: String,
    to: String,
    amount: Uint128,
    nonce: u64,
    chain_id_from: u64,
    chain_id_to: u64,
) -> StdResult<RedeemDigestResponse> {
    let message = redeem_digest(&from, &to, amount.u128(), nonce, chain_id_from, chain_id_to);
    let digest = signed_message_hash(&message);
    Ok(RedeemDigestResponse {
        message: HexBinary::from(message.to_vec()),
        digest: HexBinary::from(digest.to_vec()),
    })
}

//! Error types for the GIS Bridge contract.
//!
//! The display strings are part of the contract's external interface: existing
//! integrations match on them verbatim, so they must not be reworded.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("don't have manager role")]
    NotManager,

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("sended address is not a contract")]
    NotContract,

    #[error("token already has supported")]
    TokenAlreadySupported,

    #[error("token not supported")]
    TokenNotSupported,

    #[error("chain is not supported")]
    ChainNotSupported,

    // ========================================================================
    // Transfer Errors
    // ========================================================================

    #[error("transfer in progress")]
    TransferInProgress,

    #[error("check sign failure")]
    CheckSignFailure,

    // ========================================================================
    // Validator Errors
    // ========================================================================

    #[error("zero address")]
    ZeroAddress,
}

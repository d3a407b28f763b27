//! Message types for the GIS Bridge contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, HexBinary, Uint128};

use crate::state::TransferStatus;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
///
/// The instantiator becomes the admin. One instance is deployed per chain.
#[cw_serde]
pub struct InstantiateMsg {
    /// Chain ID of the network this instance serves
    pub chain_id: u64,
    /// 20-byte signer address of the trusted validator (must not be zero)
    pub validator: HexBinary,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfers
    // ========================================================================
    /// Swap tokens out to another chain (burns on this chain)
    ///
    /// Authorization: Anyone. The caller must have granted this contract a
    /// cw20 allowance covering `amount`.
    Swap {
        /// Token contract to bridge
        token: String,
        /// Recipient account on the destination chain
        to: String,
        /// Amount to bridge
        amount: Uint128,
        /// Caller-supplied nonce distinguishing otherwise-identical transfers
        nonce: u64,
        /// Source chain ID (this instance's chain)
        chain_id_from: u64,
        /// Destination chain ID
        chain_id_to: u64,
    },

    /// Redeem tokens swapped on another chain (mints to the caller)
    ///
    /// Authorization: Anyone holding a validator signature over the transfer
    /// record `(from, caller, amount, nonce, chain_id_from, chain_id_to)`.
    Redeem {
        /// Token contract to credit on this chain
        token: String,
        /// Originator account on the source chain
        from: String,
        /// Amount to credit
        amount: Uint128,
        /// Nonce from the source-chain swap
        nonce: u64,
        /// Source chain ID
        chain_id_from: u64,
        /// Destination chain ID (this instance's chain)
        chain_id_to: u64,
        /// 65-byte recoverable signature `r || s || v` (v in {0, 1, 27, 28})
        signature: Binary,
    },

    // ========================================================================
    // Chain & Token Registry
    // ========================================================================
    /// Mark a chain ID as supported (idempotent)
    ///
    /// Authorization: chain manager role
    UpdateChainById {
        /// Chain ID to mark supported
        chain_id: u64,
    },

    /// Enable a token for a destination chain
    ///
    /// Authorization: chain manager role. `token` must be an instantiated
    /// contract, and the pair must not already be enabled.
    IncludeToken {
        /// Token contract address
        token: String,
        /// Destination chain ID
        chain_id: u64,
    },

    /// Disable a token for a destination chain
    ///
    /// Authorization: chain manager role. The pair must currently be enabled.
    ExcludeToken {
        /// Token contract address
        token: String,
        /// Destination chain ID
        chain_id: u64,
    },

    // ========================================================================
    // Role Management
    // ========================================================================
    /// Grant a role to an address
    ///
    /// Authorization: Admin only
    GrantRole {
        /// Role name (e.g. "chain_manager")
        role: String,
        /// Grantee address
        address: String,
    },

    /// Revoke a role from an address
    ///
    /// Authorization: Admin only
    RevokeRole {
        /// Role name
        role: String,
        /// Address to revoke from
        address: String,
    },

    // ========================================================================
    // Validator Management
    // ========================================================================
    /// Replace the trusted validator's signer address
    ///
    /// Authorization: Admin only. The zero address is rejected.
    SetValidator {
        /// New 20-byte signer address
        validator: HexBinary,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Current trusted validator signer address
    #[returns(ValidatorResponse)]
    Validator {},

    /// Whether a chain ID is recognized
    #[returns(ChainSupportResponse)]
    IsChainSupports { chain_id: u64 },

    /// Whether a token is enabled for a destination chain
    #[returns(TokenSupportResponse)]
    IsTokenSupportsChainId { token: String, chain_id: u64 },

    /// Whether an address holds a role
    #[returns(HasRoleResponse)]
    HasRole { role: String, address: String },

    /// Ledger status for a transfer tuple (redeem-side key)
    #[returns(TransferStatusResponse)]
    TransferStatus {
        token: String,
        from: String,
        amount: Uint128,
        nonce: u64,
        chain_id_from: u64,
        chain_id_to: u64,
    },

    /// Canonical digest for a transfer record, for off-chain signing
    #[returns(RedeemDigestResponse)]
    RedeemDigest {
        from: String,
        to: String,
        amount: Uint128,
        nonce: u64,
        chain_id_from: u64,
        chain_id_to: u64,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

/// Config query response
#[cw_serde]
pub struct ConfigResponse {
    /// Admin address
    pub admin: Addr,
    /// Chain ID of this instance
    pub chain_id: u64,
    /// Trusted validator signer address
    pub validator: HexBinary,
}

/// Validator query response
#[cw_serde]
pub struct ValidatorResponse {
    /// 20-byte signer address
    pub validator: HexBinary,
}

/// Chain support query response
#[cw_serde]
pub struct ChainSupportResponse {
    pub supported: bool,
}

/// Token support query response
#[cw_serde]
pub struct TokenSupportResponse {
    pub supported: bool,
}

/// Role query response
#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}

/// Transfer status query response
#[cw_serde]
pub struct TransferStatusResponse {
    /// None if the transfer is unknown to this instance
    pub status: Option<TransferStatus>,
}

/// Redeem digest query response
#[cw_serde]
pub struct RedeemDigestResponse {
    /// Raw keccak256 digest of the transfer record
    pub message: HexBinary,
    /// Digest wrapped in the Ethereum signed-message envelope; this is what
    /// the contract verifies, and what `sign_prehash`-style signers sign
    pub digest: HexBinary,
}

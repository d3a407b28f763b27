//! State definitions for the GIS Bridge contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for contract management
    pub admin: Addr,
    /// Chain ID of the network this instance serves
    pub chain_id: u64,
}

/// Lifecycle of a transfer key in the ledger
///
/// The absence of an entry means the transfer is unknown. `Pending` exists
/// only on the source side (in-flight swap); `Redeemed` exists only on the
/// destination side and is terminal.
#[cw_serde]
pub enum TransferStatus {
    /// Outbound swap recorded, awaiting redemption on the destination chain
    Pending,
    /// Redeemed on the destination chain
    Redeemed,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:gis-bridge";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Role gating chain and token registry mutation
pub const CHAIN_MANAGER_ROLE: &str = "chain_manager";

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Trusted validator's 20-byte signer address
pub const VALIDATOR: Item<HexBinary> = Item::new("validator");

/// Role grants
/// Key: (role name, grantee), Value: whether granted
pub const ROLES: Map<(&str, &Addr), bool> = Map::new("roles");

/// Recognized chain IDs
/// Key: chain_id, Value: whether supported
pub const SUPPORTED_CHAINS: Map<u64, bool> = Map::new("supported_chains");

/// Token enablement per destination chain
/// Key: (token address, chain_id), Value: whether enabled
pub const TOKEN_CHAINS: Map<(&str, u64), bool> = Map::new("token_chains");

/// Transfer ledger
/// Key: 32-byte transfer key hash as &[u8], Value: TransferStatus
///
/// Entries are never deleted. Swap writes `Pending` under the in-flight key
/// (token, nonce, chain_id_from, chain_id_to); redeem writes `Redeemed` under
/// the full key (token, from, amount, nonce, chain_id_from, chain_id_to).
pub const TRANSFERS: Map<&[u8], TransferStatus> = Map::new("transfers");

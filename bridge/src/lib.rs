//! GIS Bridge Contract - Cross-Chain Token Swap and Redeem
//!
//! This contract moves a token between two chains: tokens are burned on the
//! source chain and minted on the destination chain, authorized by a single
//! trusted validator's signature.
//!
//! # Outbound Flow (Swap)
//! 1. User calls `Swap` on the source-chain instance
//! 2. The bridge burns the tokens and emits a `swap` event with the transfer
//!    record `(from, to, amount, nonce, chain_id_from, chain_id_to)`
//! 3. An off-chain relay obtains the validator's signature over the record
//!
//! # Inbound Flow (Redeem)
//! 1. Recipient calls `Redeem` on the destination-chain instance with the
//!    transfer fields and the validator's signature
//! 2. The bridge recovers the signer from the signature, checks it against
//!    the stored validator, and marks the transfer key redeemed
//! 3. The bridge mints the tokens to the caller
//!
//! # Security
//! - secp256k1 signature recovery over a canonical keccak256 digest
//! - Transfer ledger keyed by the full transfer tuple prevents replay
//! - Source-side in-flight tracking prevents reusing a nonce before redemption
//! - Role-gated registry mutation (chain manager role)

pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::{keccak256, redeem_digest, signed_message_hash};

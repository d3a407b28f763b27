//! Canonical digest computation for cross-chain transfers.
//!
//! The validator signs the redeem digest off-chain and the destination-chain
//! instance recomputes it during `Redeem`, so the byte layout here is fixed:
//! every field is a 32-byte word, concatenated in a defined order and hashed
//! with keccak256.
//!
//! # Field encoding
//! - Addresses (bridge-external strings, possibly from another chain's address
//!   space) are encoded as `keccak256(utf8 bytes)`, giving a uniform 32-byte
//!   representation regardless of the source format.
//! - Integers (amount, nonce, chain IDs) are big-endian, left-padded to
//!   32 bytes, matching EVM `uint256` word encoding.
//!
//! # Digest layout (192 bytes)
//! - Bytes 0-31:    from
//! - Bytes 32-63:   to
//! - Bytes 64-95:   amount
//! - Bytes 96-127:  nonce
//! - Bytes 128-159: chain_id_from
//! - Bytes 160-191: chain_id_to
//!
//! The signed message is the digest wrapped in the Ethereum signed-message
//! envelope (`"\x19Ethereum Signed Message:\n32" || digest`, hashed again),
//! so standard wallet `signMessage` output verifies directly.

use tiny_keccak::{Hasher, Keccak};

/// Prefix applied before signing a 32-byte digest, per EIP-191
const ETH_SIGNED_MESSAGE_PREFIX: &[u8; 28] = b"\x19Ethereum Signed Message:\n32";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Encode an address string as a 32-byte word
///
/// Addresses crossing the bridge may come from any chain's address space
/// (bech32, hex, ...), so the canonical form is the keccak256 hash of the
/// string bytes rather than a parsed representation.
pub fn encode_address(addr: &str) -> [u8; 32] {
    keccak256(addr.as_bytes())
}

/// Encode an integer as a 32-byte big-endian word (uint256 layout)
pub fn encode_uint(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Compute the canonical redeem digest over the ordered transfer fields
///
/// Field order is `(from, to, amount, nonce, chain_id_from, chain_id_to)`.
/// `from` is included deliberately: omitting it would let any caller redeem
/// another user's transfer to themselves with the same signature.
pub fn redeem_digest(
    from: &str,
    to: &str,
    amount: u128,
    nonce: u64,
    chain_id_from: u64,
    chain_id_to: u64,
) -> [u8; 32] {
    let mut data = [0u8; 192];
    data[0..32].copy_from_slice(&encode_address(from));
    data[32..64].copy_from_slice(&encode_address(to));
    data[64..96].copy_from_slice(&encode_uint(amount));
    data[96..128].copy_from_slice(&encode_uint(nonce as u128));
    data[128..160].copy_from_slice(&encode_uint(chain_id_from as u128));
    data[160..192].copy_from_slice(&encode_uint(chain_id_to as u128));
    keccak256(&data)
}

/// Wrap a 32-byte digest in the Ethereum signed-message envelope
pub fn signed_message_hash(digest: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 60];
    data[..28].copy_from_slice(ETH_SIGNED_MESSAGE_PREFIX);
    data[28..].copy_from_slice(digest);
    keccak256(&data)
}

/// Compute the destination-side ledger key for a redeemed transfer
///
/// Keyed by the full tuple `(token, from, amount, nonce, chain_id_from,
/// chain_id_to)` so that no two distinct transfers collide.
pub fn transfer_key(
    token: &str,
    from: &str,
    amount: u128,
    nonce: u64,
    chain_id_from: u64,
    chain_id_to: u64,
) -> [u8; 32] {
    let mut data = [0u8; 192];
    data[0..32].copy_from_slice(&encode_address(token));
    data[32..64].copy_from_slice(&encode_address(from));
    data[64..96].copy_from_slice(&encode_uint(amount));
    data[96..128].copy_from_slice(&encode_uint(nonce as u128));
    data[128..160].copy_from_slice(&encode_uint(chain_id_from as u128));
    data[160..192].copy_from_slice(&encode_uint(chain_id_to as u128));
    keccak256(&data)
}

/// Compute the source-side in-flight key for an outbound swap
///
/// Keyed by `(token, nonce, chain_id_from, chain_id_to)`: repeating the same
/// nonce on the same route before the matching redeem completes is a
/// double-spend attempt and must be rejected.
pub fn swap_key(token: &str, nonce: u64, chain_id_from: u64, chain_id_to: u64) -> [u8; 32] {
    let mut data = [0u8; 128];
    data[0..32].copy_from_slice(&encode_address(token));
    data[32..64].copy_from_slice(&encode_uint(nonce as u128));
    data[64..96].copy_from_slice(&encode_uint(chain_id_from as u128));
    data[96..128].copy_from_slice(&encode_uint(chain_id_to as u128));
    keccak256(&data)
}

/// Convert a 32-byte hash to a 0x-prefixed hex string (for attributes)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

//! Hashing of public keys into address material, and the base58check
//! checksum the WIF decoder verifies.

use bitcoin_hashes::{hash160, sha256d, Hash};

use crate::params::{CHECKSUM_LEN, MAINNET_P2PKH_VERSION};

/// RIPEMD160(SHA256(data)), the public-key hash used by legacy addresses.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let hash = hash160::Hash::hash(data);
    let mut out = [0u8; 20];
    out.copy_from_slice(&hash[..]);
    out
}

/// First four bytes of SHA256(SHA256(data)).
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = sha256d::Hash::hash(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[0..CHECKSUM_LEN]);
    out
}

/// Mainnet pay-to-pubkey-hash address for a hashed public key.
pub fn p2pkh_address(pubkey_hash: &[u8; 20]) -> String {
    let mut address_bytes = Vec::with_capacity(21);
    address_bytes.push(MAINNET_P2PKH_VERSION);
    address_bytes.extend_from_slice(pubkey_hash);
    bs58::encode(&address_bytes).with_check().into_string()
}

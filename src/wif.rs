//! Wallet Import Format
//!
//! `base58(0x80 || key || [0x01] || checksum)`, where the optional `0x01`
//! marks a key whose public key is used in compressed form and the checksum
//! is the first four bytes of the double SHA-256 of everything before it.

use tracing::debug;

use crate::error::{KeyError, KeyResult};
use crate::hash::checksum;
use crate::keys::PrivateKey;
use crate::params::{CHECKSUM_LEN, COMPRESSED_MARKER, MAINNET_WIF_VERSION, PRIVATE_KEY_LEN};

/// Encodes a private key to WIF. The key is always written as 32 bytes.
pub fn encode(key: &PrivateKey, compressed: bool) -> String {
    encode_bytes(&key.to_padded()[..], compressed)
}

/// Encodes raw key bytes to WIF as given, without range or length checks.
pub fn encode_bytes(key: &[u8], compressed: bool) -> String {
    let mut payload = Vec::with_capacity(key.len() + 2);
    payload.push(MAINNET_WIF_VERSION);
    payload.extend_from_slice(key);
    if compressed {
        payload.push(COMPRESSED_MARKER);
    }
    bs58::encode(&payload).with_check().into_string()
}

/// Decodes a mainnet WIF string into the private key and its compression flag.
pub fn decode(wif: &str) -> KeyResult<(PrivateKey, bool)> {
    let decoded = bs58::decode(wif).into_vec()?;

    let version = match decoded.first() {
        Some(&version) => version,
        None => {
            debug!("empty WIF");
            return Err(KeyError::MalformedPayload(0));
        }
    };

    if version != MAINNET_WIF_VERSION {
        debug!(version, "WIF version byte is not mainnet");
        return Err(KeyError::InvalidPrefix(version));
    }

    if decoded.len() < 1 + CHECKSUM_LEN {
        debug!(len = decoded.len(), "WIF too short to hold version and checksum");
        return Err(KeyError::MalformedPayload(0));
    }

    let (body, check) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if checksum(body).as_slice() != check {
        debug!("WIF checksum mismatch");
        return Err(KeyError::Checksum);
    }

    let payload = &body[1..];
    let (key_bytes, compressed) = match payload.len() {
        PRIVATE_KEY_LEN => (payload, false),
        len if len == PRIVATE_KEY_LEN + 1 && payload[PRIVATE_KEY_LEN] == COMPRESSED_MARKER => {
            (&payload[..PRIVATE_KEY_LEN], true)
        }
        len => {
            debug!(len, "unexpected WIF payload length");
            return Err(KeyError::MalformedPayload(len));
        }
    };

    let key = PrivateKey::from_bytes(key_bytes)?;
    Ok((key, compressed))
}

use std::fmt;

use num_bigint::BigUint;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use serde::Serialize;
use zeroize::Zeroizing;

use crate::codec::{left_pad, to_bytes_be};
use crate::error::{KeyError, KeyResult};
use crate::hash::{hash160, p2pkh_address};
use crate::params::{COMPRESSED_PUBKEY_LEN, PRIVATE_KEY_LEN, UNCOMPRESSED_PUBKEY_LEN};
use crate::range::ensure_valid_key;
use crate::wif;

/// A secp256k1 private key, always in `[1, n - 1]`.
///
/// Stored as the minimal big-endian encoding of the scalar (no leading zero
/// bytes), wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl PrivateKey {
    pub fn from_biguint(value: &BigUint) -> KeyResult<Self> {
        ensure_valid_key(value)?;
        Ok(PrivateKey {
            bytes: Zeroizing::new(to_bytes_be(value)),
        })
    }

    /// Accepts any big-endian buffer, padded or not.
    pub fn from_bytes(bytes: &[u8]) -> KeyResult<Self> {
        Self::from_biguint(&BigUint::from_bytes_be(bytes))
    }

    /// Minimal big-endian bytes (between 1 and 32 of them).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The scalar as a full 32-byte big-endian field.
    pub fn to_padded(&self) -> Zeroizing<[u8; PRIVATE_KEY_LEN]> {
        Zeroizing::new(left_pad::<PRIVATE_KEY_LEN>(&self.bytes))
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.to_padded()[..])
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// Affine coordinates of a public key, both 32-byte big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKeyPoint {
    pub x: [u8; 32],
    pub y: [u8; 32],
}

impl PublicKeyPoint {
    /// Computes `key * G` on secp256k1.
    pub fn from_private_key(key: &PrivateKey) -> KeyResult<Self> {
        let secp = Secp256k1::new();
        let scalar = key.to_padded();
        let secret_key =
            SecretKey::from_slice(&scalar[..]).map_err(|_| KeyError::OutOfRange)?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);

        // 0x04 || X || Y
        let serialized = public_key.serialize_uncompressed();
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&serialized[1..33]);
        y.copy_from_slice(&serialized[33..65]);

        Ok(PublicKeyPoint { x, y })
    }

    pub fn is_y_even(&self) -> bool {
        self.y[31] & 1 == 0
    }

    /// `0x02 || X` when Y is even, `0x03 || X` otherwise.
    pub fn compressed(&self) -> EncodedPublicKey {
        let mut bytes = Vec::with_capacity(COMPRESSED_PUBKEY_LEN);
        bytes.push(if self.is_y_even() { 0x02 } else { 0x03 });
        bytes.extend_from_slice(&self.x);
        EncodedPublicKey(bytes)
    }

    /// `0x04 || X || Y`
    pub fn uncompressed(&self) -> EncodedPublicKey {
        let mut bytes = Vec::with_capacity(UNCOMPRESSED_PUBKEY_LEN);
        bytes.push(0x04);
        bytes.extend_from_slice(&self.x);
        bytes.extend_from_slice(&self.y);
        EncodedPublicKey(bytes)
    }

    pub fn encode(&self, compressed: bool) -> EncodedPublicKey {
        if compressed {
            self.compressed()
        } else {
            self.uncompressed()
        }
    }
}

/// SEC1 public key bytes, 33 (compressed) or 65 (uncompressed) long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedPublicKey(Vec<u8>);

impl EncodedPublicKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn is_compressed(&self) -> bool {
        self.0.len() == COMPRESSED_PUBKEY_LEN
    }

    pub fn hash160(&self) -> [u8; 20] {
        hash160(&self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for EncodedPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Derives the public key of `key` in the requested encoding.
pub fn derive_public_key(key: &PrivateKey, compressed: bool) -> KeyResult<EncodedPublicKey> {
    let point = PublicKeyPoint::from_private_key(key)?;
    Ok(point.encode(compressed))
}

/// Everything derivable from a key pair, ready to be printed or serialized.
#[derive(Debug, Clone, Serialize)]
pub struct KeyReport {
    pub private_key: String,
    pub wif: String,
    pub compressed: bool,
    pub public_key: String,
    pub pubkey_hash: String,
    pub address: String,
}

/// A private key together with the public-key encoding it is used with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    private_key: PrivateKey,
    compressed: bool,
}

impl KeyPair {
    pub fn new(private_key: PrivateKey, compressed: bool) -> Self {
        KeyPair {
            private_key,
            compressed,
        }
    }

    pub fn from_wif(wif_str: &str) -> KeyResult<Self> {
        let (private_key, compressed) = wif::decode(wif_str)?;
        Ok(KeyPair::new(private_key, compressed))
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn to_wif(&self) -> String {
        wif::encode(&self.private_key, self.compressed)
    }

    pub fn public_key(&self) -> KeyResult<EncodedPublicKey> {
        derive_public_key(&self.private_key, self.compressed)
    }

    pub fn pubkey_hash(&self) -> KeyResult<[u8; 20]> {
        Ok(self.public_key()?.hash160())
    }

    /// Legacy mainnet address (1...) for the key's public key encoding.
    pub fn address(&self) -> KeyResult<String> {
        Ok(p2pkh_address(&self.pubkey_hash()?))
    }

    pub fn report(&self) -> KeyResult<KeyReport> {
        let public_key = self.public_key()?;
        let pubkey_hash = public_key.hash160();

        Ok(KeyReport {
            private_key: self.private_key.to_hex(),
            wif: self.to_wif(),
            compressed: self.compressed,
            public_key: public_key.to_hex(),
            pubkey_hash: hex::encode(pubkey_hash),
            address: p2pkh_address(&pubkey_hash),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MAX_KEY;
    use hex_literal::hex;

    const G_X: [u8; 32] = hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
    const G_Y: [u8; 32] = hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");

    fn key_one() -> PrivateKey {
        PrivateKey::from_bytes(&[1]).unwrap()
    }

    #[test]
    fn test_private_key_strips_leading_zeros() {
        let mut padded = [0u8; 32];
        padded[31] = 1;
        let key = PrivateKey::from_bytes(&padded).unwrap();
        assert_eq!(key.as_bytes(), &[1]);
        assert_eq!(*key.to_padded(), padded);
        assert_eq!(key, key_one());
    }

    #[test]
    fn test_private_key_range() {
        assert_eq!(PrivateKey::from_bytes(&[0u8; 32]), Err(KeyError::OutOfRange));
        assert_eq!(PrivateKey::from_bytes(&[]), Err(KeyError::OutOfRange));
        assert_eq!(
            PrivateKey::from_bytes(&secp256k1::constants::CURVE_ORDER),
            Err(KeyError::OutOfRange)
        );
        assert!(PrivateKey::from_biguint(&MAX_KEY).is_ok());
    }

    #[test]
    fn test_private_key_debug_is_redacted() {
        assert_eq!(format!("{:?}", key_one()), "PrivateKey(..)");
    }

    #[test]
    fn test_generator_point() {
        let point = PublicKeyPoint::from_private_key(&key_one()).unwrap();
        assert_eq!(point.x, G_X);
        assert_eq!(point.y, G_Y);
        assert!(point.is_y_even());
    }

    #[test]
    fn test_encodings_of_generator() {
        let compressed = derive_public_key(&key_one(), true).unwrap();
        let uncompressed = derive_public_key(&key_one(), false).unwrap();

        assert_eq!(compressed.as_bytes()[0], 0x02);
        assert_eq!(&compressed.as_bytes()[1..], &G_X);
        assert!(compressed.is_compressed());

        assert_eq!(uncompressed.as_bytes().len(), 65);
        assert_eq!(uncompressed.as_bytes()[0], 0x04);
        assert_eq!(&uncompressed.as_bytes()[33..], &G_Y);
        assert!(!uncompressed.is_compressed());
    }

    #[test]
    fn test_odd_y_prefix() {
        // 6G has an odd Y coordinate
        let key = PrivateKey::from_bytes(&[6]).unwrap();
        let point = PublicKeyPoint::from_private_key(&key).unwrap();
        assert!(!point.is_y_even());
        assert_eq!(
            point.compressed().to_hex(),
            "03fff97bd5755eeea420453a14355235d382f6472f8568a18b2f057a1460297556"
        );
    }

    #[test]
    fn test_compressed_and_uncompressed_are_same_point() {
        let key = PrivateKey::from_bytes(&hex!(
            "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d"
        ))
        .unwrap();
        let compressed = derive_public_key(&key, true).unwrap();
        let uncompressed = derive_public_key(&key, false).unwrap();

        let a = PublicKey::from_slice(compressed.as_bytes()).unwrap();
        let b = PublicKey::from_slice(uncompressed.as_bytes()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let key = PrivateKey::from_biguint(&MAX_KEY).unwrap();
        assert_eq!(
            derive_public_key(&key, true).unwrap(),
            derive_public_key(&key, true).unwrap()
        );
    }

    #[test]
    fn test_key_pair_report() {
        let pair = KeyPair::new(key_one(), true);
        let report = pair.report().unwrap();

        assert_eq!(
            report.private_key,
            "0000000000000000000000000000000000000000000000000000000000000001"
        );
        assert_eq!(report.wif, "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn");
        assert_eq!(report.pubkey_hash, "751e76e8199196d454941c45d1b3a323f1433bd6");
        assert_eq!(report.address, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["compressed"], true);
    }

    #[test]
    fn test_uncompressed_address() {
        let pair = KeyPair::new(key_one(), false);
        assert_eq!(pair.address().unwrap(), "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
    }
}

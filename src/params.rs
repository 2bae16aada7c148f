//! Fixed parameters of the key pipeline.
//!
//! Everything here is read-only for the lifetime of the process. The key
//! bounds are big integers and are built once, on first use.

use lazy_static::lazy_static;
use num_bigint::BigUint;
use secp256k1::constants::CURVE_ORDER;

/// Number of dice results needed for a key (6^99 is just below 2^256)
pub const DICE_SEQUENCE_LEN: usize = 99;

/// Number of coin flips needed for a key
pub const COINFLIP_SEQUENCE_LEN: usize = 256;

/// Number of hex characters needed for a key
pub const HEX_SEQUENCE_LEN: usize = 64;

/// Size of a serialized secp256k1 scalar
pub const PRIVATE_KEY_LEN: usize = 32;

/// WIF version byte for mainnet private keys
pub const MAINNET_WIF_VERSION: u8 = 0x80;

/// Version byte for mainnet pay-to-pubkey-hash addresses
pub const MAINNET_P2PKH_VERSION: u8 = 0x00;

/// Trailing WIF byte marking a key whose public key is compressed
pub const COMPRESSED_MARKER: u8 = 0x01;

pub const CHECKSUM_LEN: usize = 4;

pub const COMPRESSED_PUBKEY_LEN: usize = 33;
pub const UNCOMPRESSED_PUBKEY_LEN: usize = 65;

/// Largest valid private key: the secp256k1 group order minus one.
pub const MAX_KEY_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364140";

lazy_static! {
    /// Smallest valid private key (inclusive)
    pub static ref MIN_KEY: BigUint = BigUint::from(1u8);

    /// Largest valid private key (inclusive)
    pub static ref MAX_KEY: BigUint = BigUint::from_bytes_be(&CURVE_ORDER) - 1u8;
}

/// The supported entropy intake paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropySource {
    /// Six-sided dice, symbols `1`..=`6`
    Dice,
    /// Coin flips, symbols `0` and `1`
    Coinflip,
    /// Raw hex digits, either case
    Hex,
}

impl EntropySource {
    pub fn required_len(&self) -> usize {
        match self {
            EntropySource::Dice => DICE_SEQUENCE_LEN,
            EntropySource::Coinflip => COINFLIP_SEQUENCE_LEN,
            EntropySource::Hex => HEX_SEQUENCE_LEN,
        }
    }

    pub fn radix(&self) -> u32 {
        match self {
            EntropySource::Dice => 6,
            EntropySource::Coinflip => 2,
            EntropySource::Hex => 16,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntropySource::Dice => "dice",
            EntropySource::Coinflip => "coinflip",
            EntropySource::Hex => "hex",
        }
    }
}

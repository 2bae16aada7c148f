//! Offline secp256k1 key generation.
//!
//! Turns dice rolls, coin flips or raw hex into a range-checked private key,
//! derives its public key and address material, and moves keys in and out
//! of the Wallet Import Format.

pub mod codec;
pub mod entropy;
pub mod error;
pub mod hash;
pub mod keys;
pub mod mnemonic;
pub mod params;
pub mod range;
pub mod wif;

pub use entropy::{from_coinflip_sequence, from_dice_sequence, from_hex_sequence};
pub use error::{KeyError, KeyResult};
pub use hash::{hash160, p2pkh_address};
pub use keys::{
    derive_public_key,
    EncodedPublicKey,
    KeyPair,
    KeyReport,
    PrivateKey,
    PublicKeyPoint,
};
pub use mnemonic::{
    MnemonicStrength,
    MnemonicError,
    SecureMnemonic,
    generate_entropy,
};
pub use params::EntropySource;
pub use range::is_valid_key;

use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::keys::PrivateKey;

pub enum MnemonicStrength {
    Words12,
    Words15,
    Words18,
    Words21,
    Words24,
}

impl MnemonicStrength {
    fn to_entropy_bits(&self) -> usize {
        match self {
            MnemonicStrength::Words12 => 128,
            MnemonicStrength::Words15 => 160,
            MnemonicStrength::Words18 => 192,
            MnemonicStrength::Words21 => 224,
            MnemonicStrength::Words24 => 256,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("seed of {0} bytes cannot be encoded, expected 16 to 32 bytes in steps of 4")]
    InvalidSeedLength(usize),

    #[error("word list encoding failed: {0}")]
    Bip39(String),
}

/// A BIP39 phrase encoding a byte seed.
pub struct SecureMnemonic {
    mnemonic: Mnemonic,
}

impl SecureMnemonic {
    /// Encodes `seed` (16, 20, 24, 28 or 32 bytes) as English words.
    pub fn from_seed(seed: &[u8]) -> Result<Self, MnemonicError> {
        if !(16..=32).contains(&seed.len()) || seed.len() % 4 != 0 {
            return Err(MnemonicError::InvalidSeedLength(seed.len()));
        }

        Mnemonic::from_entropy(seed)
            .map(|mnemonic| Self { mnemonic })
            .map_err(|e| MnemonicError::Bip39(e.to_string()))
    }

    /// 24 words carrying the 32-byte form of `key`.
    pub fn from_private_key(key: &PrivateKey) -> Result<Self, MnemonicError> {
        Self::from_seed(&key.to_padded()[..])
    }

    pub fn generate(strength: MnemonicStrength) -> Result<Self, MnemonicError> {
        let entropy_bytes = strength.to_entropy_bits() / 8;
        let entropy = generate_entropy(entropy_bytes);
        Self::from_seed(&entropy)
    }

    pub fn phrase(&self) -> String {
        let mut result = String::new();
        for (i, word) in self.mnemonic.word_iter().enumerate() {
            if i > 0 {
                result.push(' ');
            }
            result.push_str(word);
        }
        result
    }

    pub fn word_count(&self) -> usize {
        self.mnemonic.word_count()
    }

    /// The seed bytes the phrase encodes.
    pub fn to_entropy(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.mnemonic.to_entropy())
    }
}

pub fn generate_entropy(byte_length: usize) -> Zeroizing<Vec<u8>> {
    let mut bytes = Zeroizing::new(vec![0u8; byte_length]);
    OsRng.fill_bytes(&mut bytes);
    bytes
}

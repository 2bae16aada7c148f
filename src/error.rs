use thiserror::Error;

use crate::mnemonic::MnemonicError;

pub type KeyResult<T> = std::result::Result<T, KeyError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("given sequence is {actual} long, must be {expected}")]
    Length { expected: usize, actual: usize },

    #[error("invalid character {character:?} at position {position} for radix {radix}")]
    Parse {
        character: char,
        position: usize,
        radix: u32,
    },

    #[error("invalid base58 string: {0}")]
    Base58(String),

    #[error("sequence decodes to an integer outside the valid private-key range")]
    OutOfRange,

    #[error("input value is not a valid mainnet key (version byte {0:#04x})")]
    InvalidPrefix(u8),

    #[error("cannot decode private key because checksum is wrong")]
    Checksum,

    #[error("WIF payload of {0} bytes is neither a 32-byte key nor a 33-byte compressed key")]
    MalformedPayload(usize),

    #[error("cannot generate mnemonic: {0}")]
    MnemonicGeneration(#[from] MnemonicError),
}

impl From<bs58::decode::Error> for KeyError {
    fn from(err: bs58::decode::Error) -> Self {
        KeyError::Base58(err.to_string())
    }
}

//! Private keys from physical entropy: dice rolls, coin flips or hex digits.
//!
//! Each intake path takes a sequence of fixed length, turns it into an
//! integer and checks that integer against the secp256k1 key range. A
//! sequence that lands outside the range is rejected; the caller has to
//! collect fresh entropy, nothing is retried here.

use tracing::debug;

use crate::codec::{parse_dice, parse_radix};
use crate::error::{KeyError, KeyResult};
use crate::keys::PrivateKey;
use crate::params::EntropySource;

/// 99 rolls of a six-sided die, faces `1`..=`6`.
pub fn from_dice_sequence(sequence: &str) -> KeyResult<PrivateKey> {
    decode_sequence(EntropySource::Dice, sequence)
}

/// 256 coin flips, `0` or `1`. Fails for roughly one sequence in 2^128
/// (value zero or at least the curve order).
pub fn from_coinflip_sequence(sequence: &str) -> KeyResult<PrivateKey> {
    decode_sequence(EntropySource::Coinflip, sequence)
}

/// 64 hex digits, either case.
pub fn from_hex_sequence(sequence: &str) -> KeyResult<PrivateKey> {
    decode_sequence(EntropySource::Hex, sequence)
}

pub fn decode_sequence(source: EntropySource, sequence: &str) -> KeyResult<PrivateKey> {
    let actual = sequence.chars().count();
    let expected = source.required_len();
    if actual != expected {
        debug!(source = source.name(), expected, actual, "rejecting sequence length");
        return Err(KeyError::Length { expected, actual });
    }

    let value = match source {
        EntropySource::Dice => parse_dice(sequence),
        EntropySource::Coinflip | EntropySource::Hex => parse_radix(sequence, source.radix()),
    }
    .map_err(|err| {
        debug!(source = source.name(), %err, "cannot read sequence");
        err
    })?;

    PrivateKey::from_biguint(&value).map_err(|err| {
        debug!(source = source.name(), "sequence is not a valid private key");
        err
    })
}

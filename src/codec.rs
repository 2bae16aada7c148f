//! Digit strings, big integers and big-endian byte buffers.

use num_bigint::BigUint;

use crate::error::{KeyError, KeyResult};

/// Parses `sequence` as an unsigned integer in `radix` (2, 6 or 16).
///
/// Unlike `BigUint::parse_bytes`, no separators or sign are accepted: every
/// character must be a digit of the radix.
pub fn parse_radix(sequence: &str, radix: u32) -> KeyResult<BigUint> {
    parse_with(sequence, radix, |c| c.to_digit(radix))
}

/// Parses a dice sequence. Faces `1`..=`6` map to base-6 digits `0`..=`5`.
pub fn parse_dice(sequence: &str) -> KeyResult<BigUint> {
    parse_with(sequence, 6, |c| match c {
        '1'..='6' => c.to_digit(10).map(|face| face - 1),
        _ => None,
    })
}

fn parse_with<F>(sequence: &str, radix: u32, digit: F) -> KeyResult<BigUint>
where
    F: Fn(char) -> Option<u32>,
{
    let digits = sequence
        .chars()
        .enumerate()
        .map(|(position, character)| {
            digit(character)
                .map(|d| d as u8)
                .ok_or(KeyError::Parse {
                    character,
                    position,
                    radix,
                })
        })
        .collect::<KeyResult<Vec<u8>>>()?;

    if digits.is_empty() {
        return Err(KeyError::Parse {
            character: '\0',
            position: 0,
            radix,
        });
    }

    BigUint::from_radix_be(&digits, radix).ok_or(KeyError::Parse {
        character: '\0',
        position: 0,
        radix,
    })
}

/// Minimal big-endian representation; zero serializes as a single `0x00`.
pub fn to_bytes_be(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// Left-pads a minimal big-endian buffer to `len` bytes.
///
/// Callers guarantee `bytes.len() <= len`.
pub(crate) fn left_pad<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let start = N.saturating_sub(bytes.len());
    out[start..].copy_from_slice(&bytes[bytes.len().saturating_sub(N)..]);
    out
}

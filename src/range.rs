use num_bigint::BigUint;

use crate::error::{KeyError, KeyResult};
use crate::params::{MAX_KEY, MIN_KEY};

/// Whether `key` is a usable secp256k1 scalar, i.e. `1 <= key <= n - 1`.
pub fn is_valid_key(key: &BigUint) -> bool {
    let not_too_small = *key >= *MIN_KEY;
    let not_too_big = *key <= *MAX_KEY;
    not_too_small && not_too_big
}

pub fn ensure_valid_key(key: &BigUint) -> KeyResult<()> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(KeyError::OutOfRange)
    }
}

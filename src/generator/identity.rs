use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::error::{ProfileError, Result};
use crate::generator::charset::{
    ALPHANUMERIC, DIGITS, LETTERS, LOWERCASE, SAFE_SYMBOLS, SYMBOLS, UPPERCASE,
};
use crate::generator::pick;

pub const DEFAULT_USERNAME_LENGTH: usize = 10;
pub const DEFAULT_PASSWORD_LENGTH: usize = 64;
pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 4096;

/// Username of exactly `length` characters: a letter followed by letters and digits.
pub fn generate_username<R: Rng + CryptoRng>(rng: &mut R, length: usize) -> Result<String> {
    if length < 1 {
        return Err(ProfileError::InvalidArgument(
            "username length must be positive".to_string(),
        ));
    }
    if length > MAX_LENGTH {
        return Err(ProfileError::InvalidArgument(format!(
            "username length must be at most {}",
            MAX_LENGTH
        )));
    }

    let mut username = String::with_capacity(length);
    username.push(pick(rng, LETTERS));
    for _ in 1..length {
        username.push(pick(rng, ALPHANUMERIC));
    }
    Ok(username)
}

/// Symbol set used for a password, full or safe.
pub fn symbol_set(with_symbols: bool) -> &'static [u8] {
    if with_symbols {
        SYMBOLS
    } else {
        SAFE_SYMBOLS
    }
}

/// Password of `length` characters with at least one lowercase letter,
/// uppercase letter, digit and symbol from the active set.
pub fn generate_password<R: Rng + CryptoRng>(
    rng: &mut R,
    length: usize,
    with_symbols: bool,
) -> Result<String> {
    if length < MIN_PASSWORD_LENGTH {
        return Err(ProfileError::InvalidArgument(format!(
            "password length must be at least {}",
            MIN_PASSWORD_LENGTH
        )));
    }
    if length > MAX_LENGTH {
        return Err(ProfileError::InvalidArgument(format!(
            "password length must be at most {}",
            MAX_LENGTH
        )));
    }

    let symbols = symbol_set(with_symbols);
    let mut charset = Vec::with_capacity(ALPHANUMERIC.len() + symbols.len());
    charset.extend_from_slice(ALPHANUMERIC);
    charset.extend_from_slice(symbols);

    let mut chars = Vec::with_capacity(length);
    chars.push(pick(rng, LOWERCASE));
    chars.push(pick(rng, UPPERCASE));
    chars.push(pick(rng, DIGITS));
    chars.push(pick(rng, symbols));
    for _ in MIN_PASSWORD_LENGTH..length {
        chars.push(pick(rng, &charset));
    }

    // Fisher-Yates over the secure source so the guaranteed classes are not
    // pinned to the first four positions.
    chars.shuffle(rng);
    Ok(chars.into_iter().collect())
}

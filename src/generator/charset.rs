pub static LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

pub static UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub static LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub static DIGITS: &[u8] = b"0123456789";

pub static ALPHANUMERIC: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Full punctuation set for passwords.
pub static SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?/|";

/// Subset accepted by systems with limited special-character support.
pub static SAFE_SYMBOLS: &[u8] = b"-_+*@&%";

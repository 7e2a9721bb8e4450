pub mod charset;
pub mod datetime;
pub mod identity;
pub mod names;

use rand::{CryptoRng, Rng};

/// Draw one character uniformly from an ASCII set.
pub(crate) fn pick<R: Rng + CryptoRng>(rng: &mut R, set: &[u8]) -> char {
    char::from(set[rng.gen_range(0..set.len())])
}

/// Random ASCII-letter string, used as a stand-in name.
pub fn random_letters<R: Rng + CryptoRng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| pick(rng, charset::LETTERS)).collect()
}

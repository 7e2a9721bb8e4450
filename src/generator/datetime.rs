use chrono::{Datelike, Local};
use rand::{CryptoRng, Rng};

use crate::types::Birthdate;

pub const MIN_BIRTH_YEAR: i32 = 1962;
pub const MAX_BIRTH_YEAR: i32 = 2010;

/// Day is capped at 28 so every month is valid without a calendar lookup.
pub fn generate_birthdate<R: Rng + CryptoRng>(rng: &mut R) -> Birthdate {
    let year = rng.gen_range(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR);
    let month = rng.gen_range(1..=12u32);
    let day = rng.gen_range(1..=28u32);
    Birthdate { day, month, year }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

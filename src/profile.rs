use rand::{CryptoRng, Rng};

use crate::error::Result;
use crate::generator::datetime::{current_year, generate_birthdate};
use crate::generator::identity::{generate_password, generate_username, DEFAULT_PASSWORD_LENGTH};
use crate::generator::names::pick_name;
use crate::geo::GeoDataset;
use crate::types::{Config, Profile};

/// Draw every field of a profile. Catalog and city problems degrade with a
/// logged warning; invalid lengths are returned as errors.
pub fn generate_profile<R: Rng + CryptoRng>(
    rng: &mut R,
    config: &Config,
    geo: &GeoDataset,
) -> Result<Profile> {
    let name = pick_name(rng, &config.names_path).into_name();
    let username = generate_username(rng, config.username_length)?;
    let birthdate = generate_birthdate(rng);
    let age = birthdate.age_in(current_year());
    let country = geo.resolve_country(rng, config.country.as_deref())?;
    let city = geo.random_city(rng, &country).into_city();

    let password = if config.with_password {
        Some(generate_password(
            rng,
            config.password_length.unwrap_or(DEFAULT_PASSWORD_LENGTH),
            config.password_symbols,
        )?)
    } else {
        None
    };

    Ok(Profile {
        name,
        username,
        birthdate,
        age,
        country,
        city,
        password,
    })
}

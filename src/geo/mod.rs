pub mod dataset;

use std::collections::HashMap;

use rand::{CryptoRng, Rng};
use tracing::error;

use crate::error::{ProfileError, Result};
use dataset::{CityRecord, CountryRecord};

/// Outcome of a city lookup. Only `Found` carries a city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityLookup {
    Found(String),
    NoCities,
    UnknownCountry,
}

impl CityLookup {
    pub fn into_city(self) -> Option<String> {
        match self {
            CityLookup::Found(city) => Some(city),
            CityLookup::NoCities | CityLookup::UnknownCountry => None,
        }
    }
}

/// Read-only country and city reference data.
///
/// Country names are indexed by their title-cased form, so lookups accept
/// any casing of the exact name but no abbreviations or misspellings.
#[derive(Debug, Clone)]
pub struct GeoDataset {
    countries: Vec<CountryRecord>,
    by_name: HashMap<String, usize>,
    cities_by_code: HashMap<String, Vec<String>>,
}

impl GeoDataset {
    pub fn new(countries: Vec<CountryRecord>, cities: Vec<CityRecord>) -> Self {
        let by_name = countries
            .iter()
            .enumerate()
            .map(|(idx, c)| (title_case(&c.name), idx))
            .collect();

        let mut cities_by_code: HashMap<String, Vec<String>> = HashMap::new();
        for city in cities {
            cities_by_code
                .entry(city.country_code)
                .or_default()
                .push(city.name);
        }

        Self {
            countries,
            by_name,
            cities_by_code,
        }
    }

    /// Dataset compiled into the binary from `data/`.
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(
            dataset::bundled_countries()?,
            dataset::bundled_cities()?,
        ))
    }

    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn country(&self, name: &str) -> Option<&CountryRecord> {
        self.by_name
            .get(&title_case(name))
            .map(|&idx| &self.countries[idx])
    }

    pub fn cities_of(&self, iso: &str) -> &[String] {
        self.cities_by_code
            .get(iso)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn random_country<R: Rng + CryptoRng>(&self, rng: &mut R) -> Result<String> {
        if self.countries.is_empty() {
            return Err(ProfileError::InvalidData(
                "geographic dataset has no countries".to_string(),
            ));
        }
        Ok(self.countries[rng.gen_range(0..self.countries.len())]
            .name
            .clone())
    }

    /// A requested country is title-cased and used as given, taking the
    /// dataset spelling when it is known. Without one, or with a blank one,
    /// a random country.
    pub fn resolve_country<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        requested: Option<&str>,
    ) -> Result<String> {
        match requested.filter(|name| !name.trim().is_empty()) {
            Some(name) => Ok(self
                .country(name)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| title_case(name))),
            None => self.random_country(rng),
        }
    }

    pub fn random_city<R: Rng + CryptoRng>(&self, rng: &mut R, country: &str) -> CityLookup {
        let Some(record) = self.country(country) else {
            error!("Unknown country: {}", country);
            return CityLookup::UnknownCountry;
        };

        let cities = self.cities_of(&record.iso);
        if cities.is_empty() {
            return CityLookup::NoCities;
        }
        CityLookup::Found(cities[rng.gen_range(0..cities.len())].clone())
    }
}

/// Upper-case the first letter of each word and lower-case the rest.
/// A word starts after any non-alphanumeric character.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.trim().chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        at_word_start = !ch.is_alphanumeric();
    }
    out
}

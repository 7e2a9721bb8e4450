use serde::Deserialize;

static COUNTRIES_JSON: &str = include_str!("../../data/countries.json");
static CITIES_JSON: &str = include_str!("../../data/cities.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub iso: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CityRecord {
    pub name: String,
    #[serde(rename = "countrycode")]
    pub country_code: String,
}

pub fn bundled_countries() -> serde_json::Result<Vec<CountryRecord>> {
    serde_json::from_str(COUNTRIES_JSON)
}

pub fn bundled_cities() -> serde_json::Result<Vec<CityRecord>> {
    serde_json::from_str(CITIES_JSON)
}

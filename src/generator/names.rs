//! Character catalog: a YAML mapping of category label to a list of names.
//!
//! ```yaml
//! Cowboy Bebop:
//!   - Spike Spiegel
//!   - Faye Valentine
//! ```

use std::fs;
use std::path::Path;

use rand::{CryptoRng, Rng};
use serde_yaml::Value;
use tracing::warn;

use crate::error::{ProfileError, Result};
use crate::generator::random_letters;

pub const DEFAULT_NAMES_FILE: &str = "data/anime_characters.yaml";
pub const FALLBACK_NAME_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub label: String,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCatalog {
    categories: Vec<Category>,
}

impl CharacterCatalog {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parse a catalog. The document must be a non-empty mapping whose
    /// values are lists of strings; an empty or null list is kept and only
    /// rejected if it is drawn.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let mapping = match serde_yaml::from_str::<Value>(text)? {
            Value::Mapping(m) if !m.is_empty() => m,
            _ => {
                return Err(ProfileError::InvalidData(
                    "invalid or empty character file".to_string(),
                ))
            }
        };

        let mut categories = Vec::with_capacity(mapping.len());
        for (key, names) in mapping {
            let label = match key {
                Value::String(s) => s,
                other => serde_yaml::to_string(&other)?.trim_end().to_string(),
            };
            let names = match names {
                Value::Null => Vec::new(),
                other => serde_yaml::from_value::<Vec<String>>(other)?,
            };
            categories.push(Category { label, names });
        }

        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Pick a uniformly random category, then a uniformly random name in it.
    pub fn pick<R: Rng + CryptoRng>(&self, rng: &mut R) -> Result<String> {
        if self.categories.is_empty() {
            return Err(ProfileError::InvalidData(
                "invalid or empty character file".to_string(),
            ));
        }
        let category = &self.categories[rng.gen_range(0..self.categories.len())];
        if category.names.is_empty() {
            return Err(ProfileError::InvalidData(format!(
                "character list '{}' is empty",
                category.label
            )));
        }
        Ok(category.names[rng.gen_range(0..category.names.len())].clone())
    }
}

/// Result of drawing a profile name from a catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameOutcome {
    Picked(String),
    /// The catalog was unusable; `name` is a random letter string.
    Fallback { name: String, reason: String },
}

impl NameOutcome {
    pub fn name(&self) -> &str {
        match self {
            NameOutcome::Picked(name) => name,
            NameOutcome::Fallback { name, .. } => name,
        }
    }

    pub fn into_name(self) -> String {
        match self {
            NameOutcome::Picked(name) => name,
            NameOutcome::Fallback { name, .. } => name,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, NameOutcome::Fallback { .. })
    }
}

/// Draw a name from the catalog at `path`, degrading to a random
/// `FALLBACK_NAME_LENGTH`-letter string with a logged warning.
pub fn pick_name<R: Rng + CryptoRng>(rng: &mut R, path: &Path) -> NameOutcome {
    if !path.is_file() {
        warn!("Name file not found, using random name");
        return NameOutcome::Fallback {
            name: random_letters(rng, FALLBACK_NAME_LENGTH),
            reason: format!("{} not found", path.display()),
        };
    }

    match CharacterCatalog::from_path(path).and_then(|catalog| catalog.pick(rng)) {
        Ok(name) => NameOutcome::Picked(name),
        Err(e) => {
            warn!("Failed to load names: {}", e);
            NameOutcome::Fallback {
                name: random_letters(rng, FALLBACK_NAME_LENGTH),
                reason: e.to_string(),
            }
        }
    }
}

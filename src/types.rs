use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

/// File format used by `--save`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Infer a format from a file extension (`.json`, `.txt`), ignoring case.
    pub fn from_extension(path: &std::path::Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(OutputFormat::Json),
            "txt" => Some(OutputFormat::Text),
            _ => None,
        }
    }
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub names_path: PathBuf,
    pub username_length: usize,
    pub with_password: bool,
    pub password_length: Option<usize>,
    pub password_symbols: bool,
    pub show_password: bool,
    pub save: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthdate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl Birthdate {
    /// Age in whole calendar years; month and day are not considered.
    pub fn age_in(&self, current_year: i32) -> i32 {
        current_year - self.year
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// A generated profile. Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub username: String,
    #[serde(serialize_with = "serialize_display")]
    pub birthdate: Birthdate,
    pub age: i32,
    pub country: String,
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

fn serialize_display<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::error::{ProfileError, Result};
use crate::generator::identity::DEFAULT_USERNAME_LENGTH;
use crate::generator::names::DEFAULT_NAMES_FILE;
use crate::types::{Config, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "random_profile",
    version,
    about = "Generate a random profile using curated fictional character names. \
             You may use your own character list if desired."
)]
pub struct Cli {
    /// Path to YAML file containing character names
    #[arg(long, env = "RANDOM_PROFILE_NAMES", default_value = DEFAULT_NAMES_FILE)]
    pub names: PathBuf,

    /// Username length
    #[arg(long, default_value_t = DEFAULT_USERNAME_LENGTH)]
    pub username_length: usize,

    /// Generate a random password
    #[arg(long)]
    pub with_password: bool,

    /// Password length (requires --with-password)
    #[arg(long)]
    pub password_length: Option<usize>,

    /// Disable symbols in generated password
    #[arg(long = "no-password-symbols", action = ArgAction::SetFalse)]
    pub password_symbols: bool,

    /// Display generated password in output
    #[arg(long)]
    pub show_password: bool,

    /// Output file path to save the generated profile
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Output data format (requires --save)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Specify a country name; otherwise, a random country is selected
    #[arg(long)]
    pub country: Option<String>,
}

impl Cli {
    /// Apply format inference and cross-option checks.
    pub fn into_config(self) -> Result<Config> {
        let format = match (&self.save, self.format) {
            (Some(path), None) => OutputFormat::from_extension(path),
            (_, format) => format,
        };

        if format.is_some() && self.save.is_none() {
            return Err(ProfileError::Usage("--format requires --save".to_string()));
        }
        if self.password_length.is_some() && !self.with_password {
            return Err(ProfileError::Usage(
                "--password-length requires --with-password".to_string(),
            ));
        }

        Ok(Config {
            names_path: self.names,
            username_length: self.username_length,
            with_password: self.with_password,
            password_length: self.password_length,
            password_symbols: self.password_symbols,
            show_password: self.show_password,
            save: self.save,
            format,
            country: self.country.filter(|c| !c.trim().is_empty()),
        })
    }
}

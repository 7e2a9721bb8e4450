use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::types::{OutputFormat, Profile};

pub const HIDDEN_PASSWORD: &str = "[hidden]";
pub const MISSING_CITY: &str = "unknown";

/// Print the profile as labelled lines. The password line only appears when
/// one was generated, and is redacted unless `show_password` is set.
pub fn print_profile<W: Write>(mut writer: W, profile: &Profile, show_password: bool) -> Result<()> {
    writeln!(writer, "name: {}", profile.name)?;
    writeln!(writer, "username: {}", profile.username)?;
    writeln!(writer, "date of birth: {}", profile.birthdate)?;
    writeln!(writer, "age: {}", profile.age)?;
    writeln!(writer, "country: {}", profile.country)?;
    writeln!(
        writer,
        "city: {}",
        profile.city.as_deref().unwrap_or(MISSING_CITY)
    )?;
    if let Some(ref password) = profile.password {
        if show_password {
            writeln!(writer, "password: {}", password)?;
        } else {
            writeln!(writer, "password: {}", HIDDEN_PASSWORD)?;
        }
    }
    Ok(())
}

/// `key: value` lines in record order.
pub fn write_text<W: Write>(mut writer: W, profile: &Profile) -> Result<()> {
    writeln!(writer, "name: {}", profile.name)?;
    writeln!(writer, "username: {}", profile.username)?;
    writeln!(writer, "birthdate: {}", profile.birthdate)?;
    writeln!(writer, "age: {}", profile.age)?;
    writeln!(writer, "country: {}", profile.country)?;
    writeln!(
        writer,
        "city: {}",
        profile.city.as_deref().unwrap_or(MISSING_CITY)
    )?;
    if let Some(ref password) = profile.password {
        writeln!(writer, "password: {}", password)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(mut writer: W, profile: &Profile) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, profile)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Write the profile to `path`, replacing any existing file. An unresolved
/// format falls back to plain text.
pub fn save_profile(path: &Path, profile: &Profile, format: Option<OutputFormat>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    match format.unwrap_or(OutputFormat::Text) {
        OutputFormat::Json => write_json(&mut writer, profile)?,
        OutputFormat::Text => write_text(&mut writer, profile)?,
    }
    writer.flush()?;
    info!("Profile saved to {}", path.display());
    Ok(())
}

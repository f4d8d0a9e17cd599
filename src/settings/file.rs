//! Settings file persistence.
//!
//! One comma-separated line: length, mode, upper, lower, numbers, symbols,
//! avoid_ambiguous. Only options are stored, never generated values.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use super::Settings;

const FIELDS: usize = 7;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(to_line(settings).as_bytes())?;
    log::debug!("settings saved to {}", path.display());
    Ok(())
}

/// Load saved settings into `settings`. A missing file leaves the defaults in
/// place; a malformed one is reported as `InvalidData`.
pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !path.exists() {
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        return Ok(());
    }

    *settings = from_line(&line).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("malformed settings file {}", path.display()),
        )
    })?;
    Ok(())
}

#[inline]
fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/randkey/settings")
}

fn to_line(settings: &Settings) -> String {
    let o = &settings.options;
    format!(
        "{},{},{},{},{},{},{}\n",
        o.length, settings.mode, o.uppercase, o.lowercase, o.numbers, o.symbols, o.avoid_ambiguous
    )
}

fn from_line(line: &str) -> Option<Settings> {
    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELDS {
        return None;
    }

    let mut settings = Settings {
        mode: parts[1].parse().ok()?,
        ..Default::default()
    };
    let o = &mut settings.options;
    o.length = parts[0].parse().ok()?;
    o.uppercase = parts[2].parse().ok()?;
    o.lowercase = parts[3].parse().ok()?;
    o.numbers = parts[4].parse().ok()?;
    o.symbols = parts[5].parse().ok()?;
    o.avoid_ambiguous = parts[6].parse().ok()?;
    Some(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use randkey::{GenerationOptions, Mode};

    #[test]
    fn test_line_round_trip() {
        let settings = Settings {
            mode: Mode::KeyBase64,
            options: GenerationOptions {
                length: 48,
                uppercase: false,
                lowercase: true,
                numbers: true,
                symbols: false,
                avoid_ambiguous: true,
            },
        };
        let line = to_line(&settings);
        assert_eq!(line, "48,base64,false,true,true,false,true\n");
        assert_eq!(from_line(&line), Some(settings));
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(from_line("16,password,true,true,true,true"), None);
        assert_eq!(from_line("x,password,true,true,true,true,false"), None);
        assert_eq!(from_line("16,rot13,true,true,true,true,false"), None);
        assert_eq!(from_line("16,password,yes,true,true,true,false"), None);
    }
}

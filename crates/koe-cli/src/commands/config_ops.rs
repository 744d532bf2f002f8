use std::path::Path;
use std::process;

use koe_core::settings::Settings;

use super::{read_file, CliError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", koe_core::settings::default_toml());
}

/// Parse and validate a settings file without installing it.
pub fn load_settings(path: &Path) -> Result<Settings, CliError> {
    let content = read_file(path)?;
    Ok(koe_core::settings::parse_settings_toml(&content)?)
}

pub fn settings_summary(s: &Settings) -> String {
    format!(
        "OK: reconstruct.pause={:?}, reconstruct.passthrough={}, spelling.symbols={}, spelling.letters={}",
        s.reconstruct.pause,
        s.reconstruct.passthrough.len(),
        s.spelling.symbol_count(),
        s.spelling.letter_count(),
    )
}

pub fn settings_validate(file: &Path) {
    let s = die!(load_settings(file), "Error: {}");
    println!("{}", settings_summary(&s));
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn exported_defaults_validate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, koe_core::settings::default_toml()).unwrap();

        let s = load_settings(&path).unwrap();
        assert_eq!(
            settings_summary(&s),
            "OK: reconstruct.pause=\"、\", reconstruct.passthrough=7, spelling.symbols=22, spelling.letters=26"
        );
    }

    #[test]
    fn custom_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "[reconstruct]\npause = \"…\"\npassthrough = [\"!\"]\n\n[spelling.symbols]\n\n[spelling.letters]\na = \"ア\"\n",
        )
        .unwrap();

        let s = load_settings(&path).unwrap();
        assert_eq!(s.reconstruct.pause, "…");
        assert!(s.reconstruct.is_passthrough("!"));
        assert_eq!(s.spelling.spell("ab"), "ア");
    }

    #[test]
    fn rejects_multi_char_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "[reconstruct]\npause = \"、\"\npassthrough = []\n\n[spelling.symbols]\n\n[spelling.letters]\nab = \"ア\"\n",
        )
        .unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, CliError::Settings(_)));
    }
}

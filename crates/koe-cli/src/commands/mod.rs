pub mod config_ops;
pub mod convert_ops;

use std::fs;
use std::path::Path;

use koe_core::settings::SettingsError;
use koe_core::tokenizer::{CharClassTokenizer, TokenizeError, Tokenizer};
use koe_core::{ConvertError, Converter};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Tokenizer(#[from] TokenizeError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("--dict requires koetool built with the `vibrato` feature")]
    VibratoDisabled,
}

pub type DynConverter = Converter<Box<dyn Tokenizer>>;

pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Install a custom settings file as the process-wide settings.
/// Must run before the first converter is built.
pub fn install_settings(path: &Path) -> Result<(), CliError> {
    let content = read_file(path)?;
    koe_core::settings::init_custom(content)?;
    Ok(())
}

/// Pick the tokenizer backend: a vibrato dictionary when one is given,
/// otherwise the script-boundary fallback.
pub fn build_tokenizer(dict: Option<&Path>) -> Result<Box<dyn Tokenizer>, CliError> {
    match dict {
        None => Ok(Box::new(CharClassTokenizer::new())),
        Some(path) => open_dictionary(path),
    }
}

#[cfg(feature = "vibrato")]
fn open_dictionary(path: &Path) -> Result<Box<dyn Tokenizer>, CliError> {
    let tokenizer = koe_core::tokenizer::VibratoTokenizer::open(path)?;
    Ok(Box::new(tokenizer))
}

#[cfg(not(feature = "vibrato"))]
fn open_dictionary(_path: &Path) -> Result<Box<dyn Tokenizer>, CliError> {
    Err(CliError::VibratoDisabled)
}

pub fn build_converter(dict: Option<&Path>) -> Result<DynConverter, CliError> {
    Ok(Converter::new(build_tokenizer(dict)?))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn fallback_tokenizer_without_dict() {
        let conv = build_converter(None).unwrap();
        assert_eq!(conv.convert("a1").unwrap(), "エー<NUMK VAL=1>");
    }

    #[cfg(not(feature = "vibrato"))]
    #[test]
    fn dict_rejected_without_feature() {
        let err = build_tokenizer(Some(Path::new("system.dic"))).err().unwrap();
        assert!(matches!(err, CliError::VibratoDisabled));
    }

    #[test]
    fn install_settings_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = install_settings(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn install_settings_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[reconstruct]\npause = \"\"\npassthrough = []").unwrap();
        let err = install_settings(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Settings(_)));
    }
}

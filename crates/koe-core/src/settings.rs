//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub reconstruct: ReconstructSettings,
    pub spelling: SpellingTable,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReconstructSettings {
    /// Stand-in for tokens we choose not to risk mispronouncing.
    pub pause: String,
    /// Surfaces copied verbatim even when unannotated.
    pub passthrough: Vec<String>,
}

impl ReconstructSettings {
    pub fn is_passthrough(&self, surface: &str) -> bool {
        self.passthrough.iter().any(|p| p == surface)
    }
}

/// Character → spoken-name tables used to spell out alphabetic runs.
///
/// Only constructible through `RawSpellingTable`, so keys are always
/// validated single characters.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawSpellingTable")]
pub struct SpellingTable {
    symbols: HashMap<char, String>,
    letters: HashMap<char, String>,
}

/// `[spelling]` section as written in TOML.
#[derive(Deserialize)]
struct RawSpellingTable {
    symbols: BTreeMap<String, String>,
    letters: BTreeMap<String, String>,
}

impl TryFrom<RawSpellingTable> for SpellingTable {
    type Error = SettingsError;

    fn try_from(raw: RawSpellingTable) -> Result<Self, Self::Error> {
        Ok(Self {
            symbols: parse_table("spelling.symbols", &raw.symbols, false)?,
            letters: parse_table("spelling.letters", &raw.letters, true)?,
        })
    }
}

impl SpellingTable {
    /// Spoken name for one character: symbols first, then letters.
    ///
    /// Characters found in neither table spell as the empty string.
    pub fn spell_char(&self, c: char) -> &str {
        self.symbols
            .get(&c)
            .or_else(|| self.letters.get(&c))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Concatenated spoken names for every character of `s`, in order.
    pub fn spell(&self, s: &str) -> String {
        s.chars().map(|c| self.spell_char(c)).collect()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn parse_table(
    section: &str,
    raw: &BTreeMap<String, String>,
    lowercase_keys: bool,
) -> Result<HashMap<char, String>, SettingsError> {
    let mut result = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let field = format!("{section}.{key}");
        let mut chars = key.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(SettingsError::InvalidValue {
                    field,
                    reason: "key must be exactly one character".to_string(),
                })
            }
        };
        if lowercase_keys && c.to_lowercase().ne(std::iter::once(c)) {
            return Err(SettingsError::InvalidValue {
                field,
                reason: "letter keys must be lower-case".to_string(),
            });
        }
        if value.is_empty() {
            return Err(SettingsError::InvalidValue {
                field,
                reason: "must not be empty".to_string(),
            });
        }
        result.insert(c, value.clone());
    }
    Ok(result)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.reconstruct.pause.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "reconstruct.pause".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if s.reconstruct.passthrough.iter().any(|p| p.is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: "reconstruct.passthrough".to_string(),
            reason: "entries must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[reconstruct]
pause = "、"
passthrough = ["。"]

[spelling.symbols]
"+" = "プラス"

[spelling.letters]
a = "エー"
"#;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.reconstruct.pause, "、");
        assert_eq!(
            s.reconstruct.passthrough,
            vec!["。", "？", "、", ",", ";", "/", "+"]
        );
        assert_eq!(s.spelling.letter_count(), 26);
        assert_eq!(s.spelling.symbol_count(), 22);
        assert_eq!(s.spelling.spell_char('a'), "エー");
        assert_eq!(s.spelling.spell_char('w'), "ダブリュー");
        assert_eq!(s.spelling.spell_char('¥'), "エ'ン");
        assert_eq!(s.spelling.spell_char(' '), "、");
        assert_eq!(s.spelling.spell_char('é'), "");
    }

    #[test]
    fn spell_concatenates_in_order() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.spelling.spell("abc"), "エービーシー");
        assert_eq!(s.spelling.spell("a-z"), "エーハ'イフンゼット");
        assert_eq!(s.spelling.spell(""), "");
    }

    #[test]
    fn symbols_take_precedence_over_letters() {
        let toml = r#"
[reconstruct]
pause = "、"
passthrough = []

[spelling.symbols]
x = "カケル"

[spelling.letters]
x = "エックス"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.spelling.spell_char('x'), "カケル");
    }

    #[test]
    fn passthrough_lookup() {
        let s = parse_settings_toml(MINIMAL).unwrap();
        assert!(s.reconstruct.is_passthrough("。"));
        assert!(!s.reconstruct.is_passthrough("、"));
    }

    #[test]
    fn error_empty_pause() {
        let toml = MINIMAL.replace(r#"pause = "、""#, r#"pause = """#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("reconstruct.pause"));
    }

    #[test]
    fn error_empty_passthrough_entry() {
        let toml = MINIMAL.replace(r#"["。"]"#, r#"["。", ""]"#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("reconstruct.passthrough"));
    }

    #[test]
    fn error_multi_char_key() {
        let toml = MINIMAL.replace(r#"a = "エー""#, r#"ab = "エービー""#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("spelling.letters.ab"));
    }

    #[test]
    fn error_uppercase_letter_key() {
        let toml = MINIMAL.replace(r#"a = "エー""#, r#"A = "エー""#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("lower-case"));
    }

    #[test]
    fn error_empty_value() {
        let toml = MINIMAL.replace(r#""+" = "プラス""#, r#""+" = """#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("spelling.symbols.+"));
    }

    #[test]
    fn direct_deserialize_builds_tables() {
        let s: Settings = toml::from_str(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.spelling.letter_count(), 26);
        assert_eq!(s.spelling.spell("ab"), "エービー");

        let bad = MINIMAL.replace(r#"a = "エー""#, r#"ab = "エービー""#);
        let err = toml::from_str::<Settings>(&bad).unwrap_err();
        assert!(err.to_string().contains("spelling.letters.ab"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[reconstruct]
pause = "、"
passthrough = []
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}

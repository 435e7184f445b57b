//! Display language, name translation and UI message templates.

pub mod messages;
mod tables;

pub use self::messages::t;
pub use self::tables::{NameKind, TranslationTables};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display languages. Canonical catalog names are English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    /// Language the catalog's canonical names are written in.
    pub const SOURCE: Language = Language::En;

    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Pick a language from a locale string such as `de_DE.UTF-8` or `de-AT`.
    /// Anything that does not start with `de` falls back to English.
    pub fn detect(locale: Option<&str>) -> Self {
        match locale {
            Some(locale) if locale.trim().to_lowercase().starts_with("de") => Language::De,
            _ => Language::En,
        }
    }

    /// Detect from the process locale, see [`env_locale`].
    pub fn from_env() -> Self {
        Self::detect(env_locale().as_deref())
    }
}

/// First non-empty value of `LC_ALL`, `LC_MESSAGES` and `LANG`.
pub fn env_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.is_empty())
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            other => Err(format!("unsupported language '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(Language::detect(Some("de_DE.UTF-8")), Language::De);
        assert_eq!(Language::detect(Some("DE-at")), Language::De);
        assert_eq!(Language::detect(Some("en_US.UTF-8")), Language::En);
        assert_eq!(Language::detect(Some("fr_FR")), Language::En);
        assert_eq!(Language::detect(None), Language::En);
    }

    #[test]
    fn test_tag_round_trip() {
        for lang in [Language::En, Language::De] {
            assert_eq!(lang.tag().parse::<Language>(), Ok(lang));
        }
        assert!("es".parse::<Language>().is_err());
    }
}

//! Common type definitions shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user interface language the ground control station ships translations for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterfaceLanguage {
    /// English, the development language.
    #[default]
    #[serde(rename = "en", alias = "english")]
    English,
    /// Russian.
    #[serde(rename = "ru", alias = "russian")]
    Russian,
    /// Belarusian.
    #[serde(rename = "by", alias = "be", alias = "belarusian")]
    Belarusian,
    /// Arabic.
    #[serde(rename = "ar", alias = "arabic")]
    Arabic,
}

impl InterfaceLanguage {
    /// Get all supported languages.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::English, Self::Russian, Self::Belarusian, Self::Arabic]
    }

    /// Short code used in configuration files.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
            Self::Belarusian => "by",
            Self::Arabic => "ar",
        }
    }

    /// ISO 639-1 language subtag.
    ///
    /// Differs from [`code`](Self::code) only for Belarusian, whose resource
    /// files have always been named `by`.
    #[must_use]
    pub const fn iso_code(self) -> &'static str {
        match self {
            Self::Belarusian => "be",
            other => other.code(),
        }
    }

    /// Stem of the application translation resource, e.g. `ru` for `ru.ts`.
    #[must_use]
    pub const fn resource_stem(self) -> &'static str {
        self.code()
    }

    /// Stem of the toolkit translation resource for standard dialogs, if one ships.
    #[must_use]
    pub const fn system_resource_stem(self) -> Option<&'static str> {
        match self {
            Self::Russian => Some("qtbase_ru"),
            Self::Arabic => Some("qt_ar"),
            Self::English | Self::Belarusian => None,
        }
    }

    /// Name of the language in the language itself.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Russian => "Русский",
            Self::Belarusian => "Беларуская",
            Self::Arabic => "العربية",
        }
    }

    /// Parse a language from a short code or a locale name such as `ru_RU`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" | "english" => Some(Self::English),
            "ru" | "russian" => Some(Self::Russian),
            "by" | "be" | "belarusian" => Some(Self::Belarusian),
            "ar" | "arabic" => Some(Self::Arabic),
            _ => None,
        }
    }
}

impl fmt::Display for InterfaceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for InterfaceLanguage {
    type Err = GcsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| GcsError::UnknownLanguage(s.to_string()))
    }
}

/// Common result type for the workspace.
pub type Result<T> = std::result::Result<T, GcsError>;

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum GcsError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Language code that matches no shipped translation.
    #[error("Unknown interface language: {0}")]
    UnknownLanguage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

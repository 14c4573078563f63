//! Translation entries as stored in a catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Review state of a translation, taken from the `type` attribute of `<translation>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    /// Reviewed and used for lookup (no `type` attribute).
    #[default]
    Finished,
    /// Present but not yet usable; lookups fall back to the source.
    Unfinished,
    /// Source string no longer found in the code base.
    Vanished,
    /// Superseded entry kept for translator history.
    Obsolete,
}

impl TranslationStatus {
    /// Parse the `type` attribute value. `None` means the attribute is absent.
    ///
    /// Values outside the known set are treated as unfinished.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            None | Some("" | "finished") => Self::Finished,
            Some("vanished") => Self::Vanished,
            Some("obsolete") => Self::Obsolete,
            Some(_) => Self::Unfinished,
        }
    }

    /// The `type` attribute value to write, `None` for finished entries.
    #[must_use]
    pub const fn as_attribute(self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Vanished => Some("vanished"),
            Self::Obsolete => Some("obsolete"),
        }
    }

    /// Whether entries with this status take part in runtime lookup.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Whether the entry is only kept as translator history.
    #[must_use]
    pub const fn is_retired(self) -> bool {
        matches!(self, Self::Vanished | Self::Obsolete)
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attribute().unwrap_or("finished"))
    }
}

/// Where a source string appears in the application code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// File name relative to the translation file.
    pub filename: String,
    /// Line number, when recorded.
    pub line: Option<u32>,
}

/// One `<message>` of a translation document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// Context name, historically the owning UI class.
    pub context: String,
    /// Development-language text used as the lookup key.
    pub source: String,
    /// Translated text, possibly empty.
    pub translation: String,
    /// Review state.
    pub status: TranslationStatus,
    /// Distinguishes entries sharing the same context and source.
    pub disambiguation: Option<String>,
    /// Source locations, metadata only.
    pub locations: Vec<SourceLocation>,
    /// Developer note for translators.
    pub extra_comment: Option<String>,
    /// Translator's own note.
    pub translator_comment: Option<String>,
    /// Previous source text the translation was made for.
    pub old_source: Option<String>,
    /// Plural forms of a numerus message, in document order.
    pub numerus_forms: Vec<String>,
    /// Whether the message was marked `numerus="yes"`.
    pub numerus: bool,
}

impl TranslationEntry {
    /// Create a finished entry with no metadata.
    pub fn new(
        context: impl Into<String>,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            translation: translation.into(),
            ..Self::default()
        }
    }

    /// Set the status.
    #[must_use]
    pub fn with_status(mut self, status: TranslationStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the disambiguation comment.
    #[must_use]
    pub fn with_disambiguation(mut self, disambiguation: impl Into<String>) -> Self {
        self.disambiguation = Some(disambiguation.into());
        self
    }

    /// The text lookups may return, if any.
    #[must_use]
    pub fn usable_translation(&self) -> Option<&str> {
        if self.status.is_active() && !self.translation.is_empty() {
            Some(&self.translation)
        } else {
            None
        }
    }

    /// Index priority: usable translations first, then unfinished, then retired entries.
    pub(crate) fn rank(&self) -> u8 {
        if self.usable_translation().is_some() {
            3
        } else if self.status.is_active() {
            2
        } else if self.status == TranslationStatus::Unfinished {
            1
        } else {
            0
        }
    }
}

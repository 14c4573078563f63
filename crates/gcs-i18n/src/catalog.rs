//! Immutable translation catalog with an index for lookup.

use crate::entry::{TranslationEntry, TranslationStatus};
use crate::error::{LoadError, LoadResult, WriteError};
use crate::format::{substitute, TranslationArgs};
use crate::parser::parse_ts;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace, warn};
use unic_langid::LanguageIdentifier;

/// Index slot for one `(context, source)` pair.
#[derive(Debug, Clone)]
struct Slot {
    /// Best entry for the pair regardless of disambiguation.
    best: usize,
    /// Best entry per disambiguation comment.
    by_disambiguation: HashMap<String, usize>,
}

/// The loaded translation entries for one locale.
///
/// Entries are kept in load order. Lookup goes through an index holding the
/// best entry per `(context, source)`: a finished, non-empty translation wins
/// over any other status, and the first one in load order wins ties.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    language: Option<LanguageIdentifier>,
    raw_language: Option<String>,
    source_language: Option<String>,
    version: Option<String>,
    entries: Vec<TranslationEntry>,
    index: HashMap<String, HashMap<String, Slot>>,
}

/// Entry counts of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    /// Number of distinct contexts.
    pub contexts: usize,
    /// Number of entries, including duplicates and retired ones.
    pub total: usize,
    /// Finished entries.
    pub finished: usize,
    /// Finished entries with empty translation text.
    pub finished_empty: usize,
    /// Unfinished entries.
    pub unfinished: usize,
    /// Vanished entries.
    pub vanished: usize,
    /// Obsolete entries.
    pub obsolete: usize,
}

impl Catalog {
    /// A catalog with no entries; every lookup echoes the source.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog from a `.ts` document.
    pub fn load(resource: &str) -> LoadResult<Self> {
        let document = parse_ts(resource)?;
        let mut catalog = Self::from_entries(document.entries);
        catalog.version = document.version;
        catalog.source_language = document.source_language;
        catalog.set_language(document.language);

        info!(
            "Loaded translation catalog: language={:?}, {} entries, {} contexts",
            catalog.raw_language,
            catalog.entries.len(),
            catalog.index.len()
        );
        Ok(catalog)
    }

    /// Read and parse a catalog from a `.ts` file.
    pub fn load_file<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();
        debug!("Loading translation file: {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        Self::load(&content)
    }

    /// Build a catalog from entries in load order.
    #[must_use]
    pub fn from_entries(entries: Vec<TranslationEntry>) -> Self {
        let mut index: HashMap<String, HashMap<String, Slot>> = HashMap::new();

        for (position, entry) in entries.iter().enumerate() {
            let sources = index.entry(entry.context.clone()).or_default();
            match sources.get_mut(&entry.source) {
                None => {
                    let mut slot = Slot {
                        best: position,
                        by_disambiguation: HashMap::new(),
                    };
                    if let Some(comment) = &entry.disambiguation {
                        slot.by_disambiguation.insert(comment.clone(), position);
                    }
                    sources.insert(entry.source.clone(), slot);
                }
                Some(slot) => {
                    if entry.rank() > entries[slot.best].rank() {
                        slot.best = position;
                    }
                    if let Some(comment) = &entry.disambiguation {
                        match slot.by_disambiguation.get_mut(comment) {
                            Some(current) => {
                                if entry.rank() > entries[*current].rank() {
                                    *current = position;
                                }
                                trace!(
                                    "Duplicate entry for ({:?}, {:?}, {:?})",
                                    entry.context,
                                    entry.source,
                                    comment
                                );
                            }
                            None => {
                                slot.by_disambiguation.insert(comment.clone(), position);
                            }
                        }
                    }
                }
            }
        }

        Self {
            entries,
            index,
            ..Self::default()
        }
    }

    /// Set the declared language, e.g. `ru_RU`.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.set_language(Some(language.into()));
        self
    }

    fn set_language(&mut self, raw: Option<String>) {
        self.language = raw.as_deref().and_then(|code| {
            code.replace('_', "-")
                .parse::<LanguageIdentifier>()
                .map_err(|_| warn!("Unrecognised catalog language {:?}", code))
                .ok()
        });
        self.raw_language = raw;
    }

    /// Parsed declared language, if it is a valid language identifier.
    #[must_use]
    pub const fn language(&self) -> Option<&LanguageIdentifier> {
        self.language.as_ref()
    }

    /// Declared language exactly as written in the document.
    #[must_use]
    pub fn raw_language(&self) -> Option<&str> {
        self.raw_language.as_deref()
    }

    /// Declared source language.
    #[must_use]
    pub fn source_language(&self) -> Option<&str> {
        self.source_language.as_deref()
    }

    /// Document format version.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// All entries in load order.
    #[must_use]
    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry the index selected for `(context, source)`, whatever its status.
    #[must_use]
    pub fn entry(&self, context: &str, source: &str) -> Option<&TranslationEntry> {
        self.slot(context, source).map(|slot| &self.entries[slot.best])
    }

    /// The usable translation for `(context, source)`, without fallback.
    #[must_use]
    pub fn find(&self, context: &str, source: &str, disambiguation: Option<&str>) -> Option<&str> {
        let slot = self.slot(context, source)?;

        if let Some(comment) = disambiguation {
            let exact = slot
                .by_disambiguation
                .get(comment)
                .and_then(|&i| self.entries[i].usable_translation());
            if exact.is_some() {
                return exact;
            }
        }

        self.entries[slot.best].usable_translation()
    }

    /// Translate `source`, falling back to `source` itself.
    #[must_use]
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.translate_disambiguated(context, source, None)
    }

    /// Translate with a disambiguation comment, degrading to the plain lookup.
    #[must_use]
    pub fn translate_disambiguated<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        disambiguation: Option<&str>,
    ) -> &'a str {
        self.find(context, source, disambiguation).unwrap_or_else(|| {
            trace!("No translation for ({:?}, {:?}), using source", context, source);
            source
        })
    }

    /// Resolve a display string and substitute positional arguments.
    #[must_use]
    pub fn lookup(&self, context: &str, source: &str, args: Option<&TranslationArgs>) -> String {
        self.lookup_disambiguated(context, source, None, args)
    }

    /// [`lookup`](Self::lookup) with a disambiguation comment.
    #[must_use]
    pub fn lookup_disambiguated(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
        args: Option<&TranslationArgs>,
    ) -> String {
        apply_args(self.translate_disambiguated(context, source, disambiguation), args).into_owned()
    }

    /// Entries whose key has no usable translation, in load order.
    ///
    /// Retired entries are skipped; each key is reported once.
    pub fn untranslated(&self) -> impl Iterator<Item = &TranslationEntry> + '_ {
        let mut seen = HashSet::new();
        self.entries.iter().filter(move |entry| {
            !entry.status.is_retired()
                && self
                    .find(&entry.context, &entry.source, entry.disambiguation.as_deref())
                    .is_none()
                && seen.insert((
                    entry.context.clone(),
                    entry.source.clone(),
                    entry.disambiguation.clone(),
                ))
        })
    }

    /// Count entries by status.
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            contexts: self.index.len(),
            total: self.entries.len(),
            ..CatalogStats::default()
        };

        for entry in &self.entries {
            match entry.status {
                TranslationStatus::Finished => {
                    stats.finished += 1;
                    if entry.translation.is_empty() {
                        stats.finished_empty += 1;
                    }
                }
                TranslationStatus::Unfinished => stats.unfinished += 1,
                TranslationStatus::Vanished => stats.vanished += 1,
                TranslationStatus::Obsolete => stats.obsolete += 1,
            }
        }

        stats
    }

    /// Serialize to a `.ts` document.
    pub fn to_ts_string(&self) -> Result<String, WriteError> {
        crate::writer::write_ts(self)
    }

    /// Write the catalog to a `.ts` file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), WriteError> {
        let document = self.to_ts_string()?;
        fs::write(path.as_ref(), document)?;
        info!("Saved translation catalog to {:?}", path.as_ref());
        Ok(())
    }

    fn slot(&self, context: &str, source: &str) -> Option<&Slot> {
        self.index.get(context)?.get(source)
    }
}

pub(crate) fn apply_args<'a>(text: &'a str, args: Option<&TranslationArgs>) -> Cow<'a, str> {
    match args {
        Some(args) if !args.is_empty() => Cow::Owned(substitute(text, args)),
        _ => Cow::Borrowed(text),
    }
}

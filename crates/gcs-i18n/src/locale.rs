//! Resolution of translation resources for an interface language.

use crate::catalog::Catalog;
use crate::error::LoadResult;
use gcs_common::InterfaceLanguage;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extension of translation source documents.
pub const RESOURCE_EXTENSION: &str = "ts";

/// Locates translation files inside a translations directory.
#[derive(Debug, Clone)]
pub struct ResourceLocator {
    /// Base directory for translation resources.
    base_dir: PathBuf,
    /// Whether toolkit translations are consulted.
    system_translations: bool,
}

impl ResourceLocator {
    /// Create a new `ResourceLocator`.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            system_translations: true,
        }
    }

    /// Enable or disable loading of toolkit translations.
    #[must_use]
    pub const fn with_system_translations(mut self, enabled: bool) -> Self {
        self.system_translations = enabled;
        self
    }

    /// Whether toolkit translations are loaded.
    #[must_use]
    pub const fn system_translations(&self) -> bool {
        self.system_translations
    }

    /// Get the base directory for resources.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the application translation file, e.g. `translations/ru.ts`.
    #[must_use]
    pub fn application_resource(&self, language: InterfaceLanguage) -> PathBuf {
        self.resource_path(language.resource_stem())
    }

    /// Path of the toolkit translation file, when the language has one.
    #[must_use]
    pub fn system_resource(&self, language: InterfaceLanguage) -> Option<PathBuf> {
        language
            .system_resource_stem()
            .map(|stem| self.resource_path(stem))
    }

    fn resource_path(&self, stem: &str) -> PathBuf {
        self.base_dir.join(format!("{stem}.{RESOURCE_EXTENSION}"))
    }

    /// Load the catalog at `path`.
    ///
    /// A missing file is not an error: it yields `None` so the caller can
    /// fall back to echoing source strings. Unreadable or malformed files
    /// are errors.
    pub fn load_optional(&self, path: &Path) -> LoadResult<Option<Catalog>> {
        if !path.exists() {
            warn!("Translation file does not exist: {:?}", path);
            return Ok(None);
        }

        debug!("Loading translation file: {:?}", path);
        Catalog::load_file(path).map(Some)
    }

    /// Load the application catalog for `language`, or an empty catalog if no file ships.
    pub fn load_application(&self, language: InterfaceLanguage) -> LoadResult<Catalog> {
        let path = self.application_resource(language);
        Ok(self.load_optional(&path)?.unwrap_or_default())
    }

    /// Load the toolkit catalog for `language`, if enabled, the language has one and it exists.
    pub fn load_system(&self, language: InterfaceLanguage) -> LoadResult<Option<Catalog>> {
        if !self.system_translations {
            return Ok(None);
        }
        match self.system_resource(language) {
            Some(path) => self.load_optional(&path),
            None => Ok(None),
        }
    }

    /// Languages whose application resource exists in the base directory.
    #[must_use]
    pub fn available_languages(&self) -> Vec<InterfaceLanguage> {
        InterfaceLanguage::all()
            .into_iter()
            .filter(|&language| self.application_resource(language).exists())
            .collect()
    }
}

impl Default for ResourceLocator {
    fn default() -> Self {
        Self::new("translations")
    }
}

/// Whether a catalog's declared language matches `language`.
///
/// Catalogs that declare no parseable language are accepted.
#[must_use]
pub fn declares_language(catalog: &Catalog, language: InterfaceLanguage) -> bool {
    catalog
        .language()
        .map_or(true, |declared| declared.language.as_str() == language.iso_code())
}

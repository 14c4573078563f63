//! Atomically swappable handle to the active catalog.

use crate::catalog::Catalog;
use crate::error::LoadResult;
use crate::format::TranslationArgs;
use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Holds the active catalog and replaces it atomically on reload.
///
/// Readers never block and always see one complete catalog. A lookup that
/// started before a reload finishes against the catalog it started with.
/// A failed reload leaves the active catalog in place.
#[derive(Debug)]
pub struct Translator {
    current: ArcSwap<Catalog>,
}

impl Translator {
    /// Create a translator serving `catalog`.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: ArcSwap::from_pointee(catalog),
        }
    }

    /// Create a translator that echoes every source string.
    #[must_use]
    pub fn echo() -> Self {
        Self::new(Catalog::empty())
    }

    /// Parse `resource` and serve it.
    pub fn load(resource: &str) -> LoadResult<Self> {
        Catalog::load(resource).map(Self::new)
    }

    /// Snapshot of the active catalog.
    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        self.current.load_full()
    }

    /// Replace the active catalog, returning the previous one.
    pub fn install(&self, catalog: Catalog) -> Arc<Catalog> {
        let previous = self.current.swap(Arc::new(catalog));
        debug!("Installed catalog, previous had {} entries", previous.len());
        previous
    }

    /// Parse `resource` and make it the active catalog.
    ///
    /// On error the active catalog is left untouched.
    pub fn reload(&self, resource: &str) -> LoadResult<Arc<Catalog>> {
        let catalog = Catalog::load(resource).map_err(|e| {
            error!("Reload failed, keeping active catalog: {}", e);
            e
        })?;
        Ok(self.swap_in(catalog))
    }

    /// Read `path` and make it the active catalog.
    ///
    /// On error the active catalog is left untouched.
    pub fn reload_file<P: AsRef<Path>>(&self, path: P) -> LoadResult<Arc<Catalog>> {
        let catalog = Catalog::load_file(path.as_ref()).map_err(|e| {
            error!("Reload of {:?} failed, keeping active catalog: {}", path.as_ref(), e);
            e
        })?;
        Ok(self.swap_in(catalog))
    }

    fn swap_in(&self, catalog: Catalog) -> Arc<Catalog> {
        let catalog = Arc::new(catalog);
        self.current.store(Arc::clone(&catalog));
        info!("Reloaded catalog with {} entries", catalog.len());
        catalog
    }

    /// Resolve a display string against the active catalog.
    #[must_use]
    pub fn lookup(&self, context: &str, source: &str, args: Option<&TranslationArgs>) -> String {
        self.current.load().lookup(context, source, args)
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
        self.current
            .load()
            .lookup_disambiguated(context, source, disambiguation, args)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::echo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V1: &str = r#"<TS language="ru"><context><name>C</name>
        <message><source>Map</source><translation>Карта</translation></message>
    </context></TS>"#;

    const V2: &str = r#"<TS language="ru"><context><name>C</name>
        <message><source>Map</source><translation>Тайловая карта</translation></message>
    </context></TS>"#;

    #[test]
    fn test_echo_translator() {
        let translator = Translator::default();
        assert_eq!(translator.lookup("C", "Map", None), "Map");
    }

    #[test]
    fn test_reload_replaces_catalog() {
        let translator = Translator::load(V1).unwrap();
        assert_eq!(translator.lookup("C", "Map", None), "Карта");

        let installed = translator.reload(V2).unwrap();
        assert_eq!(installed.translate("C", "Map"), "Тайловая карта");
        assert_eq!(translator.lookup("C", "Map", None), "Тайловая карта");
    }

    #[test]
    fn test_snapshot_survives_reload() {
        let translator = Translator::load(V1).unwrap();
        let snapshot = translator.catalog();

        translator.reload(V2).unwrap();

        assert_eq!(snapshot.translate("C", "Map"), "Карта");
        assert_eq!(translator.catalog().translate("C", "Map"), "Тайловая карта");
    }

    #[test]
    fn test_failed_reload_keeps_previous() {
        let translator = Translator::load(V1).unwrap();

        let result = translator.reload("<TS><context><name>C</name><message><translation>x</translation></message></context></TS>");
        assert!(result.is_err());
        assert_eq!(translator.lookup("C", "Map", None), "Карта");

        assert!(translator.reload_file("/nonexistent/ru.ts").is_err());
        assert_eq!(translator.lookup("C", "Map", None), "Карта");
    }

    #[test]
    fn test_install_returns_previous() {
        let translator = Translator::load(V1).unwrap();
        let previous = translator.install(Catalog::empty());
        assert_eq!(previous.len(), 1);
        assert_eq!(translator.lookup("C", "Map", None), "Map");
    }
}

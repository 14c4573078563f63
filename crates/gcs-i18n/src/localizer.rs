//! Interface language management.

use crate::catalog::{apply_args, Catalog};
use crate::error::LoadResult;
use crate::format::TranslationArgs;
use crate::locale::{declares_language, ResourceLocator};
use arc_swap::ArcSwap;
use gcs_common::InterfaceLanguage;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Catalogs serving one interface language.
#[derive(Debug, Clone)]
pub struct LocaleBundle {
    /// Language the catalogs were loaded for.
    pub language: InterfaceLanguage,
    /// Application strings.
    pub application: Arc<Catalog>,
    /// Toolkit strings for standard dialogs.
    ///
    /// Installed last, so it is consulted first and wins for keys both
    /// catalogs define.
    pub system: Option<Arc<Catalog>>,
}

impl LocaleBundle {
    /// A bundle that echoes every source string.
    #[must_use]
    pub fn echo(language: InterfaceLanguage) -> Self {
        Self {
            language,
            application: Arc::new(Catalog::empty()),
            system: None,
        }
    }

    /// The usable translation, system catalog first.
    #[must_use]
    pub fn find(&self, context: &str, source: &str, disambiguation: Option<&str>) -> Option<&str> {
        self.system
            .as_ref()
            .and_then(|catalog| catalog.find(context, source, disambiguation))
            .or_else(|| self.application.find(context, source, disambiguation))
    }

    /// Resolve a display string, falling back to `source`.
    #[must_use]
    pub fn lookup(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
        args: Option<&TranslationArgs>,
    ) -> String {
        let text = self.find(context, source, disambiguation).unwrap_or(source);
        apply_args(text, args).into_owned()
    }
}

/// Manages the translations of the running application.
///
/// The active [`LocaleBundle`] is swapped as a whole, so readers never see
/// the application catalog of one language paired with the system catalog
/// of another.
#[derive(Debug)]
pub struct Localizer {
    locator: ResourceLocator,
    active: ArcSwap<LocaleBundle>,
}

impl Localizer {
    /// Create a localizer for `language`.
    ///
    /// Failing to load the language is logged and leaves a bundle that
    /// echoes source strings, so the interface always renders.
    #[must_use]
    pub fn new(locator: ResourceLocator, language: InterfaceLanguage) -> Self {
        let localizer = Self {
            locator,
            active: ArcSwap::from_pointee(LocaleBundle::echo(language)),
        };

        if let Err(e) = localizer.switch_language(language) {
            error!(
                "Failed to load translations for {}, showing source strings: {}",
                language, e
            );
        }

        localizer
    }

    /// Create a localizer for `language`, failing if its translations are malformed.
    pub fn open(locator: ResourceLocator, language: InterfaceLanguage) -> LoadResult<Self> {
        let bundle = load_bundle(&locator, language)?;
        Ok(Self {
            locator,
            active: ArcSwap::from_pointee(bundle),
        })
    }

    /// Load `language` and make it active.
    ///
    /// Both catalogs are loaded before anything is swapped; on error the
    /// current language stays active.
    pub fn switch_language(&self, language: InterfaceLanguage) -> LoadResult<()> {
        debug!("Switching interface language to {}", language);

        let bundle = load_bundle(&self.locator, language)?;
        self.active.store(Arc::new(bundle));

        info!(
            "Interface language set to {} ({})",
            language,
            language.display_name()
        );
        Ok(())
    }

    /// Reload the active language from disk.
    pub fn reload(&self) -> LoadResult<()> {
        let language = self.language();
        debug!("Reloading translations for {}", language);
        self.switch_language(language)
    }

    /// The active interface language.
    #[must_use]
    pub fn language(&self) -> InterfaceLanguage {
        self.active.load().language
    }

    /// Snapshot of the active bundle.
    #[must_use]
    pub fn bundle(&self) -> Arc<LocaleBundle> {
        self.active.load_full()
    }

    /// Get the resource locator.
    #[must_use]
    pub const fn locator(&self) -> &ResourceLocator {
        &self.locator
    }

    /// Translate `source` in `context`.
    #[must_use]
    pub fn tr(&self, context: &str, source: &str) -> String {
        self.active.load().lookup(context, source, None, None)
    }

    /// Translate and substitute positional arguments.
    #[must_use]
    pub fn tr_args(&self, context: &str, source: &str, args: Option<&TranslationArgs>) -> String {
        self.active.load().lookup(context, source, None, args)
    }

    /// Translate with a disambiguation comment and optional arguments.
    #[must_use]
    pub fn tr_disambiguated(
        &self,
        context: &str,
        source: &str,
        disambiguation: &str,
        args: Option<&TranslationArgs>,
    ) -> String {
        self.active
            .load()
            .lookup(context, source, Some(disambiguation), args)
    }
}

fn load_bundle(locator: &ResourceLocator, language: InterfaceLanguage) -> LoadResult<LocaleBundle> {
    let application = locator.load_application(language)?;
    if !declares_language(&application, language) {
        warn!(
            "Translation file {:?} declares language {:?}, expected {}",
            locator.application_resource(language),
            application.raw_language(),
            language
        );
    }

    let system = locator.load_system(language)?;

    Ok(LocaleBundle {
        language,
        application: Arc::new(application),
        system: system.map(Arc::new),
    })
}

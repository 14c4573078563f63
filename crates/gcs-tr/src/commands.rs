//! Subcommand implementations.

use crate::cli::{CheckArgs, LookupArgs, NormalizeArgs, UntranslatedArgs};
use crate::error::CliResult;
use gcs_common::{single_line, truncate_string};
use gcs_config::Config;
use gcs_i18n::{Catalog, CatalogStats, Localizer, ResourceLocator, TranslationArgs};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Summary of one translation file.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// File that was checked.
    pub file: PathBuf,
    /// Declared `language` attribute.
    pub language: Option<String>,
    /// Declared `sourcelanguage` attribute.
    pub source_language: Option<String>,
    /// Declared format version.
    pub version: Option<String>,
    /// Entry counts.
    pub stats: CatalogStats,
    /// Distinct keys without a usable translation.
    pub untranslated: usize,
}

impl CheckReport {
    /// Build the report for `catalog` loaded from `file`.
    #[must_use]
    pub fn new(file: &Path, catalog: &Catalog) -> Self {
        Self {
            file: file.to_path_buf(),
            language: catalog.raw_language().map(str::to_string),
            source_language: catalog.source_language().map(str::to_string),
            version: catalog.version().map(str::to_string),
            stats: catalog.stats(),
            untranslated: catalog.untranslated().count(),
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "{}: language {}, format {}",
            self.file.display(),
            self.language.as_deref().unwrap_or("unspecified"),
            self.version.as_deref().unwrap_or("unspecified")
        )?;
        writeln!(out, "  contexts:     {}", self.stats.contexts)?;
        writeln!(out, "  messages:     {}", self.stats.total)?;
        writeln!(
            out,
            "  finished:     {} ({} empty)",
            self.stats.finished, self.stats.finished_empty
        )?;
        writeln!(out, "  unfinished:   {}", self.stats.unfinished)?;
        writeln!(out, "  vanished:     {}", self.stats.vanished)?;
        writeln!(out, "  obsolete:     {}", self.stats.obsolete)?;
        writeln!(out, "  untranslated: {}", self.untranslated)
    }
}

/// `check`: parse a file and print its report.
pub fn run_check<W: Write>(args: &CheckArgs, out: &mut W) -> CliResult<()> {
    let catalog = Catalog::load_file(&args.file)?;
    let report = CheckReport::new(&args.file, &catalog);

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        report.write_text(out)?;
    }

    Ok(())
}

/// `lookup`: resolve one display string.
pub fn run_lookup<W: Write>(args: &LookupArgs, config: &Config, out: &mut W) -> CliResult<()> {
    let arguments: TranslationArgs = args.args.iter().collect();
    let disambiguation = args.disambiguation.as_deref();

    let text = match &args.file {
        Some(path) => Catalog::load_file(path)?.lookup_disambiguated(
            &args.context,
            &args.source,
            disambiguation,
            Some(&arguments),
        ),
        None => open_localizer(config)?.bundle().lookup(
            &args.context,
            &args.source,
            disambiguation,
            Some(&arguments),
        ),
    };

    writeln!(out, "{text}")?;
    Ok(())
}

/// `untranslated`: one line per key lacking a usable translation.
pub fn run_untranslated<W: Write>(args: &UntranslatedArgs, out: &mut W) -> CliResult<()> {
    let catalog = Catalog::load_file(&args.file)?;

    let mut count = 0usize;
    for entry in catalog.untranslated() {
        count += 1;
        let source = single_line(&entry.source);
        let source = match args.max_chars {
            Some(max_chars) => truncate_string(&source, max_chars),
            None => source,
        };
        write!(out, "{}\t{}", entry.context, source)?;
        if let Some(disambiguation) = &entry.disambiguation {
            write!(out, "\t[{disambiguation}]")?;
        }
        writeln!(out)?;
    }

    info!("{} untranslated messages in {:?}", count, args.file);
    Ok(())
}

/// `normalize`: rewrite a file in canonical form.
pub fn run_normalize<W: Write>(args: &NormalizeArgs, out: &mut W) -> CliResult<()> {
    let catalog = Catalog::load_file(&args.file)?;

    match &args.output {
        Some(path) => catalog.save(path)?,
        None => out.write_all(catalog.to_ts_string()?.as_bytes())?,
    }

    Ok(())
}

/// Open the configured interface language.
pub fn open_localizer(config: &Config) -> CliResult<Localizer> {
    let localization = &config.localization;
    debug!(
        "Opening {} translations from {:?}",
        localization.language, localization.translations_dir
    );

    let locator = ResourceLocator::new(&localization.translations_dir)
        .with_system_translations(localization.system_translations);
    Ok(Localizer::open(locator, localization.language)?)
}

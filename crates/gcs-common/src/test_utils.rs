//! Test utilities and shared test helpers.
//!
//! This module provides common testing utilities and fixtures that can be
//! used across all crates in the workspace for unit and integration testing.

use std::path::{Path, PathBuf};
use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// No-op version when tracing-subscriber is not available.
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `content` to `dir/name`, creating parent directories, and return the path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// A small Russian translation document in Qt Linguist format.
///
/// Covers every translation status, a disambiguated pair, placeholders,
/// escaped markup and multi-location messages.
pub const SAMPLE_RU_TS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ru_RU">
<context>
    <name>BombingWidget</name>
    <message>
        <location filename="../UserInterface/BombingWidget.cpp" line="34"/>
        <source>Drop Bomb</source>
        <translation>Сбросить бомбу</translation>
    </message>
    <message>
        <location filename="../UserInterface/BombingWidget.cpp" line="41"/>
        <source>Confirm?</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Confirm?</source>
        <translation type="vanished">Подтвердить?</translation>
    </message>
    <message>
        <source>Target Cancel</source>
        <translation type="obsolete">Отмена цели</translation>
    </message>
</context>
<context>
    <name>CamSettingsPage</name>
    <message>
        <location filename="../UserInterface/Forms/CamSettingsPage.cpp" line="120"/>
        <location filename="../UserInterface/Forms/CamSettingsPage.cpp" line="164"/>
        <source>Camera %1</source>
        <translation>Камера %1</translation>
    </message>
    <message>
        <source>URL: %1:%2</source>
        <translation>Адрес: %1:%2</translation>
    </message>
    <message>
        <source>Size %1x%1</source>
        <translation>Размер %1x%1</translation>
    </message>
    <message>
        <source>Mode</source>
        <comment>color palette</comment>
        <translation>Палитра</translation>
    </message>
    <message>
        <source>Mode</source>
        <comment>display layout</comment>
        <translatorcomment>Режим отображения окна</translatorcomment>
        <translation>Раскладка</translation>
    </message>
    <message>
        <source>Do you want to delete marker template &apos;%1&apos;?</source>
        <translation>Вы хотите удалить шаблон маркера &apos;%1&apos;?</translation>
    </message>
</context>
</TS>
"#;

//! Integration tests for gcs-tr crate.
//!
//! Commands are run in-process against fixture files, with their output
//! captured in a buffer.

use gcs_common::test_utils::{create_temp_dir, init_test_logging, write_fixture, SAMPLE_RU_TS};
use gcs_common::InterfaceLanguage;
use gcs_config::Config;
use gcs_i18n::Catalog;
use gcs_tr::{run, Cli, CliError};
use std::path::Path;

const QTBASE_RU_TS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ru_RU">
<context>
    <name>QDialogButtonBox</name>
    <message>
        <source>Cancel</source>
        <translation>Отмена</translation>
    </message>
</context>
</TS>
"#;

fn run_args(args: &[&str], config: &Config) -> Result<String, CliError> {
    let argv = std::iter::once("gcs-tr").chain(args.iter().copied());
    let cli = <Cli as clap::Parser>::try_parse_from(argv).expect("arguments should parse");
    let mut out = Vec::new();
    run(&cli, config, &mut out)?;
    Ok(String::from_utf8(out).expect("output should be UTF-8"))
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temporary paths are UTF-8")
}

fn russian_config(dir: &Path, system_translations: bool) -> Config {
    let mut config = Config::default();
    config.localization.language = InterfaceLanguage::Russian;
    config.localization.translations_dir = dir.to_path_buf();
    config.localization.system_translations = system_translations;
    config
}

#[test]
fn test_check_text_report() {
    init_test_logging();
    let dir = create_temp_dir();
    let file = write_fixture(dir.path(), "ru.ts", SAMPLE_RU_TS);

    let output = run_args(&["check", path_arg(&file)], &Config::default()).unwrap();

    assert!(output.contains("language ru_RU, format 2.1"));
    assert!(output.contains("contexts:     2"));
    assert!(output.contains("messages:     10"));
    assert!(output.contains("finished:     7 (0 empty)"));
    assert!(output.contains("unfinished:   1"));
    assert!(output.contains("vanished:     1"));
    assert!(output.contains("obsolete:     1"));
    assert!(output.contains("untranslated: 1"));
}

#[test]
fn test_check_json_report() {
    let dir = create_temp_dir();
    let file = write_fixture(dir.path(), "ru.ts", SAMPLE_RU_TS);

    let output = run_args(&["check", "--json", path_arg(&file)], &Config::default()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(report["language"], "ru_RU");
    assert_eq!(report["version"], "2.1");
    assert!(report["source_language"].is_null());
    assert_eq!(report["stats"]["total"], 10);
    assert_eq!(report["stats"]["finished"], 7);
    assert_eq!(report["stats"]["vanished"], 1);
    assert_eq!(report["untranslated"], 1);
}

#[test]
fn test_check_malformed_file() {
    let dir = create_temp_dir();
    let file = write_fixture(
        dir.path(),
        "broken.ts",
        "<TS version=\"2.1\"><context><name>A</name><message><source>x</source>",
    );

    let result = run_args(&["check", path_arg(&file)], &Config::default());
    assert!(matches!(result, Err(CliError::Load(_))));
}

#[test]
fn test_check_missing_file() {
    let dir = create_temp_dir();
    let missing = dir.path().join("absent.ts");

    let result = run_args(&["check", path_arg(&missing)], &Config::default());
    assert!(matches!(result, Err(CliError::Load(_))));
}

#[test]
fn test_lookup_in_file() {
    let dir = create_temp_dir();
    let file = write_fixture(dir.path(), "ru.ts", SAMPLE_RU_TS);
    let file = path_arg(&file);
    let config = Config::default();

    let url = ["lookup", "--file", file, "CamSettingsPage", "URL: %1:%2", "localhost", "8080"];
    assert_eq!(run_args(&url, &config).unwrap(), "Адрес: localhost:8080\n");

    let mode = ["lookup", "-f", file, "-d", "display layout", "CamSettingsPage", "Mode"];
    assert_eq!(run_args(&mode, &config).unwrap(), "Раскладка\n");
    // Unfinished and vanished entries fall back to the source
    assert_eq!(
        run_args(&["lookup", "-f", file, "BombingWidget", "Confirm?"], &config).unwrap(),
        "Confirm?\n"
    );
    assert_eq!(
        run_args(&["lookup", "-f", file, "Nowhere", "Exit"], &config).unwrap(),
        "Exit\n"
    );
}

#[test]
fn test_lookup_through_configured_language() {
    let dir = create_temp_dir();
    write_fixture(dir.path(), "ru.ts", SAMPLE_RU_TS);
    write_fixture(dir.path(), "qtbase_ru.ts", QTBASE_RU_TS);

    let config = russian_config(dir.path(), true);
    assert_eq!(
        run_args(&["lookup", "CamSettingsPage", "Camera %1", "2"], &config).unwrap(),
        "Камера 2\n"
    );
    assert_eq!(
        run_args(&["lookup", "QDialogButtonBox", "Cancel"], &config).unwrap(),
        "Отмена\n"
    );

    let config = russian_config(dir.path(), false);
    assert_eq!(
        run_args(&["lookup", "QDialogButtonBox", "Cancel"], &config).unwrap(),
        "Cancel\n"
    );
}

#[test]
fn test_lookup_without_translations_echoes_source() {
    let dir = create_temp_dir();
    let config = russian_config(&dir.path().join("missing"), true);

    assert_eq!(
        run_args(&["lookup", "CamSettingsPage", "Camera %1", "3"], &config).unwrap(),
        "Camera 3\n"
    );
}

#[test]
fn test_untranslated_listing() {
    let dir = create_temp_dir();
    let file = write_fixture(dir.path(), "ru.ts", SAMPLE_RU_TS);

    let output = run_args(&["untranslated", path_arg(&file)], &Config::default()).unwrap();
    assert_eq!(output, "BombingWidget\tConfirm?\n");
}

#[test]
fn test_untranslated_listing_flattens_and_shortens_sources() {
    let dir = create_temp_dir();
    let file = write_fixture(
        dir.path(),
        "by.ts",
        r#"<TS version="2.1" language="be_BY">
<context>
    <name>JoystickSettingsPage</name>
    <message>
        <source>Axis calibration:
move every stick to its limits</source>
        <comment>joystick</comment>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>"#,
    );

    let output = run_args(&["untranslated", path_arg(&file)], &Config::default()).unwrap();
    assert_eq!(
        output,
        "JoystickSettingsPage\tAxis calibration:⏎move every stick to its limits\t[joystick]\n"
    );

    let output = run_args(
        &["untranslated", "--max-chars", "12", path_arg(&file)],
        &Config::default(),
    )
    .unwrap();
    assert_eq!(output, "JoystickSettingsPage\tAxis cali...\t[joystick]\n");
    let output = run_args(
        &["untranslated", "--max-chars", "1", path_arg(&file)],
        &Config::default(),
    )
    .unwrap();
    assert_eq!(output, "JoystickSettingsPage\tA\t[joystick]\n");
}

#[test]
fn test_normalize_to_file_preserves_lookups() {
    let dir = create_temp_dir();
    let file = write_fixture(dir.path(), "ru.ts", SAMPLE_RU_TS);
    let output = dir.path().join("normalized.ts");

    let printed = run_args(
        &["normalize", path_arg(&file), "-o", path_arg(&output)],
        &Config::default(),
    )
    .unwrap();
    assert!(printed.is_empty());

    let original = Catalog::load(SAMPLE_RU_TS).unwrap();
    let normalized = Catalog::load_file(&output).unwrap();
    assert_eq!(normalized.entries(), original.entries());
    assert_eq!(normalized.stats(), original.stats());
    assert_eq!(
        normalized.translate("CamSettingsPage", "Size %1x%1"),
        "Размер %1x%1"
    );
}

#[test]
fn test_normalize_to_stdout_is_idempotent() {
    let dir = create_temp_dir();
    let file = write_fixture(dir.path(), "ru.ts", SAMPLE_RU_TS);

    let first = run_args(&["normalize", path_arg(&file)], &Config::default()).unwrap();
    assert!(first.contains("<!DOCTYPE TS>"));
    assert!(first.contains("language=\"ru_RU\""));

    let again = write_fixture(dir.path(), "again.ts", &first);
    let second = run_args(&["normalize", path_arg(&again)], &Config::default()).unwrap();
    assert_eq!(first, second);
}

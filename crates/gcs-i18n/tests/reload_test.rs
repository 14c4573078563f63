//! Reload atomicity under concurrent readers.

use gcs_common::test_utils::{create_temp_dir, write_fixture};
use gcs_i18n::{Catalog, InterfaceLanguage, Localizer, ResourceLocator, TranslationEntry, Translator};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

const READERS: usize = 4;
const GENERATIONS: usize = 200;
const KEYS: usize = 16;

/// Every entry of generation `n` translates to `gen-n`.
fn generation(n: usize) -> Catalog {
    let entries = (0..KEYS)
        .map(|k| TranslationEntry::new("Ctx", format!("key {k}"), format!("gen-{n}")))
        .collect();
    Catalog::from_entries(entries)
}

#[test]
fn test_readers_never_observe_a_mixed_catalog() {
    let translator = Arc::new(Translator::new(generation(0)));
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let translator = Arc::clone(&translator);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut observed = 0usize;
                loop {
                    let finished = done.load(Ordering::Acquire);
                    let snapshot = translator.catalog();
                    let first = snapshot.translate("Ctx", "key 0").to_string();
                    for k in 1..KEYS {
                        assert_eq!(snapshot.translate("Ctx", &format!("key {k}")), first);
                    }
                    assert_eq!(snapshot.len(), KEYS);

                    let single = translator.lookup("Ctx", "key 3", None);
                    assert!(single.starts_with("gen-"));
                    observed += 1;
                    if finished {
                        break observed;
                    }
                }
            })
        })
        .collect();

    for n in 1..=GENERATIONS {
        translator.install(generation(n));
    }
    done.store(true, Ordering::Release);

    for reader in readers {
        let observed = reader.join().expect("reader panicked");
        assert!(observed > 0);
    }
    assert_eq!(
        translator.lookup("Ctx", "key 0", None),
        format!("gen-{GENERATIONS}")
    );
}

#[test]
fn test_failed_reloads_interleaved_with_readers() {
    let translator = Arc::new(Translator::new(generation(1)));

    let reader = {
        let translator = Arc::clone(&translator);
        thread::spawn(move || {
            for _ in 0..1_000 {
                assert_eq!(translator.lookup("Ctx", "key 5", None), "gen-1");
            }
        })
    };

    for _ in 0..50 {
        assert!(translator.reload("<TS><context><name>Ctx</name>").is_err());
    }

    reader.join().expect("reader panicked");
}

#[test]
fn test_language_switch_swaps_both_catalogs_together() {
    let dir = create_temp_dir();
    for (file, language, text) in [
        ("ru.ts", "ru_RU", "ru-app"),
        ("qtbase_ru.ts", "ru_RU", "ru-sys"),
        ("ar.ts", "ar", "ar-app"),
        ("qt_ar.ts", "ar", "ar-sys"),
    ] {
        let context = if file.starts_with("qt") { "QDialog" } else { "MainWindow" };
        write_fixture(
            dir.path(),
            file,
            &format!(
                r#"<TS version="2.1" language="{language}"><context><name>{context}</name>
                    <message><source>Label</source><translation>{text}</translation></message>
                </context></TS>"#
            ),
        );
    }

    let localizer = Arc::new(Localizer::new(
        ResourceLocator::new(dir.path()),
        InterfaceLanguage::Russian,
    ));
    let done = Arc::new(AtomicBool::new(false));

    let reader = {
        let localizer = Arc::clone(&localizer);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            while !done.load(Ordering::Acquire) {
                let bundle = localizer.bundle();
                let app = bundle.lookup("MainWindow", "Label", None, None);
                let sys = bundle.lookup("QDialog", "Label", None, None);
                let prefix = bundle.language.code();
                assert_eq!(app, format!("{prefix}-app"));
                assert_eq!(sys, format!("{prefix}-sys"));
            }
        })
    };

    for i in 0..40 {
        let language = if i % 2 == 0 {
            InterfaceLanguage::Arabic
        } else {
            InterfaceLanguage::Russian
        };
        localizer.switch_language(language).unwrap();
    }
    done.store(true, Ordering::Release);
    reader.join().expect("reader panicked");

    assert_eq!(localizer.language(), InterfaceLanguage::Russian);
}

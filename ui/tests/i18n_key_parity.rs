//! Locale completeness lint.
//!
//! Walks `ui/i18n/` and checks every locale's `jobpulse-ui.ftl` against the
//! en-US fallback: key sets must match exactly, so a locale can neither miss
//! a string nor keep leftovers from removed features, and no bundle may
//! define a key twice.
//!
//! New locales need no registration here; dropping a folder under `i18n/`
//! with a translated `jobpulse-ui.ftl` is enough.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

const DOMAIN_FILE: &str = "jobpulse-ui.ftl";
const FALLBACK: &str = "en-US";

fn i18n_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("i18n")
}

fn locales() -> Vec<String> {
    let mut locales: Vec<String> = fs::read_dir(i18n_root())
        .expect("list i18n directory")
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let is_dir = entry.file_type().ok()?.is_dir();
            is_dir.then(|| entry.file_name().to_string_lossy().into_owned())
        })
        .collect();
    locales.sort();
    locales
}

fn read_bundle(locale: &str) -> String {
    let path = i18n_root().join(locale).join(DOMAIN_FILE);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("read {}: {err}", path.display()))
}

/// Message keys of one Fluent source. Comments, blank lines, attribute
/// lines (leading `.`) and indented continuations are skipped; a key seen
/// twice fails the calling test immediately.
fn message_keys(src: &str, origin: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in src.lines() {
        let line = line.trim_end();
        if line.is_empty()
            || line.starts_with('#')
            || line.starts_with('.')
            || line.starts_with(char::is_whitespace)
        {
            continue;
        }
        if let Some((key, _)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() || key.contains(char::is_whitespace) {
                continue;
            }
            assert!(
                keys.insert(key.to_string()),
                "duplicate key `{key}` in {origin}/{DOMAIN_FILE}"
            );
        }
    }
    keys
}

#[test]
fn every_locale_ships_the_domain_bundle() {
    let locales = locales();
    assert!(
        locales.iter().any(|l| l == FALLBACK),
        "fallback locale {FALLBACK} is missing from i18n/"
    );
    for locale in &locales {
        let path = i18n_root().join(locale).join(DOMAIN_FILE);
        assert!(
            path.is_file(),
            "locale {locale} has no {DOMAIN_FILE} (found dir without bundle)"
        );
    }
}

#[test]
fn every_locale_matches_the_fallback_key_set() {
    let fallback_keys = message_keys(&read_bundle(FALLBACK), FALLBACK);
    assert!(
        !fallback_keys.is_empty(),
        "fallback bundle defines no messages"
    );

    for locale in locales() {
        if locale == FALLBACK {
            continue;
        }
        let keys = message_keys(&read_bundle(&locale), &locale);

        let missing: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
        let extra: Vec<_> = keys.difference(&fallback_keys).cloned().collect();
        assert!(
            missing.is_empty() && extra.is_empty(),
            "locale {locale} diverges from {FALLBACK}\n  missing: {missing:?}\n  extra: {extra:?}"
        );
    }
}

//! Runtime localization for `jobpulse-ui`.
//!
//! Fluent bundles live under `i18n/<locale>/jobpulse-ui.ftl` and are embedded
//! into the binary with `rust-embed`; `i18n-embed` picks the active locale
//! and `fl!` gives compile-time checked lookups against the en-US fallback.
//!
//! Call [`init`] once at app start (idempotent), then use the [`t!`] macro
//! anywhere in the crate:
//!
//! ```ignore
//! ui::i18n::init();
//! let title = t!("dashboard-title");
//! ```
//!
//! Adding a locale is file-only: copy `i18n/en-US/jobpulse-ui.ftl` to
//! `i18n/<lang-id>/jobpulse-ui.ftl`, translate the values, keep the IDs. The
//! parity test under `ui/tests/` catches missing or leftover keys.
//!
//! The language requester differs per target: the OS locale list natively,
//! `navigator.languages` on wasm. Bundles are force-embedded on wasm even in
//! debug (`debug-embed`), since there is no filesystem to fall back to.

use std::collections::BTreeSet;
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Short-form translation lookup.
///
/// ```ignore
/// t!("dashboard-title")
/// t!("greeting", name = "Sam")
/// ```
///
/// Expands to `fl!` against the shared [`LANGUAGE_LOADER`], so unknown keys
/// fail the build.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LANGUAGE_LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LANGUAGE_LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain: the FTL filename stem, which `fl!` also derives from the
/// package name. Pinned here so the loader and the macro cannot drift.
const DOMAIN: &str = "jobpulse-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Shared loader behind every `t!`/`fl!` call site.
pub static LANGUAGE_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Selects the user's requested languages into the loader. Safe to call from
/// every view; only the first call does work. Selection failure is not
/// fatal, the loader keeps serving the en-US fallback.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, &requested) {
            eprintln!("[i18n] language selection failed ({err}); staying on fallback");
        }
    });
}

/// Switches the active language at runtime.
///
/// An unparseable tag is ignored and reported as `Ok`: the picker only
/// offers embedded locales, so a bad tag means a stale caller, not a user
/// error worth surfacing.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded locale tags, sorted, for the header's language picker.
pub fn available_languages() -> Vec<String> {
    let tags: BTreeSet<String> = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_owned))
        .collect();
    tags.into_iter().collect()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn embedded_locales_include_the_fallback() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"), "got {langs:?}");
    }

    #[test]
    fn lookup_resolves_after_init() {
        init();
        assert_eq!(fl!(&*LANGUAGE_LOADER, "dashboard-error-title"), "Error");
    }

    #[test]
    fn unavailable_language_leaves_lookups_unchanged() {
        init();
        let before = fl!(&*LANGUAGE_LOADER, "dashboard-title");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LANGUAGE_LOADER, "dashboard-title");
        assert_eq!(before, after);
    }
}

use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

/// Page masthead: brand mark, localized title and tagline, locale switcher.
///
/// The language selector triggers a re-render via a local signal; every
/// render pulls fresh localized strings via `fl!`. Platforms may provide a
/// global `Signal<String>` language code through context to remount their
/// subtree on switch (the desktop launcher does).
#[component]
pub fn PageHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // The launcher may provide a global language code signal through context.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Reading it here makes the header re-render whenever it changes.
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        if let Some(code) = lang_code_ctx.as_ref() {
            println!("[i18n] PageHeader render lang={}", code());
        } else {
            println!("[i18n] PageHeader render lang=<none>");
        }
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            // Let the launcher remount its subtree, if it wired the signal.
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let tagline = t!("tagline");

    rsx! {
        header { class: "page-header",
            // Hidden marker ensures the header re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }

            div { class: "page-header__bar",
                div { class: "page-header__brand",
                    span { class: "page-header__brand-spark", aria_hidden: "true" }
                    span { class: "page-header__brand-mark", "JobPulse" }
                }

                if show_switcher {
                    div { class: "page-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("header-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }

            h1 { class: "page-header__title", {t!("dashboard-title")} }
            p { class: "page-header__tagline", "{tagline}" }
        }
    }
}

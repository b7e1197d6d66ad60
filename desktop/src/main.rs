#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::PageHeader;
use ui::views::Dashboard;

// Shared theme, compiled in; the desktop bundle ships no separate assets.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("JobPulse – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

// Featureless builds (plain `cargo check`/`cargo test`) still need a main;
// `dx serve --platform desktop` enables the feature above.
#[cfg(not(any(feature = "desktop", feature = "server")))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code, written by PageHeader through context when the
    // locale select changes.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Some window managers ignore the builder's maximize; ask again once
    // the window exists.
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keying the page by language forces a full remount on switch; the
        // hidden marker keeps the dependency on lang_code explicit.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            div { class: "page-shell",
                PageHeader {}
                Dashboard {}
            }
        }
    }
}

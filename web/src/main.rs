use dioxus::prelude::*;

use ui::components::PageHeader;
use ui::views::Dashboard;

const FAVICON: Asset = asset!("/assets/favicon.svg");

// Inline the shared theme (ui/assets/theme/main.css) so the page styles
// correctly even when served without the dx asset pipeline.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code. PageHeader updates it via context when
    // the locale select changes.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Style { "{MAIN_CSS_INLINE}" }

        // Key the page by current language to force a full remount on change.
        // The hidden marker keeps an explicit reactive dependency.
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

use dioxus::prelude::*;

use ui::components::PageHeader;
use ui::views::Dashboard;

// Mobile webviews load no external stylesheet; embed the shared theme.
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

    // Global reactive language code, updated by PageHeader via context.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

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

use dioxus::prelude::*;

use crate::core::charts::RankedEntry;
use crate::core::format;
use crate::t;

/// Card listing the top rows of one ranking (companies, cities, keywords).
///
/// The rows arrive pre-shaped and pre-limited; this component only lays them
/// out. Counts are shown exactly as reported.
#[component]
pub fn RankedListPanel(title: String, icon: Element, entries: Vec<RankedEntry>) -> Element {
    let rows: Vec<(String, String)> = entries
        .iter()
        .map(|entry| (entry.label.clone(), format::format_count(entry.count)))
        .collect();

    rsx! {
        section { class: "ranked-panel",
            div { class: "ranked-panel__header",
                span { class: "ranked-panel__icon", {icon} }
                h2 { class: "ranked-panel__title", "{title}" }
            }

            if rows.is_empty() {
                p { class: "ranked-panel__placeholder", {t!("panel-empty")} }
            } else {
                ul { class: "ranked-panel__items",
                    for (label, count) in rows.iter() {
                        li { key: "{label}", class: "ranked-panel__item",
                            span { class: "ranked-panel__label", "{label}" }
                            span { class: "ranked-panel__count", "{count}" }
                        }
                    }
                }
            }
        }
    }
}

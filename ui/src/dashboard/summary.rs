use dioxus::prelude::*;

use api::AnalyticsReport;

use crate::components::icons::{BriefcaseIcon, BuildingIcon, ChartBarsIcon};
use crate::core::{charts, format};
use crate::t;

/// The three headline cards above the charts.
///
/// The values are full-sequence totals ("how much did the crawl analyze"),
/// not the top-ten/top-five prefixes the widgets below display.
#[component]
pub fn SummaryCards(report: AnalyticsReport) -> Element {
    let counts = charts::summary_counts(&report);

    rsx! {
        div { class: "summary-cards",
            SummaryCard {
                label: t!("summary-skills-label"),
                value: format::format_count(counts.skills_analyzed as u64),
                accent: "primary",
                icon: rsx! { ChartBarsIcon {} },
            }
            SummaryCard {
                label: t!("summary-job-types-label"),
                value: format::format_count(counts.job_types_available as u64),
                accent: "secondary",
                icon: rsx! { BriefcaseIcon {} },
            }
            SummaryCard {
                label: t!("summary-companies-label"),
                value: format::format_count(counts.companies_hiring as u64),
                accent: "tertiary",
                icon: rsx! { BuildingIcon {} },
            }
        }
    }
}

#[component]
fn SummaryCard(label: String, value: String, accent: &'static str, icon: Element) -> Element {
    rsx! {
        div { class: "summary-card summary-card--{accent}",
            span { class: "summary-card__icon", {icon} }
            div { class: "summary-card__body",
                span { class: "summary-card__label", "{label}" }
                strong { class: "summary-card__value", "{value}" }
            }
        }
    }
}

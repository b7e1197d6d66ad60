use dioxus::prelude::*;

use api::AnalyticsReport;

use crate::components::icons;
use crate::core::charts;
use crate::dashboard::{
    DashboardPhase, JobTypesChartCard, RankedListPanel, SkillsChartCard, SummaryCards,
};
use crate::t;

#[cfg(debug_assertions)]
fn log_dashboard_render(phase: &DashboardPhase) {
    // Lightweight render trace for diagnosing fetch/i18n refresh issues.
    let tag = match phase {
        DashboardPhase::Loading => "loading",
        DashboardPhase::Ready(_) => "ready",
        DashboardPhase::Error(_) => "error",
    };
    println!("[dashboard] render phase={tag}");
}

/// The whole page below the header: one fetch, then cards, charts and
/// panels, or the spinner / error card the fetch settled into.
#[component]
pub fn Dashboard() -> Element {
    let mut phase = use_signal(DashboardPhase::default);

    // Exactly one request per page load. The future reads no reactive state,
    // so it never restarts; success and failure are both terminal.
    use_future(move || async move {
        let outcome = api::fetch_analytics().await;
        phase.set(DashboardPhase::from_fetch(outcome));
    });

    let current = phase();

    #[cfg(debug_assertions)]
    log_dashboard_render(&current);

    match current {
        DashboardPhase::Loading => render_loading(),
        DashboardPhase::Error(message) => render_error(message),
        DashboardPhase::Ready(report) => render_ready(report),
    }
}

fn render_loading() -> Element {
    rsx! {
        div { class: "dashboard-status",
            div { class: "dashboard-status__spinner", aria_hidden: "true" }
            span { class: "visually-hidden", {t!("dashboard-loading")} }
        }
    }
}

fn render_error(message: String) -> Element {
    rsx! {
        div { class: "dashboard-status",
            div { class: "dashboard-status__error",
                h3 { class: "dashboard-status__error-title", {t!("dashboard-error-title")} }
                p { class: "dashboard-status__error-message", "{message}" }
            }
        }
    }
}

fn render_ready(report: AnalyticsReport) -> Element {
    rsx! {
        section { class: "dashboard",
            SummaryCards { report: report.clone() }

            div { class: "dashboard__charts",
                SkillsChartCard { report: report.clone() }
                JobTypesChartCard { report: report.clone() }
            }

            div { class: "dashboard__panels",
                RankedListPanel {
                    title: t!("panel-companies-title"),
                    icon: rsx! { icons::BuildingIcon {} },
                    entries: charts::company_rankings(&report),
                }
                RankedListPanel {
                    title: t!("panel-cities-title"),
                    icon: rsx! { icons::MapPinIcon {} },
                    entries: charts::city_rankings(&report),
                }
                RankedListPanel {
                    title: t!("panel-keywords-title"),
                    icon: rsx! { icons::SpeechIcon {} },
                    entries: charts::keyword_rankings(&report),
                }
            }
        }
    }
}

use dioxus::prelude::*;

use api::AnalyticsReport;

use crate::core::charts::{self, BarChart, DoughnutChart};
use crate::core::{format, geometry, palette};
use crate::t;

// Bar chart canvas, in SVG user units.
const VIEW_W: f32 = 640.0;
const VIEW_H: f32 = 320.0;
const M_LEFT: f32 = 48.0;
const M_RIGHT: f32 = 16.0;
const M_TOP: f32 = 16.0;
const M_BOTTOM: f32 = 72.0;
const PLOT_W: f32 = VIEW_W - M_LEFT - M_RIGHT;
const PLOT_H: f32 = VIEW_H - M_TOP - M_BOTTOM;
const PLOT_RIGHT: f32 = VIEW_W - M_RIGHT;
const TICK_LABEL_X: f32 = M_LEFT - 8.0;
const TICK_TARGET: usize = 4;

// Doughnut canvas.
const RING_VIEW: f32 = 320.0;
const RING_CX: f32 = 160.0;
const RING_CY: f32 = 160.0;
const RING_OUTER: f32 = 140.0;
const RING_INNER: f32 = 84.0;

/// Bar chart card: the ten most in-demand skills.
#[component]
pub fn SkillsChartCard(report: AnalyticsReport) -> Element {
    let chart = charts::skills_chart(&report);

    rsx! {
        section { class: "chart-card chart-card--skills",
            h2 { class: "chart-card__title", {t!("chart-skills-title")} }
            if chart.values.is_empty() {
                p { class: "chart-card__placeholder", {t!("chart-skills-empty")} }
            } else {
                {render_bar_chart(&chart)}
            }
        }
    }
}

/// Doughnut card: the whole job-type distribution, never truncated.
#[component]
pub fn JobTypesChartCard(report: AnalyticsReport) -> Element {
    let chart = charts::job_type_chart(&report);

    rsx! {
        section { class: "chart-card chart-card--job-types",
            h2 { class: "chart-card__title", {t!("chart-job-types-title")} }
            if chart.total() == 0 {
                p { class: "chart-card__placeholder", {t!("chart-job-types-empty")} }
            } else {
                {render_doughnut(&chart)}
            }
        }
    }
}

struct BarSlot {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    label_x: f32,
    label_y: f32,
}

struct Gridline {
    value: u64,
    y: f32,
    label_y: f32,
}

fn render_bar_chart(chart: &BarChart) -> Element {
    let max = chart.values.iter().copied().max().unwrap_or(0);
    let ticks = geometry::nice_ticks(max, TICK_TARGET);
    let scale_max = ticks.last().copied().unwrap_or(0);

    let slots: Vec<BarSlot> = geometry::bar_rects(&chart.values, scale_max, PLOT_W, PLOT_H)
        .into_iter()
        .zip(chart.labels.iter())
        .map(|(rect, label)| BarSlot {
            x: round1(M_LEFT + rect.x),
            y: round1(M_TOP + rect.y),
            width: round1(rect.width),
            height: round1(rect.height),
            label: label.clone(),
            label_x: round1(M_LEFT + rect.x + rect.width / 2.0),
            label_y: round1(M_TOP + PLOT_H + 16.0),
        })
        .collect();

    let gridlines: Vec<Gridline> = ticks
        .iter()
        .map(|&value| {
            let y = if scale_max == 0 {
                M_TOP + PLOT_H
            } else {
                M_TOP + PLOT_H * (1.0 - value as f32 / scale_max as f32)
            };
            Gridline {
                value,
                y: round1(y),
                label_y: round1(y + 4.0),
            }
        })
        .collect();

    let bar_fill = palette::BAR_FILL.css();
    let bar_border = palette::BAR_BORDER.css();

    rsx! {
        svg {
            class: "skills-chart",
            role: "img",
            view_box: "0 0 {VIEW_W} {VIEW_H}",

            for gridline in gridlines.iter() {
                line {
                    class: "skills-chart__gridline",
                    x1: "{M_LEFT}",
                    y1: "{gridline.y}",
                    x2: "{PLOT_RIGHT}",
                    y2: "{gridline.y}",
                }
                text {
                    class: "skills-chart__tick-label",
                    x: "{TICK_LABEL_X}",
                    y: "{gridline.label_y}",
                    text_anchor: "end",
                    font_size: "12",
                    "{gridline.value}"
                }
            }

            for slot in slots.iter() {
                rect {
                    class: "skills-chart__bar",
                    x: "{slot.x}",
                    y: "{slot.y}",
                    width: "{slot.width}",
                    height: "{slot.height}",
                    fill: "{bar_fill}",
                    stroke: "{bar_border}",
                    stroke_width: "1",
                }
                text {
                    class: "skills-chart__bar-label",
                    transform: "translate({slot.label_x}, {slot.label_y}) rotate(-38)",
                    text_anchor: "end",
                    font_size: "12",
                    "{slot.label}"
                }
            }
        }
    }
}

struct SliceView {
    path: String,
    fill: String,
    border: String,
}

struct LegendRow {
    label: String,
    count: String,
    share: String,
    swatch_style: String,
}

fn render_doughnut(chart: &DoughnutChart) -> Element {
    let total = chart.total();

    let slices: Vec<SliceView> = geometry::doughnut_segments(
        &chart.values,
        RING_CX,
        RING_CY,
        RING_OUTER,
        RING_INNER,
    )
    .into_iter()
    .map(|segment| {
        let color = chart.colors[segment.index];
        SliceView {
            path: segment.path,
            fill: color.fill.css(),
            border: color.border.css(),
        }
    })
    .collect();

    // The legend lists every job type, zero counts included; only the ring
    // skips empty segments.
    let legend: Vec<LegendRow> = chart
        .labels
        .iter()
        .zip(chart.values.iter())
        .enumerate()
        .map(|(i, (label, &value))| {
            let color = chart.colors[i];
            let fraction = if total == 0 {
                0.0
            } else {
                value as f32 / total as f32
            };
            LegendRow {
                label: label.clone(),
                count: format::format_count(value),
                share: format::format_share(fraction),
                swatch_style: format!(
                    "background-color: {}; border-color: {};",
                    color.fill.css(),
                    color.border.css()
                ),
            }
        })
        .collect();

    rsx! {
        div { class: "job-types-chart",
            svg {
                class: "job-types-chart__ring",
                role: "img",
                view_box: "0 0 {RING_VIEW} {RING_VIEW}",
                for slice in slices.iter() {
                    path {
                        class: "job-types-chart__segment",
                        d: "{slice.path}",
                        fill: "{slice.fill}",
                        stroke: "{slice.border}",
                        stroke_width: "1",
                    }
                }
            }
            ul { class: "job-types-chart__legend",
                for row in legend.iter() {
                    li { key: "{row.label}", class: "job-types-chart__legend-row",
                        span {
                            class: "job-types-chart__legend-swatch",
                            style: "{row.swatch_style}",
                        }
                        span { class: "job-types-chart__legend-label", "{row.label}" }
                        span { class: "job-types-chart__legend-count", "{row.count}" }
                        span { class: "job-types-chart__legend-share", "{row.share}" }
                    }
                }
            }
        }
    }
}

fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

//! Chart-ready projections over the analytics report.
//!
//! Pure functions from [`AnalyticsReport`] to the exact shapes the cards
//! render. They are recomputed on every render and carry no state, so the
//! same report always produces the same dashboard.

use api::AnalyticsReport;

use crate::core::palette::{self, SegmentColor};

/// How many skills the bar chart shows.
pub const SKILLS_CHART_LIMIT: usize = 10;

/// How many rows each ranked panel shows.
pub const RANKED_PANEL_LIMIT: usize = 5;

/// Labels and values for a single-series bar chart, index-aligned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarChart {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

/// Labels, values and per-segment colors for a doughnut, index-aligned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DoughnutChart {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub colors: Vec<SegmentColor>,
}

impl DoughnutChart {
    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }
}

/// One row of a ranked list panel.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub label: String,
    pub count: u64,
}

/// Headline totals for the summary cards.
///
/// These count everything the report analyzed, not what the widgets below
/// happen to display: a report with 40 ranked skills shows 40 here while the
/// bar chart still draws only its top ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryCounts {
    pub skills_analyzed: usize,
    pub job_types_available: usize,
    pub companies_hiring: usize,
}

/// The ten most in-demand skills, in report order.
pub fn skills_chart(report: &AnalyticsReport) -> BarChart {
    let top = report.top_skills.iter().take(SKILLS_CHART_LIMIT);
    BarChart {
        labels: top.clone().map(|s| s.skill.clone()).collect(),
        values: top.map(|s| s.count).collect(),
    }
}

/// Every job type in the report, never truncated, one color per segment.
pub fn job_type_chart(report: &AnalyticsReport) -> DoughnutChart {
    DoughnutChart {
        labels: report.job_types.iter().map(|t| t.job_type.clone()).collect(),
        values: report.job_types.iter().map(|t| t.count).collect(),
        colors: (0..report.job_types.len())
            .map(palette::segment_color)
            .collect(),
    }
}

/// Full-sequence lengths for the summary cards.
pub fn summary_counts(report: &AnalyticsReport) -> SummaryCounts {
    SummaryCounts {
        skills_analyzed: report.top_skills.len(),
        job_types_available: report.job_types.len(),
        companies_hiring: report.top_companies.len(),
    }
}

/// The five most active companies, in report order.
pub fn company_rankings(report: &AnalyticsReport) -> Vec<RankedEntry> {
    report
        .top_companies
        .iter()
        .take(RANKED_PANEL_LIMIT)
        .map(|c| RankedEntry {
            label: c.company.clone(),
            count: c.count,
        })
        .collect()
}

/// The five most crawled search cities, in report order.
pub fn city_rankings(report: &AnalyticsReport) -> Vec<RankedEntry> {
    report
        .top_search_cities
        .iter()
        .take(RANKED_PANEL_LIMIT)
        .map(|c| RankedEntry {
            label: c.city.clone(),
            count: c.count,
        })
        .collect()
}

/// The five most recurring summary words, in report order.
pub fn keyword_rankings(report: &AnalyticsReport) -> Vec<RankedEntry> {
    report
        .top_summary_words
        .iter()
        .take(RANKED_PANEL_LIMIT)
        .map(|w| RankedEntry {
            label: w.word.clone(),
            count: w.count,
        })
        .collect()
}

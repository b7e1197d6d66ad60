mod summary;
pub use summary::SummaryCards;

mod charts;
pub use charts::{JobTypesChartCard, SkillsChartCard};

mod panels;
pub use panels::RankedListPanel;

use api::{AnalyticsReport, FetchError};

/// Where the page is in its one-fetch lifecycle.
///
/// The page mounts in `Loading`, settles into exactly one of `Ready` or
/// `Error`, and stays there; there is no retry and no partial dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardPhase {
    #[default]
    Loading,
    Ready(AnalyticsReport),
    Error(String),
}

impl DashboardPhase {
    /// Maps a settled fetch onto its terminal phase. Failures carry the
    /// client's message verbatim; that exact text is what the error card
    /// shows.
    pub fn from_fetch(outcome: Result<AnalyticsReport, FetchError>) -> Self {
        match outcome {
            Ok(report) => Self::Ready(report),
            Err(err) => Self::Error(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{SkillCount, StatusCode};
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_loading() {
        assert!(DashboardPhase::default().is_loading());
    }

    #[test]
    fn successful_fetch_becomes_ready_with_the_report() {
        let report = AnalyticsReport {
            top_skills: vec![SkillCount {
                skill: "Go".into(),
                count: 5,
            }],
            ..Default::default()
        };

        let phase = DashboardPhase::from_fetch(Ok(report.clone()));
        assert_eq!(phase, DashboardPhase::Ready(report));
    }

    #[test]
    fn failed_fetch_becomes_error_with_a_readable_message() {
        let err = FetchError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        let expected = err.to_string();

        let phase = DashboardPhase::from_fetch(Err(err));
        match phase {
            DashboardPhase::Error(message) => {
                assert!(!message.is_empty());
                assert_eq!(message, expected);
                assert!(message.contains("500"));
            }
            other => panic!("expected Error phase, got {other:?}"),
        }
    }
}

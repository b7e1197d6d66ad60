//! Wire model for the aggregate analytics report.
//!
//! The aggregation service computes these rankings offline and serves the
//! whole report as one JSON document. The shape is fixed: six sequences,
//! each already sorted by relevance upstream, each entry a label plus an
//! occurrence count. The dashboard treats a fetched report as an immutable
//! snapshot; a later fetch replaces it wholesale.
//!
//! Decoding is strict about shape and lenient about extras: a missing
//! sequence or a negative count fails the decode, unknown fields are
//! ignored.

use serde::{Deserialize, Serialize};

/// One skill and how many postings mention it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: u64,
}

/// One seniority level and its posting count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelCount {
    pub level: String,
    pub count: u64,
}

/// One job type (remote, hybrid, ...) and its posting count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JobTypeCount {
    pub job_type: String,
    pub count: u64,
}

/// One company and how many of the crawled postings it published.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyCount {
    pub company: String,
    pub count: u64,
}

/// One search city and how often it was crawled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CityCount {
    pub city: String,
    pub count: u64,
}

/// One recurring posting-summary word and its frequency.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Everything the dashboard shows, in one document.
///
/// Sequence order is the upstream ranking and is preserved end to end; the
/// dashboard only ever takes prefixes (top 10 skills, top 5 per list) or the
/// whole sequence (job types), never reorders.
///
/// `job_levels` rides along in the payload but has no widget yet; it is
/// decoded so a report that carries it round-trips intact.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub top_skills: Vec<SkillCount>,
    pub job_levels: Vec<LevelCount>,
    pub job_types: Vec<JobTypeCount>,
    pub top_companies: Vec<CompanyCount>,
    pub top_search_cities: Vec<CityCount>,
    pub top_summary_words: Vec<WordCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal_body() -> &'static str {
        r#"{
            "top_skills": [{ "skill": "Go", "count": 5 }],
            "job_levels": [],
            "job_types": [{ "job_type": "Remote", "count": 3 }],
            "top_companies": [],
            "top_search_cities": [],
            "top_summary_words": []
        }"#
    }

    #[test]
    fn decodes_minimal_report() {
        let report: AnalyticsReport = serde_json::from_str(minimal_body()).unwrap();

        assert_eq!(
            report.top_skills,
            vec![SkillCount {
                skill: "Go".into(),
                count: 5,
            }]
        );
        assert_eq!(
            report.job_types,
            vec![JobTypeCount {
                job_type: "Remote".into(),
                count: 3,
            }]
        );
        assert!(report.job_levels.is_empty());
        assert!(report.top_companies.is_empty());
        assert!(report.top_search_cities.is_empty());
        assert!(report.top_summary_words.is_empty());
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"{
            "top_skills": [],
            "job_levels": [],
            "job_types": [],
            "top_companies": [],
            "top_search_cities": [],
            "top_summary_words": [],
            "generated_at": "2024-05-01T00:00:00Z"
        }"#;

        let report: AnalyticsReport = serde_json::from_str(body).unwrap();
        assert_eq!(report, AnalyticsReport::default());
    }

    #[test]
    fn rejects_missing_sequence() {
        // No top_summary_words: the shape is fixed, absence is not empty.
        let body = r#"{
            "top_skills": [],
            "job_levels": [],
            "job_types": [],
            "top_companies": [],
            "top_search_cities": []
        }"#;

        assert!(serde_json::from_str::<AnalyticsReport>(body).is_err());
    }

    #[test]
    fn rejects_negative_count() {
        let body = r#"{
            "top_skills": [{ "skill": "Go", "count": -5 }],
            "job_levels": [],
            "job_types": [],
            "top_companies": [],
            "top_search_cities": [],
            "top_summary_words": []
        }"#;

        assert!(serde_json::from_str::<AnalyticsReport>(body).is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let report = AnalyticsReport {
            top_skills: vec![SkillCount {
                skill: "Rust".into(),
                count: 12,
            }],
            job_levels: vec![LevelCount {
                level: "Senior".into(),
                count: 7,
            }],
            job_types: vec![JobTypeCount {
                job_type: "Hybrid".into(),
                count: 4,
            }],
            ..Default::default()
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: AnalyticsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}

//! Client for the JobPulse analytics endpoint.
//!
//! The aggregation service exposes one precomputed report per crawl at a
//! fixed local URL. This crate owns the wire model for that report and the
//! single fetch-and-decode operation the dashboard calls on mount. It knows
//! nothing about rendering; reshaping the report into charts lives in the
//! `ui` crate.

pub mod client;
pub mod error;
pub mod report;

pub use client::{fetch_analytics, fetch_analytics_from, ANALYTICS_ENDPOINT};
pub use error::{FetchError, FetchResult};
pub use report::{
    AnalyticsReport, CityCount, CompanyCount, JobTypeCount, LevelCount, SkillCount, WordCount,
};

// Lets downstream code and tests name response statuses without taking a
// direct reqwest dependency.
pub use reqwest::StatusCode;

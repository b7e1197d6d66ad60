//! Pure, render-free logic behind the dashboard: report projections, chart
//! geometry, colors, and formatting. Everything here is deterministic and
//! unit-tested without a UI runtime.

pub mod charts;
pub mod format;
pub mod geometry;
pub mod palette;

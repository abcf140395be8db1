//! Per-media-item view analytics normalization.
//!
//! Takes the sparse, unordered per-day view records a backend returns for a
//! media item and produces a dense, chronologically ordered daily series
//! with summary totals, ready for a time-series chart. Records sharing a
//! UTC calendar day are summed, gaps are filled with zero-view days, and
//! the observed range is padded by one day on each side so even a
//! single-point series charts cleanly.

pub mod chart;
pub mod config;
pub mod error;
pub mod payload;
pub mod series;

pub use chart::{ChartRow, ChartTable};
pub use error::AnalyticsError;
pub use payload::{RawAnalytics, RawViewRecord};
pub use series::{normalize, DayViews, ViewSeries};

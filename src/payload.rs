use crate::error::AnalyticsError;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Raw per-media-item analytics as returned by the backend API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawAnalytics {
    /// Declared media size in bytes. Passed through unchanged.
    pub size: i64,
    /// Sparse per-day view records, in no particular order.
    #[serde(default)]
    pub views_per_day: Vec<RawViewRecord>,
}

/// One raw (date, views) record, pre-aggregation.
///
/// The backend may emit several records for the same day, one per extra
/// dimension (e.g. a per-country breakdown). Any dimension fields beyond
/// date and views are ignored on deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawViewRecord {
    pub date: String,
    pub views: i64,
}

impl RawViewRecord {
    /// The UTC calendar day this record belongs to.
    pub fn utc_day(&self) -> Result<NaiveDate, AnalyticsError> {
        parse_utc_day(&self.date)
    }
}

/// Parse a record date onto its UTC calendar day.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp. Timestamps
/// are converted to UTC before the day component is taken, so records from
/// different zones land on a stable day boundary. Time-of-day never affects
/// grouping.
pub fn parse_utc_day(raw: &str) -> Result<NaiveDate, AnalyticsError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.to_utc().date_naive())
        .map_err(|_| AnalyticsError::BadDate(raw.to_string()))
}

use crate::error::AnalyticsError;
use crate::payload::RawAnalytics;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A single day in a normalized series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DayViews {
    pub date: NaiveDate,
    pub views: u64,
}

/// Dense, chronologically ordered daily view series with summary totals.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ViewSeries {
    /// Media size in bytes, passed through from the raw payload.
    pub total_size: u64,
    /// Grand total of all raw view counts.
    pub total_views: u64,
    /// One entry per calendar day from one day before the earliest record
    /// to one day after the latest, ascending, with zero-view days filled
    /// in. Empty when the raw payload had no records.
    pub views_per_day: Vec<DayViews>,
}

/// Normalize a raw analytics payload into a dense daily series.
///
/// Records are summed per UTC calendar day, the observed date range is
/// padded by one zero-view day on each side, and every day in between is
/// emitted so consecutive entries always differ by exactly one day. The
/// padding keeps a single-point series chartable without special-casing
/// by the consumer.
///
/// The result is a pure function of the input: reordering the records
/// does not change the output.
pub fn normalize(raw: &RawAnalytics) -> Result<ViewSeries, AnalyticsError> {
    let total_size =
        u64::try_from(raw.size).map_err(|_| AnalyticsError::NegativeSize(raw.size))?;

    // Sum views per UTC calendar day. The ordered map doubles as the
    // min/max-date reduction: its first and last keys bound the range.
    let mut summed: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    let mut total_views: u64 = 0;
    for record in &raw.views_per_day {
        let views = u64::try_from(record.views).map_err(|_| AnalyticsError::NegativeViews {
            date: record.date.clone(),
            views: record.views,
        })?;
        let day = record.utc_day()?;
        *summed.entry(day).or_insert(0) += views;
        total_views += views;
    }

    let (Some((&min_date, _)), Some((&max_date, _))) =
        (summed.first_key_value(), summed.last_key_value())
    else {
        // No records: an empty series carries no synthetic padding days.
        return Ok(ViewSeries {
            total_size,
            total_views,
            views_per_day: Vec::new(),
        });
    };

    let start = min_date
        .pred_opt()
        .ok_or(AnalyticsError::DateOutOfRange(min_date))?;
    let end = max_date
        .succ_opt()
        .ok_or(AnalyticsError::DateOutOfRange(max_date))?;

    // Walk every day from start to end inclusive, filling gaps with zero.
    let len = usize::try_from(end.signed_duration_since(start).num_days() + 1).unwrap_or(0);
    let mut views_per_day = Vec::with_capacity(len);
    let mut day = start;
    while day <= end {
        views_per_day.push(DayViews {
            date: day,
            views: summed.get(&day).copied().unwrap_or(0),
        });
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }

    Ok(ViewSeries {
        total_size,
        total_views,
        views_per_day,
    })
}

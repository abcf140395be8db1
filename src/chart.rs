use crate::series::ViewSeries;
use chrono::NaiveDate;
use serde::Serialize;

/// One row of a chart data table.
///
/// Rows serialize as two-element arrays, the tabular shape the annotation
/// chart consumes: `["Date","Views"]` for the label row, `["2024-01-01",3]`
/// for data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChartRow {
    Label(String, String),
    Point(NaiveDate, u64),
}

/// Chart-ready table: one label row followed by the dense data rows.
///
/// This is a presentation adapter; the normalized series itself never
/// carries column labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChartTable {
    rows: Vec<ChartRow>,
}

impl ChartTable {
    /// Build a table from a normalized series, prepending the label row.
    pub fn from_series(series: &ViewSeries, date_label: &str, views_label: &str) -> Self {
        let mut rows = Vec::with_capacity(series.views_per_day.len() + 1);
        rows.push(ChartRow::Label(
            date_label.to_string(),
            views_label.to_string(),
        ));
        rows.extend(
            series
                .views_per_day
                .iter()
                .map(|d| ChartRow::Point(d.date, d.views)),
        );
        Self { rows }
    }

    /// Whether any data rows follow the label row. The consumer shows its
    /// "no data available" state when this is false.
    pub fn has_data(&self) -> bool {
        self.rows.len() > 1
    }

    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }
}

use chrono::NaiveDate;

/// Validation error for a raw analytics payload.
///
/// All variants are invalid-input conditions surfaced synchronously to the
/// caller; normalization has no I/O and no transient failure modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// A record carried a negative view count.
    NegativeViews { date: String, views: i64 },
    /// The declared media size was negative.
    NegativeSize(i64),
    /// A record date was neither a calendar date nor an RFC 3339 timestamp.
    BadDate(String),
    /// A record date sits at the edge of the supported calendar range, so
    /// the one-day padding window cannot be formed around it.
    DateOutOfRange(NaiveDate),
}

impl std::fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeViews { date, views } => {
                write!(f, "Invalid input: negative view count {views} on {date}")
            }
            Self::NegativeSize(size) => {
                write!(f, "Invalid input: negative media size {size}")
            }
            Self::BadDate(raw) => write!(f, "Invalid input: unparseable date {raw:?}"),
            Self::DateOutOfRange(date) => {
                write!(f, "Invalid input: date {date} out of supported range")
            }
        }
    }
}

impl std::error::Error for AnalyticsError {}

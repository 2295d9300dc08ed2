use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Raw dashboard filter parameters as they arrive from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RangeQuery {
    /// ISO date, e.g. `2026-08-01`.
    pub start_date: Option<String>,
    /// ISO date, inclusive.
    pub end_date: Option<String>,
    /// Quick-range token: `today` | `7d` | `30d` | `month`.
    pub range: Option<String>,
}

/// Concrete inclusive date window with a human label.
///
/// `None` on either side means unbounded on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub label: String,
}

impl ResolvedRange {
    /// All-time window.
    pub fn all_time() -> Self {
        Self {
            start: None,
            end: None,
            label: "All time".to_string(),
        }
    }

    /// Whether a calendar date falls inside the window (inclusive bounds).
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

/// Resolve request parameters into a concrete window.
///
/// Explicit dates always win: any supplied `start_date`/`end_date` makes the
/// quick-range token inert. Unparseable explicit dates are treated as absent
/// but still mark the range as custom.
pub fn resolve_range(query: &RangeQuery, today: NaiveDate) -> ResolvedRange {
    let start = query
        .start_date
        .as_deref()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
    let end = query
        .end_date
        .as_deref()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());

    let explicit = query.start_date.is_some() || query.end_date.is_some();
    if explicit {
        return ResolvedRange {
            start,
            end,
            label: "Custom range".to_string(),
        };
    }

    if let Some(token) = query.range.as_deref() {
        let resolved = match token {
            "today" => Some((today, "Today")),
            "7d" => Some((today - Days::new(6), "Last 7 days")),
            "30d" => Some((today - Days::new(29), "Last 30 days")),
            "month" => today.with_day(1).map(|first| (first, "Current month")),
            _ => None,
        };
        if let Some((start, label)) = resolved {
            return ResolvedRange {
                start: Some(start),
                end: Some(today),
                label: label.to_string(),
            };
        }
    }

    ResolvedRange::all_time()
}

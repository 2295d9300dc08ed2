use chrono::{Days, NaiveDate};
use serde::Serialize;

use corral_ledger::{LedgerEntry, balance};

use crate::range::ResolvedRange;

/// Length of the fixed chart series, in calendar days.
pub const SERIES_DAYS: u64 = 30;

/// How many recent entries of each direction the dashboard shows.
const RECENT_LIMIT: usize = 10;

/// Per-day credit/debit sums for the chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyFlow {
    pub date: NaiveDate,
    pub credits: i64,
    pub debits: i64,
}

/// Everything the dashboard renders for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Current cash-box balance, independent of the filter range.
    pub balance: i64,
    pub range: ResolvedRange,
    /// Up to 10 most recent credit entries within range, newest first.
    pub recent_credits: Vec<LedgerEntry>,
    /// Up to 10 most recent debit entries within range, newest first.
    pub recent_debits: Vec<LedgerEntry>,
    pub total_credits: i64,
    pub total_debits: i64,
    /// credits - debits over the filtered window.
    pub net: i64,
    /// Fixed 30-day series ending on `today`, independent of the filter range.
    pub series: Vec<DailyFlow>,
}

/// Aggregate ledger entries into the dashboard view.
pub fn summarize(
    entries: &[LedgerEntry],
    range: &ResolvedRange,
    today: NaiveDate,
) -> DashboardSummary {
    let in_range: Vec<&LedgerEntry> = entries
        .iter()
        .filter(|e| range.contains(e.occurred_at.date_naive()))
        .collect();

    let total_credits: i64 = in_range
        .iter()
        .filter(|e| e.is_credit())
        .map(|e| e.amount)
        .sum();
    let total_debits: i64 = in_range
        .iter()
        .filter(|e| !e.is_credit())
        .map(|e| e.amount)
        .sum();

    DashboardSummary {
        balance: balance(entries),
        range: range.clone(),
        recent_credits: recent(&in_range, true),
        recent_debits: recent(&in_range, false),
        total_credits,
        total_debits,
        net: total_credits - total_debits,
        series: series(entries, today),
    }
}

fn recent(in_range: &[&LedgerEntry], credits: bool) -> Vec<LedgerEntry> {
    let mut matching: Vec<&LedgerEntry> = in_range
        .iter()
        .filter(|e| e.is_credit() == credits)
        .copied()
        .collect();
    matching.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    matching.into_iter().take(RECENT_LIMIT).cloned().collect()
}

fn series(entries: &[LedgerEntry], today: NaiveDate) -> Vec<DailyFlow> {
    let start = today - Days::new(SERIES_DAYS - 1);
    let mut days: Vec<DailyFlow> = (0..SERIES_DAYS)
        .map(|offset| DailyFlow {
            date: start + Days::new(offset),
            credits: 0,
            debits: 0,
        })
        .collect();

    for entry in entries {
        let day = entry.occurred_at.date_naive();
        if day < start || day > today {
            continue;
        }
        let idx = (day - start).num_days() as usize;
        if entry.is_credit() {
            days[idx].credits += entry.amount;
        } else {
            days[idx].debits += entry.amount;
        }
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use corral_core::LedgerEntryId;
    use corral_ledger::EntryDirection;

    use crate::range::{RangeQuery, resolve_range};

    fn ts(s: &str) -> DateTime<Utc> {
        format!("{s}T12:00:00Z").parse().unwrap()
    }

    fn entry(amount: i64, direction: EntryDirection, day: &str) -> LedgerEntry {
        LedgerEntry::new(
            LedgerEntryId::new(),
            amount,
            direction,
            ts(day),
            None,
            format!("entry on {day}"),
        )
        .unwrap()
    }

    fn today() -> NaiveDate {
        "2026-08-23".parse().unwrap()
    }

    #[test]
    fn series_always_has_thirty_days_ending_today() {
        let summary = summarize(&[], &ResolvedRange::all_time(), today());
        assert_eq!(summary.series.len(), 30);
        assert_eq!(summary.series.last().unwrap().date, today());
        assert_eq!(summary.series.first().unwrap().date, "2026-07-25".parse().unwrap());
        assert!(summary.series.iter().all(|d| d.credits == 0 && d.debits == 0));
    }

    #[test]
    fn series_buckets_entries_by_day_and_zero_fills_gaps() {
        let entries = vec![
            entry(1_000, EntryDirection::Credit, "2026-08-20"),
            entry(250, EntryDirection::Credit, "2026-08-20"),
            entry(400, EntryDirection::Debit, "2026-08-22"),
            // Outside the 30-day window; must not appear.
            entry(9_999, EntryDirection::Credit, "2026-07-01"),
        ];
        let summary = summarize(&entries, &ResolvedRange::all_time(), today());

        let aug20 = summary
            .series
            .iter()
            .find(|d| d.date == "2026-08-20".parse::<NaiveDate>().unwrap())
            .unwrap();
        assert_eq!(aug20.credits, 1_250);
        assert_eq!(aug20.debits, 0);

        let aug21 = summary
            .series
            .iter()
            .find(|d| d.date == "2026-08-21".parse::<NaiveDate>().unwrap())
            .unwrap();
        assert_eq!((aug21.credits, aug21.debits), (0, 0));

        let total_series_credits: i64 = summary.series.iter().map(|d| d.credits).sum();
        assert_eq!(total_series_credits, 1_250);
    }

    #[test]
    fn series_ignores_the_filter_range() {
        let entries = vec![entry(1_000, EntryDirection::Credit, "2026-08-20")];
        let range = resolve_range(
            &RangeQuery {
                start_date: Some("2026-01-01".to_string()),
                end_date: Some("2026-01-31".to_string()),
                range: None,
            },
            today(),
        );
        let summary = summarize(&entries, &range, today());
        // Totals respect the range, the chart does not.
        assert_eq!(summary.total_credits, 0);
        let series_credits: i64 = summary.series.iter().map(|d| d.credits).sum();
        assert_eq!(series_credits, 1_000);
    }

    #[test]
    fn balance_is_range_independent() {
        let entries = vec![
            entry(10_000, EntryDirection::Credit, "2026-05-01"),
            entry(2_000, EntryDirection::Debit, "2026-08-22"),
        ];
        let range = resolve_range(
            &RangeQuery {
                start_date: Some("2026-08-01".to_string()),
                end_date: None,
                range: None,
            },
            today(),
        );
        let summary = summarize(&entries, &range, today());
        assert_eq!(summary.balance, 8_000);
        assert_eq!(summary.total_credits, 0);
        assert_eq!(summary.total_debits, 2_000);
        assert_eq!(summary.net, -2_000);
    }

    #[test]
    fn recents_are_capped_at_ten_newest_first() {
        let mut entries = Vec::new();
        for day in 1..=15 {
            entries.push(entry(
                day as i64 * 100,
                EntryDirection::Credit,
                &format!("2026-08-{day:02}"),
            ));
        }
        let summary = summarize(&entries, &ResolvedRange::all_time(), today());
        assert_eq!(summary.recent_credits.len(), 10);
        assert!(summary.recent_debits.is_empty());
        // Newest first: first element is Aug 15, last is Aug 6.
        assert_eq!(summary.recent_credits[0].occurred_at, ts("2026-08-15"));
        assert_eq!(summary.recent_credits[9].occurred_at, ts("2026-08-06"));
    }

    #[test]
    fn recents_respect_the_filter_range() {
        let entries = vec![
            entry(100, EntryDirection::Debit, "2026-08-10"),
            entry(200, EntryDirection::Debit, "2026-08-20"),
        ];
        let range = resolve_range(
            &RangeQuery {
                start_date: Some("2026-08-15".to_string()),
                end_date: None,
                range: None,
            },
            today(),
        );
        let summary = summarize(&entries, &range, today());
        assert_eq!(summary.recent_debits.len(), 1);
        assert_eq!(summary.recent_debits[0].amount, 200);
    }
}

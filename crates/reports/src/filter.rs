use chrono::NaiveDate;

use corral_trading::{Purchase, Sale};

/// List filter shared by the sale and purchase list/export views.
///
/// `q` is a case-insensitive substring over the id and counterparty fields;
/// the date window is inclusive on both sides, by calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeFilter {
    pub q: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TradeFilter {
    /// Build a filter from raw request parameters.
    ///
    /// Unparseable dates are treated as absent, matching the dashboard's
    /// range handling.
    pub fn from_params(
        q: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Self {
        Self {
            q: q.filter(|s| !s.is_empty()).map(str::to_string),
            start_date: start_date.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()),
            end_date: end_date.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()),
        }
    }

    fn date_matches(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start_date {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if date > end {
                return false;
            }
        }
        true
    }

    fn q_matches(&self, haystacks: &[&str]) -> bool {
        match &self.q {
            None => true,
            Some(q) => {
                let needle = q.to_lowercase();
                haystacks
                    .iter()
                    .any(|h| h.to_lowercase().contains(&needle))
            }
        }
    }
}

/// Filter sales by `q` (id, customer name, operator username) and date
/// window; newest first.
pub fn filter_sales<'a>(sales: &'a [Sale], filter: &TradeFilter) -> Vec<&'a Sale> {
    let mut matching: Vec<&Sale> = sales
        .iter()
        .filter(|s| filter.date_matches(s.occurred_at.date_naive()))
        .filter(|s| {
            filter.q_matches(&[
                &s.id.to_string(),
                &s.customer.name,
                &s.operator.username,
            ])
        })
        .collect();
    matching.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    matching
}

/// Filter purchases by `q` (id, supplier name) and date window; newest first.
pub fn filter_purchases<'a>(purchases: &'a [Purchase], filter: &TradeFilter) -> Vec<&'a Purchase> {
    let mut matching: Vec<&Purchase> = purchases
        .iter()
        .filter(|p| filter.date_matches(p.occurred_at.date_naive()))
        .filter(|p| filter.q_matches(&[&p.id.to_string(), &p.supplier.name]))
        .collect();
    matching.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    matching
}

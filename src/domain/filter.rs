use serde::{Deserialize, Serialize};

use super::Period;

/// The user's current selection. This is the only state persisted across
/// sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateFilter {
    #[serde(default = "default_from")]
    pub from_currency: String,
    #[serde(default = "default_to")]
    pub to_currency: String,
    #[serde(default)]
    pub period: Period,
}

fn default_from() -> String {
    "USD".to_string()
}

fn default_to() -> String {
    "INR".to_string()
}

impl Default for RateFilter {
    fn default() -> Self {
        Self {
            from_currency: default_from(),
            to_currency: default_to(),
            period: Period::default(),
        }
    }
}

/// Parameters for one series fetch, captured at the moment the fetch is
/// planned so later filter edits cannot leak into an in-flight request.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesRequest {
    pub from_currency: String,
    pub to_currency: String,
    pub period: Period,
}

impl RateFilter {
    /// The request this filter would issue, or None when the selection is
    /// not fetchable (blank side, or both sides the same currency).
    pub fn series_request(&self) -> Option<SeriesRequest> {
        if self.from_currency.is_empty() || self.to_currency.is_empty() {
            return None;
        }
        if self.from_currency == self.to_currency {
            return None;
        }
        Some(SeriesRequest {
            from_currency: self.from_currency.clone(),
            to_currency: self.to_currency.clone(),
            period: self.period,
        })
    }
}

/// Decide whether a filter edit warrants a new fetch. Returns the request
/// to issue, or None when nothing changed or the new selection is not
/// fetchable.
pub fn plan_refetch(old: &RateFilter, new: &RateFilter) -> Option<SeriesRequest> {
    if old == new {
        return None;
    }
    new.series_request()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(from: &str, to: &str, period: Period) -> RateFilter {
        RateFilter {
            from_currency: from.to_string(),
            to_currency: to.to_string(),
            period,
        }
    }

    #[test]
    fn identical_pair_plans_no_fetch() {
        let old = filter("USD", "INR", Period::OneMonth);
        let new = filter("INR", "INR", Period::OneMonth);
        assert_eq!(plan_refetch(&old, &new), None);
    }

    #[test]
    fn unchanged_filter_plans_no_fetch() {
        let same = filter("USD", "INR", Period::OneMonth);
        assert_eq!(plan_refetch(&same, &same.clone()), None);
    }

    #[test]
    fn period_change_replans_with_same_pair() {
        let old = filter("USD", "INR", Period::OneMonth);
        let new = filter("USD", "INR", Period::SixMonths);
        let req = plan_refetch(&old, &new).unwrap();
        assert_eq!(req.from_currency, "USD");
        assert_eq!(req.to_currency, "INR");
        assert_eq!(req.period, Period::SixMonths);
    }

    #[test]
    fn leaving_identical_pair_resumes_fetching() {
        let old = filter("INR", "INR", Period::OneMonth);
        let new = filter("INR", "EUR", Period::OneMonth);
        let req = plan_refetch(&old, &new).unwrap();
        assert_eq!(req.from_currency, "INR");
        assert_eq!(req.to_currency, "EUR");
    }

    #[test]
    fn blank_side_plans_no_fetch() {
        let old = filter("USD", "INR", Period::OneMonth);
        let new = filter("", "INR", Period::OneMonth);
        assert_eq!(plan_refetch(&old, &new), None);
    }

    #[test]
    fn defaults_are_usd_to_inr_one_month() {
        let filter = RateFilter::default();
        assert_eq!(filter.from_currency, "USD");
        assert_eq!(filter.to_currency, "INR");
        assert_eq!(filter.period, Period::OneMonth);
    }

    #[test]
    fn default_filter_is_fetchable_at_startup() {
        let request = RateFilter::default().series_request().unwrap();
        assert_eq!(request.from_currency, "USD");
        assert_eq!(request.to_currency, "INR");
        assert_eq!(request.period, Period::OneMonth);
    }
}

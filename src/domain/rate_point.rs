use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One day of OHLC exchange-rate data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    pub date: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl RatePoint {
    /// Epoch seconds, the x-coordinate used by the charts.
    pub fn epoch_seconds(&self) -> i64 {
        self.date.timestamp()
    }
}

/// A rate series in the order the backend returned it. No sorting or
/// deduplication is applied client-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSeries {
    pub points: Vec<RatePoint>,
}

impl RateSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// First and last dates of the series, if any.
    pub fn date_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.date, last.date))
    }
}

use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

use crate::data::FetchError;
use crate::domain::{RatePoint, RateSeries};

/// One series row as the backend serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct RatePointRecord {
    pub date: String,
    pub open_rate: f64,
    pub high_rate: f64,
    pub low_rate: f64,
    pub close_rate: f64,
}

/// Parse a backend date string. The service emits plain `YYYY-MM-DD` dates;
/// RFC 3339 timestamps are accepted as a fallback.
fn parse_wire_date(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("unparseable date '{raw}'"))
}

impl TryFrom<RatePointRecord> for RatePoint {
    type Error = anyhow::Error;

    fn try_from(record: RatePointRecord) -> Result<Self, Self::Error> {
        Ok(RatePoint {
            date: parse_wire_date(&record.date)?,
            open: record.open_rate,
            high: record.high_rate,
            low: record.low_rate,
            close: record.close_rate,
        })
    }
}

/// Decode a response body into a series, preserving the backend's ordering.
pub fn decode_series(records: Vec<RatePointRecord>) -> Result<RateSeries, FetchError> {
    let points = records
        .into_iter()
        .map(RatePoint::try_from)
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(|e| FetchError::Parse(e.to_string()))?;
    Ok(RateSeries { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn decodes_plain_date_row() {
        let records = vec![RatePointRecord {
            date: "2024-01-01".to_string(),
            open_rate: 1.1,
            high_rate: 1.2,
            low_rate: 1.0,
            close_rate: 1.15,
        }];
        let series = decode_series(records).unwrap();
        assert_eq!(series.len(), 1);
        let point = series.points[0];
        assert_eq!(point.date, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(point.open, 1.1);
        assert_eq!(point.high, 1.2);
        assert_eq!(point.low, 1.0);
        assert_eq!(point.close, 1.15);
    }

    #[test]
    fn deserializes_the_backend_row_shape() {
        let json = r#"[{"date":"2024-01-01","open_rate":82.9,"high_rate":83.4,"low_rate":82.5,"close_rate":83.1}]"#;
        let records: Vec<RatePointRecord> = serde_json::from_str(json).unwrap();
        let series = decode_series(records).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.points[0].high, 83.4);
    }

    #[test]
    fn accepts_rfc3339_timestamps() {
        let date = parse_wire_date("2024-06-15T12:30:00+02:00").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn keeps_backend_ordering() {
        let records = vec![
            RatePointRecord {
                date: "2024-03-02".to_string(),
                open_rate: 2.0,
                high_rate: 2.0,
                low_rate: 2.0,
                close_rate: 2.0,
            },
            RatePointRecord {
                date: "2024-03-01".to_string(),
                open_rate: 1.0,
                high_rate: 1.0,
                low_rate: 1.0,
                close_rate: 1.0,
            },
        ];
        let series = decode_series(records).unwrap();
        assert_eq!(series.points[0].open, 2.0);
        assert_eq!(series.points[1].open, 1.0);
    }

    #[test]
    fn bad_date_is_a_parse_error() {
        let records = vec![RatePointRecord {
            date: "yesterday".to_string(),
            open_rate: 1.0,
            high_rate: 1.0,
            low_rate: 1.0,
            close_rate: 1.0,
        }];
        match decode_series(records) {
            Err(FetchError::Parse(msg)) => assert!(msg.contains("yesterday")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}

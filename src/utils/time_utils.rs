use chrono::{DateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &'static str = "%Y-%m-%d";
}

/// Format an epoch-seconds value as a UTC date string. Used for the chart
/// x-axis, where plot coordinates are epoch seconds.
pub fn epoch_sec_to_utc(epoch_sec: i64) -> String {
    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        // Out-of-range timestamps render as an empty tick label
        None => String::new(),
    }
}

/// Human-readable span between the first and last point of a series.
pub fn date_span_label(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    format!(
        "{} to {}",
        start.format(TimeUtils::STANDARD_TIME_FORMAT),
        end.format(TimeUtils::STANDARD_TIME_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn epoch_formats_as_utc_date() {
        // 2024-01-01T00:00:00Z
        assert_eq!(epoch_sec_to_utc(1_704_067_200), "2024-01-01");
    }

    #[test]
    fn span_label_joins_both_ends() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(date_span_label(&start, &end), "2024-01-01 to 2024-03-01");
    }
}

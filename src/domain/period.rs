use serde::{Deserialize, Serialize};

/// Lookback window for a rate series. The wire code is what the backend
/// expects in the `period` query parameter.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum Period {
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
}

impl Period {
    pub fn wire_code(&self) -> &'static str {
        match self {
            Period::OneMonth => "1M",
            Period::ThreeMonths => "3M",
            Period::SixMonths => "6M",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::OneMonth => "1 Month",
            Period::ThreeMonths => "3 Months",
            Period::SixMonths => "6 Months",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn wire_codes_match_backend_contract() {
        assert_eq!(Period::OneMonth.wire_code(), "1M");
        assert_eq!(Period::ThreeMonths.wire_code(), "3M");
        assert_eq!(Period::SixMonths.wire_code(), "6M");
    }

    #[test]
    fn every_period_has_distinct_label() {
        let labels: Vec<&str> = Period::iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["1 Month", "3 Months", "6 Months"]);
    }

    #[test]
    fn default_is_one_month() {
        assert_eq!(Period::default(), Period::OneMonth);
    }
}

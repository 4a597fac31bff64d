/// All user-facing strings in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub filters_heading: &'static str,
    pub from_label: &'static str,
    pub to_label: &'static str,
    pub period_label: &'static str,
    pub high_low_chart_title: &'static str,
    pub open_close_chart_title: &'static str,
    pub high_series: &'static str,
    pub low_series: &'static str,
    pub open_series: &'static str,
    pub close_series: &'static str,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
    pub loading_catalog: &'static str,
    pub loading_series: &'static str,
    pub identical_pair_notice: &'static str,
    pub empty_series_notice: &'static str,
    pub status_backend: &'static str,
    pub status_currencies: &'static str,
    pub status_points: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Exchange Rates History Tracker",
    filters_heading: "Filters",
    from_label: "From currency",
    to_label: "To currency",
    period_label: "Period",
    high_low_chart_title: "High and Low Exchange Rates",
    open_close_chart_title: "Open and Close Exchange Rates",
    high_series: "High Rate",
    low_series: "Low Rate",
    open_series: "Open Rate",
    close_series: "Close Rate",
    x_axis: "Date",
    y_axis: "Exchange Rate",
    loading_catalog: "Loading supported currencies...",
    loading_series: "Fetching exchange rates...",
    identical_pair_notice: "Select two different currencies to see rates.",
    empty_series_notice: "No rate data for this selection.",
    status_backend: "Backend",
    status_currencies: "Currencies",
    status_points: "Points",
};

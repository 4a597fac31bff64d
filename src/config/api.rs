/// Backend endpoints and client tuning for the forex rates service.
pub struct ForexApiConfig {
    /// Used when neither the CLI flag nor the env var supplies a base URL.
    pub default_base_url: &'static str,
    /// Environment variable consulted for the base URL.
    pub base_url_env_var: &'static str,
    /// GET endpoint returning the supported-currency map.
    pub catalog_path: &'static str,
    /// POST endpoint returning an OHLC rate series.
    pub series_path: &'static str,
    /// Per-request timeout for the HTTP client (native only).
    pub request_timeout_ms: u64,
    /// Fixed delay between catalog fetch attempts.
    pub catalog_retry_delay_ms: u64,
}

pub const FOREX_API: ForexApiConfig = ForexApiConfig {
    default_base_url: "http://localhost:8000",
    base_url_env_var: "FOREX_API_URL",
    catalog_path: "/api/supported-currencies",
    series_path: "/api/forex-data",
    request_timeout_ms: 5_000,
    catalog_retry_delay_ms: 1_000,
};

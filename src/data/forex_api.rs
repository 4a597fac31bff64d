use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::FOREX_API;
use crate::data::wire::{self, RatePointRecord};
use crate::domain::{CurrencyCatalog, RateSeries, SeriesRequest};

/// Why a backend request produced no data.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never completed (connection refused, timeout, DNS).
    Network(String),
    /// The backend answered with a non-success HTTP status.
    Status(u16),
    /// The response body could not be decoded.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "Server returned HTTP {}", code),
            FetchError::Parse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Backend abstraction, mockable in tests. The wasm build runs futures on
/// the browser's single thread, so the Send bound is dropped there.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait RateDataSource {
    async fn supported_currencies(&self) -> Result<CurrencyCatalog, FetchError>;
    async fn rate_series(&self, request: &SeriesRequest) -> Result<RateSeries, FetchError>;
    fn base_url(&self) -> &str;
}

#[cfg(not(target_arch = "wasm32"))]
pub type SharedDataSource = Arc<dyn RateDataSource + Send + Sync>;

#[cfg(target_arch = "wasm32")]
pub type SharedDataSource = Arc<dyn RateDataSource>;

/// HTTP client for the forex rates service.
pub struct ForexApi {
    client: reqwest::Client,
    base_url: String,
}

impl ForexApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: build_client(),
            base_url: base_url.into(),
        }
    }

    fn catalog_url(&self) -> String {
        format!("{}{}", self.base_url, FOREX_API.catalog_path)
    }

    fn series_url(&self) -> String {
        format!("{}{}", self.base_url, FOREX_API.series_path)
    }

    /// POST whose query string carries the parameters. The body stays empty;
    /// only the content-type header declares JSON.
    fn series_request_builder(&self, request: &SeriesRequest) -> reqwest::RequestBuilder {
        self.client
            .post(self.series_url())
            .query(&[
                ("from_currency", request.from_currency.as_str()),
                ("to_currency", request.to_currency.as_str()),
                ("period", request.period.wire_code()),
            ])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_millis(FOREX_API.request_timeout_ms))
        .build()
        .expect("failed to build HTTP client")
}

// The browser fetch API manages its own timeouts.
#[cfg(target_arch = "wasm32")]
fn build_client() -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl RateDataSource for ForexApi {
    async fn supported_currencies(&self) -> Result<CurrencyCatalog, FetchError> {
        let response = self
            .client
            .get(self.catalog_url())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }
        response
            .json::<CurrencyCatalog>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }

    async fn rate_series(&self, request: &SeriesRequest) -> Result<RateSeries, FetchError> {
        let response = self
            .series_request_builder(request)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }
        let records = response
            .json::<Vec<RatePointRecord>>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;
        wire::decode_series(records)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_append_endpoint_paths() {
        let api = ForexApi::new("http://localhost:8000");
        assert_eq!(
            api.catalog_url(),
            "http://localhost:8000/api/supported-currencies"
        );
        assert_eq!(api.series_url(), "http://localhost:8000/api/forex-data");
    }

    #[test]
    fn series_request_has_query_params_and_no_body() {
        use crate::domain::Period;

        let api = ForexApi::new("http://localhost:8000");
        let request = SeriesRequest {
            from_currency: "USD".to_string(),
            to_currency: "INR".to_string(),
            period: Period::ThreeMonths,
        };
        let built = api.series_request_builder(&request).build().unwrap();

        assert_eq!(built.method(), reqwest::Method::POST);
        assert_eq!(
            built.url().query(),
            Some("from_currency=USD&to_currency=INR&period=3M")
        );
        assert_eq!(
            built.headers().get(reqwest::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(built.body().is_none());
    }

    #[test]
    fn errors_render_for_the_status_strip() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "Server returned HTTP 503"
        );
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }
}

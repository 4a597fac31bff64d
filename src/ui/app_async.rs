use eframe::egui;
use poll_promise::Promise;

use crate::data::FetchError;
use crate::domain::{RateSeries, SeriesRequest};
use crate::ui::app::RateScopeApp;
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// What a finished series request hands back to the UI thread. The token
/// ties the response to the request generation that issued it.
pub(super) struct SeriesFetchOutcome {
    pub(super) token: u64,
    pub(super) request: SeriesRequest,
    pub(super) result: Result<RateSeries, FetchError>,
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_fetch<T, F>(future: F) -> Promise<T>
where
    T: Send + 'static,
    F: std::future::Future<Output = T> + Send + 'static,
{
    Promise::spawn_async(future)
}

#[cfg(target_arch = "wasm32")]
fn spawn_fetch<T, F>(future: F) -> Promise<T>
where
    T: 'static,
    F: std::future::Future<Output = T> + 'static,
{
    Promise::spawn_local(future)
}

/// A failed series fetch shows an empty chart, not the previous pair's data.
fn resolve_series_result(
    result: Result<RateSeries, FetchError>,
) -> (RateSeries, Option<FetchError>) {
    match result {
        Ok(series) => (series, None),
        Err(err) => (RateSeries::default(), Some(err)),
    }
}

impl RateScopeApp {
    /// Drives the catalog load: issues the next attempt when due, applies a
    /// finished response, and schedules a repaint for the retry deadline.
    pub(super) fn poll_catalog_fetch(&mut self, ctx: &egui::Context) {
        let finished = self
            .catalog_promise
            .as_ref()
            .and_then(|promise| promise.ready().cloned());

        if let Some(result) = finished {
            self.catalog_promise = None;
            match result {
                Ok(catalog) => {
                    self.catalog_load.on_request_succeeded();
                    if !catalog.contains(&self.filter.from_currency)
                        || !catalog.contains(&self.filter.to_currency)
                    {
                        log::warn!(
                            "Restored selection {}/{} is not in the currency catalog",
                            self.filter.from_currency,
                            self.filter.to_currency
                        );
                    }
                    self.catalog = catalog;
                }
                Err(err) => {
                    log::warn!("Currency catalog fetch failed: {err}");
                    self.catalog_load.on_request_failed(err.to_string(), now());
                }
            }
        }

        if self.catalog_load.ready_to_fetch(now()) {
            self.start_catalog_fetch();
        }

        // Sleep until the retry is due rather than repainting every frame.
        if let Some(remaining) = self.catalog_load.retry_delay_remaining(now()) {
            ctx.request_repaint_after(remaining);
        } else if self.catalog_load.in_flight {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn start_catalog_fetch(&mut self) {
        if self.catalog_promise.is_some() {
            return;
        }
        let Some(source) = self.data_source.clone() else {
            return;
        };

        self.catalog_load.on_request_started();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_events {
            log::info!("Catalog fetch attempt {}", self.catalog_load.attempts);
        }

        self.catalog_promise =
            Some(spawn_fetch(async move { source.supported_currencies().await }));
    }

    /// Issues a series request, superseding whatever is currently in flight.
    pub(super) fn start_series_fetch(&mut self, request: SeriesRequest) {
        let Some(source) = self.data_source.clone() else {
            return;
        };

        let token = self.series_fetch.begin();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_events {
            log::info!(
                "Series fetch #{token}: {}/{} over {}",
                request.from_currency,
                request.to_currency,
                request.period
            );
        }

        // Replacing the slot drops the superseded promise.
        self.series_promise = Some(spawn_fetch(async move {
            let result = source.rate_series(&request).await;
            SeriesFetchOutcome {
                token,
                request,
                result,
            }
        }));
    }

    pub(super) fn poll_series_fetch(&mut self) {
        let Some(promise) = self.series_promise.take() else {
            return;
        };
        let outcome = match promise.try_take() {
            Ok(outcome) => outcome,
            Err(still_pending) => {
                self.series_promise = Some(still_pending);
                return;
            }
        };

        if !self.series_fetch.accept(outcome.token) {
            // A newer request superseded this one while it was in flight.
            return;
        }

        if let Err(err) = &outcome.result {
            log::warn!(
                "Series fetch for {}/{} failed: {err}",
                outcome.request.from_currency,
                outcome.request.to_currency
            );
        }

        let (series, error) = resolve_series_result(outcome.result);
        self.series = series;
        self.last_series_error = error;
        self.charts.clear_cache();
    }

    pub(super) fn is_series_pending(&self) -> bool {
        self.series_fetch.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fetch_resolves_to_empty_series() {
        let (series, error) = resolve_series_result(Err(FetchError::Status(500)));
        assert!(series.is_empty());
        assert_eq!(error, Some(FetchError::Status(500)));
    }

    #[test]
    fn successful_fetch_clears_previous_error() {
        let (series, error) = resolve_series_result(Ok(RateSeries::default()));
        assert!(series.is_empty());
        assert_eq!(error, None);
    }
}

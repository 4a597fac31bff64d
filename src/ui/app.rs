use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};

use crate::data::{FetchError, SharedDataSource};
use crate::domain::{CurrencyCatalog, RateFilter, RateSeries};
use crate::ui::app_async::SeriesFetchOutcome;
use crate::ui::app_triggers::{CatalogLoadState, SeriesFetchState};
use crate::ui::ui_plot_view::RateChartsView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Main application state. Only the filter survives restarts; everything
/// else is refetched or rebuilt on startup.
#[derive(Default, Serialize, Deserialize)]
pub struct RateScopeApp {
    pub filter: RateFilter,

    #[serde(skip)]
    pub(super) data_source: Option<SharedDataSource>,
    #[serde(skip)]
    pub(super) catalog: CurrencyCatalog,
    #[serde(skip)]
    pub(super) series: RateSeries,
    #[serde(skip)]
    pub(super) charts: RateChartsView,

    #[serde(skip)]
    pub(super) catalog_load: CatalogLoadState,
    #[serde(skip)]
    pub(super) series_fetch: SeriesFetchState,
    #[serde(skip)]
    pub(super) last_series_error: Option<FetchError>,

    #[serde(skip)]
    pub(super) catalog_promise: Option<Promise<Result<CurrencyCatalog, FetchError>>>,
    #[serde(skip)]
    pub(super) series_promise: Option<Promise<SeriesFetchOutcome>>,
}

impl RateScopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, data_source: SharedDataSource) -> Self {
        let mut app: RateScopeApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Restored filter: {:?}", app.filter);
        }

        app.data_source = Some(data_source);

        // The series does not wait for the catalog; a persisted selection is
        // fetchable immediately.
        if let Some(request) = app.filter.series_request() {
            app.start_series_fetch(request);
        }
        app
    }

    pub(super) fn awaiting_catalog(&self) -> bool {
        !self.catalog_load.loaded
    }
}

impl eframe::App for RateScopeApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Dropping the promises abandons any in-flight request.
        self.catalog_promise = None;
        self.series_promise = None;
        self.catalog_load.cancel();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Shutting down after {} catalog attempts", self.catalog_load.attempts);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_catalog_fetch(ctx);
        self.poll_series_fetch();

        // Until the catalog response arrives, the loading screen is the
        // whole UI. A successful response unlocks even when the backend
        // serves an empty currency map.
        if self.awaiting_catalog() {
            self.render_loading_screen(ctx);
            return;
        }

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_response_still_unlocks_the_ui() {
        let mut app = RateScopeApp::default();
        assert!(app.awaiting_catalog());

        // A 200 with an empty currency map ends both the loading screen and
        // the retry loop.
        app.catalog_load.on_request_started();
        app.catalog_load.on_request_succeeded();
        app.catalog = CurrencyCatalog::default();

        assert!(app.catalog.is_empty());
        assert!(!app.awaiting_catalog());
    }
}

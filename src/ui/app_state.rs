use crate::domain::plan_refetch;
use crate::ui::app::RateScopeApp;
use crate::ui::ui_panels::FilterEvent;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl RateScopeApp {
    pub(super) fn handle_filter_event(&mut self, event: FilterEvent) {
        match event {
            FilterEvent::FromCurrency(code) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("From currency -> {code}");
                }
                self.apply_filter_change(|filter| filter.from_currency = code);
            }
            FilterEvent::ToCurrency(code) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("To currency -> {code}");
                }
                self.apply_filter_change(|filter| filter.to_currency = code);
            }
            FilterEvent::Period(period) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("Period -> {period}");
                }
                self.apply_filter_change(|filter| filter.period = period);
            }
        }
    }

    /// Applies one filter edit and fetches only when the edit produced a new,
    /// fetchable selection.
    fn apply_filter_change(&mut self, edit: impl FnOnce(&mut crate::domain::RateFilter)) {
        let old = self.filter.clone();
        edit(&mut self.filter);

        if let Some(request) = plan_refetch(&old, &self.filter) {
            self.start_series_fetch(request);
        }
    }
}

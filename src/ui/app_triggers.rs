use std::time::Duration;

use crate::config::FOREX_API;
use crate::utils::app_time::AppInstant;

/// Lifecycle of the currency-catalog load. The catalog must arrive before the
/// rest of the UI unlocks, so failures retry forever at a fixed delay with at
/// most one request in flight.
#[derive(Debug, Default, Clone)]
pub(super) struct CatalogLoadState {
    pub(super) attempts: u32,
    pub(super) in_flight: bool,
    pub(super) next_attempt_at: Option<AppInstant>,
    pub(super) last_error: Option<String>,
    pub(super) loaded: bool,
    cancelled: bool,
}

impl CatalogLoadState {
    pub(super) fn ready_to_fetch(&self, now: AppInstant) -> bool {
        if self.loaded || self.in_flight || self.cancelled {
            return false;
        }
        match self.next_attempt_at {
            Some(deadline) => now >= deadline,
            None => true,
        }
    }

    pub(super) fn on_request_started(&mut self) {
        self.in_flight = true;
        self.next_attempt_at = None;
        self.attempts += 1;
    }

    pub(super) fn on_request_succeeded(&mut self) {
        self.in_flight = false;
        self.loaded = true;
        self.last_error = None;
        self.next_attempt_at = None;
    }

    pub(super) fn on_request_failed(&mut self, error: impl Into<String>, now: AppInstant) {
        self.in_flight = false;
        self.last_error = Some(error.into());
        self.next_attempt_at =
            Some(now + Duration::from_millis(FOREX_API.catalog_retry_delay_ms));
    }

    /// Time left until the scheduled retry, used to request a repaint at the
    /// right moment instead of busy-polling.
    pub(super) fn retry_delay_remaining(&self, now: AppInstant) -> Option<Duration> {
        let deadline = self.next_attempt_at?;
        Some(deadline.saturating_duration_since(now))
    }

    /// Stops the retry loop permanently. Called on shutdown.
    pub(super) fn cancel(&mut self) {
        self.cancelled = true;
        self.next_attempt_at = None;
    }
}

/// Monotonic tokens guarding series responses against staleness. Only the
/// most recently issued token is accepted, so a slow response for an old
/// selection can never overwrite a newer one.
#[derive(Debug, Default, Clone)]
pub(super) struct SeriesFetchState {
    next_token: u64,
    pending: Option<u64>,
}

impl SeriesFetchState {
    pub(super) fn begin(&mut self) -> u64 {
        self.next_token += 1;
        self.pending = Some(self.next_token);
        self.next_token
    }

    /// True when `token` belongs to the latest request. Accepting clears the
    /// pending marker.
    pub(super) fn accept(&mut self, token: u64) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub(super) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> AppInstant {
        AppInstant::now()
    }

    #[test]
    fn failures_schedule_fixed_delay_retries() {
        let t0 = start();
        let mut state = CatalogLoadState::default();

        // Each attempt fires one second after the previous failure.
        for attempt in 0..3u32 {
            let now = t0 + Duration::from_millis(u64::from(attempt) * 1_000);
            assert!(state.ready_to_fetch(now));
            state.on_request_started();
            assert!(!state.ready_to_fetch(now), "no second request in flight");
            state.on_request_failed("connection refused", now);
            assert_eq!(state.attempts, attempt + 1);
            // Not ready again until the full delay has elapsed
            assert!(!state.ready_to_fetch(now + Duration::from_millis(999)));
            assert!(state.ready_to_fetch(now + Duration::from_millis(1_000)));
        }
        assert_eq!(state.last_error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn success_ends_the_retry_loop() {
        let t0 = start();
        let mut state = CatalogLoadState::default();
        state.on_request_started();
        state.on_request_succeeded();
        assert!(state.loaded);
        assert!(state.last_error.is_none());
        assert!(!state.ready_to_fetch(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn cancel_stops_scheduled_retries() {
        let t0 = start();
        let mut state = CatalogLoadState::default();
        state.on_request_started();
        state.on_request_failed("HTTP 503", t0);
        state.cancel();
        assert!(!state.ready_to_fetch(t0 + Duration::from_secs(5)));
        assert_eq!(state.retry_delay_remaining(t0), None);
    }

    #[test]
    fn retry_remaining_counts_down() {
        let t0 = start();
        let mut state = CatalogLoadState::default();
        state.on_request_started();
        state.on_request_failed("timeout", t0);
        let remaining = state
            .retry_delay_remaining(t0 + Duration::from_millis(400))
            .unwrap();
        assert_eq!(remaining, Duration::from_millis(600));
    }

    #[test]
    fn only_latest_series_token_is_accepted() {
        let mut state = SeriesFetchState::default();
        let first = state.begin();
        let second = state.begin();
        assert!(!state.accept(first), "superseded response is discarded");
        assert!(state.is_pending());
        assert!(state.accept(second));
        assert!(!state.is_pending());
    }

    #[test]
    fn accepted_token_cannot_be_replayed() {
        let mut state = SeriesFetchState::default();
        let token = state.begin();
        assert!(state.accept(token));
        assert!(!state.accept(token));
    }
}

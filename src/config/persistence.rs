//! App state persistence configuration

/// Path for saving/loading application UI state (native builds).
pub const APP_STATE_PATH: &str = ".rate_scope_state.json";

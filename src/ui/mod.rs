// User interface components
pub mod app;
pub mod app_async;
pub mod app_state;
pub mod app_triggers;
pub mod config;
pub mod ui_panels;
pub mod ui_plot_view;
pub mod ui_render;
pub mod ui_text;
pub mod utils;
pub mod styles;

// Re-export main app
pub use app::RateScopeApp;
pub use config::UI_CONFIG;

// Application configuration, grouped by concern. Values are compile-time
// constants so there is no runtime config parsing to go wrong.

pub mod api;
mod debug;
pub mod persistence;
pub mod plot;

pub use api::FOREX_API;
pub use debug::DEBUG_FLAGS;
pub use plot::PLOT_CONFIG;

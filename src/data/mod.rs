// Backend access and wire-format decoding
pub mod forex_api;
pub mod wire;

// Re-export commonly used types
pub use forex_api::{FetchError, ForexApi, RateDataSource, SharedDataSource};
pub use wire::decode_series;

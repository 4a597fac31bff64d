// Domain types and value objects
pub mod catalog;
pub mod filter;
pub mod period;
pub mod rate_point;

// Re-export commonly used types
pub use catalog::CurrencyCatalog;
pub use filter::{plan_refetch, RateFilter, SeriesRequest};
pub use period::Period;
pub use rate_point::{RatePoint, RateSeries};

//! Collaborator seams: market data input and price summaries.

pub mod market_data;
pub mod snapshot;

pub use market_data::{parse_series, JsonFileProvider, MarketDataProvider};
pub use snapshot::{quotes, summarize};

//! Value objects produced and consumed by the engine.

pub mod indicators;
pub mod levels;
pub mod series;
pub mod signal;
pub mod snapshot;
pub mod volatility;

pub use indicators::{
    BollingerBandsIndicator, Candle, IndicatorSet, MacdIndicator, StochasticIndicator,
};
pub use levels::{LevelSet, PriceLevel};
pub use series::PriceSeries;
pub use signal::{SignalSet, TechnicalAnalysis, Trend, TrendVote};
pub use snapshot::{MarketSnapshot, Quote};
pub use volatility::{RiskLevel, VolatilityReport};

//! Volatility indicators: Bollinger Bands, ATR, historical volatility, beta

pub mod atr;
pub mod beta;
pub mod bollinger;
pub mod historical;

pub use atr::*;
pub use beta::*;
pub use bollinger::*;
pub use historical::*;

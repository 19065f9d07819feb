//! Signal derivation and the engine entry points.

pub mod engine;
pub mod rules;
pub mod trend;

pub use engine::SignalEngine;
pub use rules::{derive_signals, macd_crossover, macd_side};
pub use trend::classify_trend;

//! Validated, immutable price series handed to the engine.

use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_candles;
use crate::models::indicators::Candle;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Bars in strictly ascending timestamp order.
///
/// The only way to build one is [`PriceSeries::new`], so every function taking
/// a `&PriceSeries` can rely on ordering and the OHLC invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<String>,
    candles: Vec<Candle>,
}

impl PriceSeries {
    pub fn new(candles: Vec<Candle>) -> Result<Self, IndicatorError> {
        validate_candles(&candles)?;
        Ok(Self {
            symbol: None,
            candles,
        })
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    pub fn current_price(&self) -> Option<f64> {
        self.last().map(|c| c.close)
    }

    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.last().map(|c| c.timestamp)
    }
}

//! Market data provider interface.
//!
//! The engine never fetches data itself; callers hand it a `PriceSeries`
//! obtained through an implementation of this trait.

use crate::indicators::error::IndicatorError;
use crate::models::indicators::Candle;
use crate::models::series::PriceSeries;
use std::path::PathBuf;

pub trait MarketDataProvider {
    /// Full validated history for a symbol.
    fn get_series(&self, symbol: &str) -> Result<PriceSeries, IndicatorError>;
}

/// Reads `<root>/<SYMBOL>.json`, a JSON array of candles.
pub struct JsonFileProvider {
    root: PathBuf,
}

impl JsonFileProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.root.join(format!("{}.json", symbol.to_ascii_uppercase()))
    }
}

impl MarketDataProvider for JsonFileProvider {
    fn get_series(&self, symbol: &str) -> Result<PriceSeries, IndicatorError> {
        let path = self.path_for(symbol);
        let raw = std::fs::read_to_string(&path).map_err(|e| IndicatorError::Parse {
            what: path.display().to_string(),
            message: e.to_string(),
        })?;
        let series = parse_series(&raw)?;
        Ok(series.with_symbol(symbol.to_ascii_uppercase()))
    }
}

/// Parse and validate a JSON array of candles.
pub fn parse_series(raw: &str) -> Result<PriceSeries, IndicatorError> {
    let candles: Vec<Candle> = serde_json::from_str(raw).map_err(|e| IndicatorError::Parse {
        what: "price series".to_string(),
        message: e.to_string(),
    })?;
    PriceSeries::new(candles)
}

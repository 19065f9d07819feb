//! Engine configuration: every window and threshold the engine uses.

use crate::indicators::error::IndicatorError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

/// Prefix for environment overrides, e.g. `MARKETLENS_RSI_PERIOD=21`.
pub const ENV_PREFIX: &str = "MARKETLENS_";

/// Which price feeds support/resistance detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremaSource {
    /// Local extrema of closes for both support and resistance.
    Close,
    /// Lows for support, highs for resistance.
    HighLow,
}

impl FromStr for ExtremaSource {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "close" => Ok(Self::Close),
            "high_low" | "highlow" => Ok(Self::HighLow),
            other => Err(IndicatorError::Parse {
                what: "extrema source".to_string(),
                message: format!("expected close or high_low, got {other}"),
            }),
        }
    }
}

/// Decimal places used when results are rendered for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Precision {
    pub price: u32,
    pub percent: u32,
    pub oscillator: u32,
    pub macd: u32,
    pub ratio: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            price: 2,
            percent: 2,
            oscillator: 2,
            macd: 4,
            ratio: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub sma_short: u32,
    pub sma_medium: u32,
    pub sma_long: u32,
    pub ema_fast: u32,
    pub ema_slow: u32,
    pub macd_signal: u32,
    /// Relative gap at or below which MACD and its signal line count as equal.
    pub macd_tolerance: f64,
    pub rsi_period: u32,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub stochastic_period: u32,
    pub stochastic_smoothing: u32,
    pub stochastic_oversold: f64,
    pub stochastic_overbought: f64,
    pub bollinger_period: u32,
    pub bollinger_std_dev: f64,
    /// Fraction of the band price that still counts as "near" it.
    pub near_band_pct: f64,
    pub atr_period: u32,
    /// Neighbouring bars on each side a local extremum must beat.
    pub extrema_order: u32,
    pub extrema_source: ExtremaSource,
    pub max_levels: usize,
    pub trading_days_per_year: f64,
    /// Annualized volatility above this is MEDIUM risk.
    pub risk_medium_threshold: f64,
    /// Annualized volatility above this is HIGH risk.
    pub risk_high_threshold: f64,
    /// Minimum winning votes before a trend other than NEUTRAL is reported.
    pub trend_min_votes: usize,
    pub precision: Precision,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sma_short: 20,
            sma_medium: 50,
            sma_long: 200,
            ema_fast: 12,
            ema_slow: 26,
            macd_signal: 9,
            macd_tolerance: 1e-9,
            rsi_period: 14,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            stochastic_period: 14,
            stochastic_smoothing: 3,
            stochastic_oversold: 20.0,
            stochastic_overbought: 80.0,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            near_band_pct: 0.02,
            atr_period: 14,
            extrema_order: 5,
            extrema_source: ExtremaSource::Close,
            max_levels: 3,
            trading_days_per_year: 252.0,
            risk_medium_threshold: 0.20,
            risk_high_threshold: 0.40,
            trend_min_votes: 2,
            precision: Precision::default(),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `MARKETLENS_*` variables (a `.env` file is read
    /// first if present).
    pub fn from_env() -> Result<Self, IndicatorError> {
        dotenvy::dotenv().ok();
        let mut config = Self::default();

        override_from_env("SMA_SHORT", &mut config.sma_short)?;
        override_from_env("SMA_MEDIUM", &mut config.sma_medium)?;
        override_from_env("SMA_LONG", &mut config.sma_long)?;
        override_from_env("EMA_FAST", &mut config.ema_fast)?;
        override_from_env("EMA_SLOW", &mut config.ema_slow)?;
        override_from_env("MACD_SIGNAL", &mut config.macd_signal)?;
        override_from_env("MACD_TOLERANCE", &mut config.macd_tolerance)?;
        override_from_env("RSI_PERIOD", &mut config.rsi_period)?;
        override_from_env("RSI_OVERSOLD", &mut config.rsi_oversold)?;
        override_from_env("RSI_OVERBOUGHT", &mut config.rsi_overbought)?;
        override_from_env("STOCHASTIC_PERIOD", &mut config.stochastic_period)?;
        override_from_env("STOCHASTIC_SMOOTHING", &mut config.stochastic_smoothing)?;
        override_from_env("STOCHASTIC_OVERSOLD", &mut config.stochastic_oversold)?;
        override_from_env("STOCHASTIC_OVERBOUGHT", &mut config.stochastic_overbought)?;
        override_from_env("BOLLINGER_PERIOD", &mut config.bollinger_period)?;
        override_from_env("BOLLINGER_STD_DEV", &mut config.bollinger_std_dev)?;
        override_from_env("NEAR_BAND_PCT", &mut config.near_band_pct)?;
        override_from_env("ATR_PERIOD", &mut config.atr_period)?;
        override_from_env("EXTREMA_ORDER", &mut config.extrema_order)?;
        override_from_env("EXTREMA_SOURCE", &mut config.extrema_source)?;
        override_from_env("MAX_LEVELS", &mut config.max_levels)?;
        override_from_env("TRADING_DAYS_PER_YEAR", &mut config.trading_days_per_year)?;
        override_from_env("RISK_MEDIUM_THRESHOLD", &mut config.risk_medium_threshold)?;
        override_from_env("RISK_HIGH_THRESHOLD", &mut config.risk_high_threshold)?;
        override_from_env("TREND_MIN_VOTES", &mut config.trend_min_votes)?;

        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, IndicatorError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| IndicatorError::Parse {
            what: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| IndicatorError::Parse {
            what: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), IndicatorError> {
        let windows = [
            ("sma_short", self.sma_short),
            ("sma_medium", self.sma_medium),
            ("sma_long", self.sma_long),
            ("ema_fast", self.ema_fast),
            ("ema_slow", self.ema_slow),
            ("macd_signal", self.macd_signal),
            ("rsi_period", self.rsi_period),
            ("stochastic_period", self.stochastic_period),
            ("stochastic_smoothing", self.stochastic_smoothing),
            ("bollinger_period", self.bollinger_period),
            ("atr_period", self.atr_period),
            ("extrema_order", self.extrema_order),
        ];
        if let Some((name, _)) = windows.iter().find(|(_, value)| *value == 0) {
            return Err(IndicatorError::InvalidConfig(format!("{name} must be > 0")));
        }

        if self.ema_fast >= self.ema_slow {
            return Err(IndicatorError::InvalidConfig(format!(
                "ema_fast ({}) must be shorter than ema_slow ({})",
                self.ema_fast, self.ema_slow
            )));
        }
        if self.rsi_oversold >= self.rsi_overbought {
            return Err(IndicatorError::InvalidConfig(
                "rsi_oversold must be below rsi_overbought".to_string(),
            ));
        }
        if self.stochastic_oversold >= self.stochastic_overbought {
            return Err(IndicatorError::InvalidConfig(
                "stochastic_oversold must be below stochastic_overbought".to_string(),
            ));
        }
        if self.risk_medium_threshold >= self.risk_high_threshold {
            return Err(IndicatorError::InvalidConfig(
                "risk_medium_threshold must be below risk_high_threshold".to_string(),
            ));
        }
        if !(self.bollinger_std_dev > 0.0) {
            return Err(IndicatorError::InvalidConfig(
                "bollinger_std_dev must be positive".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.macd_tolerance) {
            return Err(IndicatorError::InvalidConfig(
                "macd_tolerance must be in [0, 1)".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.near_band_pct) {
            return Err(IndicatorError::InvalidConfig(
                "near_band_pct must be in [0, 1)".to_string(),
            ));
        }
        if !(self.trading_days_per_year > 0.0) {
            return Err(IndicatorError::InvalidConfig(
                "trading_days_per_year must be positive".to_string(),
            ));
        }
        if self.max_levels == 0 {
            return Err(IndicatorError::InvalidConfig(
                "max_levels must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn override_from_env<T>(key: &str, target: &mut T) -> Result<(), IndicatorError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let name = format!("{ENV_PREFIX}{key}");
    if let Ok(raw) = env::var(&name) {
        *target = raw.trim().parse().map_err(|e: T::Err| IndicatorError::Parse {
            what: name.clone(),
            message: e.to_string(),
        })?;
    }
    Ok(())
}

/// Deployment environment, from `APP_ENV` (defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

//! Engine entry points: technical indicators, support/resistance, volatility.

use crate::config::EngineConfig;
use crate::indicators::momentum::{
    calculate_macd, calculate_macd_series, calculate_rsi, calculate_stochastic,
};
use crate::indicators::structure::calculate_support_resistance;
use crate::indicators::trend::{calculate_ema, calculate_sma};
use crate::indicators::volatility::{
    annualize_volatility, calculate_atr, calculate_atr_average, calculate_beta,
    calculate_bollinger_bands, calculate_daily_volatility, classify_risk,
};
use crate::models::indicators::IndicatorSet;
use crate::models::levels::LevelSet;
use crate::models::series::PriceSeries;
use crate::models::signal::TechnicalAnalysis;
use crate::models::volatility::VolatilityReport;
use crate::signals::rules::derive_signals;
use crate::signals::trend::classify_trend;
use tracing::{debug, info, warn};

pub struct SignalEngine;

impl SignalEngine {
    /// Latest value of every indicator. Indicators the series is too short
    /// for are `None`; the rest are still computed.
    pub fn compute_indicators(series: &PriceSeries, config: &EngineConfig) -> IndicatorSet {
        let candles = series.candles();
        IndicatorSet {
            sma_20: calculate_sma(candles, config.sma_short),
            sma_50: calculate_sma(candles, config.sma_medium),
            sma_200: calculate_sma(candles, config.sma_long),
            ema_12: calculate_ema(candles, config.ema_fast),
            ema_26: calculate_ema(candles, config.ema_slow),
            rsi: calculate_rsi(candles, config.rsi_period),
            macd: calculate_macd(candles, config.ema_fast, config.ema_slow, config.macd_signal),
            bollinger: calculate_bollinger_bands(
                candles,
                config.bollinger_period,
                config.bollinger_std_dev,
            ),
            stochastic: calculate_stochastic(
                candles,
                config.stochastic_period,
                config.stochastic_smoothing,
            ),
            atr: calculate_atr(candles, config.atr_period),
        }
    }

    /// Indicators, signals and overall trend for the latest bar.
    pub fn analyze(series: &PriceSeries, config: &EngineConfig) -> TechnicalAnalysis {
        let candles = series.candles();
        let indicators = Self::compute_indicators(series, config);

        let macd_series =
            calculate_macd_series(candles, config.ema_fast, config.ema_slow, config.macd_signal);
        let previous_macd = macd_series.len().checked_sub(2).and_then(|i| macd_series[i]);

        let current_price = series.current_price();
        let signals = derive_signals(current_price, &indicators, previous_macd, config);
        let overall_trend = classify_trend(&signals, config.trend_min_votes);

        let unavailable: Vec<String> = indicators
            .unavailable()
            .into_iter()
            .map(str::to_string)
            .collect();
        if !indicators.is_complete() {
            debug!(
                bars = candles.len(),
                unavailable = ?unavailable,
                "series too short for some indicators"
            );
        }

        info!(
            symbol = series.symbol().unwrap_or("-"),
            bars = candles.len(),
            trend = %overall_trend.trend,
            rsi = ?indicators.rsi,
            "technical analysis complete"
        );

        TechnicalAnalysis {
            symbol: series.symbol().map(str::to_string),
            current_price,
            date: series.last_timestamp(),
            bars: candles.len(),
            indicators,
            signals,
            overall_trend,
            unavailable,
        }
    }

    pub fn support_resistance(series: &PriceSeries, config: &EngineConfig) -> LevelSet {
        let mut levels = calculate_support_resistance(
            series.candles(),
            config.extrema_order,
            config.extrema_source,
            config.max_levels,
        );
        levels.symbol = series.symbol().map(str::to_string);

        info!(
            symbol = series.symbol().unwrap_or("-"),
            support = ?levels.nearest_support,
            resistance = ?levels.nearest_resistance,
            "support/resistance detected"
        );
        levels
    }

    /// Volatility metrics; beta only when a benchmark is given.
    pub fn volatility(
        series: &PriceSeries,
        benchmark: Option<&PriceSeries>,
        config: &EngineConfig,
    ) -> VolatilityReport {
        let candles = series.candles();
        let daily_volatility = calculate_daily_volatility(candles);
        let annualized_volatility =
            daily_volatility.map(|daily| annualize_volatility(daily, config.trading_days_per_year));
        let risk_level = annualized_volatility.map(|annual| {
            classify_risk(
                annual,
                config.risk_medium_threshold,
                config.risk_high_threshold,
            )
        });
        let beta = benchmark.and_then(|b| calculate_beta(candles, b.candles()));
        if let (Some(b), None) = (benchmark, beta) {
            warn!(
                symbol = series.symbol().unwrap_or("-"),
                benchmark = b.symbol().unwrap_or("-"),
                "beta undefined: too few common bars or a flat benchmark"
            );
        }

        info!(
            symbol = series.symbol().unwrap_or("-"),
            annualized = ?annualized_volatility,
            risk = ?risk_level,
            "volatility computed"
        );

        VolatilityReport {
            symbol: series.symbol().map(str::to_string),
            daily_volatility,
            annualized_volatility,
            atr: calculate_atr(candles, config.atr_period),
            atr_average: calculate_atr_average(candles, config.atr_period),
            beta,
            risk_level,
        }
    }
}

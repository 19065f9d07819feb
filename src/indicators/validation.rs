use crate::indicators::error::IndicatorError;
use crate::models::indicators::Candle;

/// Check a single bar's prices and volume.
pub fn validate_candle(index: usize, candle: &Candle) -> Result<(), IndicatorError> {
    let fields = [
        ("open", candle.open),
        ("high", candle.high),
        ("low", candle.low),
        ("close", candle.close),
        ("volume", candle.volume),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(IndicatorError::NonFiniteValue { index, field });
        }
    }

    if candle.volume < 0.0 {
        return Err(IndicatorError::NegativeVolume {
            index,
            volume: candle.volume,
        });
    }
    if candle.low < 0.0 {
        return Err(IndicatorError::InvalidBar {
            index,
            reason: format!("negative low {}", candle.low),
        });
    }
    if candle.high < candle.low {
        return Err(IndicatorError::InvalidBar {
            index,
            reason: format!("high {} below low {}", candle.high, candle.low),
        });
    }
    if candle.high < candle.open.max(candle.close) {
        return Err(IndicatorError::InvalidBar {
            index,
            reason: format!(
                "high {} below open/close ({}, {})",
                candle.high, candle.open, candle.close
            ),
        });
    }
    if candle.low > candle.open.min(candle.close) {
        return Err(IndicatorError::InvalidBar {
            index,
            reason: format!(
                "low {} above open/close ({}, {})",
                candle.low, candle.open, candle.close
            ),
        });
    }

    Ok(())
}

/// Check every bar and require strictly ascending timestamps.
///
/// Gaps between timestamps are fine; non-trading days simply have no bar.
pub fn validate_candles(candles: &[Candle]) -> Result<(), IndicatorError> {
    for (index, candle) in candles.iter().enumerate() {
        validate_candle(index, candle)?;
    }

    for (offset, pair) in candles.windows(2).enumerate() {
        let index = offset + 1;
        let (previous, current) = (pair[0].timestamp, pair[1].timestamp);
        if current == previous {
            return Err(IndicatorError::DuplicateTimestamp {
                index,
                timestamp: current,
            });
        }
        if current < previous {
            return Err(IndicatorError::UnsortedTimestamps {
                index,
                previous,
                current,
            });
        }
    }

    Ok(())
}

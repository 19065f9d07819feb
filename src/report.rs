//! Presentation boundary.
//!
//! The engine returns typed structs; this module flattens them into
//! `field -> value` pairs with fixed rounding, and renders those as JSON or
//! as `field: value` text lines for a summarizer to read. Missing values are
//! rendered as `null` / `unavailable`, never as a number.

use crate::common::math::round_to;
use crate::config::Precision;
use crate::indicators::registry::AnalysisReport;
use crate::models::levels::{LevelSet, PriceLevel};
use crate::models::signal::TechnicalAnalysis;
use crate::models::snapshot::MarketSnapshot;
use crate::models::volatility::VolatilityReport;
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Price(Option<f64>),
    /// Already scaled to percent.
    Percent(Option<f64>),
    Oscillator(Option<f64>),
    Macd(Option<f64>),
    Ratio(Option<f64>),
    Count(usize),
    Flag(bool),
    Text(Option<String>),
    /// Rendered as a JSON array of objects.
    List(Vec<Fields>),
}

impl FieldValue {
    fn rounded(&self, precision: &Precision) -> Option<f64> {
        let (value, decimals) = match self {
            FieldValue::Price(v) => (*v, precision.price),
            FieldValue::Percent(v) => (*v, precision.percent),
            FieldValue::Oscillator(v) => (*v, precision.oscillator),
            FieldValue::Macd(v) => (*v, precision.macd),
            FieldValue::Ratio(v) => (*v, precision.ratio),
            _ => return None,
        };
        value.map(|v| round_to(v, decimals))
    }

    pub fn to_json(&self, precision: &Precision) -> Value {
        match self {
            FieldValue::Count(n) => Value::from(*n),
            FieldValue::Flag(b) => Value::Bool(*b),
            FieldValue::Text(t) => t.clone().map(Value::String).unwrap_or(Value::Null),
            FieldValue::List(items) => Value::Array(
                items
                    .iter()
                    .map(|item| fields_to_json(item, precision))
                    .collect(),
            ),
            _ => self
                .rounded(precision)
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        }
    }

    pub fn to_text(&self, precision: &Precision) -> String {
        match self {
            FieldValue::Count(n) => n.to_string(),
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::Text(t) => t.clone().unwrap_or_else(|| "unavailable".to_string()),
            FieldValue::List(items) if items.is_empty() => "none".to_string(),
            FieldValue::List(items) => items
                .iter()
                .map(|item| {
                    item.iter()
                        .map(|(name, value)| format!("{name}={}", value.to_text(precision)))
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect::<Vec<_>>()
                .join("; "),
            FieldValue::Percent(_) => match self.rounded(precision) {
                Some(v) => format!("{:.*}%", precision.percent as usize, v),
                None => "unavailable".to_string(),
            },
            _ => {
                let decimals = match self {
                    FieldValue::Price(_) => precision.price,
                    FieldValue::Oscillator(_) => precision.oscillator,
                    FieldValue::Macd(_) => precision.macd,
                    _ => precision.ratio,
                };
                match self.rounded(precision) {
                    Some(v) => format!("{:.*}", decimals as usize, v),
                    None => "unavailable".to_string(),
                }
            }
        }
    }
}

pub type Fields = Vec<(String, FieldValue)>;

/// Flatten a result into ordered `field -> value` pairs. Nested values use
/// dotted names (`indicators.rsi`).
pub trait ReportFields {
    fn fields(&self) -> Fields;
}

fn push(fields: &mut Fields, name: impl Into<String>, value: FieldValue) {
    fields.push((name.into(), value));
}

fn fraction_to_pct(value: Option<f64>) -> Option<f64> {
    value.map(|v| v * 100.0)
}

impl ReportFields for MarketSnapshot {
    fn fields(&self) -> Fields {
        let mut f = Fields::new();
        push(&mut f, "symbol", FieldValue::Text(self.symbol.clone()));
        push(&mut f, "current_price", FieldValue::Price(Some(self.current_price)));
        push(&mut f, "previous_close", FieldValue::Price(Some(self.previous_close)));
        push(&mut f, "change", FieldValue::Price(Some(self.change)));
        push(&mut f, "change_pct", FieldValue::Percent(self.change_pct));
        push(&mut f, "volume", FieldValue::Ratio(Some(self.volume)));
        push(&mut f, "average_volume", FieldValue::Ratio(Some(self.average_volume)));
        push(&mut f, "period_high", FieldValue::Price(Some(self.period_high)));
        push(&mut f, "period_low", FieldValue::Price(Some(self.period_low)));
        push(&mut f, "bars", FieldValue::Count(self.bars));
        push(
            &mut f,
            "latest.date",
            FieldValue::Text(Some(self.latest.timestamp.format("%Y-%m-%d").to_string())),
        );
        push(&mut f, "latest.open", FieldValue::Price(Some(self.latest.open)));
        push(&mut f, "latest.high", FieldValue::Price(Some(self.latest.high)));
        push(&mut f, "latest.low", FieldValue::Price(Some(self.latest.low)));
        push(&mut f, "latest.close", FieldValue::Price(Some(self.latest.close)));
        push(&mut f, "latest.volume", FieldValue::Ratio(Some(self.latest.volume)));
        f
    }
}

impl ReportFields for TechnicalAnalysis {
    fn fields(&self) -> Fields {
        let ind = &self.indicators;
        let sig = &self.signals;
        let mut f = Fields::new();

        push(&mut f, "symbol", FieldValue::Text(self.symbol.clone()));
        push(&mut f, "current_price", FieldValue::Price(self.current_price));
        push(
            &mut f,
            "date",
            FieldValue::Text(self.date.map(|d| d.format("%Y-%m-%d").to_string())),
        );
        push(&mut f, "bars", FieldValue::Count(self.bars));

        push(&mut f, "indicators.rsi", FieldValue::Oscillator(ind.rsi));
        push(&mut f, "indicators.macd", FieldValue::Macd(ind.macd.map(|m| m.macd)));
        push(&mut f, "indicators.macd_signal", FieldValue::Macd(ind.macd.map(|m| m.signal)));
        push(
            &mut f,
            "indicators.macd_histogram",
            FieldValue::Macd(ind.macd.map(|m| m.histogram)),
        );
        push(&mut f, "indicators.sma_20", FieldValue::Price(ind.sma_20));
        push(&mut f, "indicators.sma_50", FieldValue::Price(ind.sma_50));
        push(&mut f, "indicators.sma_200", FieldValue::Price(ind.sma_200));
        push(&mut f, "indicators.ema_12", FieldValue::Price(ind.ema_12));
        push(&mut f, "indicators.ema_26", FieldValue::Price(ind.ema_26));
        push(&mut f, "indicators.bb_upper", FieldValue::Price(ind.bollinger.map(|b| b.upper)));
        push(&mut f, "indicators.bb_middle", FieldValue::Price(ind.bollinger.map(|b| b.middle)));
        push(&mut f, "indicators.bb_lower", FieldValue::Price(ind.bollinger.map(|b| b.lower)));
        push(
            &mut f,
            "indicators.stochastic_k",
            FieldValue::Oscillator(ind.stochastic.map(|s| s.k)),
        );
        push(
            &mut f,
            "indicators.stochastic_d",
            FieldValue::Oscillator(ind.stochastic.and_then(|s| s.d)),
        );
        push(&mut f, "indicators.atr", FieldValue::Price(ind.atr));

        let flags = [
            ("rsi_oversold", sig.rsi_oversold),
            ("rsi_overbought", sig.rsi_overbought),
            ("rsi_neutral", sig.rsi_neutral),
            ("stochastic_oversold", sig.stochastic_oversold),
            ("stochastic_overbought", sig.stochastic_overbought),
            ("macd_bullish_crossover", sig.macd_bullish_crossover),
            ("macd_bearish_crossover", sig.macd_bearish_crossover),
            ("macd_above_signal", sig.macd_above_signal),
            ("macd_below_signal", sig.macd_below_signal),
            ("price_above_sma20", sig.price_above_sma20),
            ("price_below_sma20", sig.price_below_sma20),
            ("price_above_sma50", sig.price_above_sma50),
            ("price_below_sma50", sig.price_below_sma50),
            ("price_above_sma200", sig.price_above_sma200),
            ("price_below_sma200", sig.price_below_sma200),
            ("golden_cross", sig.golden_cross),
            ("death_cross", sig.death_cross),
            ("price_near_upper_band", sig.price_near_upper_band),
            ("price_near_lower_band", sig.price_near_lower_band),
        ];
        for (name, value) in flags {
            push(&mut f, format!("signals.{name}"), FieldValue::Flag(value));
        }

        push(
            &mut f,
            "overall_trend",
            FieldValue::Text(Some(self.overall_trend.trend.to_string())),
        );
        push(&mut f, "bullish_votes", FieldValue::Count(self.overall_trend.bullish_votes));
        push(&mut f, "bearish_votes", FieldValue::Count(self.overall_trend.bearish_votes));
        if !self.unavailable.is_empty() {
            push(&mut f, "unavailable", FieldValue::Text(Some(self.unavailable.join(","))));
        }
        f
    }
}

fn push_levels(fields: &mut Fields, name: &str, levels: &[PriceLevel]) {
    let items = levels
        .iter()
        .map(|level| {
            vec![
                ("price".to_string(), FieldValue::Price(Some(level.price))),
                ("distance_pct".to_string(), FieldValue::Percent(level.distance_pct)),
            ]
        })
        .collect();
    push(fields, name, FieldValue::List(items));
}

impl ReportFields for LevelSet {
    fn fields(&self) -> Fields {
        let mut f = Fields::new();
        push(&mut f, "symbol", FieldValue::Text(self.symbol.clone()));
        push(&mut f, "current_price", FieldValue::Price(self.current_price));
        push(&mut f, "nearest_support", FieldValue::Price(self.nearest_support));
        push(&mut f, "nearest_resistance", FieldValue::Price(self.nearest_resistance));
        push(&mut f, "distance_to_support_pct", FieldValue::Percent(self.distance_to_support_pct));
        push(
            &mut f,
            "distance_to_resistance_pct",
            FieldValue::Percent(self.distance_to_resistance_pct),
        );
        push_levels(&mut f, "support_levels", &self.support_levels);
        push_levels(&mut f, "resistance_levels", &self.resistance_levels);
        f
    }
}

impl ReportFields for VolatilityReport {
    fn fields(&self) -> Fields {
        let mut f = Fields::new();
        push(&mut f, "symbol", FieldValue::Text(self.symbol.clone()));
        push(
            &mut f,
            "volatility_daily_pct",
            FieldValue::Percent(fraction_to_pct(self.daily_volatility)),
        );
        push(
            &mut f,
            "volatility_annual_pct",
            FieldValue::Percent(fraction_to_pct(self.annualized_volatility)),
        );
        push(&mut f, "atr_current", FieldValue::Price(self.atr));
        push(&mut f, "atr_average", FieldValue::Price(self.atr_average));
        push(&mut f, "beta", FieldValue::Ratio(self.beta));
        push(
            &mut f,
            "risk_level",
            FieldValue::Text(self.risk_level.map(|r| r.to_string())),
        );
        f
    }
}

impl ReportFields for AnalysisReport {
    fn fields(&self) -> Fields {
        let mut f = vec![(
            "tool".to_string(),
            FieldValue::Text(Some(self.tool().name().to_string())),
        )];
        match self {
            AnalysisReport::MarketSnapshot(Some(snapshot)) => f.extend(snapshot.fields()),
            AnalysisReport::MarketSnapshot(None) => {
                push(&mut f, "bars", FieldValue::Count(0));
            }
            AnalysisReport::TechnicalIndicators(analysis) => f.extend(analysis.fields()),
            AnalysisReport::SupportResistance(levels) => f.extend(levels.fields()),
            AnalysisReport::Volatility(report) => f.extend(report.fields()),
        }
        f
    }
}

fn insert_path(map: &mut Map<String, Value>, path: &[&str], value: Value) {
    match path {
        [] => {}
        [leaf] => {
            map.insert(leaf.to_string(), value);
        }
        [head, rest @ ..] => {
            let entry = map
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(child) = entry {
                insert_path(child, rest, value);
            }
        }
    }
}

fn fields_to_json(fields: &[(String, FieldValue)], precision: &Precision) -> Value {
    let mut root = Map::new();
    for (name, value) in fields {
        let path: Vec<&str> = name.split('.').collect();
        insert_path(&mut root, &path, value.to_json(precision));
    }
    Value::Object(root)
}

/// Nested JSON object built from the dotted field names.
pub fn render_json(report: &impl ReportFields, precision: &Precision) -> Value {
    fields_to_json(&report.fields(), precision)
}

/// One `field: value` line per field.
pub fn render_text(report: &impl ReportFields, precision: &Precision) -> String {
    report
        .fields()
        .iter()
        .map(|(name, value)| format!("{name}: {}", value.to_text(precision)))
        .collect::<Vec<_>>()
        .join("\n")
}

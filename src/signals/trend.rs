//! Overall trend decision table.
//!
//! Each row is a pair of opposing signals; at most one side of a row votes.
//!
//! | row              | bullish vote        | bearish vote          |
//! |------------------|---------------------|-----------------------|
//! | short average    | close > SMA20       | close < SMA20         |
//! | medium average   | close > SMA50       | close < SMA50         |
//! | long average     | close > SMA200      | close < SMA200        |
//! | cross            | golden_cross        | death_cross           |
//! | MACD             | macd > signal       | macd < signal         |
//! | RSI              | rsi_oversold        | rsi_overbought        |
//! | stochastic       | stochastic_oversold | stochastic_overbought |
//!
//! BULLISH when bullish votes outnumber bearish ones and reach the configured
//! minimum, BEARISH symmetrically, NEUTRAL otherwise.

use crate::models::signal::{SignalSet, Trend, TrendVote};
use tracing::trace;

type Rule = fn(&SignalSet) -> bool;

const VOTE_TABLE: [(&str, Rule, Rule); 7] = [
    ("sma_short", |s| s.price_above_sma20, |s| s.price_below_sma20),
    ("sma_medium", |s| s.price_above_sma50, |s| s.price_below_sma50),
    ("sma_long", |s| s.price_above_sma200, |s| s.price_below_sma200),
    ("sma_cross", |s| s.golden_cross, |s| s.death_cross),
    ("macd", |s| s.macd_above_signal, |s| s.macd_below_signal),
    ("rsi", |s| s.rsi_oversold, |s| s.rsi_overbought),
    ("stochastic", |s| s.stochastic_oversold, |s| s.stochastic_overbought),
];

pub fn classify_trend(signals: &SignalSet, min_votes: usize) -> TrendVote {
    let bullish: Vec<&str> = VOTE_TABLE
        .iter()
        .filter(|(_, bull, _)| bull(signals))
        .map(|(row, _, _)| *row)
        .collect();
    let bearish: Vec<&str> = VOTE_TABLE
        .iter()
        .filter(|(_, _, bear)| bear(signals))
        .map(|(row, _, _)| *row)
        .collect();
    trace!(?bullish, ?bearish, "trend votes");

    let bullish_votes = bullish.len();
    let bearish_votes = bearish.len();

    let trend = if bullish_votes > bearish_votes && bullish_votes >= min_votes {
        Trend::Bullish
    } else if bearish_votes > bullish_votes && bearish_votes >= min_votes {
        Trend::Bearish
    } else {
        Trend::Neutral
    };

    TrendVote {
        trend,
        bullish_votes,
        bearish_votes,
    }
}

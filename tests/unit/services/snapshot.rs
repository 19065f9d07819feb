//! Unit tests for price summaries

use crate::fixtures::{assert_close, candles_from_hlc, series_from_closes};
use marketlens::models::series::PriceSeries;
use marketlens::services::snapshot::{quotes, summarize};

#[test]
fn test_summarize_latest_bar() {
    let series = PriceSeries::new(candles_from_hlc(&[
        (101.0, 99.0, 100.0),
        (106.0, 98.0, 105.0),
        (104.0, 102.0, 103.0),
    ]))
    .unwrap()
    .with_symbol("ACME");

    let snapshot = summarize(&series).unwrap();
    assert_eq!(snapshot.symbol.as_deref(), Some("ACME"));
    assert_eq!(snapshot.current_price, 103.0);
    assert_eq!(snapshot.previous_close, 105.0);
    assert_eq!(snapshot.change, -2.0);
    assert_close(snapshot.change_pct.unwrap(), -2.0 / 105.0 * 100.0, 1e-12);
    assert_eq!(snapshot.period_high, 106.0);
    assert_eq!(snapshot.period_low, 98.0);
    assert_eq!(snapshot.average_volume, 1000.0);
    assert_eq!(snapshot.bars, 3);
    assert_eq!(snapshot.latest.close, 103.0);
}

#[test]
fn test_summarize_single_bar_has_zero_change() {
    let snapshot = summarize(&series_from_closes(&[42.0])).unwrap();
    assert_eq!(snapshot.previous_close, 42.0);
    assert_eq!(snapshot.change, 0.0);
    assert_eq!(snapshot.change_pct, Some(0.0));
}

#[test]
fn test_summarize_zero_previous_close() {
    let snapshot = summarize(&series_from_closes(&[0.0, 5.0])).unwrap();
    assert_eq!(snapshot.change, 5.0);
    assert_eq!(snapshot.change_pct, None);
}

#[test]
fn test_summarize_empty_series() {
    assert!(summarize(&series_from_closes(&[])).is_none());
}

#[test]
fn test_quotes_skip_empty_and_label_unnamed() {
    let series = vec![
        series_from_closes(&[10.0, 11.0]).with_symbol("AAA"),
        series_from_closes(&[]),
        series_from_closes(&[20.0, 19.0]),
    ];
    let quotes = quotes(&series);

    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].symbol, "AAA");
    assert_close(quotes[0].change_pct.unwrap(), 10.0, 1e-12);
    assert_eq!(quotes[1].symbol, "#2");
    assert_eq!(quotes[1].price, 19.0);
}

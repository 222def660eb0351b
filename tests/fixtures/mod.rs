#![allow(dead_code)]

use overlay_ta::{Sample, X};
use serde::{Deserialize, de::DeserializeOwned};

/// OHLC bar parsed from the hourly CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    pub x: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl From<&RefBar> for Sample {
    fn from(bar: &RefBar) -> Self {
        Sample::Ohlc([bar.open, bar.high, bar.low, bar.close])
    }
}

/// Reference value with its x.
#[derive(Debug, Deserialize)]
pub struct RefValue {
    pub x: f64,
    pub expected: f64,
}

/// Reference band row with its x.
#[derive(Debug, Deserialize)]
pub struct RefBands {
    pub x: f64,
    pub top: f64,
    pub middle: f64,
    pub bottom: f64,
}

/// Owned source data; borrow it with `overlay_ta::Series::new`.
pub struct RefSeries {
    pub x_data: Vec<X>,
    pub y_data: Vec<Sample>,
}

const OHLC_PATH: &str = "tests/fixtures/data/btcusdt-1h.csv";

/// Load the reference OHLC bars as parallel x / sample vectors.
pub fn load_reference_series() -> RefSeries {
    let bars: Vec<RefBar> = load_records(OHLC_PATH, "invalid OHLC record");
    RefSeries {
        x_data: bars.iter().map(|bar| bar.x).collect(),
        y_data: bars.iter().map(Sample::from).collect(),
    }
}

/// Load single-value reference data (SMA).
pub fn load_ref_values(path: &str) -> Vec<RefValue> {
    load_records(path, "invalid reference record")
}

/// Load band reference data (top, middle, bottom).
pub fn load_bands_ref(path: &str) -> Vec<RefBands> {
    load_records(path, "invalid band reference record")
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}

// src/test_util.rs

use crate::{Price, Sample, X};

/// Asserts that two `f64` values are approximately equal using a
/// relative epsilon of `4 * f64::EPSILON`.
macro_rules! assert_approx {
    ($actual:expr, $expected:expr) => {{
        let (a, e) = ($actual, $expected);
        assert!(
            (a - e).abs() < e.abs() * 4.0 * f64::EPSILON,
            "assert_approx failed: actual={a}, expected={e}, diff={}",
            (a - e).abs(),
        );
    }};
}

pub(crate) use assert_approx;

/// Scalar samples from plain values.
pub fn scalars(values: &[Price]) -> Vec<Sample> {
    values.iter().copied().map(Sample::Scalar).collect()
}

/// Strictly increasing x values `1, 2, …, len`.
#[allow(clippy::cast_precision_loss)]
pub fn xs(len: usize) -> Vec<X> {
    (1..=len).map(|i| i as X).collect()
}

/// OHLC sample.
pub fn ohlc(open: Price, high: Price, low: Price, close: Price) -> Sample {
    Sample::Ohlc([open, high, low, close])
}

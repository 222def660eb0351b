use crate::{Price, Series, ValueIndex};

/// Sample standard deviation of the selected field over `window`.
///
/// Uses Bessel's correction: squared deviations from `mean` are divided by
/// `n − 1`. `mean` is taken as given, so callers that already averaged the
/// window do not pay for a second pass.
///
/// Returns `None` for windows with fewer than two samples, where the
/// corrected variance is undefined.
///
/// # Example
///
/// ```
/// use overlay_ta::{Sample, Series, ValueIndex, sample_std_dev};
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [1.0, 2.0, 3.0].map(Sample::Scalar);
/// let window = Series::new(&x, &y).unwrap();
///
/// assert_eq!(sample_std_dev(&window, ValueIndex::Close, 2.0), Some(1.0));
/// ```
#[must_use]
pub fn sample_std_dev(window: &Series<'_>, value_index: ValueIndex, mean: Price) -> Option<Price> {
    let n = window.len();
    if n < 2 {
        return None;
    }

    let sum_of_squares: f64 = window
        .values(value_index)
        .map(|value| {
            let deviation = value - mean;
            deviation * deviation
        })
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let variance = sum_of_squares / (n - 1) as f64;

    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Sample,
        test_util::{assert_approx, scalars, xs},
    };

    #[test]
    fn bessel_corrected() {
        // mean 5, squared deviations sum to 32, 32 / 7
        let y = scalars(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let x = xs(y.len());
        let window = Series::new(&x, &y).unwrap();
        let sd = sample_std_dev(&window, ValueIndex::Close, 5.0).unwrap();
        assert_approx!(sd, (32.0_f64 / 7.0).sqrt());
    }

    #[test]
    fn constant_window_is_zero() {
        let y = scalars(&[3.0, 3.0, 3.0]);
        let x = xs(y.len());
        let window = Series::new(&x, &y).unwrap();
        assert_eq!(sample_std_dev(&window, ValueIndex::Close, 3.0), Some(0.0));
    }

    #[test]
    fn single_sample_is_undefined() {
        let y = scalars(&[3.0]);
        let x = xs(1);
        let window = Series::new(&x, &y).unwrap();
        assert_eq!(sample_std_dev(&window, ValueIndex::Close, 3.0), None);
    }

    #[test]
    fn empty_window_is_undefined() {
        let window = Series::new(&[], &[]).unwrap();
        assert_eq!(sample_std_dev(&window, ValueIndex::Close, 0.0), None);
    }

    #[test]
    fn reads_selected_ohlc_field() {
        // highs 4 and 6: mean 5, deviations ±1, variance 2 / 1
        let y = vec![
            Sample::Ohlc([0.0, 4.0, 0.0, 100.0]),
            Sample::Ohlc([0.0, 6.0, 0.0, -100.0]),
        ];
        let x = xs(2);
        let window = Series::new(&x, &y).unwrap();
        let sd = sample_std_dev(&window, ValueIndex::High, 5.0).unwrap();
        assert_approx!(sd, 2.0_f64.sqrt());
    }
}

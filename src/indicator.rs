use crate::{Error, Price, Series, ValueIndex, X};

use std::{
    fmt::{Debug, Display},
    hash::Hash,
    num::NonZero,
};

/// Configuration for a technical [`Indicator`].
///
/// Every indicator has a corresponding config type that holds its parameters
/// (period, value index, etc). Configs are value types: cheap to clone,
/// compare, and hash. A config that exists has been validated.
pub trait IndicatorConfig: Sized + PartialEq + Eq + Hash + Display + Debug {
    /// Builder type for constructing this config.
    type Builder: IndicatorConfigBuilder<Self>;

    /// Returns a new builder with default values.
    fn builder() -> Self::Builder;

    /// Window length (number of samples).
    fn period(&self) -> NonZero<usize>;

    /// Field read from OHLC samples.
    fn value_index(&self) -> ValueIndex;
}

/// Builder for an [`IndicatorConfig`].
///
/// Every option has a default, so builders are always complete.
pub trait IndicatorConfigBuilder<Config>
where
    Config: IndicatorConfig,
{
    /// Sets the window length.
    #[must_use]
    fn period(self, period: NonZero<usize>) -> Self;

    /// Sets the OHLC field to read.
    #[must_use]
    fn value_index(self, value_index: ValueIndex) -> Self;

    /// Validates the options and builds the config.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the combination of options is invalid for
    /// the indicator.
    fn build(self) -> Result<Config, Error>;
}

/// A batch technical indicator.
///
/// Indicators hold only their configuration. Every call to
/// [`compute`](Indicator::compute) rebuilds the output from the whole
/// series, and returns `None` while the series is shorter than one window.
///
/// # Example
///
/// ```
/// use overlay_ta::{Indicator, Sample, Series, Sma, SmaConfig};
/// use std::num::NonZero;
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [10.0, 20.0, 30.0].map(Sample::Scalar);
/// let series = Series::new(&x, &y).unwrap();
///
/// let sma = Sma::new(SmaConfig::close(NonZero::new(3).unwrap()));
/// let output = sma.compute(&series).unwrap();
///
/// assert_eq!(output.x_data(), &[3.0]);
/// assert_eq!(output.y_data(), &[[20.0]]);
///
/// let short = Series::new(&x[..2], &y[..2]).unwrap();
/// assert!(sma.compute(&short).is_none());
/// ```
pub trait Indicator: Sized + Clone + Display + Debug {
    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Computed output type, an
    /// [`IndicatorOutput`](crate::IndicatorOutput) with one column per
    /// output line.
    type Output: Send + Sync + Clone + Debug;

    /// Creates a new indicator from the given config.
    fn new(config: Self::Config) -> Self;

    /// The config this indicator was built from.
    fn config(&self) -> &Self::Config;

    /// Computes the indicator over every full window of `series`, or
    /// returns `None` if there is no full window yet.
    fn compute(&self, series: &Series<'_>) -> Option<Self::Output>;
}

/// Per-window average used as the middle line of composite indicators.
///
/// Composite indicators take their average as a type parameter and build
/// it from their own period and value index, so the averaging step can be
/// swapped without touching the band logic.
pub trait MovingAverage: Clone + Debug + Send + Sync {
    /// Builds an average over windows of `period` samples.
    fn with_window(period: NonZero<usize>, value_index: ValueIndex) -> Self;

    /// Averages the most recent `period` samples of `window` and anchors
    /// the result at the window's last x. `None` if the window is short.
    fn average(&self, window: &Series<'_>) -> Option<(X, Price)>;
}

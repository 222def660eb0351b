use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    num::NonZero,
};

use crate::{
    Error, Indicator, IndicatorConfig, IndicatorConfigBuilder, IndicatorOutput, IndicatorStyle,
    MovingAverage, MultiLine, Row, Series, Sma, ValueIndex, params::DEFAULT_PERIOD,
    sample_std_dev,
};

/// Standard deviation multiplier for Bollinger Bands.
///
/// Wraps a positive, finite `f64`. Defaults to `2.0` (the standard
/// Bollinger Bands setting).
///
/// Implements `Eq` and `Hash` via bit-level comparison, which is safe because
/// NaN is rejected at construction.
#[derive(Clone, Copy, Debug)]
pub struct StdDev(f64);

impl StdDev {
    /// Creates a new standard deviation multiplier.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `value` is zero, negative, infinite
    /// or NaN.
    pub fn new(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::invalid("standardDeviation", "must be finite"));
        }
        if value <= 0.0 {
            return Err(Error::invalid("standardDeviation", "must be positive"));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for StdDev {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for StdDev {}

impl Hash for StdDev {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Default for StdDev {
    fn default() -> Self {
        Self(2.0)
    }
}

/// Configuration for the Bollinger Bands ([`Bb`]) indicator.
///
/// The period must be at least 2: the bands use the sample standard
/// deviation, which is undefined for a single value.
///
/// # Example
///
/// ```
/// use overlay_ta::{BbConfig, IndicatorConfig, IndicatorConfigBuilder, StdDev};
/// use std::num::NonZero;
///
/// // Default: period 20, close, 2.0 std devs
/// let config = BbConfig::builder()
///     .period(NonZero::new(10).unwrap())
///     .std_dev(StdDev::new(2.5).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.period().get(), 10);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct BbConfig {
    period: NonZero<usize>,
    value_index: ValueIndex,
    std_dev: StdDev,
}

impl IndicatorConfig for BbConfig {
    type Builder = BbConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        BbConfigBuilder::new()
    }

    #[inline]
    fn period(&self) -> NonZero<usize> {
        self.period
    }

    #[inline]
    fn value_index(&self) -> ValueIndex {
        self.value_index
    }
}

impl BbConfig {
    /// Standard deviation multiplier for the top and bottom bands.
    #[inline]
    #[must_use]
    pub fn std_dev(&self) -> StdDev {
        self.std_dev
    }

    /// BB with custom period, close price, 2σ.
    ///
    /// # Errors
    ///
    /// [`Error::DegeneratePeriod`] if `period` is 1.
    pub fn close(period: NonZero<usize>) -> Result<Self, Error> {
        Self::builder().period(period).build()
    }
}

impl Default for BbConfig {
    /// BB(20, Close, 2σ), the standard Bollinger Bands setting.
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            value_index: ValueIndex::Close,
            std_dev: StdDev::default(),
        }
    }
}

impl Display for BbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BbConfig({}, {}, {})",
            self.period,
            self.value_index,
            self.std_dev.value()
        )
    }
}

/// Builder for [`BbConfig`].
///
/// Defaults: period = 20, value index = [`ValueIndex::Close`],
/// `std_dev` = `2.0`.
pub struct BbConfigBuilder {
    period: NonZero<usize>,
    value_index: ValueIndex,
    std_dev: StdDev,
}

impl BbConfigBuilder {
    fn new() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            value_index: ValueIndex::Close,
            std_dev: StdDev::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn std_dev(mut self, std_dev: StdDev) -> Self {
        self.std_dev = std_dev;
        self
    }
}

impl IndicatorConfigBuilder<BbConfig> for BbConfigBuilder {
    #[inline]
    fn period(mut self, period: NonZero<usize>) -> Self {
        self.period = period;
        self
    }

    #[inline]
    fn value_index(mut self, value_index: ValueIndex) -> Self {
        self.value_index = value_index;
        self
    }

    fn build(self) -> Result<BbConfig, Error> {
        if self.period.get() < 2 {
            tracing::debug!(period = self.period.get(), "rejected Bollinger Bands period");
            return Err(Error::DegeneratePeriod {
                period: self.period.get(),
            });
        }

        Ok(BbConfig {
            period: self.period,
            value_index: self.value_index,
            std_dev: self.std_dev,
        })
    }
}

/// Bollinger Bands (BB).
///
/// A volatility indicator consisting of three lines: a moving average
/// (middle) with top and bottom bands offset by a configurable number of
/// sample standard deviations of the same window.
///
/// ```text
/// top    = MA + k × σ
/// middle = MA
/// bottom = MA − k × σ
/// ```
///
/// Rows are laid out as `[top, middle, bottom]`, see [`MultiLine`]. The
/// average is a type parameter and defaults to [`Sma`].
///
/// # Example
///
/// ```
/// use overlay_ta::{Bb, BbConfig, Sample, Series};
/// use std::num::NonZero;
///
/// let x: Vec<f64> = (1..=10).map(f64::from).collect();
/// let y: Vec<Sample> = x.iter().copied().map(Sample::Scalar).collect();
/// let series = Series::new(&x, &y).unwrap();
///
/// let bb = Bb::new(BbConfig::close(NonZero::new(3).unwrap()).unwrap());
/// let output = bb.compute(&series).unwrap();
///
/// // window [1, 2, 3]: mean 2, sample σ 1
/// assert_eq!(output.y_data()[0], [4.0, 2.0, 0.0]);
/// ```
#[derive(Clone, Debug)]
pub struct Bb<M = Sma> {
    config: BbConfig,
    average: M,
    std_dev_multiplier: f64,
    style: IndicatorStyle,
}

impl<M: MovingAverage> Bb<M> {
    /// Replaces the line styling.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if a line width is not positive and
    /// finite.
    pub fn with_style(mut self, style: IndicatorStyle) -> Result<Self, Error> {
        style.validate()?;
        self.style = style;
        Ok(self)
    }
}

impl<M: MovingAverage> Indicator for Bb<M> {
    type Config = BbConfig;
    type Output = IndicatorOutput<3>;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            average: M::with_window(config.period, config.value_index),
            std_dev_multiplier: config.std_dev.0,
            style: IndicatorStyle::default(),
        }
    }

    #[inline]
    fn config(&self) -> &BbConfig {
        &self.config
    }

    fn compute(&self, series: &Series<'_>) -> Option<IndicatorOutput<3>> {
        if series.len() < self.config.period.get() {
            tracing::debug!(
                period = self.config.period.get(),
                len = series.len(),
                "not enough samples for Bollinger Bands"
            );
            return None;
        }

        let output: Option<IndicatorOutput<3>> = series
            .windows(self.config.period)
            .map(|window| {
                let (x, middle) = self.average.average(&window)?;
                let std_dev = sample_std_dev(&window, self.config.value_index, middle)?;
                let offset = self.std_dev_multiplier * std_dev;

                Some(Row::new(x, [middle + offset, middle, middle - offset]))
            })
            .collect();

        if let Some(output) = &output {
            tracing::trace!(rows = output.len(), "computed {self}");
        }
        output
    }
}

impl<M> MultiLine<3> for Bb<M> {
    const LINE_NAMES: [&'static str; 3] = ["top", "middle", "bottom"];
    const PRIMARY_LINE: &'static str = "middle";

    fn style(&self) -> &IndicatorStyle {
        &self.style
    }
}

impl<M> Display for Bb<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BB({}, {}, {})",
            self.config.period, self.config.value_index, self.std_dev_multiplier,
        )
    }
}

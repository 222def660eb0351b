use std::{
    fmt::{Debug, Display},
    num::NonZero,
};

use crate::{
    Error, Indicator, IndicatorConfig, IndicatorConfigBuilder, IndicatorOutput, MovingAverage,
    Price, Row, Series, ValueIndex, X, params::DEFAULT_PERIOD,
};

/// Configuration for the Simple Moving Average ([`Sma`]) indicator.
///
/// # Example
///
/// ```rust
/// use overlay_ta::{IndicatorConfig, SmaConfig};
/// use std::num::NonZero;
///
/// let config = SmaConfig::close(NonZero::new(20).unwrap());
/// assert_eq!(config.period().get(), 20);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct SmaConfig {
    period: NonZero<usize>,
    value_index: ValueIndex,
}

impl IndicatorConfig for SmaConfig {
    type Builder = SmaConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        SmaConfigBuilder::new()
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

impl SmaConfig {
    /// SMA on closing price.
    #[must_use]
    pub fn close(period: NonZero<usize>) -> Self {
        Self {
            period,
            value_index: ValueIndex::Close,
        }
    }
}

impl Default for SmaConfig {
    /// SMA(20, Close).
    fn default() -> Self {
        Self::close(DEFAULT_PERIOD)
    }
}

impl Display for SmaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SmaConfig({}, {})", self.period, self.value_index)
    }
}

/// Builder for [`SmaConfig`].
///
/// Defaults: period = 20, value index = [`ValueIndex::Close`].
pub struct SmaConfigBuilder {
    period: NonZero<usize>,
    value_index: ValueIndex,
}

impl SmaConfigBuilder {
    fn new() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            value_index: ValueIndex::Close,
        }
    }
}

impl IndicatorConfigBuilder<SmaConfig> for SmaConfigBuilder {
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

    #[inline]
    fn build(self) -> Result<SmaConfig, Error> {
        Ok(SmaConfig {
            period: self.period,
            value_index: self.value_index,
        })
    }
}

/// Simple Moving Average (SMA).
///
/// Computes the unweighted mean of every window of *n* samples, where *n*
/// is the configured period. Each row is anchored at the x of the window's
/// last sample. Returns `None` while the series is shorter than one window.
///
/// # Example
///
/// ```rust
/// use overlay_ta::{Sample, Series, Sma, SmaConfig};
/// use std::num::NonZero;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [10.0, 20.0, 30.0, 40.0].map(Sample::Scalar);
/// let series = Series::new(&x, &y).unwrap();
///
/// let sma = Sma::new(SmaConfig::close(NonZero::new(3).unwrap()));
/// let output = sma.compute(&series).unwrap();
///
/// assert_eq!(output.x_data(), &[3.0, 4.0]);
/// assert_eq!(output.y_data(), &[[20.0], [30.0]]);
/// ```
#[derive(Clone, Debug)]
pub struct Sma {
    config: SmaConfig,
    length: f64,
}

impl Indicator for Sma {
    type Config = SmaConfig;
    type Output = IndicatorOutput<1>;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            #[allow(clippy::cast_precision_loss)]
            length: config.period.get() as f64,
        }
    }

    #[inline]
    fn config(&self) -> &SmaConfig {
        &self.config
    }

    fn compute(&self, series: &Series<'_>) -> Option<IndicatorOutput<1>> {
        if series.len() < self.config.period.get() {
            tracing::debug!(
                period = self.config.period.get(),
                len = series.len(),
                "not enough samples for SMA"
            );
            return None;
        }

        let output: Option<IndicatorOutput<1>> = series
            .windows(self.config.period)
            .map(|window| {
                self.average(&window)
                    .map(|(x, mean)| Row::new(x, [mean]))
            })
            .collect();

        if let Some(output) = &output {
            tracing::trace!(rows = output.len(), "computed {self}");
        }
        output
    }
}

impl MovingAverage for Sma {
    fn with_window(period: NonZero<usize>, value_index: ValueIndex) -> Self {
        Self::new(SmaConfig {
            period,
            value_index,
        })
    }

    #[inline]
    fn average(&self, window: &Series<'_>) -> Option<(X, Price)> {
        let window = window.tail(self.config.period.get())?;
        let x = window.last_x()?;
        let sum: Price = window.values(self.config.value_index).sum();

        Some((x, sum / self.length))
    }
}

impl Display for Sma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SMA({}, {})", self.config.period, self.config.value_index)
    }
}

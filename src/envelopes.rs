use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    num::NonZero,
};

use crate::{
    Error, Indicator, IndicatorConfig, IndicatorConfigBuilder, IndicatorOutput, IndicatorStyle,
    MovingAverage, MultiLine, Row, Series, Sma, ValueIndex, params::DEFAULT_PERIOD,
};

/// Distance of an envelope band from the average, as a fraction of it.
///
/// `0.1` places the band at 110 % (top) or 90 % (bottom) of the average.
/// Must be finite and non-negative; defaults to `0.1`.
#[derive(Clone, Copy, Debug)]
pub struct Band(f64);

impl Band {
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `fraction` is negative or not finite.
    pub fn new(fraction: f64) -> Result<Self, Error> {
        if !(fraction.is_finite() && fraction >= 0.0) {
            return Err(Error::invalid(
                "band",
                format!("must be a finite non-negative fraction, got {fraction}"),
            ));
        }
        Ok(Self(fraction))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Band {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Band {}

impl Hash for Band {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Default for Band {
    fn default() -> Self {
        Self(0.1)
    }
}

/// Configuration for the price [`Envelopes`] indicator.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct EnvelopesConfig {
    period: NonZero<usize>,
    value_index: ValueIndex,
    top_band: Band,
    bottom_band: Band,
}

impl IndicatorConfig for EnvelopesConfig {
    type Builder = EnvelopesConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        EnvelopesConfigBuilder::new()
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

impl EnvelopesConfig {
    #[inline]
    #[must_use]
    pub fn top_band(&self) -> Band {
        self.top_band
    }

    #[inline]
    #[must_use]
    pub fn bottom_band(&self) -> Band {
        self.bottom_band
    }
}

impl Default for EnvelopesConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            value_index: ValueIndex::Close,
            top_band: Band::default(),
            bottom_band: Band::default(),
        }
    }
}

impl Display for EnvelopesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EnvelopesConfig({}, {}, {}, {})",
            self.period,
            self.value_index,
            self.top_band.value(),
            self.bottom_band.value()
        )
    }
}

/// Builder for [`EnvelopesConfig`].
///
/// Defaults: period = 20, value index = [`ValueIndex::Close`], both bands
/// `0.1`.
pub struct EnvelopesConfigBuilder {
    config: EnvelopesConfig,
}

impl EnvelopesConfigBuilder {
    fn new() -> Self {
        Self {
            config: EnvelopesConfig::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn top_band(mut self, band: Band) -> Self {
        self.config.top_band = band;
        self
    }

    #[inline]
    #[must_use]
    pub fn bottom_band(mut self, band: Band) -> Self {
        self.config.bottom_band = band;
        self
    }
}

impl IndicatorConfigBuilder<EnvelopesConfig> for EnvelopesConfigBuilder {
    #[inline]
    fn period(mut self, period: NonZero<usize>) -> Self {
        self.config.period = period;
        self
    }

    #[inline]
    fn value_index(mut self, value_index: ValueIndex) -> Self {
        self.config.value_index = value_index;
        self
    }

    #[inline]
    fn build(self) -> Result<EnvelopesConfig, Error> {
        Ok(self.config)
    }
}

/// Price envelopes.
///
/// Top and bottom lines at a fixed fraction above and below a moving
/// average. Shares the `[top, middle, bottom]` layout with
/// [`Bb`](crate::Bb).
///
/// ```text
/// top    = MA × (1 + top_band)
/// middle = MA
/// bottom = MA × (1 − bottom_band)
/// ```
#[derive(Clone, Debug)]
pub struct Envelopes<M = Sma> {
    config: EnvelopesConfig,
    average: M,
    style: IndicatorStyle,
}

impl<M: MovingAverage> Envelopes<M> {
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

impl<M: MovingAverage> Indicator for Envelopes<M> {
    type Config = EnvelopesConfig;
    type Output = IndicatorOutput<3>;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            average: M::with_window(config.period, config.value_index),
            style: IndicatorStyle::default(),
        }
    }

    #[inline]
    fn config(&self) -> &EnvelopesConfig {
        &self.config
    }

    fn compute(&self, series: &Series<'_>) -> Option<IndicatorOutput<3>> {
        if series.len() < self.config.period.get() {
            tracing::debug!(
                period = self.config.period.get(),
                len = series.len(),
                "not enough samples for envelopes"
            );
            return None;
        }

        let top = 1.0 + self.config.top_band.0;
        let bottom = 1.0 - self.config.bottom_band.0;

        let output: Option<IndicatorOutput<3>> = series
            .windows(self.config.period)
            .map(|window| {
                let (x, middle) = self.average.average(&window)?;
                Some(Row::new(x, [middle * top, middle, middle * bottom]))
            })
            .collect();

        if let Some(output) = &output {
            tracing::trace!(rows = output.len(), "computed {self}");
        }
        output
    }
}

impl<M> MultiLine<3> for Envelopes<M> {
    const LINE_NAMES: [&'static str; 3] = ["top", "middle", "bottom"];
    const PRIMARY_LINE: &'static str = "middle";

    fn style(&self) -> &IndicatorStyle {
        &self.style
    }
}

impl<M> Display for Envelopes<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ENV({}, {}, {}, {})",
            self.config.period,
            self.config.value_index,
            self.config.top_band.0,
            self.config.bottom_band.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{scalars, xs};
    use std::num::NonZero;

    fn envelopes(period: usize, top: f64, bottom: f64) -> Envelopes {
        Envelopes::new(
            EnvelopesConfig::builder()
                .period(NonZero::new(period).unwrap())
                .top_band(Band::new(top).unwrap())
                .bottom_band(Band::new(bottom).unwrap())
                .build()
                .unwrap(),
        )
    }

    fn run(env: &Envelopes, values: &[f64]) -> Option<IndicatorOutput<3>> {
        let y = scalars(values);
        let x = xs(y.len());
        env.compute(&Series::new(&x, &y).unwrap())
    }

    #[test]
    fn none_until_window_full() {
        assert!(run(&envelopes(3, 0.1, 0.1), &[1.0, 2.0]).is_none());
    }

    #[test]
    fn offsets_from_average() {
        // mean 100 → 110 / 100 / 80
        let out = run(&envelopes(2, 0.1, 0.2), &[90.0, 110.0]).unwrap();
        let [top, middle, bottom] = out.y_data()[0];
        assert!((top - 110.0).abs() < 1e-10);
        assert!((middle - 100.0).abs() < 1e-10);
        assert!((bottom - 80.0).abs() < 1e-10);
    }

    #[test]
    fn period_one_is_allowed() {
        let out = run(&envelopes(1, 0.5, 0.5), &[2.0, 4.0]).unwrap();
        assert_eq!(out.y_data(), &[[3.0, 2.0, 1.0], [6.0, 4.0, 2.0]]);
    }

    #[test]
    fn zero_bands_collapse_to_average() {
        let out = run(&envelopes(2, 0.0, 0.0), &[1.0, 3.0]).unwrap();
        assert_eq!(out.y_data(), &[[2.0, 2.0, 2.0]]);
    }

    #[test]
    fn band_rejects_negative_and_nan() {
        assert!(Band::new(-0.1).is_err());
        assert!(Band::new(f64::NAN).is_err());
        assert!(Band::new(0.0).is_ok());
    }

    #[test]
    fn shares_layout_with_bollinger_bands() {
        assert_eq!(
            <Envelopes as MultiLine<3>>::LINE_NAMES,
            <crate::Bb as MultiLine<3>>::LINE_NAMES
        );
        assert_eq!(Envelopes::<Sma>::primary_index(), 1);
    }

    #[test]
    fn defaults() {
        let config = EnvelopesConfig::builder().build().unwrap();
        assert_eq!(config, EnvelopesConfig::default());
        assert_eq!(config.to_string(), "EnvelopesConfig(20, Close, 0.1, 0.1)");
        assert_eq!(
            Envelopes::<Sma>::new(config).to_string(),
            "ENV(20, Close, 0.1, 0.1)"
        );
    }
}

//! Rolling-window overlay indicators for charting.
//!
//! Indicators read a borrowed [`Series`] of scalar or OHLC samples and
//! rebuild their whole [`IndicatorOutput`] on every call. Output is `None`
//! until the series holds at least one full window, and is never partially
//! filled.
//!
//! Each indicator type ([`Sma`], [`Bb`], [`Envelopes`]) exposes
//! [`new`](Sma::new), [`compute`](Sma::compute), and
//! [`config`](Sma::config) as inherent methods — no trait import needed.
//! Import [`Indicator`] only for generic code. Indicators with more than one
//! output line also implement [`MultiLine`], which names the columns of each
//! row and resolves their line styles.

mod bb;
mod envelopes;
mod error;
mod indicator;
mod multi_line;
mod output;
mod params;
mod series;
mod sma;
mod std_dev;
mod style;
mod value_index;

pub use crate::error::Error;
pub use crate::indicator::{Indicator, IndicatorConfig, IndicatorConfigBuilder, MovingAverage};
pub use crate::multi_line::MultiLine;
pub use crate::output::{IndicatorOutput, Row};
pub use crate::params::{EnvelopesParams, Params};
pub use crate::series::{Price, Sample, Series, X};
pub use crate::std_dev::sample_std_dev;
pub use crate::style::{
    Color, DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH, IndicatorStyle, LineDescriptor,
    LineStyleOverride,
};
pub use crate::value_index::ValueIndex;

pub use crate::bb::{Bb, BbConfig, BbConfigBuilder, StdDev};
pub use crate::envelopes::{Band, Envelopes, EnvelopesConfig, EnvelopesConfigBuilder};
pub use crate::sma::{Sma, SmaConfig, SmaConfigBuilder};

macro_rules! impl_indicator_methods {
    ($type:ty, $config:ty, $output:ty) => {
        impl $type {
            /// See [`Indicator::new`].
            #[must_use]
            pub fn new(config: $config) -> Self {
                <Self as Indicator>::new(config)
            }

            /// See [`Indicator::compute`].
            #[inline]
            #[must_use]
            pub fn compute(&self, series: &Series<'_>) -> Option<$output> {
                <Self as Indicator>::compute(self, series)
            }

            /// See [`Indicator::config`].
            #[must_use]
            #[inline]
            pub fn config(&self) -> &$config {
                <Self as Indicator>::config(self)
            }
        }
    };
}

impl_indicator_methods!(Sma, SmaConfig, IndicatorOutput<1>);
impl_indicator_methods!(Bb, BbConfig, IndicatorOutput<3>);
impl_indicator_methods!(Envelopes, EnvelopesConfig, IndicatorOutput<3>);

#[cfg(test)]
mod test_util;

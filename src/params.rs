use crate::{
    Band, BbConfig, EnvelopesConfig, Error, IndicatorConfig, IndicatorConfigBuilder, SmaConfig,
    StdDev, ValueIndex,
};

use serde::{Deserialize, Serialize};
use std::num::NonZero;

pub(crate) const DEFAULT_PERIOD: NonZero<usize> = NonZero::new(20).unwrap();

/// Loosely typed options of the moving average and Bollinger Bands.
///
/// Mirrors a chart option object: keys are camelCase, missing keys take
/// their defaults and unknown keys are ignored. Values are only checked when
/// converting into a config.
///
/// ```
/// use overlay_ta::{BbConfig, IndicatorConfig, Params};
///
/// let params: Params = serde_json::from_str(r#"{"period": 10, "index": 0}"#).unwrap();
/// let config = BbConfig::try_from(params).unwrap();
///
/// assert_eq!(config.period().get(), 10);
/// assert_eq!(config.std_dev().value(), 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Params {
    /// Window length, default 20.
    pub period: i64,
    /// Band multiplier, default 2. Ignored by the moving average.
    pub standard_deviation: f64,
    /// OHLC field, 0 to 3, default 3 (close).
    pub value_index: i64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            period: 20,
            standard_deviation: 2.0,
            value_index: 3,
        }
    }
}

/// Loosely typed options of the price envelopes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvelopesParams {
    /// Window length, default 20.
    pub period: i64,
    /// Top band as a fraction of the average, default 0.1.
    pub top_band: f64,
    /// Bottom band as a fraction of the average, default 0.1.
    pub bottom_band: f64,
    /// OHLC field, 0 to 3, default 3 (close).
    pub value_index: i64,
}

impl Default for EnvelopesParams {
    fn default() -> Self {
        Self {
            period: 20,
            top_band: 0.1,
            bottom_band: 0.1,
            value_index: 3,
        }
    }
}

fn period(value: i64) -> Result<NonZero<usize>, Error> {
    usize::try_from(value)
        .ok()
        .and_then(NonZero::new)
        .ok_or_else(|| Error::invalid("period", format!("must be a positive integer, got {value}")))
}

impl TryFrom<Params> for SmaConfig {
    type Error = Error;

    fn try_from(params: Params) -> Result<Self, Self::Error> {
        SmaConfig::builder()
            .period(period(params.period)?)
            .value_index(ValueIndex::try_from(params.value_index)?)
            .build()
    }
}

impl TryFrom<Params> for BbConfig {
    type Error = Error;

    fn try_from(params: Params) -> Result<Self, Self::Error> {
        BbConfig::builder()
            .period(period(params.period)?)
            .value_index(ValueIndex::try_from(params.value_index)?)
            .std_dev(StdDev::new(params.standard_deviation)?)
            .build()
    }
}

impl TryFrom<EnvelopesParams> for EnvelopesConfig {
    type Error = Error;

    fn try_from(params: EnvelopesParams) -> Result<Self, Self::Error> {
        EnvelopesConfig::builder()
            .period(period(params.period)?)
            .value_index(ValueIndex::try_from(params.value_index)?)
            .top_band(Band::new(params.top_band)?)
            .bottom_band(Band::new(params.bottom_band)?)
            .build()
    }
}

use crate::Error;

use std::fmt::{Debug, Display};

/// Field read from OHLC samples before feeding into an indicator.
///
/// Scalar samples have a single value and ignore the index. Numeric form
/// follows the sample layout: `0` open, `1` high, `2` low, `3` close.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub enum ValueIndex {
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// Closing price.
    #[default]
    Close,
}

impl ValueIndex {
    /// Offset of the field inside an OHLC sample.
    #[inline]
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Self::Open => 0,
            Self::High => 1,
            Self::Low => 2,
            Self::Close => 3,
        }
    }
}

impl TryFrom<i64> for ValueIndex {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Open),
            1 => Ok(Self::High),
            2 => Ok(Self::Low),
            3 => Ok(Self::Close),
            other => Err(Error::invalid(
                "valueIndex",
                format!("expected 0 to 3, got {other}"),
            )),
        }
    }
}

impl Display for ValueIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

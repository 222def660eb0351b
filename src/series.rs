use crate::{Error, ValueIndex};

use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, num::NonZero};

/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
pub type Price = f64;

/// Position of a sample on the x axis, usually a timestamp in
/// milliseconds.
pub type X = f64;

/// A single y value of the source series.
///
/// Deserializes from either a bare number or a four-element
/// `[open, high, low, close]` array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sample {
    /// Plain value, e.g. a line series point.
    Scalar(Price),
    /// Open, high, low, close.
    Ohlc([Price; 4]),
}

impl Sample {
    /// Value of the field selected by `index`. Scalars ignore the index.
    #[inline]
    #[must_use]
    pub fn value(self, index: ValueIndex) -> Price {
        match self {
            Self::Scalar(value) => value,
            Self::Ohlc(fields) => fields[index.position()],
        }
    }
}

impl From<Price> for Sample {
    fn from(value: Price) -> Self {
        Self::Scalar(value)
    }
}

impl From<[Price; 4]> for Sample {
    fn from(fields: [Price; 4]) -> Self {
        Self::Ohlc(fields)
    }
}

/// Borrowed view over a caller-owned source series.
///
/// `x_data` and `y_data` are parallel: `y_data[i]` is the sample at
/// `x_data[i]`. Construction checks that both have the same length and
/// that `x` is strictly increasing; every window taken from a valid
/// series is itself valid.
///
/// # Example
///
/// ```
/// use overlay_ta::{Sample, Series};
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [Sample::Scalar(10.0), Sample::Scalar(11.0), Sample::Scalar(12.0)];
/// let series = Series::new(&x, &y).unwrap();
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.last_x(), Some(3.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Series<'a> {
    x_data: &'a [X],
    y_data: &'a [Sample],
}

impl<'a> Series<'a> {
    /// Wraps the given slices without copying them.
    ///
    /// # Errors
    ///
    /// [`Error::MisalignedSeries`] if the slices differ in length,
    /// [`Error::UnorderedSeries`] if `x` is not strictly increasing
    /// (NaN never compares as increasing).
    pub fn new(x_data: &'a [X], y_data: &'a [Sample]) -> Result<Self, Error> {
        if x_data.len() != y_data.len() {
            return Err(Error::MisalignedSeries {
                x_len: x_data.len(),
                y_len: y_data.len(),
            });
        }

        if let Some(pos) = x_data
            .windows(2)
            .position(|pair| pair[0].partial_cmp(&pair[1]) != Some(Ordering::Less))
        {
            return Err(Error::UnorderedSeries { index: pos + 1 });
        }

        Ok(Self { x_data, y_data })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.x_data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn x_data(&self) -> &'a [X] {
        self.x_data
    }

    #[inline]
    #[must_use]
    pub fn y_data(&self) -> &'a [Sample] {
        self.y_data
    }

    /// x of the most recent sample.
    #[inline]
    #[must_use]
    pub fn last_x(&self) -> Option<X> {
        self.x_data.last().copied()
    }

    /// Selected field of every sample, oldest first.
    pub fn values(&self, index: ValueIndex) -> impl Iterator<Item = Price> + 'a {
        self.y_data.iter().map(move |sample| sample.value(index))
    }

    /// The last `len` samples, or `None` if the series is shorter.
    #[must_use]
    pub fn tail(&self, len: usize) -> Option<Self> {
        let start = self.len().checked_sub(len)?;
        Some(Self {
            x_data: &self.x_data[start..],
            y_data: &self.y_data[start..],
        })
    }

    /// Every contiguous window of `period` samples, ordered by end index.
    ///
    /// Yields nothing when the series is shorter than `period`.
    pub fn windows(&self, period: NonZero<usize>) -> impl Iterator<Item = Series<'a>> + 'a {
        self.x_data
            .windows(period.get())
            .zip(self.y_data.windows(period.get()))
            .map(|(x_data, y_data)| Series { x_data, y_data })
    }
}

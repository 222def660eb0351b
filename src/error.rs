/// Errors reported while building configs or wrapping source data.
///
/// Running out of data is not an error: indicators return `None` from
/// `compute` until the series holds at least one full window.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A configuration option is out of its accepted range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The sample standard deviation of a single-value window divides by
    /// zero, so Bollinger Bands require a period of at least 2.
    #[error("period {period} leaves the sample standard deviation undefined, use at least 2")]
    DegeneratePeriod { period: usize },

    /// `x` values are not strictly increasing at `index`.
    #[error("x values must be strictly increasing, violated at index {index}")]
    UnorderedSeries { index: usize },

    /// `x` and `y` slices differ in length.
    #[error("series has {x_len} x values but {y_len} y values")]
    MisalignedSeries { x_len: usize, y_len: usize },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        let error = Self::InvalidParameter {
            name,
            reason: reason.into(),
        };
        tracing::debug!(%error, "rejected indicator parameter");
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message() {
        let e = Error::invalid("period", "must be positive");
        assert_eq!(e.to_string(), "invalid parameter `period`: must be positive");
    }

    #[test]
    fn degenerate_period_message() {
        let e = Error::DegeneratePeriod { period: 1 };
        assert_eq!(
            e.to_string(),
            "period 1 leaves the sample standard deviation undefined, use at least 2"
        );
    }

    #[test]
    fn misaligned_series_message() {
        let e = Error::MisalignedSeries { x_len: 3, y_len: 2 };
        assert_eq!(e.to_string(), "series has 3 x values but 2 y values");
    }
}

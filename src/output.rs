use crate::{Price, X};

use std::fmt::Display;

/// One computed row: the x of the window's last sample and one value per
/// output line, in the indicator's line order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Row<const N: usize> {
    x: X,
    values: [Price; N],
}

impl<const N: usize> Row<N> {
    #[inline]
    #[must_use]
    pub fn new(x: X, values: [Price; N]) -> Self {
        Self { x, values }
    }

    #[inline]
    #[must_use]
    pub fn x(&self) -> X {
        self.x
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Price; N] {
        &self.values
    }
}

impl<const N: usize> Display for Row<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}", self.x)?;
        for value in &self.values {
            write!(f, ", {value}")?;
        }
        write!(f, ")")
    }
}

/// Result of a full recomputation over a source series.
///
/// Holds three parallel views of the same rows: the rows themselves, their
/// x values, and their value vectors. All three always have the same length
/// and order. The only way to build one is to collect complete rows, and
/// nothing hands out mutable access, so consumers see an immutable
/// snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorOutput<const N: usize> {
    values: Vec<Row<N>>,
    x_data: Vec<X>,
    y_data: Vec<[Price; N]>,
}

impl<const N: usize> IndicatorOutput<N> {
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Row<N>] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn x_data(&self) -> &[X] {
        &self.x_data
    }

    #[inline]
    #[must_use]
    pub fn y_data(&self) -> &[[Price; N]] {
        &self.y_data
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Row at `index`, for position lookups by annotation layers.
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row<N>> {
        self.values.get(index)
    }

    /// `(x, value)` of output line `line` at row `index`.
    #[must_use]
    pub fn point(&self, index: usize, line: usize) -> Option<(X, Price)> {
        let row = self.values.get(index)?;
        row.values.get(line).map(|&value| (row.x, value))
    }

    /// All `(x, value)` points of output line `line`. Empty if `line` is
    /// out of range.
    pub fn line(&self, line: usize) -> impl Iterator<Item = (X, Price)> + '_ {
        self.values
            .iter()
            .filter_map(move |row| row.values.get(line).map(|&value| (row.x, value)))
    }
}

impl<const N: usize> FromIterator<Row<N>> for IndicatorOutput<N> {
    fn from_iter<I: IntoIterator<Item = Row<N>>>(iter: I) -> Self {
        let values: Vec<Row<N>> = iter.into_iter().collect();
        let x_data = values.iter().map(Row::x).collect();
        let y_data = values.iter().map(|row| row.values).collect();

        Self {
            values,
            x_data,
            y_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> IndicatorOutput<3> {
        [
            Row::new(1.0, [3.0, 2.0, 1.0]),
            Row::new(2.0, [6.0, 4.0, 2.0]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn views_stay_parallel() {
        let out = output();
        assert_eq!(out.len(), 2);
        assert_eq!(out.x_data(), &[1.0, 2.0]);
        assert_eq!(out.y_data(), &[[3.0, 2.0, 1.0], [6.0, 4.0, 2.0]]);
        assert_eq!(out.values()[1].values(), &[6.0, 4.0, 2.0]);
    }

    #[test]
    fn empty_collect() {
        let out: IndicatorOutput<1> = std::iter::empty().collect();
        assert!(out.is_empty());
        assert!(out.x_data().is_empty());
        assert!(out.y_data().is_empty());
    }

    #[test]
    fn point_lookup() {
        let out = output();
        assert_eq!(out.point(1, 0), Some((2.0, 6.0)));
        assert_eq!(out.point(0, 2), Some((1.0, 1.0)));
        assert_eq!(out.point(2, 0), None);
        assert_eq!(out.point(0, 3), None);
    }

    #[test]
    fn row_lookup() {
        let out = output();
        assert_eq!(out.row(0).map(Row::x), Some(1.0));
        assert!(out.row(5).is_none());
    }

    #[test]
    fn line_iterates_one_column() {
        let out = output();
        let middle: Vec<_> = out.line(1).collect();
        assert_eq!(middle, vec![(1.0, 2.0), (2.0, 4.0)]);
        assert_eq!(out.line(9).count(), 0);
    }

    #[test]
    fn row_display() {
        assert_eq!(Row::new(5.0, [1.5, 2.0]).to_string(), "(5, 1.5, 2)");
    }
}

use crate::{IndicatorOutput, IndicatorStyle, LineDescriptor, Price, Row, X};

/// Named output lines of an indicator that yields more than one value per
/// row.
///
/// Each multi-line indicator implements this on its own. Renderers and
/// tooltips can then treat any of them alike: `LINE_NAMES` gives the
/// meaning of each column of [`IndicatorOutput::y_data`], `PRIMARY_LINE`
/// names the column shown where only one value fits, and
/// [`line_descriptors`](MultiLine::line_descriptors) gives the resolved
/// style of every line.
pub trait MultiLine<const N: usize> {
    /// Row-vector layout, one name per output line.
    const LINE_NAMES: [&'static str; N];

    /// Line used by single-value consumers. Must be one of `LINE_NAMES`.
    const PRIMARY_LINE: &'static str;

    /// Styling options the descriptors are resolved from.
    fn style(&self) -> &IndicatorStyle;

    /// Column of the primary line.
    #[must_use]
    fn primary_index() -> usize {
        Self::LINE_NAMES
            .into_iter()
            .position(|name| name == Self::PRIMARY_LINE)
            .unwrap_or(0)
    }

    /// Primary value of one row.
    #[must_use]
    fn primary_value(row: &Row<N>) -> Price {
        row.values()[Self::primary_index()]
    }

    /// `(x, primary value)` of every row.
    fn primary_points(output: &IndicatorOutput<N>) -> impl Iterator<Item = (X, Price)> + '_ {
        output.line(Self::primary_index())
    }

    /// Resolved style of every line, in layout order.
    #[must_use]
    fn line_descriptors(&self) -> Vec<LineDescriptor> {
        Self::LINE_NAMES
            .into_iter()
            .map(|name| self.style().resolve(name))
            .collect()
    }
}

use crate::Error;

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt::Display};

/// Line width used when neither the line nor the indicator sets one.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Line color used when neither the line nor the indicator sets one.
pub const DEFAULT_LINE_COLOR: &str = "#000000";

/// A CSS-style color string, passed through to the renderer untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    #[must_use]
    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Explicit style for one output line. Unset fields fall through to the
/// indicator color, then to the built-in defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineStyleOverride {
    pub line_width: Option<f64>,
    pub line_color: Option<Color>,
}

/// Styling options of a multi-line indicator.
///
/// Resolution order for each line, first match wins:
///
/// 1. the line's entry in `lines`,
/// 2. `color`, the indicator's own assigned color (color only),
/// 3. [`DEFAULT_LINE_WIDTH`] / [`DEFAULT_LINE_COLOR`].
///
/// Entries in `lines` whose name is not one of the indicator's lines are
/// ignored.
///
/// ```
/// use overlay_ta::{Color, IndicatorStyle};
///
/// let style: IndicatorStyle = serde_json::from_str(
///     r##"{"color": "#2f7ed8", "lines": {"top": {"lineWidth": 2}}}"##,
/// ).unwrap();
///
/// let top = style.resolve("top");
/// assert_eq!(top.line_width, 2.0);
/// assert_eq!(top.line_color, Color::new("#2f7ed8"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndicatorStyle {
    pub color: Option<Color>,
    pub lines: BTreeMap<String, LineStyleOverride>,
}

impl IndicatorStyle {
    /// Sets the indicator's assigned color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the explicit style of one line.
    #[must_use]
    pub fn with_line(mut self, name: impl Into<String>, style: LineStyleOverride) -> Self {
        self.lines.insert(name.into(), style);
        self
    }

    /// Checks every explicit line width.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if a width is not positive and finite.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, line) in &self.lines {
            if let Some(width) = line.line_width
                && !(width.is_finite() && width > 0.0)
            {
                return Err(Error::invalid(
                    "lineWidth",
                    format!("line `{name}` must have a positive finite width, got {width}"),
                ));
            }
        }
        Ok(())
    }

    /// Resolved style of the line called `name`.
    #[must_use]
    pub fn resolve(&self, name: &'static str) -> LineDescriptor {
        let line = self.lines.get(name);

        let line_width = line
            .and_then(|line| line.line_width)
            .unwrap_or(DEFAULT_LINE_WIDTH);
        let line_color = line
            .and_then(|line| line.line_color.clone())
            .or_else(|| self.color.clone())
            .unwrap_or_else(|| Color::new(DEFAULT_LINE_COLOR));

        LineDescriptor {
            name,
            line_width,
            line_color,
        }
    }
}

/// Fully resolved style of one output line, handed to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct LineDescriptor {
    pub name: &'static str,
    pub line_width: f64,
    pub line_color: Color,
}

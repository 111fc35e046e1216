//! Axis configuration, titles, and tick label formatting.

use std::sync::Arc;

use crate::geom::ScreenPoint;
use crate::render::ImageHandle;

/// Formatter for axis tick labels.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Three decimals with thousands separators, e.g. `1,234.500`.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Wrap a formatting closure.
    pub fn custom(formatter: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(formatter))
    }

    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => format_grouped(value, 3),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

/// Fixed-point formatting with comma-grouped thousands.
fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = digits.split_at(digits.find('.').unwrap_or(digits.len()));

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
    // Rounded-away negatives such as -0.0001 print without a sign.
    if value < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(frac_part);
    out
}

/// Axis title content.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisTitle {
    /// Plain text.
    Text(String),
    /// Host-supplied image (2D charts only; 3D charts fall back to the axis letter).
    Image(ImageHandle),
}

impl From<&str> for AxisTitle {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AxisTitle {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<ImageHandle> for AxisTitle {
    fn from(image: ImageHandle) -> Self {
        Self::Image(image)
    }
}

/// Per-axis configuration.
#[derive(Debug, Clone, Default)]
pub struct AxisConfig {
    title: Option<AxisTitle>,
    formatter: AxisFormatter,
}

impl AxisConfig {
    /// Create a configuration with the default title and formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the axis title.
    pub fn with_title(mut self, title: impl Into<AxisTitle>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the axis formatter.
    pub fn with_formatter(mut self, formatter: AxisFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Access the axis title, if one was set.
    pub fn title(&self) -> Option<&AxisTitle> {
        self.title.as_ref()
    }

    /// Replace the axis title.
    pub fn set_title(&mut self, title: impl Into<AxisTitle>) {
        self.title = Some(title.into());
    }

    /// Access the formatter.
    pub fn formatter(&self) -> &AxisFormatter {
        &self.formatter
    }

    /// Title text, falling back to `fallback` for images or unset titles.
    pub(crate) fn title_text<'a>(&'a self, fallback: &'a str) -> &'a str {
        match &self.title {
            Some(AxisTitle::Text(text)) => text,
            _ => fallback,
        }
    }
}

/// A positioned tick label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Value in data units.
    pub value: f64,
    /// Formatted text.
    pub text: String,
    /// Baseline anchor in pixels.
    pub position: ScreenPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formatter_groups_thousands() {
        let formatter = AxisFormatter::default();
        assert_eq!(formatter.format(0.0), "0.000");
        assert_eq!(formatter.format(0.4), "0.400");
        assert_eq!(formatter.format(1234.5), "1,234.500");
        assert_eq!(formatter.format(-1234567.0), "-1,234,567.000");
        assert_eq!(formatter.format(999.9996), "1,000.000");
        assert_eq!(formatter.format(-0.0001), "0.000");
    }

    #[test]
    fn custom_formatter_is_used() {
        let formatter = AxisFormatter::custom(|v| format!("{v:.0} s"));
        assert_eq!(formatter.format(12.4), "12 s");
    }

    #[test]
    fn image_titles_fall_back_to_text() {
        let image = AxisConfig::new().with_title(ImageHandle::new(()));
        assert_eq!(image.title_text("X"), "X");
        let text = AxisConfig::new().with_title("time");
        assert_eq!(text.title_text("X"), "time");
    }
}

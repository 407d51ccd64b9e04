//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`Style`] - The per-cell style bundle
//! - [`FontStyle`] - Font settings
//! - [`FillStyle`] - Background fill
//! - [`BorderStyle`] - Cell borders
//! - [`Alignment`] - Text alignment
//! - [`NumberFormat`] - Display format for numbers
//! - [`Color`] - Color representation
//!
//! Every attribute of a [`Style`] is optional. An absent attribute means the
//! cell inherits the workbook default, which is different from an explicitly
//! set default value.

mod alignment;
mod border;
mod color;
mod fill;
mod font;
mod number_format;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{BorderEdge, BorderLineStyle, BorderSide, BorderStyle};
pub use color::Color;
pub use fill::{FillPattern, FillStyle};
pub use font::FontStyle;
pub use number_format::NumberFormat;

/// Style bundle attached to a cell
///
/// All parts are owned values; cloning a style never shares state with the
/// original.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    /// Font settings
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub font: Option<FontStyle>,
    /// Border settings
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub border: Option<BorderStyle>,
    /// Fill/background settings
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub fill: Option<FillStyle>,
    /// Text alignment
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub alignment: Option<Alignment>,
    /// Number format
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub number_format: Option<NumberFormat>,
}

impl Style {
    /// Create a new style with no attributes set
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no attribute is set
    pub fn is_default(&self) -> bool {
        self.font.is_none()
            && self.border.is_none()
            && self.fill.is_none()
            && self.alignment.is_none()
            && self.number_format.is_none()
    }

    /// Set the border
    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = Some(border);
        self
    }

    /// Set the number format
    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = Some(format);
        self
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font_mut().bold = bold;
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font_mut().color = color;
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = Some(FillStyle::solid(color));
        self
    }

    /// Set a custom number format string
    pub fn number_format<S: Into<String>>(self, format: S) -> Self {
        self.with_number_format(NumberFormat::Custom(format.into()))
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.get_or_insert_with(Alignment::default).horizontal = Some(align);
        self
    }

    /// Get a mutable reference to font settings, creating default settings if absent
    pub fn font_mut(&mut self) -> &mut FontStyle {
        self.font.get_or_insert_with(FontStyle::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_style_is_default() {
        assert!(Style::new().is_default());
        assert!(!Style::new().bold(true).is_default());
    }

    #[test]
    fn test_builders_only_touch_their_attribute() {
        let style = Style::new().fill_color(Color::rgb(255, 0, 0));
        assert!(style.font.is_none());
        assert!(style.border.is_none());
        assert_eq!(style.fill, Some(FillStyle::solid(Color::rgb(255, 0, 0))));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Style::new().bold(true);
        let mut copy = original.clone();
        copy.font_mut().bold = false;

        assert_eq!(original.font.as_ref().map(|f| f.bold), Some(true));
    }
}

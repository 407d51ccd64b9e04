//! Font attributes

use super::Color;

/// Font attributes of a cell
///
/// `family` and `size` stay `None` when the template leaves them to the
/// workbook default font.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FontStyle {
    /// Typeface, e.g. "Calibri"
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub family: Option<String>,
    /// Size in points
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub size: Option<f64>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub color: Color,
}

impl FontStyle {
    /// A font that only names its typeface and size
    pub fn face<S: Into<String>>(family: S, size: f64) -> Self {
        Self {
            family: Some(family.into()),
            size: Some(size),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_leaves_emphasis_unset() {
        let font = FontStyle::face("Arial", 10.0);
        assert_eq!(font.family.as_deref(), Some("Arial"));
        assert_eq!(font.size, Some(10.0));
        assert!(!font.bold && !font.italic && !font.underline);
        assert_eq!(font.color, Color::Auto);
    }
}

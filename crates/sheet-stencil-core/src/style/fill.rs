//! Cell background fill

use super::Color;

/// Background fill of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FillStyle {
    pub pattern: FillPattern,
    /// Pattern color; the whole cell for a solid fill
    pub color: Color,
}

impl FillStyle {
    /// A solid fill
    pub fn solid(color: Color) -> Self {
        Self {
            pattern: FillPattern::Solid,
            color,
        }
    }
}

/// How the fill color is laid over the cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillPattern {
    #[default]
    Solid,
    LightGray,
    MediumGray,
    DarkGray,
}

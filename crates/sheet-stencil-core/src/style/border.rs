//! Cell borders

use super::Color;

/// Which side of a cell a border edge is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// Borders of a cell, one optional edge per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BorderStyle {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub left: Option<BorderEdge>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub right: Option<BorderEdge>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub top: Option<BorderEdge>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub bottom: Option<BorderEdge>,
}

impl BorderStyle {
    /// Borders with no edges drawn
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one side
    pub fn with_edge(mut self, side: BorderSide, line: BorderLineStyle, color: Color) -> Self {
        *self.edge_mut(side) = Some(BorderEdge { line, color });
        self
    }

    /// The edge drawn on `side`, if any
    pub fn edge(&self, side: BorderSide) -> Option<BorderEdge> {
        match side {
            BorderSide::Left => self.left,
            BorderSide::Right => self.right,
            BorderSide::Top => self.top,
            BorderSide::Bottom => self.bottom,
        }
    }

    fn edge_mut(&mut self, side: BorderSide) -> &mut Option<BorderEdge> {
        match side {
            BorderSide::Left => &mut self.left,
            BorderSide::Right => &mut self.right,
            BorderSide::Top => &mut self.top,
            BorderSide::Bottom => &mut self.bottom,
        }
    }
}

/// One drawn border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderEdge {
    pub line: BorderLineStyle,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderLineStyle {
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
}

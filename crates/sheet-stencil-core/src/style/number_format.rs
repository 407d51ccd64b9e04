//! Number format types

/// Number format for cell display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Built-in format by ID
    BuiltIn(u32),

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    /// 2 - 0.00
    pub const ID_NUMBER_DEC2: u32 = 2;
    /// 4 - #,##0.00
    pub const ID_NUMBER_SEP_DEC2: u32 = 4;
    /// 10 - 0.00%
    pub const ID_PERCENT_DEC2: u32 = 10;
    /// 14 - mm-dd-yy
    pub const ID_DATE_SHORT: u32 = 14;
    /// 49 - @
    pub const ID_TEXT: u32 = 49;

    /// Create a number format from a format string
    pub fn from_string<S: Into<String>>(format: S) -> Self {
        NumberFormat::Custom(format.into())
    }

    /// Create a built-in format by ID
    pub fn from_id(id: u32) -> Self {
        NumberFormat::BuiltIn(id)
    }

    /// The format code, where one is known
    pub fn format_code(&self) -> Option<&str> {
        match self {
            NumberFormat::General => Some("General"),
            NumberFormat::BuiltIn(Self::ID_NUMBER_DEC2) => Some("0.00"),
            NumberFormat::BuiltIn(Self::ID_NUMBER_SEP_DEC2) => Some("#,##0.00"),
            NumberFormat::BuiltIn(Self::ID_PERCENT_DEC2) => Some("0.00%"),
            NumberFormat::BuiltIn(Self::ID_DATE_SHORT) => Some("mm-dd-yy"),
            NumberFormat::BuiltIn(Self::ID_TEXT) => Some("@"),
            NumberFormat::BuiltIn(_) => None,
            NumberFormat::Custom(code) => Some(code),
        }
    }
}

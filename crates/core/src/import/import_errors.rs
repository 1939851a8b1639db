use thiserror::Error;

/// Errors raised inside an import stage.
///
/// None of these escape `process_portfolio_data`; they are turned into
/// `ValidationResult` messages at the stage boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    /// A cell could not be read as a number.
    #[error("could not parse '{value}' as a number")]
    Parse { value: String },

    /// The file does not have the shape of a CSV export.
    #[error("{0}")]
    Structure(String),

    /// The file bytes could not be decoded to text.
    #[error("could not decode file: {0}")]
    Encoding(String),

    /// A holding has no product name.
    #[error("product name is required")]
    MissingProductName,

    /// A value that must be zero or positive was negative.
    #[error("{field} cannot be negative ({value})")]
    Negative { field: &'static str, value: String },

    /// A derived amount exceeded the representable range.
    #[error("{0} is out of range")]
    Overflow(&'static str),
}

impl ImportError {
    pub fn parse(value: impl Into<String>) -> Self {
        Self::Parse {
            value: value.into(),
        }
    }

    pub fn structure(message: impl Into<String>) -> Self {
        Self::Structure(message.into())
    }
}

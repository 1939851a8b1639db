use serde::{Deserialize, Serialize};

use crate::portfolio::PortfolioItem;

use super::ColumnMapping;

/// Outcome of validating one import attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Valid exactly when there are no errors; warnings never invalidate.
    pub fn from_messages(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// A failed validation with a single error.
    pub fn failed(error: impl Into<String>) -> Self {
        Self::from_messages(vec![error.into()], Vec::new())
    }
}

/// Everything one call to `process_portfolio_data` produces.
///
/// Items, validation and column mapping always travel together so a
/// consumer never sees a mix of two imports.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub items: Vec<PortfolioItem>,
    pub validation: ValidationResult,
    pub detected_columns: ColumnMapping,
}

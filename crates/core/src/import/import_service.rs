//! Portfolio item builder.
//!
//! Runs tokenizing, column mapping, sanitizing and classification over an
//! export and collects the results. Every anticipated failure ends up in the
//! returned `ValidationResult`; nothing here panics or returns `Err` for bad
//! data.

use log::{debug, error, info, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::portfolio::{assign_portfolio_weights, NewPortfolioItem, PortfolioItem};
use crate::settings::AnalyticsConfig;

use super::column_mapping::{CanonicalField, ColumnMapping};
use super::csv_parser::{tokenize_csv, CsvRow};
use super::sanitizer::{parse_date, sanitize_numeric};
use super::{ImportError, ImportResult, ValidationResult};

/// Imports CSV text with default settings.
///
/// `column_override` replaces header detection; its field assignments are
/// validated exactly like detected ones.
pub fn process_portfolio_data(csv_text: &str, column_override: Option<&ColumnMapping>) -> ImportResult {
    process_portfolio_data_with_config(csv_text, column_override, &AnalyticsConfig::default())
}

/// Imports CSV text.
pub fn process_portfolio_data_with_config(
    csv_text: &str,
    column_override: Option<&ColumnMapping>,
    config: &AnalyticsConfig,
) -> ImportResult {
    let tokenized = match tokenize_csv(csv_text) {
        Ok(tokenized) => tokenized,
        Err(e) => {
            warn!("Portfolio import rejected: {}", e);
            return ImportResult {
                items: Vec::new(),
                validation: ValidationResult::failed(e.to_string()),
                detected_columns: ColumnMapping::from_headers(&[]),
            };
        }
    };

    info!(
        "Processing portfolio import: {} columns, {} data rows",
        tokenized.headers.len(),
        tokenized.rows.len()
    );

    let mapping = match column_override {
        Some(custom) => ColumnMapping {
            headers: tokenized.headers.clone(),
            detected: custom.detected.clone(),
        },
        None => ColumnMapping::from_headers(&tokenized.headers),
    };
    debug!("Column mapping: {:?}", mapping.detected);

    let missing = mapping.missing_required();
    if !missing.is_empty() {
        let message = missing_columns_message(&missing, &mapping.headers);
        warn!("Portfolio import rejected: {}", message);
        return ImportResult {
            items: Vec::new(),
            validation: ValidationResult::failed(message),
            detected_columns: mapping,
        };
    }

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = optional_column_warnings(&mapping);
    let mut items: Vec<PortfolioItem> = Vec::with_capacity(tokenized.rows.len());
    let mut running_total = Decimal::ZERO;
    let mut skipped_blank = 0usize;

    for (index, row) in tokenized.rows.iter().enumerate() {
        // 1-indexed, plus one for the header line
        let row_number = index + 2;

        if row.get_mapped(mapping.get(CanonicalField::ProductName)).trim().is_empty() {
            skipped_blank += 1;
            continue;
        }

        match build_item(row, &mapping, row_number, &mut warnings) {
            Ok(item) => match running_total.checked_add(item.total_market_value()) {
                Some(total) => {
                    running_total = total;
                    items.push(item);
                }
                None => {
                    let message = format!(
                        "Row {}: {}",
                        row_number,
                        ImportError::Overflow("Portfolio total")
                    );
                    warn!("{}", message);
                    errors.push(message);
                }
            },
            Err(message) => {
                warn!("{}", message);
                errors.push(message);
            }
        }
    }

    if skipped_blank > 0 {
        warnings.push(format!(
            "Skipped {} row(s) with an empty product name",
            skipped_blank
        ));
    }

    let batch_total = assign_portfolio_weights(&mut items);

    if let Some(message) = integrity_error(running_total, batch_total, config.integrity_tolerance_pct) {
        error!("{}", message);
        errors.push(message);
    }

    if items.is_empty() {
        errors.push("No valid items found.".to_string());
    }

    info!(
        "Portfolio import finished: {} items, {} errors, {} warnings",
        items.len(),
        errors.len(),
        warnings.len()
    );

    ImportResult {
        items,
        validation: ValidationResult::from_messages(errors, warnings),
        detected_columns: mapping,
    }
}

/// Sanitizes, classifies and computes one row.
fn build_item(
    row: &CsvRow,
    mapping: &ColumnMapping,
    row_number: usize,
    warnings: &mut Vec<String>,
) -> Result<PortfolioItem, String> {
    let cell = |field: CanonicalField| row.get_mapped(mapping.get(field));
    let number = |field: CanonicalField| {
        sanitize_numeric(cell(field))
            .map_err(|e| format!("Row {}: invalid {} - {}", row_number, field.label(), e))
    };

    let quantity = number(CanonicalField::Quantity)?;
    let market_price = number(CanonicalField::MarketPrice)?;
    let average_cost_paid = number(CanonicalField::AverageCostPaid)?;

    let raw_date = cell(CanonicalField::DateAdded);
    let date_added = parse_date(raw_date);
    if date_added.is_none() && !raw_date.trim().is_empty() {
        warnings.push(format!(
            "Row {}: could not read date '{}', leaving it empty",
            row_number,
            raw_date.trim()
        ));
    }

    PortfolioItem::new(NewPortfolioItem {
        product_name: cell(CanonicalField::ProductName).to_string(),
        category: cell(CanonicalField::Category).to_string(),
        quantity,
        market_price,
        average_cost_paid,
        grade: cell(CanonicalField::Grade).to_string(),
        card_number: cell(CanonicalField::CardNumber).to_string(),
        date_added,
    })
    .map_err(|e| format!("Row {}: {}", row_number, e))
}

fn missing_columns_message(missing: &[CanonicalField], headers: &[String]) -> String {
    let fields: Vec<&str> = missing.iter().map(|f| f.label()).collect();
    format!(
        "Missing required columns: {}. Detected headers: {}",
        fields.join(", "),
        headers.join(", ")
    )
}

fn optional_column_warnings(mapping: &ColumnMapping) -> Vec<String> {
    mapping
        .missing_optional()
        .into_iter()
        .map(|field| match field {
            CanonicalField::AverageCostPaid => format!(
                "No {} column found; profit metrics will be 0",
                field.label()
            ),
            CanonicalField::Category => format!(
                "No {} column found; items will be Uncategorized",
                field.label()
            ),
            _ => format!("No {} column found", field.label()),
        })
        .collect()
}

/// Compares the running total with the batch total; they should never differ.
fn integrity_error(running_total: Decimal, batch_total: Decimal, tolerance_pct: Decimal) -> Option<String> {
    let drift = (batch_total - running_total).abs();
    let allowed = running_total.abs() * tolerance_pct / dec!(100);
    if drift > allowed {
        Some(format!(
            "Data integrity check failed: item total {} differs from running total {}",
            batch_total.round_dp(DISPLAY_DECIMAL_PRECISION),
            running_total.round_dp(DISPLAY_DECIMAL_PRECISION)
        ))
    } else {
        None
    }
}

//! CSV import pipeline: sanitizer, tokenizer, column mapper and item builder.

mod column_mapping;
mod csv_parser;
mod file_loader;
mod import_errors;
mod import_model;
mod import_service;
mod sanitizer;

#[cfg(test)]
mod import_service_tests;

pub use column_mapping::{detect_column_mappings, find_column, CanonicalField, ColumnMapping};
pub use csv_parser::{tokenize_csv, CsvRow, TokenizedCsv};
pub use file_loader::{decode_csv_bytes, load_csv_text};
pub use import_errors::ImportError;
pub use import_model::{ImportResult, ValidationResult};
pub use import_service::{process_portfolio_data, process_portfolio_data_with_config};
pub use sanitizer::{parse_date, sanitize_numeric, RawNumber};

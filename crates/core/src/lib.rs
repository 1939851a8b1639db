//! Cardfolio Core - collectible portfolio import, classification and analytics.
//!
//! This crate contains the whole analytics pipeline: CSV text goes in,
//! classified holdings and the aggregates derived from them come out. All
//! pipeline stages are synchronous pure functions; only file loading and the
//! optional persistence sink are async.

pub mod classification;
pub mod constants;
pub mod context;
pub mod errors;
pub mod health;
pub mod import;
pub mod insights;
pub mod portfolio;
pub mod settings;

// Re-export the types most callers need
pub use context::{PortfolioContext, PortfolioDashboard, PortfolioSink, PortfolioSnapshot};
pub use import::{process_portfolio_data, ImportResult, ValidationResult};
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

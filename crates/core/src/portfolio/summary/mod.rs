//! Top-line portfolio totals.

mod summary_model;
mod summary_service;

pub use summary_model::PortfolioSummary;
pub use summary_service::calculate_portfolio_summary;

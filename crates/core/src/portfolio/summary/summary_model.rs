use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals across every holding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_market_value: Decimal,
    pub total_cost_basis: Decimal,
    /// Market value minus cost basis
    pub unrealized_profit: Decimal,
    /// Unrealized profit as a percent of cost basis (0 without a cost basis)
    pub unrealized_profit_percent: Decimal,
    /// Holdings with a positive profit
    pub profitable_count: usize,
    /// Profitable holdings as a percent of all holdings
    pub profitable_percent: Decimal,
    pub holding_count: usize,
}

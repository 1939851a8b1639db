use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::portfolio::PortfolioItem;

use super::PortfolioSummary;

/// Computes portfolio totals and the share of profitable holdings.
pub fn calculate_portfolio_summary(items: &[PortfolioItem]) -> PortfolioSummary {
    let total_market_value: Decimal = items.iter().map(|i| i.total_market_value()).sum();
    let total_cost_basis: Decimal = items.iter().map(|i| i.total_cost_basis()).sum();
    let unrealized_profit = total_market_value - total_cost_basis;

    let unrealized_profit_percent = if total_cost_basis > Decimal::ZERO {
        unrealized_profit / total_cost_basis * dec!(100)
    } else {
        Decimal::ZERO
    };

    let profitable_count = items
        .iter()
        .filter(|i| i.profit_dollars() > Decimal::ZERO)
        .count();
    let holding_count = items.len();
    let profitable_percent = if holding_count > 0 {
        Decimal::from(profitable_count) / Decimal::from(holding_count) * dec!(100)
    } else {
        Decimal::ZERO
    };

    PortfolioSummary {
        total_market_value,
        total_cost_basis,
        unrealized_profit,
        unrealized_profit_percent,
        profitable_count,
        profitable_percent,
        holding_count,
    }
}

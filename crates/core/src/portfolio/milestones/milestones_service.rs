use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::MILESTONE_THRESHOLDS;
use crate::portfolio::PortfolioItem;

use super::ProfitMilestone;

/// Highest milestone a gain has reached, if any.
///
/// Thresholds are checked from the top down so 612% maps to 500.
pub fn milestone_for_gain(gain_percent: Decimal) -> Option<u32> {
    MILESTONE_THRESHOLDS
        .iter()
        .copied()
        .find(|threshold| gain_percent >= Decimal::from(*threshold))
}

/// Lists holdings at or above the lowest milestone, largest gain first.
pub fn calculate_profit_milestones(items: &[PortfolioItem]) -> Vec<ProfitMilestone> {
    let mut milestones: Vec<ProfitMilestone> = items
        .iter()
        .filter_map(|item| {
            let milestone = milestone_for_gain(item.gain_percent())?;
            let units_to_sell = (item.quantity() / dec!(2)).floor();
            let profit_per_unit = item.market_price() - item.average_cost_paid();

            Some(ProfitMilestone {
                item_id: item.id().to_string(),
                product_name: item.product_name().to_string(),
                milestone,
                gain_percent: item.gain_percent(),
                quantity: item.quantity(),
                market_price: item.market_price(),
                units_to_sell,
                sell_half_profit: units_to_sell * profit_per_unit,
                units_remaining: item.quantity() - units_to_sell,
            })
        })
        .collect();

    milestones.sort_by(|a, b| b.gain_percent.cmp(&a.gain_percent));
    milestones
}

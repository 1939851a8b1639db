use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A holding whose gain crossed a milestone, with a sell-half simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitMilestone {
    pub item_id: String,
    pub product_name: String,
    /// Highest threshold crossed (200, 300 or 500)
    pub milestone: u32,
    pub gain_percent: Decimal,
    pub quantity: Decimal,
    pub market_price: Decimal,
    /// `floor(quantity / 2)`
    pub units_to_sell: Decimal,
    /// Profit realized by selling `units_to_sell` at market price
    pub sell_half_profit: Decimal,
    pub units_remaining: Decimal,
}

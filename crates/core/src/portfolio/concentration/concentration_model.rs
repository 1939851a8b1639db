use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share of value held by the largest rows and the largest category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationRisk {
    pub top1_value: Decimal,
    pub top1_percent: Decimal,
    pub top3_value: Decimal,
    pub top3_percent: Decimal,
    pub top5_value: Decimal,
    pub top5_percent: Decimal,
    /// Category with the highest summed value, `None` for an empty portfolio
    pub top_category: Option<String>,
    pub top_category_value: Decimal,
    pub top_category_percent: Decimal,
}

/// All rows sharing one product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub product_name: String,
    pub total_value: Decimal,
    pub total_quantity: Decimal,
    /// Number of rows merged into this position
    pub row_count: usize,
    pub percent: Decimal,
}

/// Share of value held by the largest positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionConcentration {
    /// Positions sorted by value, largest first
    pub positions: Vec<Position>,
    pub top1_percent: Decimal,
    pub top3_percent: Decimal,
    pub top5_percent: Decimal,
    pub total_value: Decimal,
}

impl PositionConcentration {
    /// The `n` largest positions.
    pub fn top(&self, n: usize) -> &[Position] {
        &self.positions[..n.min(self.positions.len())]
    }
}

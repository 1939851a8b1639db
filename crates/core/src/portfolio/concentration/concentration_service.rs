use log::debug;
use rust_decimal::Decimal;

use crate::portfolio::{percent_of, total_market_value, PortfolioItem};

use super::{ConcentrationRisk, Position, PositionConcentration};

fn sum_top(values: &[Decimal], n: usize) -> Decimal {
    values.iter().take(n).copied().sum()
}

/// Row-level concentration plus the single largest category.
///
/// Rows are ranked by total market value; ties keep their import order.
pub fn calculate_concentration_risk(items: &[PortfolioItem]) -> ConcentrationRisk {
    let total = total_market_value(items);

    let mut values: Vec<Decimal> = items.iter().map(|item| item.total_market_value()).collect();
    values.sort_by(|a, b| b.cmp(a));

    // first-seen order so ties resolve to the earliest category
    let mut categories: Vec<(&str, Decimal)> = Vec::new();
    for item in items {
        match categories.iter_mut().find(|(name, _)| *name == item.category()) {
            Some((_, value)) => *value += item.total_market_value(),
            None => categories.push((item.category(), item.total_market_value())),
        }
    }
    let top_category = categories
        .iter()
        .fold(None::<&(&str, Decimal)>, |best, entry| match best {
            Some(current) if current.1 >= entry.1 => Some(current),
            _ => Some(entry),
        });

    let top1_value = sum_top(&values, 1);
    let top3_value = sum_top(&values, 3);
    let top5_value = sum_top(&values, 5);

    ConcentrationRisk {
        top1_value,
        top1_percent: percent_of(top1_value, total),
        top3_value,
        top3_percent: percent_of(top3_value, total),
        top5_value,
        top5_percent: percent_of(top5_value, total),
        top_category: top_category.map(|(name, _)| (*name).to_string()),
        top_category_value: top_category.map(|(_, value)| *value).unwrap_or_default(),
        top_category_percent: top_category
            .map(|(_, value)| percent_of(*value, total))
            .unwrap_or_default(),
    }
}

/// Merges rows with the same product name into positions and measures how
/// much value the largest positions hold.
pub fn calculate_position_concentration(items: &[PortfolioItem]) -> PositionConcentration {
    let total = total_market_value(items);

    let mut positions: Vec<Position> = Vec::new();
    for item in items {
        match positions
            .iter_mut()
            .find(|position| position.product_name == item.product_name())
        {
            Some(position) => {
                position.total_value += item.total_market_value();
                position.total_quantity += item.quantity();
                position.row_count += 1;
            }
            None => positions.push(Position {
                product_name: item.product_name().to_string(),
                total_value: item.total_market_value(),
                total_quantity: item.quantity(),
                row_count: 1,
                percent: Decimal::ZERO,
            }),
        }
    }

    for position in positions.iter_mut() {
        position.percent = percent_of(position.total_value, total);
    }
    // stable, so equal positions keep first-seen order
    positions.sort_by(|a, b| b.total_value.cmp(&a.total_value));

    let values: Vec<Decimal> = positions.iter().map(|p| p.total_value).collect();
    debug!(
        "Position concentration: {} rows merged into {} positions",
        items.len(),
        positions.len()
    );

    PositionConcentration {
        top1_percent: percent_of(sum_top(&values, 1), total),
        top3_percent: percent_of(sum_top(&values, 3), total),
        top5_percent: percent_of(sum_top(&values, 5), total),
        positions,
        total_value: total,
    }
}

use chrono::{Months, NaiveDate, Utc};

use crate::portfolio::PortfolioItem;

use super::era_tables::{ERA_KEYWORD_TABLES, ERA_SET_TABLES};
use super::Era;

/// Months a dated holding counts as "current" when nothing else matches.
const DEFAULT_CURRENT_WINDOW_MONTHS: u32 = 12;

/// Classifies a holding into a release era.
///
/// Resolution order:
/// 1. Set-name tables, era by era. A table hits when the category contains a
///    set name, a set name contains the (non-empty) category, or the product
///    name contains a set name.
/// 2. Keyword tables against "category product", vintage first.
/// 3. `Current` when `date_added` falls inside the trailing window.
/// 4. `UltraModern` otherwise.
///
/// The date check runs last, so a recently bought item with era-identifying
/// text keeps that era.
pub fn classify_era(
    category: &str,
    product_name: &str,
    date_added: Option<NaiveDate>,
    today: NaiveDate,
    current_window_months: u32,
) -> Era {
    let category = category.trim().to_lowercase();
    let product = product_name.trim().to_lowercase();

    for (era, sets) in ERA_SET_TABLES.iter() {
        let hit = sets.iter().any(|set| {
            category.contains(set.as_str())
                || (!category.is_empty() && set.contains(category.as_str()))
                || product.contains(set.as_str())
        });
        if hit {
            return *era;
        }
    }

    let search_text = format!("{} {}", category, product);
    for (era, keywords) in ERA_KEYWORD_TABLES.iter() {
        if keywords.iter().any(|kw| search_text.contains(kw.as_str())) {
            return *era;
        }
    }

    if let Some(added) = date_added {
        let cutoff = today
            .checked_sub_months(Months::new(current_window_months))
            .unwrap_or(NaiveDate::MIN);
        if added >= cutoff {
            return Era::Current;
        }
    }

    Era::UltraModern
}

/// Classifies an item as of `today`.
pub fn classify_item_era_at(item: &PortfolioItem, today: NaiveDate, current_window_months: u32) -> Era {
    classify_era(
        item.category(),
        item.product_name(),
        item.date_added(),
        today,
        current_window_months,
    )
}

/// Classifies an item as of the current UTC date with the default 12-month window.
pub fn classify_item_era(item: &PortfolioItem) -> Era {
    classify_item_era_at(item, Utc::now().date_naive(), DEFAULT_CURRENT_WINDOW_MONTHS)
}

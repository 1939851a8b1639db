//! Allocation breakdowns and target comparisons.

use chrono::{NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::classification::{classify_item_era_at, AssetType, Era, LiquidityTier};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::portfolio::{percent_of, total_market_value, PortfolioItem};
use crate::settings::AnalyticsConfig;

use super::{
    AllocationBreakdown, AllocationBucket, AllocationTarget, EraAllocationBreakdown, EraAllocationTarget,
    EraDrift, LiquidityBreakdown, RebalanceAction, RebalanceSuggestion,
};

fn add_to_bucket(bucket: &mut AllocationBucket, item: &PortfolioItem) {
    bucket.value += item.total_market_value();
    bucket.count += 1;
}

fn finish_bucket(bucket: &mut AllocationBucket, total: Decimal) {
    bucket.percent = percent_of(bucket.value, total);
}

/// Groups holdings by asset type.
pub fn calculate_allocation_breakdown(items: &[PortfolioItem]) -> AllocationBreakdown {
    let mut breakdown = AllocationBreakdown {
        total_value: total_market_value(items),
        ..Default::default()
    };

    for item in items {
        add_to_bucket(breakdown.bucket_mut(item.asset_type()), item);
    }

    let total = breakdown.total_value;
    for asset_type in AssetType::ALL {
        finish_bucket(breakdown.bucket_mut(asset_type), total);
    }

    breakdown
}

/// Groups holdings by release era as of today, with the default current-era window.
pub fn calculate_era_allocation_breakdown(items: &[PortfolioItem]) -> EraAllocationBreakdown {
    calculate_era_allocation_breakdown_at(
        items,
        Utc::now().date_naive(),
        AnalyticsConfig::default().current_era_months,
    )
}

/// Groups holdings by release era as of `today`.
pub fn calculate_era_allocation_breakdown_at(
    items: &[PortfolioItem],
    today: NaiveDate,
    current_era_months: u32,
) -> EraAllocationBreakdown {
    let mut breakdown = EraAllocationBreakdown {
        total_value: total_market_value(items),
        ..Default::default()
    };

    for item in items {
        let era = classify_item_era_at(item, today, current_era_months);
        add_to_bucket(breakdown.bucket_mut(era), item);
    }

    let total = breakdown.total_value;
    for era in Era::ALL {
        finish_bucket(breakdown.bucket_mut(era), total);
    }

    breakdown
}

/// Groups holdings by liquidity tier.
pub fn calculate_liquidity_breakdown(items: &[PortfolioItem]) -> LiquidityBreakdown {
    let mut breakdown = LiquidityBreakdown {
        total_value: total_market_value(items),
        ..Default::default()
    };

    for item in items {
        add_to_bucket(breakdown.bucket_mut(item.liquidity_tier()), item);
    }

    let total = breakdown.total_value;
    for tier in LiquidityTier::ALL {
        finish_bucket(breakdown.bucket_mut(tier), total);
    }

    breakdown
}

/// Suggests trims and capital redirects for asset types more than the
/// default band away from target.
pub fn calculate_rebalance_suggestions(
    breakdown: &AllocationBreakdown,
    target: &AllocationTarget,
) -> Vec<RebalanceSuggestion> {
    calculate_rebalance_suggestions_with_band(breakdown, target, AnalyticsConfig::default().rebalance_band_pct)
}

/// Suggests trims and capital redirects for asset types more than `band_pct`
/// percent points away from target. Nothing is suggested inside the band.
pub fn calculate_rebalance_suggestions_with_band(
    breakdown: &AllocationBreakdown,
    target: &AllocationTarget,
    band_pct: Decimal,
) -> Vec<RebalanceSuggestion> {
    let mut suggestions = Vec::new();

    for asset_type in AssetType::ALL {
        let current = breakdown.bucket(asset_type).percent;
        let wanted = target.get(asset_type);
        let difference = current - wanted;
        if difference.abs() <= band_pct {
            continue;
        }

        let gap = difference.abs();
        let amount = gap / dec!(100) * breakdown.total_value;
        let (action, message) = if difference > Decimal::ZERO {
            (
                RebalanceAction::Trim,
                format!(
                    "{} is {}% of the portfolio against a {}% target. Consider trimming about ${}.",
                    asset_type,
                    current.round_dp(1),
                    wanted.normalize(),
                    amount.round_dp(DISPLAY_DECIMAL_PRECISION)
                ),
            )
        } else {
            (
                RebalanceAction::Redirect,
                format!(
                    "{} is {}% of the portfolio against a {}% target. Direct about ${} of new purchases here.",
                    asset_type,
                    current.round_dp(1),
                    wanted.normalize(),
                    amount.round_dp(DISPLAY_DECIMAL_PRECISION)
                ),
            )
        };

        debug!("Rebalance {:?} {}: gap {} points", action, asset_type, gap);
        suggestions.push(RebalanceSuggestion {
            asset_type,
            action,
            current_percent: current,
            target_percent: wanted,
            gap_percent: gap,
            amount,
            message,
        });
    }

    suggestions
}

/// Current versus target share for every era, in era order.
pub fn era_target_drift(breakdown: &EraAllocationBreakdown, target: &EraAllocationTarget) -> Vec<EraDrift> {
    Era::ALL
        .into_iter()
        .map(|era| {
            let current_percent = breakdown.bucket(era).percent;
            let target_percent = target.get(era);
            EraDrift {
                era,
                current_percent,
                target_percent,
                gap_percent: current_percent - target_percent,
            }
        })
        .collect()
}

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;

use crate::classification::AssetType;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, MILESTONE_THRESHOLDS};
use crate::portfolio::{
    calculate_allocation_breakdown, calculate_concentration_risk, calculate_profit_milestones,
    calculate_rebalance_suggestions_with_band, AllocationBreakdown, AllocationTarget, PortfolioItem,
    RebalanceAction,
};
use crate::settings::AnalyticsConfig;

use super::{Insight, InsightPriority, InsightType};

/// Generates insights timestamped now.
pub fn generate_insights(
    items: &[PortfolioItem],
    target: &AllocationTarget,
    config: &AnalyticsConfig,
) -> Vec<Insight> {
    generate_insights_at(items, target, config, Utc::now())
}

/// Generates insights as of `now`, highest priority first.
///
/// Each rule emits at most one insight per id, so the list never holds
/// duplicates.
pub fn generate_insights_at(
    items: &[PortfolioItem],
    target: &AllocationTarget,
    config: &AnalyticsConfig,
    now: DateTime<Utc>,
) -> Vec<Insight> {
    if items.is_empty() {
        return Vec::new();
    }

    let breakdown = calculate_allocation_breakdown(items);

    let mut insights = Vec::new();
    milestone_insights(items, now, &mut insights);
    concentration_insight(items, config, now, &mut insights);
    allocation_insights(&breakdown, target, config, now, &mut insights);
    patience_insight(items, config, now, &mut insights);
    rebalance_insight(&breakdown, target, config, now, &mut insights);

    // stable, so rules keep their order within a priority
    insights.sort_by(|a, b| b.priority.cmp(&a.priority));
    debug!("Generated {} insights", insights.len());
    insights
}

/// Drops insights whose id has been dismissed.
pub fn filter_dismissed(insights: Vec<Insight>, dismissed: &HashSet<String>) -> Vec<Insight> {
    insights
        .into_iter()
        .filter(|insight| !dismissed.contains(&insight.id))
        .collect()
}

fn milestone_insights(items: &[PortfolioItem], now: DateTime<Utc>, insights: &mut Vec<Insight>) {
    let milestones = calculate_profit_milestones(items);

    for threshold in MILESTONE_THRESHOLDS {
        let tier: Vec<_> = milestones.iter().filter(|m| m.milestone == threshold).collect();
        let Some(leader) = tier.first() else {
            continue;
        };
        let sell_half_profit: Decimal = tier.iter().map(|m| m.sell_half_profit).sum();

        let message = if tier.len() == 1 {
            format!(
                "{} is up {}%. Selling half would lock in about ${} of profit.",
                leader.product_name,
                leader.gain_percent.round_dp(0),
                sell_half_profit.round_dp(DISPLAY_DECIMAL_PRECISION)
            )
        } else {
            format!(
                "{} holdings are up {}% or more, led by {}. Selling half of each would lock in about ${} of profit.",
                tier.len(),
                threshold,
                leader.product_name,
                sell_half_profit.round_dp(DISPLAY_DECIMAL_PRECISION)
            )
        };

        insights.push(Insight::new(
            format!("milestone-{}", threshold),
            InsightType::Milestone,
            InsightPriority::High,
            format!("{}% gain milestone", threshold),
            message,
            now,
        ));
    }
}

fn concentration_insight(
    items: &[PortfolioItem],
    config: &AnalyticsConfig,
    now: DateTime<Utc>,
    insights: &mut Vec<Insight>,
) {
    let risk = calculate_concentration_risk(items);

    if risk.top1_percent > config.top1_concentration_pct {
        insights.push(Insight::new(
            "concentration-top1",
            InsightType::Concentration,
            InsightPriority::High,
            "Single holding concentration",
            format!(
                "Your largest holding is {}% of the portfolio. A drop in its price would hit the whole collection.",
                risk.top1_percent.round_dp(1)
            ),
            now,
        ));
    } else if risk.top3_percent > config.top3_concentration_pct {
        insights.push(Insight::new(
            "concentration-top3",
            InsightType::Concentration,
            InsightPriority::Medium,
            "Top holdings concentration",
            format!(
                "Your three largest holdings make up {}% of the portfolio.",
                risk.top3_percent.round_dp(1)
            ),
            now,
        ));
    }
}

fn allocation_insights(
    breakdown: &AllocationBreakdown,
    target: &AllocationTarget,
    config: &AnalyticsConfig,
    now: DateTime<Utc>,
    insights: &mut Vec<Insight>,
) {
    for asset_type in AssetType::ALL {
        let current = breakdown.bucket(asset_type).percent;
        let wanted = target.get(asset_type);
        let drift = current - wanted;
        if drift.abs() <= config.insight_drift_pct {
            continue;
        }

        let slug = asset_type.as_str().to_lowercase().replace(' ', "-");
        let (id, priority, direction) = if drift > Decimal::ZERO {
            (format!("allocation-over-{}", slug), InsightPriority::Medium, "above")
        } else {
            (format!("allocation-under-{}", slug), InsightPriority::Low, "below")
        };

        insights.push(Insight::new(
            id,
            InsightType::Allocation,
            priority,
            format!("{} allocation off target", asset_type),
            format!(
                "{} is {}% of the portfolio, {} points {} your {}% target.",
                asset_type,
                current.round_dp(1),
                drift.abs().round_dp(1),
                direction,
                wanted.normalize()
            ),
            now,
        ));
    }
}

fn patience_insight(
    items: &[PortfolioItem],
    config: &AnalyticsConfig,
    now: DateTime<Utc>,
    insights: &mut Vec<Insight>,
) {
    let Some(latest) = items.iter().filter_map(|item| item.date_added()).max() else {
        return;
    };

    let days = (now.date_naive() - latest).num_days();
    if days > config.stale_addition_days {
        insights.push(Insight::new(
            "patience",
            InsightType::Patience,
            InsightPriority::Low,
            "Patience is paying",
            format!(
                "Nothing new has been added in {} days. Holding through quiet stretches is part of the strategy.",
                days
            ),
            now,
        ));
    }
}

fn rebalance_insight(
    breakdown: &AllocationBreakdown,
    target: &AllocationTarget,
    config: &AnalyticsConfig,
    now: DateTime<Utc>,
    insights: &mut Vec<Insight>,
) {
    if breakdown.total_value <= config.rebalance_insight_min_value {
        return;
    }

    let largest_redirect = calculate_rebalance_suggestions_with_band(breakdown, target, config.rebalance_band_pct)
        .into_iter()
        .filter(|s| s.action == RebalanceAction::Redirect)
        .max_by(|a, b| a.amount.cmp(&b.amount));

    if let Some(suggestion) = largest_redirect {
        insights.push(Insight::new(
            "rebalance-redirect",
            InsightType::Rebalance,
            InsightPriority::Medium,
            format!("Build up {}", suggestion.asset_type),
            suggestion.message,
            now,
        ));
    }
}

use chrono::{NaiveDate, Utc};
use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::classification::{AssetType, Era};
use crate::portfolio::{
    calculate_allocation_breakdown, calculate_era_allocation_breakdown_at, calculate_position_concentration,
    AllocationBreakdown, EraAllocationBreakdown, PositionConcentration, PortfolioItem,
};
use crate::settings::AnalyticsConfig;

use super::HealthScoreBreakdown;

pub const HEALTH_SCORE_FLOOR: f64 = 50.0;
pub const HEALTH_SCORE_CEILING: f64 = 100.0;

const ASSET_WEIGHT: f64 = 0.45;
const ERA_WEIGHT: f64 = 0.35;
const CONCENTRATION_WEIGHT: f64 = 0.20;

const TOP1_WEIGHT: f64 = 0.40;
const TOP3_WEIGHT: f64 = 0.35;
const TOP5_WEIGHT: f64 = 0.25;

/// Band edges (percent of portfolio) for the top 1, 3 and 5 position curves.
const TOP1_BANDS: [f64; 3] = [10.0, 20.0, 30.0];
const TOP3_BANDS: [f64; 3] = [20.0, 35.0, 50.0];
const TOP5_BANDS: [f64; 3] = [30.0, 50.0, 70.0];

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return HEALTH_SCORE_FLOOR;
    }
    score.clamp(HEALTH_SCORE_FLOOR, HEALTH_SCORE_CEILING)
}

/// Scores asset-type allocation. Sealed product is favoured.
pub fn calculate_asset_health_score(breakdown: &AllocationBreakdown) -> f64 {
    let sealed = to_f64(breakdown.bucket(AssetType::Sealed).percent);
    let slabs = to_f64(breakdown.bucket(AssetType::Slab).percent);
    let raw = to_f64(breakdown.bucket(AssetType::RawCard).percent);

    let mut score = if sealed >= 70.0 {
        95.0
    } else if sealed >= 55.0 {
        90.0
    } else if sealed >= 40.0 {
        80.0
    } else if sealed >= 25.0 {
        70.0
    } else {
        60.0
    };

    if raw > 60.0 && sealed < 40.0 {
        score = f64::min(score, 60.0);
    }
    if slabs > 70.0 && sealed < 25.0 {
        score = f64::min(score, 65.0);
    }

    clamp_score(score)
}

/// Scores diversification across release eras.
pub fn calculate_era_health_score(breakdown: &EraAllocationBreakdown) -> f64 {
    let percent = |era: Era| to_f64(breakdown.bucket(era).percent);

    let mut score = 50.0;

    let vintage = percent(Era::Vintage);
    if vintage >= 20.0 {
        score += 15.0;
    } else if vintage >= 10.0 {
        score += 10.0;
    } else if vintage >= 5.0 {
        score += 5.0;
    }

    let newer: f64 = Era::ALL.iter().filter(|era| era.is_newer()).map(|era| percent(*era)).sum();
    if (45.0..=55.0).contains(&newer) {
        score += 10.0;
    } else if newer > 55.0 && newer <= 70.0 {
        score += 5.0;
    } else if newer > 85.0 {
        score -= 5.0;
    }

    if breakdown.bucket(Era::Classic).percent.is_zero() {
        score -= 5.0;
    }

    let represented = Era::ALL.iter().filter(|era| percent(**era) >= 1.0).count();
    if represented >= 4 && score < 55.0 {
        score = 55.0;
    }

    clamp_score(score)
}

/// Piecewise-linear curve: 95..90 up to the first edge, 85..75 up to the
/// second, 75..65 up to the third, 60..50 beyond.
fn concentration_curve(percent: f64, [first, second, third]: [f64; 3]) -> f64 {
    if percent <= first {
        95.0 - (percent / first) * 5.0
    } else if percent <= second {
        85.0 - ((percent - first) / (second - first)) * 10.0
    } else if percent <= third {
        75.0 - ((percent - second) / (third - second)) * 10.0
    } else {
        60.0 - ((percent - third) / (100.0 - third)) * 10.0
    }
}

/// Scores how much value sits in the largest positions.
pub fn calculate_concentration_health_score(concentration: &PositionConcentration) -> f64 {
    let top1 = concentration_curve(to_f64(concentration.top1_percent), TOP1_BANDS);
    let top3 = concentration_curve(to_f64(concentration.top3_percent), TOP3_BANDS);
    let top5 = concentration_curve(to_f64(concentration.top5_percent), TOP5_BANDS);

    clamp_score(top1 * TOP1_WEIGHT + top3 * TOP3_WEIGHT + top5 * TOP5_WEIGHT)
}

/// Weighted composite of the three component scores, rounded.
pub fn calculate_overall_health(asset_allocation: f64, era_balance: f64, concentration: f64) -> u8 {
    let weighted = asset_allocation * ASSET_WEIGHT + era_balance * ERA_WEIGHT + concentration * CONCENTRATION_WEIGHT;
    weighted.round().clamp(0.0, HEALTH_SCORE_CEILING) as u8
}

/// Computes every health score for the items as of today.
pub fn calculate_health_breakdown(items: &[PortfolioItem]) -> HealthScoreBreakdown {
    calculate_health_breakdown_at(
        items,
        Utc::now().date_naive(),
        AnalyticsConfig::default().current_era_months,
    )
}

/// Computes every health score for the items as of `today`.
pub fn calculate_health_breakdown_at(
    items: &[PortfolioItem],
    today: NaiveDate,
    current_era_months: u32,
) -> HealthScoreBreakdown {
    let asset_allocation = calculate_asset_health_score(&calculate_allocation_breakdown(items));
    let era_balance =
        calculate_era_health_score(&calculate_era_allocation_breakdown_at(items, today, current_era_months));
    let concentration = calculate_concentration_health_score(&calculate_position_concentration(items));
    let overall = calculate_overall_health(asset_allocation, era_balance, concentration);

    debug!(
        "Health scores: overall {} (asset {:.1}, era {:.1}, concentration {:.1})",
        overall, asset_allocation, era_balance, concentration
    );

    HealthScoreBreakdown {
        overall,
        asset_allocation,
        era_balance,
        concentration,
    }
}

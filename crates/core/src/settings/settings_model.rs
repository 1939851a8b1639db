use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Thresholds used by rebalancing, insights, era classification and the
/// import integrity check.
///
/// Defaults reproduce the documented product behaviour; callers may loosen
/// or tighten them without touching the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsConfig {
    /// Percent-point band around a target inside which no rebalance is suggested (default: 10)
    pub rebalance_band_pct: Decimal,

    /// Percent-point drift from target that raises an allocation insight (default: 15)
    pub insight_drift_pct: Decimal,

    /// Days without a new holding before the patience insight appears (default: 60)
    pub stale_addition_days: i64,

    /// Portfolio value above which the redirect insight is emitted (default: 1000)
    pub rebalance_insight_min_value: Decimal,

    /// Top-1 position share that raises a high priority insight (default: 20)
    pub top1_concentration_pct: Decimal,

    /// Top-3 position share that raises a medium priority insight (default: 40)
    pub top3_concentration_pct: Decimal,

    /// Months a dated holding stays in the "current" era (default: 12)
    pub current_era_months: u32,

    /// Allowed relative drift between running and recomputed totals, in percent (default: 0.1)
    pub integrity_tolerance_pct: Decimal,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            rebalance_band_pct: dec!(10),
            insight_drift_pct: dec!(15),
            stale_addition_days: 60,
            rebalance_insight_min_value: dec!(1000),
            top1_concentration_pct: dec!(20),
            top3_concentration_pct: dec!(40),
            current_era_months: 12,
            integrity_tolerance_pct: dec!(0.1),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::health::HealthScoreBreakdown;
use crate::import::{ColumnMapping, ImportResult, ValidationResult};
use crate::insights::Insight;
use crate::portfolio::{
    AllocationBreakdown, AllocationPreset, AllocationTarget, ConcentrationRisk, EraAllocationBreakdown,
    EraAllocationTarget, EraDrift, EraPreset, LiquidityBreakdown, PortfolioItem, PortfolioSummary,
    PositionConcentration, ProfitMilestone, RebalanceSuggestion,
};

/// One import's items, validation and column mapping, replaced as a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub items: Vec<PortfolioItem>,
    pub validation: ValidationResult,
    pub detected_columns: ColumnMapping,
    /// `None` for the empty snapshot before any upload or after a reset
    pub imported_at: Option<DateTime<Utc>>,
}

impl PortfolioSnapshot {
    pub fn from_import(result: ImportResult, imported_at: DateTime<Utc>) -> Self {
        Self {
            items: result.items,
            validation: result.validation,
            detected_columns: result.detected_columns,
            imported_at: Some(imported_at),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Current allocation and era targets. A preset is recorded when the target
/// came from one; custom targets clear it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTargets {
    pub allocation: AllocationTarget,
    pub allocation_preset: Option<AllocationPreset>,
    pub era: EraAllocationTarget,
    pub era_preset: Option<EraPreset>,
}

impl Default for PortfolioTargets {
    fn default() -> Self {
        Self {
            allocation: AllocationPreset::default().target(),
            allocation_preset: Some(AllocationPreset::default()),
            era: EraPreset::default().target(),
            era_preset: Some(EraPreset::default()),
        }
    }
}

/// Every aggregate derived from the current snapshot and targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDashboard {
    pub summary: PortfolioSummary,
    pub allocation: AllocationBreakdown,
    pub liquidity: LiquidityBreakdown,
    pub concentration: ConcentrationRisk,
    pub position_concentration: PositionConcentration,
    pub era_breakdown: EraAllocationBreakdown,
    pub era_drift: Vec<EraDrift>,
    pub health: HealthScoreBreakdown,
    pub milestones: Vec<ProfitMilestone>,
    pub rebalance_suggestions: Vec<RebalanceSuggestion>,
    /// Insights not dismissed by the user
    pub insights: Vec<Insight>,
    pub targets: PortfolioTargets,
    pub generated_at: DateTime<Utc>,
}

//! Allocation breakdown models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classification::{AssetType, Era, LiquidityTier};

/// Value, share and holding count of one allocation bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBucket {
    /// Summed market value of the bucket's holdings
    pub value: Decimal,
    /// Share of the portfolio total (0-100, 0 when the total is 0)
    pub percent: Decimal,
    pub count: usize,
}

/// Portfolio split by asset type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBreakdown {
    pub sealed: AllocationBucket,
    pub slabs: AllocationBucket,
    pub raw_cards: AllocationBucket,
    pub total_value: Decimal,
}

impl AllocationBreakdown {
    pub fn bucket(&self, asset_type: AssetType) -> &AllocationBucket {
        match asset_type {
            AssetType::Sealed => &self.sealed,
            AssetType::Slab => &self.slabs,
            AssetType::RawCard => &self.raw_cards,
        }
    }

    pub(crate) fn bucket_mut(&mut self, asset_type: AssetType) -> &mut AllocationBucket {
        match asset_type {
            AssetType::Sealed => &mut self.sealed,
            AssetType::Slab => &mut self.slabs,
            AssetType::RawCard => &mut self.raw_cards,
        }
    }
}

/// Portfolio split by release era. All five buckets are always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EraAllocationBreakdown {
    pub vintage: AllocationBucket,
    pub classic: AllocationBucket,
    pub modern: AllocationBucket,
    pub ultra_modern: AllocationBucket,
    pub current: AllocationBucket,
    pub total_value: Decimal,
}

impl EraAllocationBreakdown {
    pub fn bucket(&self, era: Era) -> &AllocationBucket {
        match era {
            Era::Vintage => &self.vintage,
            Era::Classic => &self.classic,
            Era::Modern => &self.modern,
            Era::UltraModern => &self.ultra_modern,
            Era::Current => &self.current,
        }
    }

    pub(crate) fn bucket_mut(&mut self, era: Era) -> &mut AllocationBucket {
        match era {
            Era::Vintage => &mut self.vintage,
            Era::Classic => &mut self.classic,
            Era::Modern => &mut self.modern,
            Era::UltraModern => &mut self.ultra_modern,
            Era::Current => &mut self.current,
        }
    }
}

/// Portfolio split by liquidity tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityBreakdown {
    pub high: AllocationBucket,
    pub medium: AllocationBucket,
    pub low: AllocationBucket,
    pub total_value: Decimal,
}

impl LiquidityBreakdown {
    pub fn bucket(&self, tier: LiquidityTier) -> &AllocationBucket {
        match tier {
            LiquidityTier::High => &self.high,
            LiquidityTier::Medium => &self.medium,
            LiquidityTier::Low => &self.low,
        }
    }

    pub(crate) fn bucket_mut(&mut self, tier: LiquidityTier) -> &mut AllocationBucket {
        match tier {
            LiquidityTier::High => &mut self.high,
            LiquidityTier::Medium => &mut self.medium,
            LiquidityTier::Low => &mut self.low,
        }
    }
}

/// Direction of a rebalance suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RebalanceAction {
    /// Overweight: sell down toward the target
    Trim,
    /// Underweight: send new capital here
    Redirect,
}

/// One asset-type bucket outside its target band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceSuggestion {
    pub asset_type: AssetType,
    pub action: RebalanceAction,
    pub current_percent: Decimal,
    pub target_percent: Decimal,
    /// Absolute percent-point distance from target
    pub gap_percent: Decimal,
    /// Gap applied to the total portfolio value
    pub amount: Decimal,
    pub message: String,
}

/// Current versus target share for one era.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EraDrift {
    pub era: Era,
    pub current_percent: Decimal,
    pub target_percent: Decimal,
    /// Current minus target; positive when overweight
    pub gap_percent: Decimal,
}

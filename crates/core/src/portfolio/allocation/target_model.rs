//! User-adjustable allocation targets and their named presets.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::classification::{AssetType, Era};
use crate::errors::ValidationError;

const TARGET_TOTAL: Decimal = dec!(100);
const TARGET_TOLERANCE: Decimal = dec!(0.01);

fn validate_parts(parts: &[(&str, Decimal)]) -> Result<(), ValidationError> {
    if let Some((name, _)) = parts.iter().find(|(_, value)| value.is_sign_negative() && !value.is_zero()) {
        return Err(ValidationError::NegativeTarget((*name).to_string()));
    }
    let sum = parts
        .iter()
        .try_fold(Decimal::ZERO, |acc, (_, value)| acc.checked_add(*value))
        .ok_or_else(|| ValidationError::TargetSum("overflow".to_string()))?;
    if (sum - TARGET_TOTAL).abs() > TARGET_TOLERANCE {
        return Err(ValidationError::TargetSum(sum.normalize().to_string()));
    }
    Ok(())
}

/// Target share per asset type, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationTarget {
    pub sealed: Decimal,
    pub slabs: Decimal,
    pub raw_cards: Decimal,
}

impl AllocationTarget {
    /// Builds a target, rejecting negative entries and sums other than 100.
    pub fn new(sealed: Decimal, slabs: Decimal, raw_cards: Decimal) -> Result<Self, ValidationError> {
        let target = Self {
            sealed,
            slabs,
            raw_cards,
        };
        target.validate()?;
        Ok(target)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_parts(&[
            ("sealed", self.sealed),
            ("slabs", self.slabs),
            ("rawCards", self.raw_cards),
        ])
    }

    pub fn get(&self, asset_type: AssetType) -> Decimal {
        match asset_type {
            AssetType::Sealed => self.sealed,
            AssetType::Slab => self.slabs,
            AssetType::RawCard => self.raw_cards,
        }
    }
}

impl Default for AllocationTarget {
    fn default() -> Self {
        AllocationPreset::default().target()
    }
}

/// Named asset-type targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationPreset {
    Conservative,
    #[default]
    Balanced,
    Growth,
}

impl AllocationPreset {
    pub const ALL: [AllocationPreset; 3] = [
        AllocationPreset::Conservative,
        AllocationPreset::Balanced,
        AllocationPreset::Growth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationPreset::Conservative => "conservative",
            AllocationPreset::Balanced => "balanced",
            AllocationPreset::Growth => "growth",
        }
    }

    pub fn target(&self) -> AllocationTarget {
        let (sealed, slabs, raw_cards) = match self {
            AllocationPreset::Conservative => (dec!(70), dec!(20), dec!(10)),
            AllocationPreset::Balanced => (dec!(50), dec!(30), dec!(20)),
            AllocationPreset::Growth => (dec!(35), dec!(40), dec!(25)),
        };
        AllocationTarget {
            sealed,
            slabs,
            raw_cards,
        }
    }
}

impl FromStr for AllocationPreset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        AllocationPreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == name)
            .ok_or_else(|| ValidationError::UnknownPreset(s.to_string()))
    }
}

/// Target share per era, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EraAllocationTarget {
    pub vintage: Decimal,
    pub classic: Decimal,
    pub modern: Decimal,
    pub ultra_modern: Decimal,
    pub current: Decimal,
}

impl EraAllocationTarget {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_parts(&[
            ("vintage", self.vintage),
            ("classic", self.classic),
            ("modern", self.modern),
            ("ultraModern", self.ultra_modern),
            ("current", self.current),
        ])
    }

    pub fn get(&self, era: Era) -> Decimal {
        match era {
            Era::Vintage => self.vintage,
            Era::Classic => self.classic,
            Era::Modern => self.modern,
            Era::UltraModern => self.ultra_modern,
            Era::Current => self.current,
        }
    }
}

impl Default for EraAllocationTarget {
    fn default() -> Self {
        EraPreset::default().target()
    }
}

/// Named era targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EraPreset {
    #[default]
    Balanced,
    VintageFocus,
    ModernFocus,
}

impl EraPreset {
    pub const ALL: [EraPreset; 3] = [EraPreset::Balanced, EraPreset::VintageFocus, EraPreset::ModernFocus];

    pub fn as_str(&self) -> &'static str {
        match self {
            EraPreset::Balanced => "balanced",
            EraPreset::VintageFocus => "vintage_focus",
            EraPreset::ModernFocus => "modern_focus",
        }
    }

    pub fn target(&self) -> EraAllocationTarget {
        let (vintage, classic, modern, ultra_modern, current) = match self {
            EraPreset::Balanced => (dec!(15), dec!(15), dec!(20), dec!(30), dec!(20)),
            EraPreset::VintageFocus => (dec!(35), dec!(25), dec!(15), dec!(15), dec!(10)),
            EraPreset::ModernFocus => (dec!(5), dec!(10), dec!(25), dec!(35), dec!(25)),
        };
        EraAllocationTarget {
            vintage,
            classic,
            modern,
            ultra_modern,
            current,
        }
    }
}

impl FromStr for EraPreset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('-', "_");
        EraPreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == name)
            .ok_or_else(|| ValidationError::UnknownPreset(s.to_string()))
    }
}

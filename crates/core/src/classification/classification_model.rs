use serde::{Deserialize, Serialize};

/// What kind of collectible a holding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetType {
    /// Unopened product: boxes, packs, bundles
    Sealed,
    /// A professionally graded, encapsulated card
    Slab,
    /// A single ungraded card
    #[serde(rename = "Raw Card")]
    RawCard,
}

impl AssetType {
    pub const ALL: [AssetType; 3] = [AssetType::Sealed, AssetType::Slab, AssetType::RawCard];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Sealed => "Sealed",
            AssetType::Slab => "Slab",
            AssetType::RawCard => "Raw Card",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse estimate of how quickly a holding sells near its marked value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LiquidityTier {
    High,
    Medium,
    Low,
}

impl LiquidityTier {
    pub const ALL: [LiquidityTier; 3] = [LiquidityTier::High, LiquidityTier::Medium, LiquidityTier::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            LiquidityTier::High => "High",
            LiquidityTier::Medium => "Medium",
            LiquidityTier::Low => "Low",
        }
    }
}

impl std::fmt::Display for LiquidityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Release-era bucket used as a diversification axis.
///
/// Declaration order is the classification order: earlier eras win ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Era {
    Vintage,
    Classic,
    Modern,
    UltraModern,
    Current,
}

impl Era {
    pub const ALL: [Era; 5] = [
        Era::Vintage,
        Era::Classic,
        Era::Modern,
        Era::UltraModern,
        Era::Current,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Era::Vintage => "vintage",
            Era::Classic => "classic",
            Era::Modern => "modern",
            Era::UltraModern => "ultraModern",
            Era::Current => "current",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Era::Vintage => "Vintage (1999-2003)",
            Era::Classic => "Classic (2003-2011)",
            Era::Modern => "Modern (2011-2020)",
            Era::UltraModern => "Ultra Modern (2020+)",
            Era::Current => "Current (last 12 months)",
        }
    }

    /// Eras released after the classic period.
    pub fn is_newer(&self) -> bool {
        matches!(self, Era::Modern | Era::UltraModern | Era::Current)
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

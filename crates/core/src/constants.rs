/// Category assigned to rows without a category/set column value
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Grade values that mean the card is not graded
pub const UNGRADED_MARKERS: [&str; 3] = ["ungraded", "n/a", "none"];

/// Per-unit price above which a raw card is considered highly liquid
pub const RAW_CARD_HIGH_LIQUIDITY_PRICE: i64 = 50;

/// Quantity above which a holding is considered hard to move
pub const BULK_QUANTITY_THRESHOLD: i64 = 10;

/// Sealed product keywords with steady secondary market demand
pub const HIGH_DEMAND_SEALED_KEYWORDS: [&str; 5] = [
    "etb",
    "elite trainer",
    "booster box",
    "bundle",
    "collection box",
];

/// Product keywords that mark bulk lots
pub const BULK_KEYWORDS: [&str; 2] = ["bulk", "lot"];

/// Gain-percent milestones, highest first
pub const MILESTONE_THRESHOLDS: [u32; 3] = [500, 300, 200];

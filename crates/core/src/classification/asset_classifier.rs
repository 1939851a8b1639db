use rust_decimal::Decimal;

use crate::constants::{
    BULK_KEYWORDS, BULK_QUANTITY_THRESHOLD, HIGH_DEMAND_SEALED_KEYWORDS,
    RAW_CARD_HIGH_LIQUIDITY_PRICE, UNGRADED_MARKERS,
};

use super::{AssetType, LiquidityTier};

/// True when the grade cell carries no grade.
pub fn is_ungraded(grade: &str) -> bool {
    let normalized = grade.trim().to_lowercase();
    normalized.is_empty() || UNGRADED_MARKERS.contains(&normalized.as_str())
}

/// Classifies a holding as Slab, Raw Card or Sealed.
///
/// A real grade always means Slab. Otherwise a card number marks a single
/// card; anything without one is treated as sealed product.
pub fn classify_asset_type(grade: &str, card_number: &str) -> AssetType {
    if !is_ungraded(grade) {
        AssetType::Slab
    } else if !card_number.trim().is_empty() {
        AssetType::RawCard
    } else {
        AssetType::Sealed
    }
}

/// Estimates how liquid a holding is.
///
/// `unit_value` is the market value of a single unit.
pub fn classify_liquidity_tier(
    asset_type: AssetType,
    unit_value: Decimal,
    quantity: Decimal,
    product_name: &str,
) -> LiquidityTier {
    let name = product_name.to_lowercase();

    match asset_type {
        AssetType::Slab => return LiquidityTier::High,
        AssetType::RawCard if unit_value > Decimal::from(RAW_CARD_HIGH_LIQUIDITY_PRICE) => {
            return LiquidityTier::High
        }
        AssetType::Sealed
            if HIGH_DEMAND_SEALED_KEYWORDS
                .iter()
                .any(|keyword| name.contains(keyword)) =>
        {
            return LiquidityTier::Medium
        }
        _ => {}
    }

    if quantity > Decimal::from(BULK_QUANTITY_THRESHOLD) {
        LiquidityTier::Low
    } else if BULK_KEYWORDS.iter().any(|keyword| name.contains(keyword)) {
        LiquidityTier::Low
    } else {
        LiquidityTier::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_asset_type_rules() {
        assert_eq!(classify_asset_type("PSA 10", ""), AssetType::Slab);
        assert_eq!(classify_asset_type("", "057/189"), AssetType::RawCard);
        assert_eq!(classify_asset_type("", ""), AssetType::Sealed);
        assert_eq!(classify_asset_type("Ungraded", "123"), AssetType::RawCard);
    }

    #[test]
    fn test_grade_wins_over_card_number() {
        assert_eq!(classify_asset_type("BGS 9.5", "4/102"), AssetType::Slab);
    }

    #[test]
    fn test_ungraded_markers() {
        assert!(is_ungraded("  "));
        assert!(is_ungraded("N/A"));
        assert!(is_ungraded(" none "));
        assert!(is_ungraded("UNGRADED"));
        assert!(!is_ungraded("CGC 9"));
        assert_eq!(classify_asset_type("n/a", ""), AssetType::Sealed);
    }

    #[test]
    fn test_liquidity_slabs_and_expensive_raw_cards() {
        assert_eq!(
            classify_liquidity_tier(AssetType::Slab, dec!(5), dec!(100), "bulk lot"),
            LiquidityTier::High
        );
        assert_eq!(
            classify_liquidity_tier(AssetType::RawCard, dec!(50.01), dec!(1), "Charizard"),
            LiquidityTier::High
        );
        assert_eq!(
            classify_liquidity_tier(AssetType::RawCard, dec!(50), dec!(1), "Charizard"),
            LiquidityTier::Medium
        );
    }

    #[test]
    fn test_liquidity_high_demand_sealed() {
        assert_eq!(
            classify_liquidity_tier(AssetType::Sealed, dec!(45), dec!(30), "Evolving Skies ETB"),
            LiquidityTier::Medium
        );
        assert_eq!(
            classify_liquidity_tier(
                AssetType::Sealed,
                dec!(150),
                dec!(2),
                "Crown Zenith Elite Trainer Box"
            ),
            LiquidityTier::Medium
        );
    }

    #[test]
    fn test_liquidity_low_for_bulk() {
        assert_eq!(
            classify_liquidity_tier(AssetType::Sealed, dec!(4), dec!(36), "Sleeved Booster Pack"),
            LiquidityTier::Low
        );
        assert_eq!(
            classify_liquidity_tier(AssetType::RawCard, dec!(0.1), dec!(11), "Pikachu"),
            LiquidityTier::Low
        );
        assert_eq!(
            classify_liquidity_tier(AssetType::Sealed, dec!(20), dec!(1), "Energy Bulk Box"),
            LiquidityTier::Low
        );
    }

    #[test]
    fn test_liquidity_defaults_to_medium() {
        assert_eq!(
            classify_liquidity_tier(AssetType::Sealed, dec!(6), dec!(3), "Booster Pack"),
            LiquidityTier::Medium
        );
    }
}

//! Tests for allocation breakdowns and target comparisons.

#[cfg(test)]
mod tests {
    use crate::classification::{AssetType, Era};
    use crate::portfolio::allocation::*;
    use crate::portfolio::{NewPortfolioItem, PortfolioItem};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn item(name: &str, category: &str, grade: &str, card_number: &str, value: Decimal) -> PortfolioItem {
        PortfolioItem::new(NewPortfolioItem {
            product_name: name.to_string(),
            category: category.to_string(),
            grade: grade.to_string(),
            card_number: card_number.to_string(),
            quantity: dec!(1),
            market_price: value,
            ..Default::default()
        })
        .unwrap()
    }

    fn dated(name: &str, value: Decimal, date_added: NaiveDate) -> PortfolioItem {
        PortfolioItem::new(NewPortfolioItem {
            product_name: name.to_string(),
            category: "Misc".to_string(),
            quantity: dec!(1),
            market_price: value,
            date_added: Some(date_added),
            ..Default::default()
        })
        .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_items() -> Vec<PortfolioItem> {
        vec![
            item("Charizard", "Base Set", "PSA 9", "4/102", dec!(1250)),
            item("Evolving Skies Booster Box", "Evolving Skies", "", "", dec!(1300)),
            item("Umbreon VMAX", "Evolving Skies", "", "215/203", dec!(1200)),
            item("Pikachu", "Evolving Skies", "", "049/203", dec!(250)),
        ]
    }

    #[test]
    fn test_asset_type_breakdown() {
        let breakdown = calculate_allocation_breakdown(&sample_items());

        assert_eq!(breakdown.total_value, dec!(4000));
        assert_eq!(breakdown.sealed.value, dec!(1300));
        assert_eq!(breakdown.sealed.percent, dec!(32.5));
        assert_eq!(breakdown.sealed.count, 1);
        assert_eq!(breakdown.slabs.value, dec!(1250));
        assert_eq!(breakdown.raw_cards.value, dec!(1450));
        assert_eq!(breakdown.raw_cards.count, 2);
        assert_eq!(breakdown.bucket(AssetType::RawCard).percent, dec!(36.25));
    }

    #[test]
    fn test_empty_breakdowns_are_zero() {
        let breakdown = calculate_allocation_breakdown(&[]);
        assert_eq!(breakdown, AllocationBreakdown::default());

        let eras = calculate_era_allocation_breakdown(&[]);
        assert!(Era::ALL.iter().all(|era| eras.bucket(*era).count == 0));
    }

    #[test]
    fn test_zero_value_items_have_zero_percent() {
        let items = vec![item("Box", "", "", "", Decimal::ZERO)];

        let breakdown = calculate_allocation_breakdown(&items);

        assert_eq!(breakdown.sealed.count, 1);
        assert_eq!(breakdown.sealed.percent, Decimal::ZERO);
    }

    #[test]
    fn test_era_breakdown() {
        let today = date(2025, 6, 1);
        let items = vec![
            item("Charizard", "Base Set", "PSA 9", "4/102", dec!(500)),
            dated("Binder Card", dec!(300), date(2025, 3, 1)),
            dated("Binder Card", dec!(200), date(2023, 6, 1)),
        ];

        let breakdown = calculate_era_allocation_breakdown_at(&items, today, 12);

        assert_eq!(breakdown.vintage.value, dec!(500));
        assert_eq!(breakdown.vintage.percent, dec!(50));
        assert_eq!(breakdown.current.value, dec!(300));
        assert_eq!(breakdown.ultra_modern.value, dec!(200));
        assert_eq!(breakdown.classic, AllocationBucket::default());
        assert_eq!(breakdown.modern.count, 0);
    }

    #[test]
    fn test_liquidity_breakdown() {
        let breakdown = calculate_liquidity_breakdown(&sample_items());

        // slab plus both raw cards above $50; the booster box is medium
        assert_eq!(breakdown.high.count, 3);
        assert_eq!(breakdown.high.value, dec!(2700));
        assert_eq!(breakdown.medium.count, 1);
        assert_eq!(breakdown.medium.value, dec!(1300));
        assert_eq!(breakdown.low.count, 0);
    }

    #[test]
    fn test_rebalance_outside_band() {
        let items = vec![
            item("Booster Box", "", "", "", dec!(800)),
            item("Charizard", "", "PSA 10", "", dec!(100)),
            item("Pikachu", "", "", "25/102", dec!(100)),
        ];
        let breakdown = calculate_allocation_breakdown(&items);

        let suggestions = calculate_rebalance_suggestions(&breakdown, &AllocationPreset::Balanced.target());

        // raw cards sit exactly 10 points under target, inside the band
        assert_eq!(suggestions.len(), 2);

        let trim = &suggestions[0];
        assert_eq!(trim.asset_type, AssetType::Sealed);
        assert_eq!(trim.action, RebalanceAction::Trim);
        assert_eq!(trim.gap_percent, dec!(30));
        assert_eq!(trim.amount, dec!(300));

        let redirect = &suggestions[1];
        assert_eq!(redirect.asset_type, AssetType::Slab);
        assert_eq!(redirect.action, RebalanceAction::Redirect);
        assert_eq!(redirect.amount, dec!(200));
        assert!(redirect.message.contains("Slab"));
    }

    #[test]
    fn test_no_rebalance_inside_band() {
        let items = vec![
            item("Booster Box", "", "", "", dec!(550)),
            item("Charizard", "", "PSA 10", "", dec!(250)),
            item("Pikachu", "", "", "25/102", dec!(200)),
        ];
        let breakdown = calculate_allocation_breakdown(&items);

        assert!(calculate_rebalance_suggestions(&breakdown, &AllocationTarget::default()).is_empty());
        assert_eq!(
            calculate_rebalance_suggestions_with_band(&breakdown, &AllocationTarget::default(), dec!(1)).len(),
            2
        );
    }

    #[test]
    fn test_era_target_drift() {
        let today = date(2025, 6, 1);
        let items = vec![
            item("Charizard", "Base Set", "PSA 9", "4/102", dec!(500)),
            dated("Binder Card", dec!(500), date(2025, 3, 1)),
        ];
        let breakdown = calculate_era_allocation_breakdown_at(&items, today, 12);

        let drift = era_target_drift(&breakdown, &EraPreset::Balanced.target());

        assert_eq!(drift.len(), 5);
        assert_eq!(drift[0].era, Era::Vintage);
        assert_eq!(drift[0].gap_percent, dec!(35));
        assert_eq!(drift[1].gap_percent, dec!(-15));
        assert_eq!(drift[4].era, Era::Current);
        assert_eq!(drift[4].current_percent, dec!(50));
    }
}

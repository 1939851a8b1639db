//! Tests for portfolio health scoring.

#[cfg(test)]
mod tests {
    use crate::health::*;
    use crate::portfolio::{
        AllocationBreakdown, AllocationBucket, EraAllocationBreakdown, NewPortfolioItem, PortfolioItem,
        PositionConcentration,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn bucket(percent: Decimal) -> AllocationBucket {
        AllocationBucket {
            value: percent,
            percent,
            count: usize::from(!percent.is_zero()),
        }
    }

    fn assets(sealed: Decimal, slabs: Decimal, raw_cards: Decimal) -> AllocationBreakdown {
        AllocationBreakdown {
            sealed: bucket(sealed),
            slabs: bucket(slabs),
            raw_cards: bucket(raw_cards),
            total_value: dec!(100),
        }
    }

    fn eras(vintage: Decimal, classic: Decimal, modern: Decimal, ultra_modern: Decimal, current: Decimal) -> EraAllocationBreakdown {
        EraAllocationBreakdown {
            vintage: bucket(vintage),
            classic: bucket(classic),
            modern: bucket(modern),
            ultra_modern: bucket(ultra_modern),
            current: bucket(current),
            total_value: dec!(100),
        }
    }

    fn positions(top1: Decimal, top3: Decimal, top5: Decimal) -> PositionConcentration {
        PositionConcentration {
            top1_percent: top1,
            top3_percent: top3,
            top5_percent: top5,
            ..Default::default()
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn test_asset_score_sealed_tiers() {
        assert_close(calculate_asset_health_score(&assets(dec!(70), dec!(20), dec!(10))), 95.0);
        assert_close(calculate_asset_health_score(&assets(dec!(55), dec!(25), dec!(20))), 90.0);
        assert_close(calculate_asset_health_score(&assets(dec!(50), dec!(30), dec!(20))), 80.0);
        assert_close(calculate_asset_health_score(&assets(dec!(30), dec!(40), dec!(30))), 70.0);
        assert_close(calculate_asset_health_score(&assets(dec!(10), dec!(50), dec!(40))), 60.0);
    }

    #[test]
    fn test_asset_score_caps() {
        // raw-heavy with sealed 30: tier 70, capped at 60
        assert_close(calculate_asset_health_score(&assets(dec!(30), dec!(5), dec!(65))), 60.0);
        assert_close(calculate_asset_health_score(&assets(dec!(20), dec!(75), dec!(5))), 60.0);
        assert_close(calculate_asset_health_score(&AllocationBreakdown::default()), 60.0);
    }

    #[test]
    fn test_era_score_balanced_portfolio() {
        let breakdown = eras(dec!(20), dec!(15), dec!(20), dec!(20), dec!(10));
        // 50 + 15 vintage + 10 newer share
        assert_close(calculate_era_health_score(&breakdown), 75.0);
    }

    #[test]
    fn test_era_score_newer_bands() {
        // newer 65: +5; vintage 5: +5
        assert_close(
            calculate_era_health_score(&eras(dec!(5), dec!(30), dec!(25), dec!(25), dec!(15))),
            60.0
        );
        // newer 80: no bonus; vintage 10: +10
        assert_close(
            calculate_era_health_score(&eras(dec!(10), dec!(10), dec!(30), dec!(30), dec!(20))),
            60.0
        );
    }

    #[test]
    fn test_era_score_floor() {
        let breakdown = eras(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, dec!(100), Decimal::ZERO);
        // 50 - 5 (all newer) - 5 (no classic), clamped
        assert_close(calculate_era_health_score(&breakdown), 50.0);
        assert_close(calculate_era_health_score(&EraAllocationBreakdown::default()), 50.0);
    }

    #[test]
    fn test_era_score_breadth_bonus() {
        let breakdown = eras(dec!(2), Decimal::ZERO, dec!(30), dec!(38), dec!(30));
        assert_close(calculate_era_health_score(&breakdown), 55.0);
    }

    #[test]
    fn test_concentration_score() {
        // five equal positions: 0.40*75 + 0.35*58 + 0.25*50
        assert_close(
            calculate_concentration_health_score(&positions(dec!(20), dec!(60), dec!(100))),
            62.8
        );
        assert_close(
            calculate_concentration_health_score(&positions(dec!(100), dec!(100), dec!(100))),
            50.0
        );
        let diversified = calculate_concentration_health_score(&positions(dec!(5), dec!(15), dec!(25)));
        assert!(diversified > 90.0 && diversified < 95.0, "{}", diversified);
    }

    #[test]
    fn test_overall_weighting() {
        // 0.45*95 + 0.35*75 + 0.20*62.8 = 81.56
        assert_eq!(calculate_overall_health(95.0, 75.0, 62.8), 82);
        assert_eq!(calculate_overall_health(50.0, 50.0, 50.0), 50);
        assert_eq!(calculate_overall_health(100.0, 100.0, 100.0), 100);
    }

    #[test]
    fn test_breakdown_from_items() {
        let item = |name: &str, category: &str, grade: &str, price: Decimal| {
            PortfolioItem::new(NewPortfolioItem {
                product_name: name.to_string(),
                category: category.to_string(),
                grade: grade.to_string(),
                quantity: dec!(1),
                market_price: price,
                ..Default::default()
            })
            .unwrap()
        };
        let items = vec![
            item("Evolving Skies Booster Box", "Evolving Skies", "", dec!(400)),
            item("Base Set Booster Box", "Base Set", "", dec!(300)),
            item("Charizard", "Base Set", "PSA 9", dec!(300)),
        ];

        let breakdown = calculate_health_breakdown_at(&items, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(), 12);

        // sealed 70% of value
        assert_close(breakdown.asset_allocation, 95.0);
        assert!(breakdown.era_balance >= HEALTH_SCORE_FLOOR);
        assert!(breakdown.concentration >= HEALTH_SCORE_FLOOR);
        assert_eq!(
            breakdown.overall,
            calculate_overall_health(breakdown.asset_allocation, breakdown.era_balance, breakdown.concentration)
        );
    }

    #[test]
    fn test_breakdown_label() {
        let breakdown = HealthScoreBreakdown {
            overall: 82,
            asset_allocation: 95.0,
            era_balance: 75.0,
            concentration: 62.8,
        };
        assert_eq!(breakdown.label(), "Good");
    }
}

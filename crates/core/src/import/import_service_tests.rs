//! Tests for the portfolio item builder.

#[cfg(test)]
mod tests {
    use crate::classification::AssetType;
    use crate::import::*;
    use crate::settings::AnalyticsConfig;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    const SAMPLE_CSV: &str = "\
Product Name,Set Name,Quantity,Market Price,Average Cost Paid,Grade,Card Number,Date Added
Charizard,Base Set,1,\"$1,250.00\",$300.00,PSA 9,4/102,2021-05-01
Evolving Skies Booster Box,Evolving Skies,2,$650.00,$150.00,,,2022-01-15
Umbreon VMAX (Alternate Art),Evolving Skies,1,$1200,$400,,215/203,
";

    #[test]
    fn test_processes_complete_export() {
        let result = process_portfolio_data(SAMPLE_CSV, None);

        assert!(result.validation.is_valid, "{:?}", result.validation.errors);
        assert_eq!(result.items.len(), 3);

        let charizard = &result.items[0];
        assert_eq!(charizard.product_name(), "Charizard");
        assert_eq!(charizard.category(), "Base Set");
        assert_eq!(charizard.market_price(), dec!(1250));
        assert_eq!(charizard.asset_type(), AssetType::Slab);

        assert_eq!(result.items[1].asset_type(), AssetType::Sealed);
        assert_eq!(result.items[1].total_market_value(), dec!(1300));
        assert_eq!(result.items[2].asset_type(), AssetType::RawCard);
        assert_eq!(result.items[2].date_added(), None);

        assert_eq!(
            result.detected_columns.get(CanonicalField::Category),
            Some("Set Name")
        );
    }

    #[test]
    fn test_weights_sum_to_one_hundred() {
        let result = process_portfolio_data(SAMPLE_CSV, None);

        let sum: Decimal = result
            .items
            .iter()
            .map(|item| item.portfolio_weight_percent())
            .sum();
        assert!((sum - dec!(100)).abs() < dec!(0.000001));
        // 1250 + 1300 + 1200
        assert_eq!(result.items[1].portfolio_weight_percent().round_dp(2), dec!(34.67));
    }

    #[test]
    fn test_missing_required_column() {
        let result = process_portfolio_data("Name,Qty\nCharizard,1\n", None);

        assert!(result.items.is_empty());
        assert!(!result.validation.is_valid);
        assert_eq!(result.validation.errors.len(), 1);
        let message = &result.validation.errors[0];
        assert!(message.contains("Market Price"), "{}", message);
        assert!(message.contains("Name, Qty"), "{}", message);
        assert_eq!(result.detected_columns.headers, vec!["Name", "Qty"]);
    }

    #[test]
    fn test_bad_row_does_not_abort_import() {
        let csv = "\
Product Name,Quantity,Market Price
Pikachu,1,2.00
Raichu,1,N/A$$
Eevee,2,3.00";

        let result = process_portfolio_data(csv, None);

        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].product_name(), "Pikachu");
        assert_eq!(result.items[1].product_name(), "Eevee");
        assert!(!result.validation.is_valid);
        assert_eq!(result.validation.errors.len(), 1);
        let message = &result.validation.errors[0];
        assert!(message.starts_with("Row 3:"), "{}", message);
        assert!(message.contains("N/A$$"), "{}", message);
        assert!(message.contains("Market Price"), "{}", message);
    }

    #[test]
    fn test_negative_value_is_row_error() {
        let csv = "Product Name,Quantity,Market Price\nPikachu,-1,2.00\nEevee,1,1";

        let result = process_portfolio_data(csv, None);

        assert_eq!(result.items.len(), 1);
        assert!(result.validation.errors[0].starts_with("Row 2:"));
    }

    #[test]
    fn test_structural_failure() {
        let result = process_portfolio_data("Product Name,Quantity,Market Price\n", None);

        assert!(result.items.is_empty());
        assert!(!result.validation.is_valid);
        assert_eq!(result.validation.errors.len(), 1);
        assert!(result.detected_columns.headers.is_empty());
    }

    #[test]
    fn test_blank_names_are_skipped_with_warning() {
        let csv = "Product Name,Quantity,Market Price\n ,1,2\nEevee,1,1\n,3,4";

        let result = process_portfolio_data(csv, None);

        assert!(result.validation.is_valid);
        assert_eq!(result.items.len(), 1);
        assert!(result
            .validation
            .warnings
            .iter()
            .any(|w| w.contains("Skipped 2 row(s)")));
    }

    #[test]
    fn test_no_valid_items() {
        let csv = "Product Name,Quantity,Market Price\n,1,2\n";

        let result = process_portfolio_data(csv, None);

        assert!(!result.validation.is_valid);
        assert_eq!(result.validation.errors, vec!["No valid items found.".to_string()]);
    }

    #[test]
    fn test_missing_cost_column_warns_and_zeroes_profit() {
        let csv = "Product Name,Quantity,Market Price\nEevee,2,5";

        let result = process_portfolio_data(csv, None);

        assert!(result.validation.is_valid);
        assert_eq!(result.items[0].total_cost_basis(), Decimal::ZERO);
        assert_eq!(result.items[0].gain_percent(), Decimal::ZERO);
        assert!(result
            .validation
            .warnings
            .iter()
            .any(|w| w.contains("Average Cost Paid")));
    }

    #[test]
    fn test_unreadable_date_warns() {
        let csv = "Product Name,Quantity,Market Price,Date Added\nEevee,1,5,someday";

        let result = process_portfolio_data(csv, None);

        assert!(result.validation.is_valid);
        assert_eq!(result.items[0].date_added(), None);
        assert!(result
            .validation
            .warnings
            .iter()
            .any(|w| w.starts_with("Row 2:") && w.contains("someday")));
    }

    #[test]
    fn test_column_override() {
        let csv = "Thing,How Many,Worth\nEevee,3,2";
        assert!(!process_portfolio_data(csv, None).validation.is_valid);

        let mapping = ColumnMapping::default()
            .with_column(CanonicalField::ProductName, Some("Thing"))
            .with_column(CanonicalField::Quantity, Some("How Many"))
            .with_column(CanonicalField::MarketPrice, Some("Worth"));

        let result = process_portfolio_data(csv, Some(&mapping));

        assert!(result.validation.is_valid, "{:?}", result.validation.errors);
        assert_eq!(result.items[0].total_market_value(), dec!(6));
        assert_eq!(result.detected_columns.headers, vec!["Thing", "How Many", "Worth"]);
    }

    #[test]
    fn test_override_still_requires_fields() {
        let mapping = ColumnMapping::default().with_column(CanonicalField::ProductName, Some("Thing"));

        let result = process_portfolio_data("Thing,Worth\nEevee,2", Some(&mapping));

        assert!(result.items.is_empty());
        assert!(result.validation.errors[0].contains("Quantity, Market Price"));
    }

    #[test]
    fn test_reimport_is_identical_apart_from_ids() {
        let strip_ids = |result: &ImportResult| {
            let mut json = serde_json::to_value(result).unwrap();
            for item in json["items"].as_array_mut().unwrap() {
                item.as_object_mut().unwrap().remove("id");
            }
            json
        };

        let first = process_portfolio_data(SAMPLE_CSV, None);
        let second = process_portfolio_data(SAMPLE_CSV, None);

        assert_eq!(strip_ids(&first), strip_ids(&second));
        assert_eq!(first.validation, second.validation);
    }

    #[test]
    fn test_spaced_export_with_quoted_prices() {
        let csv = "Product Name, Quantity, Market Price\n\"Booster Box, Japanese\", 1, 100\nETB, 2, \"1,250.00\"";

        let result = process_portfolio_data(csv, None);

        assert!(result.validation.is_valid, "{:?}", result.validation.errors);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].product_name(), "Booster Box, Japanese");
        assert_eq!(result.items[1].total_market_value(), dec!(2500));
    }

    #[test]
    fn test_zero_value_portfolio() {
        let csv = "Product Name,Quantity,Market Price\nEevee,0,5\nPikachu,3,0";

        let result = process_portfolio_data_with_config(csv, None, &AnalyticsConfig::default());

        assert!(result.validation.is_valid);
        assert!(result
            .items
            .iter()
            .all(|item| item.portfolio_weight_percent().is_zero()));
    }
}

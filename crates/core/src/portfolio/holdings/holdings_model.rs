use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classification::{classify_asset_type, classify_liquidity_tier, AssetType, LiquidityTier};
use crate::constants::DEFAULT_CATEGORY;
use crate::import::ImportError;

/// Raw attributes of a holding, before anything is derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioItem {
    pub product_name: String,
    pub category: String,
    pub quantity: Decimal,
    pub market_price: Decimal,
    pub average_cost_paid: Decimal,
    pub grade: String,
    pub card_number: String,
    pub date_added: Option<NaiveDate>,
}

/// One owned holding.
///
/// Totals, profit, gain and classification are computed once in
/// [`PortfolioItem::new`] and the portfolio weight in
/// [`assign_portfolio_weights`]; nothing else can set them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    // Identity
    id: String,
    product_name: String,
    category: String,

    // Raw inputs
    quantity: Decimal,
    market_price: Decimal,
    average_cost_paid: Decimal,
    grade: String,
    card_number: String,
    date_added: Option<NaiveDate>,

    // Derived
    total_market_value: Decimal,
    total_cost_basis: Decimal,
    profit_dollars: Decimal,
    gain_percent: Decimal,
    portfolio_weight_percent: Decimal,

    // Classification
    asset_type: AssetType,
    liquidity_tier: LiquidityTier,
}

fn non_negative(field: &'static str, value: Decimal) -> Result<Decimal, ImportError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ImportError::Negative {
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}

impl PortfolioItem {
    /// Builds a holding from raw attributes, deriving totals and classification.
    ///
    /// Fails when the product name is blank, a numeric input is negative, or
    /// a derived amount overflows.
    pub fn new(input: NewPortfolioItem) -> Result<Self, ImportError> {
        let product_name = input.product_name.trim().to_string();
        if product_name.is_empty() {
            return Err(ImportError::MissingProductName);
        }

        let quantity = non_negative("Quantity", input.quantity)?;
        let market_price = non_negative("Market Price", input.market_price)?;
        let average_cost_paid = non_negative("Average Cost Paid", input.average_cost_paid)?;

        let category = match input.category.trim() {
            "" => DEFAULT_CATEGORY.to_string(),
            other => other.to_string(),
        };

        let total_market_value = quantity
            .checked_mul(market_price)
            .ok_or(ImportError::Overflow("Total market value"))?;
        let total_cost_basis = quantity
            .checked_mul(average_cost_paid)
            .ok_or(ImportError::Overflow("Total cost basis"))?;
        let profit_dollars = total_market_value
            .checked_sub(total_cost_basis)
            .ok_or(ImportError::Overflow("Profit"))?;
        let gain_percent = if total_cost_basis > Decimal::ZERO {
            profit_dollars
                .checked_div(total_cost_basis)
                .and_then(|ratio| ratio.checked_mul(dec!(100)))
                .ok_or(ImportError::Overflow("Gain percent"))?
        } else {
            Decimal::ZERO
        };

        let asset_type = classify_asset_type(&input.grade, &input.card_number);
        let liquidity_tier = classify_liquidity_tier(asset_type, market_price, quantity, &product_name);

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            product_name,
            category,
            quantity,
            market_price,
            average_cost_paid,
            grade: input.grade.trim().to_string(),
            card_number: input.card_number.trim().to_string(),
            date_added: input.date_added,
            total_market_value,
            total_cost_basis,
            profit_dollars,
            gain_percent,
            portfolio_weight_percent: Decimal::ZERO,
            asset_type,
            liquidity_tier,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn market_price(&self) -> Decimal {
        self.market_price
    }

    pub fn average_cost_paid(&self) -> Decimal {
        self.average_cost_paid
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn date_added(&self) -> Option<NaiveDate> {
        self.date_added
    }

    /// `quantity × market_price`
    pub fn total_market_value(&self) -> Decimal {
        self.total_market_value
    }

    /// `quantity × average_cost_paid`
    pub fn total_cost_basis(&self) -> Decimal {
        self.total_cost_basis
    }

    pub fn profit_dollars(&self) -> Decimal {
        self.profit_dollars
    }

    /// Profit as a percent of cost basis; zero without a cost basis.
    pub fn gain_percent(&self) -> Decimal {
        self.gain_percent
    }

    /// Share of the import's total market value, 0-100.
    pub fn portfolio_weight_percent(&self) -> Decimal {
        self.portfolio_weight_percent
    }

    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    pub fn liquidity_tier(&self) -> LiquidityTier {
        self.liquidity_tier
    }
}

/// Sum of every item's total market value.
pub fn total_market_value(items: &[PortfolioItem]) -> Decimal {
    items.iter().map(|item| item.total_market_value).sum()
}

/// Sets every item's portfolio weight from the full item set and returns the
/// total it was computed against. Weights are all zero when the total is zero.
pub fn assign_portfolio_weights(items: &mut [PortfolioItem]) -> Decimal {
    let total = total_market_value(items);

    for item in items.iter_mut() {
        item.portfolio_weight_percent = percent_of(item.total_market_value, total);
    }

    total
}

/// `value` as a percent of `total`, or 0 when the total is not positive.
pub fn percent_of(value: Decimal, total: Decimal) -> Decimal {
    if total > Decimal::ZERO {
        value / total * dec!(100)
    } else {
        Decimal::ZERO
    }
}

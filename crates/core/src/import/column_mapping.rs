//! Column mapper.
//!
//! Matches free-form export headers to the canonical portfolio fields using
//! ordered synonym lists. Matching is two-pass: an exact (case-insensitive)
//! pass, then a containment pass in either direction. Both passes try the
//! synonyms in listed order, so the lists are order-sensitive.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::csv_parser::tokenize_csv;

/// Fields the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    ProductName,
    Category,
    Quantity,
    MarketPrice,
    AverageCostPaid,
    Grade,
    CardNumber,
    DateAdded,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 8] = [
        CanonicalField::ProductName,
        CanonicalField::Category,
        CanonicalField::Quantity,
        CanonicalField::MarketPrice,
        CanonicalField::AverageCostPaid,
        CanonicalField::Grade,
        CanonicalField::CardNumber,
        CanonicalField::DateAdded,
    ];

    /// Fields an import cannot proceed without.
    pub const REQUIRED: [CanonicalField; 3] = [
        CanonicalField::ProductName,
        CanonicalField::Quantity,
        CanonicalField::MarketPrice,
    ];

    /// Human-friendly label used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalField::ProductName => "Product Name",
            CanonicalField::Category => "Category",
            CanonicalField::Quantity => "Quantity",
            CanonicalField::MarketPrice => "Market Price",
            CanonicalField::AverageCostPaid => "Average Cost Paid",
            CanonicalField::Grade => "Grade",
            CanonicalField::CardNumber => "Card Number",
            CanonicalField::DateAdded => "Date Added",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Known header spellings, most specific first.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::ProductName => &[
                "product name",
                "name",
                "card name",
                "product",
                "item name",
                "item",
                "title",
                "card",
                "description",
            ],
            CanonicalField::Category => &[
                "category",
                "set",
                "set name",
                "expansion",
                "series",
                "product line",
                "group",
            ],
            CanonicalField::Quantity => &[
                "quantity",
                "qty",
                "total quantity",
                "add to quantity",
                "count",
                "owned",
                "amount",
            ],
            CanonicalField::MarketPrice => &[
                "market price",
                "market value",
                "tcgplayer price",
                "tcg market price",
                "tcg price",
                "current price",
                "fmv",
                "fair market value",
                "price",
                "value",
            ],
            CanonicalField::AverageCostPaid => &[
                "average cost paid",
                "average cost",
                "avg cost",
                "avg cost paid",
                "cost basis",
                "cost per unit",
                "price paid",
                "purchase price",
                "buy price",
                "cost",
                "paid",
            ],
            CanonicalField::Grade => &["grade", "graded", "psa grade", "grading"],
            CanonicalField::CardNumber => &[
                "card number",
                "number",
                "card #",
                "card no",
                "collector number",
                "no.",
                "#",
            ],
            CanonicalField::DateAdded => &[
                "date added",
                "added",
                "date",
                "purchase date",
                "date purchased",
                "acquired",
                "added on",
                "created",
            ],
        }
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which source header feeds each canonical field.
///
/// Built even when required fields are unresolved so callers can show the
/// user which headers were found and which fields were not matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMapping {
    pub headers: Vec<String>,
    pub detected: BTreeMap<CanonicalField, Option<String>>,
}

impl ColumnMapping {
    /// Runs [`find_column`] for every canonical field.
    pub fn from_headers(headers: &[String]) -> Self {
        let detected = CanonicalField::ALL
            .iter()
            .map(|field| (*field, find_column(headers, *field)))
            .collect();

        Self {
            headers: headers.to_vec(),
            detected,
        }
    }

    /// Source header for `field`, if one was matched.
    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        self.detected.get(&field).and_then(|h| h.as_deref())
    }

    /// Replaces the detected header for one field.
    pub fn with_column(mut self, field: CanonicalField, header: Option<&str>) -> Self {
        self.detected.insert(field, header.map(str::to_string));
        self
    }

    /// Required fields without a source header, in canonical order.
    pub fn missing_required(&self) -> Vec<CanonicalField> {
        CanonicalField::REQUIRED
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    /// Optional fields without a source header, in canonical order.
    pub fn missing_optional(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .iter()
            .copied()
            .filter(|field| !field.is_required() && self.get(*field).is_none())
            .collect()
    }
}

/// Finds the header that best matches `field`.
///
/// Pass 1 returns the first header equal to a synonym, trying synonyms in
/// order. Pass 2 returns the first header that contains a synonym or is
/// contained in one, again trying synonyms in order.
pub fn find_column(headers: &[String], field: CanonicalField) -> Option<String> {
    let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    let synonyms = field.synonyms();

    for synonym in synonyms {
        if let Some(idx) = normalized.iter().position(|h| h == synonym) {
            return Some(headers[idx].clone());
        }
    }

    for synonym in synonyms {
        let found = normalized
            .iter()
            .position(|h| !h.is_empty() && (h.contains(synonym) || synonym.contains(h.as_str())));
        if let Some(idx) = found {
            return Some(headers[idx].clone());
        }
    }

    None
}

/// Detects the column mapping for raw CSV text.
///
/// Text that cannot be tokenized yields a mapping with no headers and every
/// field unmatched.
pub fn detect_column_mappings(csv_text: &str) -> ColumnMapping {
    match tokenize_csv(csv_text) {
        Ok(tokenized) => ColumnMapping::from_headers(&tokenized.headers),
        Err(_) => ColumnMapping::from_headers(&[]),
    }
}

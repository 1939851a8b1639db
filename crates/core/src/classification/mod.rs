//! Asset classification.
//!
//! Derives asset type, liquidity tier and release era for a holding from its
//! raw attributes. Every classifier here is a pure function; lookup tables
//! are immutable statics built once per process.

mod asset_classifier;
mod classification_model;
mod era_classifier;
mod era_tables;

pub use asset_classifier::{classify_asset_type, classify_liquidity_tier, is_ungraded};
pub use classification_model::{AssetType, Era, LiquidityTier};
pub use era_classifier::{classify_era, classify_item_era, classify_item_era_at};

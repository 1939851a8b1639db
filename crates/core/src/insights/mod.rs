//! Prioritized, human-readable observations about a portfolio.
//!
//! Insights are recomputed from the items and the allocation target on
//! every read. Each kind of observation has a stable id, so the same
//! condition always produces the same id and can be dismissed.

mod insights_model;
mod insights_service;


pub use insights_model::{Insight, InsightPriority, InsightType};
pub use insights_service::{filter_dismissed, generate_insights, generate_insights_at};

//! Portfolio health scoring.
//!
//! Three component scores, each clamped to `[50, 100]`:
//!
//! - **Asset allocation** (45%) - rewards sealed exposure, capped when raw
//!   cards or slabs dominate
//! - **Era balance** (35%) - rewards vintage exposure and a balanced share of
//!   newer eras
//! - **Concentration** (20%) - piecewise-linear curves over the top 1, 3 and 5
//!   positions
//!
//! The overall score is their weighted average rounded to an integer.

mod model;
mod scoring;

#[cfg(test)]
mod scoring_tests;

pub use model::HealthScoreBreakdown;
pub use scoring::{
    calculate_asset_health_score, calculate_concentration_health_score, calculate_era_health_score,
    calculate_health_breakdown, calculate_health_breakdown_at, calculate_overall_health,
    HEALTH_SCORE_CEILING, HEALTH_SCORE_FLOOR,
};

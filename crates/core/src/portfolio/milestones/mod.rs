//! Profit-taking milestones.

mod milestones_model;
mod milestones_service;

pub use milestones_model::ProfitMilestone;
pub use milestones_service::{calculate_profit_milestones, milestone_for_gain};

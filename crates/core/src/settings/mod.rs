//! Analytics settings shared by the metrics engine and insight generator.

mod settings_model;

pub use settings_model::AnalyticsConfig;

use serde::{Deserialize, Serialize};

/// Overall health score with the component scores it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreBreakdown {
    /// Weighted composite, 0-100
    pub overall: u8,
    pub asset_allocation: f64,
    pub era_balance: f64,
    pub concentration: f64,
}

impl HealthScoreBreakdown {
    /// Short description of the overall score.
    pub fn label(&self) -> &'static str {
        match self.overall {
            85..=u8::MAX => "Excellent",
            70..=84 => "Good",
            60..=69 => "Fair",
            _ => "Needs Attention",
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Insight priority. Ordered Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    Low,
    Medium,
    High,
}

impl InsightPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightPriority::Low => "low",
            InsightPriority::Medium => "medium",
            InsightPriority::High => "high",
        }
    }
}

impl std::fmt::Display for InsightPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What triggered an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Milestone,
    Concentration,
    Allocation,
    Patience,
    Rebalance,
}

/// A single observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Stable per condition, e.g. "milestone-500" or "allocation-over-sealed"
    pub id: String,
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub priority: InsightPriority,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Insight {
    pub(crate) fn new(
        id: impl Into<String>,
        insight_type: InsightType,
        priority: InsightPriority,
        title: impl Into<String>,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            insight_type,
            priority,
            title: title.into(),
            message: message.into(),
            created_at,
        }
    }
}

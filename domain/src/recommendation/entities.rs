//! Recommendation output contract.
//!
//! These types define the schema the primary provider is instructed to
//! produce and the shape the fallback generator guarantees. The wire
//! format is camelCase JSON with top-level keys `unitMetrics`,
//! `conversationStarters`, and `conditionalInsights`.

use serde::{Deserialize, Serialize};

/// A cost figure normalized per business-meaningful unit, with a short
/// rationale tying it to business value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitMetric {
    pub title: String,
    pub description: String,
}

impl UnitMetric {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Focus-area-specific discussion points, keyed by focus flag.
///
/// Each field is present on the wire iff the corresponding
/// [`CompanyContext`](crate::company::CompanyContext) flag was enabled.
/// Absent flags leave the key absent entirely, never present with an
/// empty list. Modeling the keys as `Option` fields lets serde omit
/// them, so well-formedness never depends on which flags are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalInsights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ppa: Option<Vec<String>>,
    #[serde(default, rename = "genAI", skip_serializing_if = "Option::is_none")]
    pub gen_ai: Option<Vec<String>>,
    #[serde(
        default,
        rename = "cloudCostConcerns",
        skip_serializing_if = "Option::is_none"
    )]
    pub cloud_cost_concerns: Option<Vec<String>>,
}

impl ConditionalInsights {
    pub fn is_empty(&self) -> bool {
        self.ppa.is_none() && self.gen_ai.is_none() && self.cloud_cost_concerns.is_none()
    }
}

/// A full set of FinOps recommendations for one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Unit-cost-metric recommendations; 4 to 5 entries.
    pub unit_metrics: Vec<UnitMetric>,
    /// Open-ended discovery questions; exactly 3 entries.
    pub conversation_starters: Vec<String>,
    /// Flag-gated insight lists; each present list has exactly 3 entries.
    #[serde(default)]
    pub conditional_insights: ConditionalInsights,
}

impl Recommendation {
    /// Check the full structural invariants: 4-5 unit metrics, exactly 3
    /// conversation starters, and each present insight list of length 3.
    ///
    /// The provider path deliberately does not enforce this (only the
    /// minimal required-key check happens there); the fallback generator
    /// and tests do.
    pub fn check_invariants(&self) -> Result<(), String> {
        if !(4..=5).contains(&self.unit_metrics.len()) {
            return Err(format!(
                "expected 4-5 unit metrics, got {}",
                self.unit_metrics.len()
            ));
        }
        if self.conversation_starters.len() != 3 {
            return Err(format!(
                "expected exactly 3 conversation starters, got {}",
                self.conversation_starters.len()
            ));
        }
        for (key, list) in [
            ("ppa", &self.conditional_insights.ppa),
            ("genAI", &self.conditional_insights.gen_ai),
            ("cloudCostConcerns", &self.conditional_insights.cloud_cost_concerns),
        ] {
            if let Some(items) = list
                && items.len() != 3
            {
                return Err(format!(
                    "expected exactly 3 insights under `{}`, got {}",
                    key,
                    items.len()
                ));
            }
        }
        Ok(())
    }
}

//! Cost model - per-tool pricing inputs and projected totals.

use serde::{Deserialize, Serialize};

/// Billing type of a stack entry's cost model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostType {
    /// No cost
    Free,
    /// Flat monthly fee
    Subscription,
    /// Base fee plus metered usage
    #[serde(rename = "Pay-as-you-go")]
    PayAsYouGo,
    /// Quote from sales
    Custom,
}

impl CostType {
    /// Wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            CostType::Free => "Free",
            CostType::Subscription => "Subscription",
            CostType::PayAsYouGo => "Pay-as-you-go",
            CostType::Custom => "Custom",
        }
    }

    /// Whether the final price depends on usage or negotiation.
    pub fn is_variable(&self) -> bool {
        matches!(self, CostType::PayAsYouGo | CostType::Custom)
    }
}

/// Pricing inputs for one stack entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Billing type
    #[serde(rename = "type")]
    pub cost_type: CostType,

    /// Fixed monthly cost in USD
    #[serde(default)]
    pub base_cost_monthly: f64,

    /// Cost per metered unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,

    /// Metered unit name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,

    /// Whether a free tier exists
    #[serde(default)]
    pub free_tier: bool,
}

impl CostModel {
    /// A free cost model.
    pub fn free() -> Self {
        Self {
            cost_type: CostType::Free,
            base_cost_monthly: 0.0,
            unit_cost: None,
            unit_type: None,
            free_tier: false,
        }
    }

    /// A flat subscription.
    pub fn subscription(base_cost_monthly: f64, free_tier: bool) -> Self {
        Self {
            cost_type: CostType::Subscription,
            base_cost_monthly,
            free_tier,
            ..Self::free()
        }
    }

    /// Metered pricing on top of a base fee.
    pub fn pay_as_you_go(base_cost_monthly: f64, unit_cost: f64) -> Self {
        Self {
            cost_type: CostType::PayAsYouGo,
            base_cost_monthly,
            unit_cost: Some(unit_cost),
            ..Self::free()
        }
    }

    /// Negotiated pricing.
    pub fn custom() -> Self {
        Self {
            cost_type: CostType::Custom,
            ..Self::free()
        }
    }
}

/// One tool handed to cost projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackItem {
    /// Tool name
    pub name: String,

    /// Cost category label, e.g. "AI/ML API"
    pub category: String,

    /// Pricing, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_model: Option<CostModel>,
}

/// Projected monthly cost of one tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCost {
    /// Tool name
    pub tool_name: String,

    /// Cost category label
    pub category: String,

    /// Billing type, absent when the tool had no cost model
    pub cost_type: Option<CostType>,

    /// Lowest monthly cost
    pub monthly_min: f64,

    /// Highest monthly cost
    pub monthly_max: f64,

    /// Expected monthly cost
    pub monthly_estimate: f64,

    /// Caveat for this tool
    pub notes: String,
}

/// Multipliers applied to the summed per-tool costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingFactors {
    /// Applied to the minimum; follows the timeline
    pub development: f64,

    /// Applied to the maximum; follows complexity
    pub production: f64,

    /// Applied to the maximum; follows users and traffic
    pub scale: f64,
}

/// How much to trust a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Usage-priced tools in a demanding project
    Low,
    /// One source of uncertainty
    Medium,
    /// Fixed prices, modest project
    High,
}

impl Confidence {
    /// Wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// Projected cost of a whole stack.
///
/// The three totals use different scaling factors, so `min <= estimate <= max`
/// does not always hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostProjection {
    /// Scaled monthly minimum
    pub total_monthly_min: f64,

    /// Scaled monthly maximum
    pub total_monthly_max: f64,

    /// Scaled monthly estimate
    pub total_monthly_estimate: f64,

    /// Monthly minimum over a year
    pub total_yearly_min: f64,

    /// Monthly maximum over a year
    pub total_yearly_max: f64,

    /// Monthly estimate over a year
    pub total_yearly_estimate: f64,

    /// Per-tool costs, in stack order
    pub breakdown: Vec<ToolCost>,

    /// Multipliers used for the totals
    pub scaling_factors: ScalingFactors,

    /// Confidence label
    pub confidence: Confidence,

    /// Caveats
    pub notes: Vec<String>,
}

//! Recommendation model - the record handed back to callers.

use serde::{Deserialize, Serialize};

use crate::analysis::ProjectAnalysis;
use crate::cost::CostProjection;
use crate::skill::SkillProfile;
use crate::tool::ToolCategory;

/// One selected tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackEntry {
    /// Catalog id
    pub id: String,

    /// Display name
    pub name: String,

    /// Category
    pub category: ToolCategory,

    /// Why it was picked
    pub reason: String,

    /// Compatibility in [0, 100]
    pub compatibility_score: u8,
}

/// Kinds of warning a recommendation can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningKind {
    /// A candidate was dropped because of a conflict rule
    #[serde(rename = "Tool Conflict")]
    ToolConflict,
}

/// A non-fatal note about the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Kind
    #[serde(rename = "type")]
    pub kind: WarningKind,

    /// Human-readable message
    pub message: String,
}

impl Warning {
    /// Conflict warning for a dropped tool.
    pub fn tool_conflict(tool_name: &str) -> Self {
        Self {
            kind: WarningKind::ToolConflict,
            message: format!("{} conflicts with existing selections", tool_name),
        }
    }
}

/// One line of the legacy cost estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCostLine {
    /// Tool name
    pub tool: String,

    /// Expected monthly cost
    pub cost: f64,
}

/// Unscaled cost range kept for older clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyCostEstimate {
    /// Sum of per-tool minimums
    pub min: f64,

    /// Sum of per-tool maximums
    pub max: f64,

    /// Per-tool expected cost
    pub breakdown: Vec<LegacyCostLine>,
}

/// A complete stack recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// One-line summary
    pub summary: String,

    /// Analysis the stack was chosen for
    pub analysis: ProjectAnalysis,

    /// Selected tools, preferred tools first
    pub recommended_stack: Vec<StackEntry>,

    /// Conflicts encountered while selecting
    pub warnings: Vec<Warning>,

    /// Build brief for the selected stack
    pub project_prompt: String,

    /// Legacy unscaled estimate
    pub estimated_cost: LegacyCostEstimate,

    /// Scaled projection
    pub cost_projection: CostProjection,
}

/// Body of a recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// Free-text project description
    pub project_idea: String,

    /// Caller's effort tolerance
    #[serde(default)]
    pub skill_profile: SkillProfile,

    /// Tool ids the caller wants included
    #[serde(default)]
    pub preferred_tool_ids: Vec<String>,
}

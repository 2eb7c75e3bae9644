//! StackFast core data models.
//!
//! Tool catalog entries, project analyses, recommendations and cost
//! projections shared by every StackFast crate.

#![warn(missing_docs)]

mod error;

// Inputs
mod tool;
mod skill;
mod scale;
mod config;

// Derived and output records
mod analysis;
mod recommendation;
mod cost;

pub use error::ParseError;

pub use tool::{ToolProfile, ToolCategory, PricingModel, Sentiment, ConflictRule, ConflictKind, ScoredTool};
pub use skill::SkillProfile;
pub use scale::{ProjectScale, Timeline};
pub use config::RecommendationConfig;

pub use analysis::{
    ProjectAnalysis, ProjectType, Complexity, Feature, ScalingLevel, DatabaseKind,
};
pub use recommendation::{
    Recommendation, RecommendationRequest, StackEntry, Warning, WarningKind,
    LegacyCostEstimate, LegacyCostLine,
};
pub use cost::{
    CostProjection, CostModel, CostType, StackItem, ToolCost, ScalingFactors, Confidence,
};

/// Traffic level of a project scale.
pub type Traffic = ScalingLevel;

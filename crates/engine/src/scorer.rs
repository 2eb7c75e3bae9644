//! Tool compatibility scoring.

use stackfast_core::{
    Complexity, PricingModel, ProjectAnalysis, ScoredTool, Sentiment, SkillProfile, ToolProfile,
};

/// Points for a tool with popularity 1.0.
const POPULARITY_WEIGHT: f64 = 30.0;
/// Points for a perfect skill match.
const SKILL_MATCH_POINTS: u32 = 20;
/// Points lost per unit of skill distance.
const SKILL_PENALTY_PER_STEP: u32 = 5;
const HIGHLY_POSITIVE_BONUS: f64 = 15.0;
const POSITIVE_BONUS: f64 = 10.0;
const FREE_TIER_BONUS: f64 = 10.0;
const ZERO_COST_BONUS: f64 = 5.0;
const COMPLEXITY_FIT_BONUS: f64 = 10.0;

/// Setup effort at or below which a tool counts as beginner-friendly.
pub const BEGINNER_SETUP_MAX: i32 = 2;
/// Setup effort at or above which a tool counts as enterprise-ready.
pub const ENTERPRISE_SETUP_MIN: i32 = 3;

/// Whether the tool's setup effort suits the project's complexity.
pub fn fits_complexity(tool: &ToolProfile, complexity: Complexity) -> bool {
    match complexity {
        Complexity::Simple => tool.skill.setup <= BEGINNER_SETUP_MAX,
        Complexity::Complex => tool.skill.setup >= ENTERPRISE_SETUP_MIN,
        Complexity::Medium => false,
    }
}

/// Additive point scorer, clamped to 0-100.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolScorer;

impl ToolScorer {
    /// Create a scorer.
    pub fn new() -> Self {
        Self
    }

    /// Score one tool for a project and user.
    pub fn score(&self, tool: &ToolProfile, analysis: &ProjectAnalysis, skill: &SkillProfile) -> u8 {
        let mut points = tool.popularity_score * POPULARITY_WEIGHT;

        let penalty = tool.skill.distance(skill).saturating_mul(SKILL_PENALTY_PER_STEP);
        points += SKILL_MATCH_POINTS.saturating_sub(penalty) as f64;

        points += match tool.community_sentiment {
            Some(Sentiment::HighlyPositive) => HIGHLY_POSITIVE_BONUS,
            Some(Sentiment::Positive) => POSITIVE_BONUS,
            _ => 0.0,
        };

        if tool.pricing_model == PricingModel::FreeTier {
            points += FREE_TIER_BONUS;
        } else if tool.base_cost_monthly == 0.0 {
            points += ZERO_COST_BONUS;
        }

        if fits_complexity(tool, analysis.complexity) {
            points += COMPLEXITY_FIT_BONUS;
        }

        // NaN (from a NaN popularity) falls through the clamp and casts to 0
        points.round().clamp(0.0, 100.0) as u8
    }

    /// Score every tool, keeping catalog order.
    pub fn score_all(
        &self,
        catalog: &[ToolProfile],
        analysis: &ProjectAnalysis,
        skill: &SkillProfile,
    ) -> Vec<ScoredTool> {
        catalog
            .iter()
            .map(|tool| ScoredTool {
                compatibility_score: self.score(tool, analysis, skill),
                tool: tool.clone(),
            })
            .collect()
    }
}

/// Score a tool with a default scorer.
pub fn score_tool(tool: &ToolProfile, analysis: &ProjectAnalysis, skill: &SkillProfile) -> u8 {
    ToolScorer::new().score(tool, analysis, skill)
}

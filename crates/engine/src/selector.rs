//! Stack selection strategies.

use std::collections::HashSet;

use stackfast_core::{
    Complexity, PricingModel, ProjectAnalysis, RecommendationConfig, ScoredTool, Sentiment,
    SkillProfile, StackEntry, ToolCategory, ToolProfile, Warning,
};
use tracing::{debug, warn};

use crate::scorer::{fits_complexity, ToolScorer};

/// Popularity above which a tool is called "highly popular".
const HIGH_POPULARITY: f64 = 0.8;

/// Reason attached to caller-preferred tools.
pub const PREFERRED_REASON: &str = "selected as your preferred tool";

/// Reason used when no specific phrase applies.
pub const FALLBACK_REASON: &str = "good fit for your project";

/// A tool picked for the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedTool {
    /// The tool and its score
    pub scored: ScoredTool,

    /// Why it was picked
    pub reason: String,

    /// Whether the caller asked for it
    pub preferred: bool,
}

impl SelectedTool {
    /// Flatten into a recommendation stack entry.
    pub fn to_entry(&self) -> StackEntry {
        StackEntry {
            id: self.scored.tool.id.clone(),
            name: self.scored.tool.name.clone(),
            category: self.scored.tool.category,
            reason: self.reason.clone(),
            compatibility_score: self.scored.compatibility_score,
        }
    }
}

/// Result of a selection run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Picked tools, preferred first
    pub selected: Vec<SelectedTool>,

    /// Conflicts hit while filling
    pub warnings: Vec<Warning>,
}

impl Selection {
    /// Stack entries in selection order.
    pub fn stack(&self) -> Vec<StackEntry> {
        self.selected.iter().map(SelectedTool::to_entry).collect()
    }

    /// Selected catalog entries in selection order.
    pub fn tools(&self) -> impl Iterator<Item = &ToolProfile> {
        self.selected.iter().map(|s| &s.scored.tool)
    }
}

/// Greedy one-tool-per-category selector.
#[derive(Debug, Clone, Default)]
pub struct StackSelector {
    config: RecommendationConfig,
    scorer: ToolScorer,
}

impl StackSelector {
    /// Create a selector with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom limits.
    pub fn with_config(mut self, config: RecommendationConfig) -> Self {
        self.config = config;
        self
    }

    /// Current limits.
    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Choose a stack from a catalog.
    ///
    /// Preferred tools go in first, in the given order, whatever their score
    /// or category. The rest of the catalog fills the stack by descending
    /// score, one tool per category, until the size cap is reached.
    pub fn select(
        &self,
        catalog: &[ToolProfile],
        analysis: &ProjectAnalysis,
        skill: &SkillProfile,
        preferred_ids: &[String],
    ) -> Selection {
        let scored = self.scorer.score_all(catalog, analysis, skill);

        let mut selection = Selection::default();
        let mut used: HashSet<ToolCategory> = HashSet::new();
        let mut picked: HashSet<&str> = HashSet::new();

        for id in preferred_ids {
            if picked.contains(id.as_str()) {
                continue;
            }
            let Some(tool) = scored.iter().find(|s| &s.tool.id == id) else {
                warn!("Preferred tool {} is not in the catalog", id);
                continue;
            };

            used.insert(tool.tool.category);
            picked.insert(tool.tool.id.as_str());
            selection.selected.push(SelectedTool {
                scored: tool.clone(),
                reason: PREFERRED_REASON.to_string(),
                preferred: true,
            });
        }

        let mut ranked: Vec<&ScoredTool> = scored.iter().collect();
        // stable: equal scores keep catalog order
        ranked.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));

        for candidate in ranked {
            if selection.selected.len() >= self.config.max_stack_size {
                break;
            }
            let tool = &candidate.tool;
            if used.contains(&tool.category) || candidate.compatibility_score < self.config.min_score {
                continue;
            }

            let present = selection.selected.iter().map(|s| &s.scored.tool.category);
            if tool.conflicts_with(present) {
                debug!("Skipping {}: conflicts with current stack", tool.name);
                selection.warnings.push(Warning::tool_conflict(&tool.name));
                continue;
            }

            debug!("Selected {} ({}) with score {}", tool.name, tool.category, candidate.compatibility_score);
            used.insert(tool.category);
            selection.selected.push(SelectedTool {
                reason: self.reason_for(tool, analysis),
                scored: candidate.clone(),
                preferred: false,
            });
        }

        selection
    }

    /// Short explanation of why a tool suits the project.
    pub fn reason_for(&self, tool: &ToolProfile, analysis: &ProjectAnalysis) -> String {
        let candidates = [
            (tool.popularity_score > HIGH_POPULARITY, "highly popular"),
            (tool.pricing_model == PricingModel::FreeTier, "free tier available"),
            (
                tool.community_sentiment == Some(Sentiment::HighlyPositive),
                "excellent community support",
            ),
            (
                analysis.complexity == Complexity::Simple && fits_complexity(tool, Complexity::Simple),
                "beginner-friendly",
            ),
            (
                analysis.complexity == Complexity::Complex && fits_complexity(tool, Complexity::Complex),
                "enterprise-ready",
            ),
        ];

        let phrases: Vec<&str> = candidates
            .iter()
            .filter(|(applies, _)| *applies)
            .map(|(_, phrase)| *phrase)
            .take(self.config.max_reasons)
            .collect();

        if phrases.is_empty() {
            FALLBACK_REASON.to_string()
        } else {
            phrases.join(", ")
        }
    }
}

//! The recommendation engine - analyze, select, and cost a stack.

use std::fmt::Write as _;

use stackfast_core::{
    LegacyCostEstimate, LegacyCostLine, ProjectAnalysis, ProjectScale, Recommendation,
    RecommendationConfig, RecommendationRequest, SkillProfile, ToolProfile,
};
use stackfast_cost::{round2, stack_item, CostProjector};
use tracing::info;

use crate::analyzer::ProjectAnalyzer;
use crate::selector::{Selection, StackSelector};

/// Composes analysis, selection and cost projection.
///
/// ```text
/// description -> analysis -> scored catalog -> stack -> cost projection
/// ```
///
/// Holds configuration only; every call works on the inputs it is given.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    analyzer: ProjectAnalyzer,
    selector: StackSelector,
    projector: CostProjector,
}

impl RecommendationEngine {
    /// Create an engine with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection configuration.
    pub fn with_config(mut self, config: RecommendationConfig) -> Self {
        self.selector = self.selector.with_config(config);
        self
    }

    /// Recommend a stack for a description.
    pub fn generate(
        &self,
        description: &str,
        skill: &SkillProfile,
        preferred_ids: &[String],
        catalog: &[ToolProfile],
    ) -> Recommendation {
        let analysis = self.analyzer.analyze(description);
        let selection = self.selector.select(catalog, &analysis, skill, preferred_ids);

        let stack_items: Vec<_> = selection.tools().map(stack_item).collect();
        let scale = ProjectScale::from_analysis(&analysis, self.analyzer.timeline(description));
        let cost_projection = self.projector.project(&stack_items, &scale);

        let estimated_cost = LegacyCostEstimate {
            min: round2(cost_projection.breakdown.iter().map(|c| c.monthly_min).sum()),
            max: round2(cost_projection.breakdown.iter().map(|c| c.monthly_max).sum()),
            breakdown: cost_projection
                .breakdown
                .iter()
                .map(|c| LegacyCostLine {
                    tool: c.tool_name.clone(),
                    cost: c.monthly_estimate,
                })
                .collect(),
        };

        let summary = summarize(&analysis, &selection);
        info!("{}", summary);

        Recommendation {
            summary,
            project_prompt: project_prompt(description, &analysis, &selection),
            recommended_stack: selection.stack(),
            warnings: selection.warnings,
            estimated_cost,
            cost_projection,
            analysis,
        }
    }

    /// Recommend a stack for a request body.
    pub fn handle(&self, request: &RecommendationRequest, catalog: &[ToolProfile]) -> Recommendation {
        self.generate(
            &request.project_idea,
            &request.skill_profile,
            &request.preferred_tool_ids,
            catalog,
        )
    }
}

fn summarize(analysis: &ProjectAnalysis, selection: &Selection) -> String {
    let project = format!("{} {} project", analysis.complexity, analysis.project_type);
    let mut summary = if selection.selected.is_empty() {
        format!("No tools met the compatibility threshold for this {}", project)
    } else {
        format!("Recommended {} tools for a {}", selection.selected.len(), project)
    };

    match selection.warnings.len() {
        0 => {}
        1 => summary.push_str(" (1 tool skipped due to conflicts)"),
        n => {
            let _ = write!(summary, " ({} tools skipped due to conflicts)", n);
        }
    }
    summary
}

fn project_prompt(description: &str, analysis: &ProjectAnalysis, selection: &Selection) -> String {
    let features = if analysis.features.is_empty() {
        "none detected".to_string()
    } else {
        analysis
            .features
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut prompt = String::new();
    let _ = writeln!(prompt, "Build a {} with the following requirements:", analysis.project_type);
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "{}", description.trim());
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Project profile:");
    let _ = writeln!(prompt, "- Complexity: {}", analysis.complexity);
    let _ = writeln!(prompt, "- Key features: {}", features);
    let _ = writeln!(prompt, "- Database: {}", analysis.database_needs.as_str());
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Tech stack:");
    for tool in &selection.selected {
        let _ = writeln!(
            prompt,
            "- {} ({}): {}",
            tool.scored.tool.name, tool.scored.tool.category, tool.reason
        );
    }
    let _ = writeln!(prompt);
    prompt.push_str("Start with a minimal working version, then add features incrementally.");
    prompt
}

/// Recommend a stack with a default engine.
pub fn generate_recommendation(
    description: &str,
    skill: &SkillProfile,
    preferred_ids: &[String],
    catalog: &[ToolProfile],
) -> Recommendation {
    RecommendationEngine::new().generate(description, skill, preferred_ids, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackfast_core::{
        Complexity, ConflictRule, CostType, PricingModel, Sentiment, ToolCategory,
    };

    fn tool(id: &str, category: ToolCategory, popularity: f64) -> ToolProfile {
        let mut tool = ToolProfile::new(id, id, category);
        tool.skill = SkillProfile::new(2, 2);
        tool.popularity_score = popularity;
        tool.pricing_model = PricingModel::FreeTier;
        tool
    }

    fn catalog() -> Vec<ToolProfile> {
        let mut openai = tool("openai", ToolCategory::AiMl, 0.9);
        openai.pricing_model = PricingModel::PayAsYouGo;
        openai.base_cost_monthly = 10.0;
        openai.unit_cost = Some(0.01);

        let mut firebase = tool("firebase", ToolCategory::Database, 0.8);
        firebase.conflicts = vec![ConflictRule::category([ToolCategory::Backend])];

        let mut pusher = tool("pusher", ToolCategory::Api, 0.6);
        pusher.community_sentiment = Some(Sentiment::Positive);

        vec![
            tool("nextjs", ToolCategory::Frontend, 0.95),
            tool("express", ToolCategory::Backend, 0.9),
            firebase,
            tool("postgres", ToolCategory::Database, 0.7),
            openai,
            pusher,
            tool("jest", ToolCategory::Testing, 0.8),
            tool("vercel", ToolCategory::Deployment, 0.9),
            tool("sentry", ToolCategory::Monitoring, 0.7),
        ]
    }

    const CHAT: &str =
        "A real-time chat app with AI recommendations and payment processing for enterprise users";

    #[test]
    fn test_full_recommendation() {
        let rec = generate_recommendation(CHAT, &SkillProfile::new(2, 2), &[], &catalog());

        assert_eq!(rec.analysis.complexity, Complexity::Complex);
        assert!(rec.recommended_stack.len() <= 6);

        let mut categories: Vec<_> = rec.recommended_stack.iter().map(|e| e.category).collect();
        let total = categories.len();
        categories.sort();
        categories.dedup();
        assert_eq!(categories.len(), total);

        // firebase ranks below express, so its backend conflict fires
        assert!(rec.recommended_stack.iter().all(|e| e.id != "firebase"));
        assert_eq!(rec.warnings.len(), 1);
        assert!(rec.summary.contains("1 tool skipped"));

        assert_eq!(rec.cost_projection.breakdown.len(), rec.recommended_stack.len());
        assert_eq!(rec.estimated_cost.breakdown.len(), rec.recommended_stack.len());
        assert!(rec.project_prompt.contains("Build a web-app"));
        assert!(rec.project_prompt.contains("- Complexity: complex"));
    }

    #[test]
    fn test_preferred_tools_lead_the_stack() {
        let rec = generate_recommendation(
            "A simple blog",
            &SkillProfile::new(2, 2),
            &["sentry".to_string(), "postgres".to_string()],
            &catalog(),
        );

        assert_eq!(rec.recommended_stack[0].id, "sentry");
        assert_eq!(rec.recommended_stack[1].id, "postgres");
        assert!(rec.recommended_stack.iter().all(|e| e.id != "firebase"));
    }

    #[test]
    fn test_usage_priced_tool_is_costed() {
        let rec = generate_recommendation(
            "AI assistant",
            &SkillProfile::new(2, 2),
            &["openai".to_string()],
            &catalog(),
        );

        let openai = &rec.cost_projection.breakdown[0];
        assert_eq!(openai.category, "AI/ML API");
        assert_eq!(openai.cost_type, Some(CostType::PayAsYouGo));
        assert!(openai.monthly_max > openai.monthly_estimate);
        assert_eq!(rec.estimated_cost.breakdown[0].tool, "openai");
    }

    #[test]
    fn test_empty_catalog() {
        let rec = generate_recommendation("", &SkillProfile::default(), &[], &[]);
        assert!(rec.recommended_stack.is_empty());
        assert!(rec.summary.starts_with("No tools met"));
        assert_eq!(rec.cost_projection.total_monthly_estimate, 0.0);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let catalog = catalog();
        let preferred = vec!["pusher".to_string()];
        let a = generate_recommendation(CHAT, &SkillProfile::new(2, 2), &preferred, &catalog);
        let b = generate_recommendation(CHAT, &SkillProfile::new(2, 2), &preferred, &catalog);

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_handle_request_body() {
        let request: RecommendationRequest = serde_json::from_str(
            r#"{"projectIdea": "Admin dashboard", "skillProfile": {"setup": 2, "daily": 2}, "preferredToolIds": ["jest"]}"#,
        )
        .unwrap();

        let rec = RecommendationEngine::new()
            .with_config(RecommendationConfig { max_stack_size: 3, ..Default::default() })
            .handle(&request, &catalog());

        assert_eq!(rec.recommended_stack[0].id, "jest");
        assert_eq!(rec.recommended_stack.len(), 3);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["analysis"]["projectType"], "dashboard");
        assert!(json["recommendedStack"][0]["compatibilityScore"].is_u64());
        assert!(json["costProjection"]["totalMonthlyEstimate"].is_number());
    }
}

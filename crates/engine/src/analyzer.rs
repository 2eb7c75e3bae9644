//! Project description classification.
//!
//! All matching is plain substring containment over the lower-cased
//! description. Short keywords like "ai" also hit inside longer words
//! ("pain", "email"); thresholds are tuned with that in mind.

use stackfast_core::{
    Complexity, Feature, ProjectAnalysis, ProjectScale, ProjectType, Timeline,
};
use tracing::debug;

/// Project types, checked top to bottom; first hit wins.
const PROJECT_TYPE_RULES: &[(ProjectType, &[&str])] = &[
    (ProjectType::MobileApp, &["mobile"]),
    (ProjectType::Api, &["api", "backend"]),
    (ProjectType::Dashboard, &["dashboard", "admin"]),
];

/// Keywords counted towards complexity.
const COMPLEXITY_KEYWORDS: &[&str] = &[
    "real-time",
    "ai",
    "ml",
    "machine learning",
    "analytics",
    "payment",
    "multi-tenant",
    "microservices",
    "scale",
    "enterprise",
];

/// Extra keywords counted when sizing a project for cost projection.
const SCALE_KEYWORDS: &[&str] = &["distributed", "blockchain"];

/// Features, each detected independently.
const FEATURE_RULES: &[(Feature, &[&str])] = &[
    (Feature::Authentication, &["auth", "login", "user"]),
    (Feature::RealTime, &["real-time", "live", "chat"]),
    (Feature::AiMl, &["ai", "ml", "machine learning"]),
    (Feature::Payments, &["payment", "billing", "subscription"]),
    (Feature::Search, &["search", "recommendation"]),
];

/// Timelines, checked top to bottom; production when nothing matches.
const TIMELINE_RULES: &[(Timeline, &[&str])] = &[
    (Timeline::Prototype, &["prototype", "poc", "proof of concept"]),
    (Timeline::Mvp, &["mvp", "minimum viable"]),
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

fn count_matches<'a>(text: &str, keywords: impl IntoIterator<Item = &'a &'a str>) -> usize {
    keywords.into_iter().filter(|kw| text.contains(**kw)).count()
}

fn first_match<T: Copy>(text: &str, rules: &[(T, &[&str])]) -> Option<T> {
    rules
        .iter()
        .find(|(_, keywords)| contains_any(text, keywords))
        .map(|(value, _)| *value)
}

/// Classifies project descriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectAnalyzer;

impl ProjectAnalyzer {
    /// Create an analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Classify a description. Total over any input, including "".
    pub fn analyze(&self, description: &str) -> ProjectAnalysis {
        let text = description.to_lowercase();

        let project_type = first_match(&text, PROJECT_TYPE_RULES).unwrap_or(ProjectType::WebApp);
        let hits = count_matches(&text, COMPLEXITY_KEYWORDS);
        let complexity = Complexity::from_keyword_count(hits);
        let features = Self::detect_features(&text);

        debug!(
            "Analyzed description: type={}, complexity={} ({} keyword hits), {} features",
            project_type,
            complexity,
            hits,
            features.len()
        );

        ProjectAnalysis::new(project_type, complexity, features)
    }

    /// Size a project for cost projection.
    ///
    /// Counts the extended keyword list, so distributed or blockchain
    /// projects can size larger here than in [`ProjectAnalyzer::analyze`].
    pub fn analyze_scale(&self, description: &str) -> ProjectScale {
        let text = description.to_lowercase();

        let hits = count_matches(&text, COMPLEXITY_KEYWORDS.iter().chain(SCALE_KEYWORDS));
        let complexity = Complexity::from_keyword_count(hits);
        let features = Self::detect_features(&text);
        let analysis = ProjectAnalysis::new(ProjectType::WebApp, complexity, features);

        ProjectScale::from_analysis(&analysis, Self::detect_timeline(&text))
    }

    /// Delivery stage mentioned in a description.
    pub fn timeline(&self, description: &str) -> Timeline {
        Self::detect_timeline(&description.to_lowercase())
    }

    fn detect_features(text: &str) -> Vec<Feature> {
        FEATURE_RULES
            .iter()
            .filter(|(_, keywords)| contains_any(text, keywords))
            .map(|(feature, _)| *feature)
            .collect()
    }

    fn detect_timeline(text: &str) -> Timeline {
        first_match(text, TIMELINE_RULES).unwrap_or_default()
    }
}

/// Classify a description with a default analyzer.
pub fn analyze_project(description: &str) -> ProjectAnalysis {
    ProjectAnalyzer::new().analyze(description)
}

//! Tool catalog model - the entries a stack is assembled from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::skill::SkillProfile;

/// Fixed set of tool categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    /// UI frameworks and libraries
    Frontend,
    /// Server frameworks
    Backend,
    /// Data stores
    Database,
    /// Third-party APIs
    Api,
    /// Test runners and frameworks
    Testing,
    /// Hosting and deployment platforms
    Deployment,
    /// Error tracking and uptime
    Monitoring,
    /// Product analytics
    Analytics,
    /// Auth and security services
    Security,
    /// CI/CD and infrastructure
    Devops,
    /// Mobile frameworks
    Mobile,
    /// Desktop frameworks
    Desktop,
    /// AI and machine learning services
    AiMl,
    /// Chains and web3 tooling
    Blockchain,
    /// Device platforms
    Iot,
    /// Game engines
    GameDevelopment,
    /// Notebooks and data tooling
    DataScience,
    /// Design tools
    Design,
    /// Team productivity tools
    Productivity,
}

impl ToolCategory {
    /// All categories in declaration order.
    pub const ALL: [ToolCategory; 19] = [
        ToolCategory::Frontend,
        ToolCategory::Backend,
        ToolCategory::Database,
        ToolCategory::Api,
        ToolCategory::Testing,
        ToolCategory::Deployment,
        ToolCategory::Monitoring,
        ToolCategory::Analytics,
        ToolCategory::Security,
        ToolCategory::Devops,
        ToolCategory::Mobile,
        ToolCategory::Desktop,
        ToolCategory::AiMl,
        ToolCategory::Blockchain,
        ToolCategory::Iot,
        ToolCategory::GameDevelopment,
        ToolCategory::DataScience,
        ToolCategory::Design,
        ToolCategory::Productivity,
    ];

    /// Catalog spelling of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Frontend => "frontend",
            ToolCategory::Backend => "backend",
            ToolCategory::Database => "database",
            ToolCategory::Api => "api",
            ToolCategory::Testing => "testing",
            ToolCategory::Deployment => "deployment",
            ToolCategory::Monitoring => "monitoring",
            ToolCategory::Analytics => "analytics",
            ToolCategory::Security => "security",
            ToolCategory::Devops => "devops",
            ToolCategory::Mobile => "mobile",
            ToolCategory::Desktop => "desktop",
            ToolCategory::AiMl => "ai_ml",
            ToolCategory::Blockchain => "blockchain",
            ToolCategory::Iot => "iot",
            ToolCategory::GameDevelopment => "game_development",
            ToolCategory::DataScience => "data_science",
            ToolCategory::Design => "design",
            ToolCategory::Productivity => "productivity",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('-', "_");
        ToolCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| ParseError::unknown("tool category", s))
    }
}

/// How a tool is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingModel {
    /// Open source or otherwise free
    #[serde(rename = "free")]
    Free,
    /// Paid product with a usable free tier
    #[serde(rename = "free-tier")]
    FreeTier,
    /// Flat monthly subscription
    #[serde(rename = "subscription")]
    Subscription,
    /// Metered billing
    #[serde(rename = "pay-as-you-go")]
    PayAsYouGo,
    /// Negotiated pricing
    #[serde(rename = "custom")]
    Custom,
}

/// Community sentiment tag attached to a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// Widely loved
    HighlyPositive,
    /// Generally liked
    Positive,
    /// No strong opinion
    Neutral,
    /// Split opinion
    Mixed,
    /// Generally disliked
    Negative,
    /// Any tag this build does not know about
    #[serde(other)]
    Unknown,
}

/// What a conflict rule is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Targets are tool categories
    Category,
    /// Rule kinds without a matcher; never fire
    #[serde(other)]
    Other,
}

/// A declared incompatibility between a tool and other categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRule {
    /// Rule kind
    pub kind: ConflictKind,

    /// Categories this tool cannot be combined with
    #[serde(default)]
    pub targets: Vec<ToolCategory>,
}

impl ConflictRule {
    /// Category conflict against the given targets.
    pub fn category(targets: impl IntoIterator<Item = ToolCategory>) -> Self {
        Self {
            kind: ConflictKind::Category,
            targets: targets.into_iter().collect(),
        }
    }
}

/// A tool catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolProfile {
    /// Unique identifier within a catalog
    pub id: String,

    /// Display name
    pub name: String,

    /// Category
    pub category: ToolCategory,

    /// Effort needed to adopt (1-10 each)
    #[serde(alias = "skills")]
    pub skill: SkillProfile,

    /// Billing model
    pub pricing_model: PricingModel,

    /// Baseline monthly cost in USD
    #[serde(default)]
    pub base_cost_monthly: f64,

    /// Metered cost per unit, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,

    /// What a metered unit is (request, GB, user, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,

    /// Community sentiment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_sentiment: Option<Sentiment>,

    /// Popularity in [0, 1]
    #[serde(default)]
    pub popularity_score: f64,

    /// Conflict rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<ConflictRule>,
}

impl ToolProfile {
    /// Create a free tool with neutral metadata.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: ToolCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            skill: SkillProfile::new(1, 1),
            pricing_model: PricingModel::Free,
            base_cost_monthly: 0.0,
            unit_cost: None,
            unit_type: None,
            community_sentiment: None,
            popularity_score: 0.0,
            conflicts: Vec::new(),
        }
    }

    /// Whether any category rule of this tool targets one of `present`.
    pub fn conflicts_with<'a>(&self, mut present: impl Iterator<Item = &'a ToolCategory>) -> bool {
        let targets: Vec<ToolCategory> = self
            .conflicts
            .iter()
            .filter(|rule| rule.kind == ConflictKind::Category)
            .flat_map(|rule| rule.targets.iter().copied())
            .collect();

        !targets.is_empty() && present.any(|c| targets.contains(c))
    }
}

/// A tool with its compatibility score for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredTool {
    /// The catalog entry
    #[serde(flatten)]
    pub tool: ToolProfile,

    /// Compatibility in [0, 100]
    pub compatibility_score: u8,
}

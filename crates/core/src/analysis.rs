//! Project analysis - what a free-text description was classified as.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Kind of project being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    /// Browser application (default)
    WebApp,
    /// Phone or tablet application
    MobileApp,
    /// Backend service or public API
    Api,
    /// Internal dashboard or admin panel
    Dashboard,
}

impl ProjectType {
    /// Wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::WebApp => "web-app",
            ProjectType::MobileApp => "mobile-app",
            ProjectType::Api => "api",
            ProjectType::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall project complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// A handful of moving parts
    Simple,
    /// Several integrations
    Medium,
    /// Many demanding requirements
    Complex,
}

impl Complexity {
    /// Wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }

    /// Classify a keyword hit count: more than 3 is complex, more than 1 medium.
    pub fn from_keyword_count(count: usize) -> Self {
        if count > 3 {
            Complexity::Complex
        } else if count > 1 {
            Complexity::Medium
        } else {
            Complexity::Simple
        }
    }

    /// Scaling requirement implied by this complexity.
    pub fn scaling(&self) -> ScalingLevel {
        match self {
            Complexity::Simple => ScalingLevel::Low,
            Complexity::Medium => ScalingLevel::Medium,
            Complexity::Complex => ScalingLevel::High,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Complexity::Simple),
            "medium" => Ok(Complexity::Medium),
            "complex" => Ok(Complexity::Complex),
            _ => Err(ParseError::unknown("complexity", s)),
        }
    }
}

/// Capability a project needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    /// Accounts and sign-in
    Authentication,
    /// Live updates, chat
    RealTime,
    /// AI or machine learning
    AiMl,
    /// Payments and billing
    Payments,
    /// Search or recommendations
    Search,
}

impl Feature {
    /// Wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Authentication => "authentication",
            Feature::RealTime => "real-time",
            Feature::AiMl => "ai-ml",
            Feature::Payments => "payments",
            Feature::Search => "search",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Low / medium / high level used for scaling and traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalingLevel {
    /// Low
    Low,
    /// Medium
    Medium,
    /// High
    High,
}

impl ScalingLevel {
    /// Wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalingLevel::Low => "low",
            ScalingLevel::Medium => "medium",
            ScalingLevel::High => "high",
        }
    }
}

impl fmt::Display for ScalingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalingLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(ScalingLevel::Low),
            "medium" => Ok(ScalingLevel::Medium),
            "high" => Ok(ScalingLevel::High),
            _ => Err(ParseError::unknown("level", s)),
        }
    }
}

/// Kind of database a project leans towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    /// SQL database
    Relational,
    /// Document or key-value store
    Nosql,
    /// Vector index
    Vector,
}

impl DatabaseKind {
    /// Wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::Relational => "relational",
            DatabaseKind::Nosql => "nosql",
            DatabaseKind::Vector => "vector",
        }
    }
}

/// Structured requirements derived from a project description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    /// Project type
    pub project_type: ProjectType,

    /// Complexity
    pub complexity: Complexity,

    /// Detected features, in detection order
    pub features: Vec<Feature>,

    /// Mirrors `complexity`
    pub scaling_requirements: ScalingLevel,

    /// `features` contains real-time
    pub real_time_needs: bool,

    /// `features` contains authentication
    pub auth_needs: bool,

    /// `features` contains ai-ml
    pub ai_ml_needs: bool,

    /// Preferred database kind
    pub database_needs: DatabaseKind,
}

impl ProjectAnalysis {
    /// Build an analysis, deriving every dependent field.
    pub fn new(project_type: ProjectType, complexity: Complexity, features: Vec<Feature>) -> Self {
        let has = |f: Feature| features.contains(&f);
        let database_needs = if has(Feature::Search) {
            DatabaseKind::Vector
        } else if has(Feature::AiMl) {
            DatabaseKind::Nosql
        } else {
            DatabaseKind::Relational
        };

        Self {
            project_type,
            complexity,
            scaling_requirements: complexity.scaling(),
            real_time_needs: has(Feature::RealTime),
            auth_needs: has(Feature::Authentication),
            ai_ml_needs: has(Feature::AiMl),
            database_needs,
            features,
        }
    }

    /// Whether a feature was detected.
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

impl Default for ProjectAnalysis {
    fn default() -> Self {
        Self::new(ProjectType::WebApp, Complexity::Simple, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_thresholds() {
        assert_eq!(Complexity::from_keyword_count(0), Complexity::Simple);
        assert_eq!(Complexity::from_keyword_count(1), Complexity::Simple);
        assert_eq!(Complexity::from_keyword_count(2), Complexity::Medium);
        assert_eq!(Complexity::from_keyword_count(3), Complexity::Medium);
        assert_eq!(Complexity::from_keyword_count(4), Complexity::Complex);
    }

    #[test]
    fn test_derived_fields() {
        let analysis = ProjectAnalysis::new(
            ProjectType::Api,
            Complexity::Medium,
            vec![Feature::AiMl, Feature::Authentication],
        );
        assert_eq!(analysis.scaling_requirements, ScalingLevel::Medium);
        assert!(analysis.auth_needs);
        assert!(analysis.ai_ml_needs);
        assert!(!analysis.real_time_needs);
        assert_eq!(analysis.database_needs, DatabaseKind::Nosql);

        let search = ProjectAnalysis::new(
            ProjectType::WebApp,
            Complexity::Simple,
            vec![Feature::AiMl, Feature::Search],
        );
        assert_eq!(search.database_needs, DatabaseKind::Vector);
    }

    #[test]
    fn test_wire_shape() {
        let analysis = ProjectAnalysis::new(
            ProjectType::MobileApp,
            Complexity::Complex,
            vec![Feature::RealTime],
        );
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["projectType"], "mobile-app");
        assert_eq!(json["complexity"], "complex");
        assert_eq!(json["features"][0], "real-time");
        assert_eq!(json["scalingRequirements"], "high");
        assert_eq!(json["databaseNeeds"], "relational");
    }
}

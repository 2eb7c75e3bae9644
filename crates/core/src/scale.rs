//! Project scale - the inputs cost projection scales against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::analysis::{Complexity, ProjectAnalysis, ScalingLevel};
use crate::error::ParseError;

/// Delivery stage the project is aiming for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    /// Throwaway proof of concept
    Prototype,
    /// Minimum viable product
    Mvp,
    /// Production system
    Production,
}

impl Timeline {
    /// Wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::Prototype => "prototype",
            Timeline::Mvp => "mvp",
            Timeline::Production => "production",
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Timeline::Production
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeline {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prototype" => Ok(Timeline::Prototype),
            "mvp" => Ok(Timeline::Mvp),
            "production" => Ok(Timeline::Production),
            _ => Err(ParseError::unknown("timeline", s)),
        }
    }
}

/// Size and stage of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScale {
    /// Complexity
    pub complexity: Complexity,

    /// Expected active users
    pub expected_users: u64,

    /// Expected traffic
    pub expected_traffic: ScalingLevel,

    /// Feature tags
    #[serde(default)]
    pub features: Vec<String>,

    /// Delivery stage
    #[serde(default)]
    pub timeline: Timeline,
}

impl ProjectScale {
    /// Typical user count for a complexity level.
    pub fn typical_users(complexity: Complexity) -> u64 {
        match complexity {
            Complexity::Simple => 500,
            Complexity::Medium => 5_000,
            Complexity::Complex => 50_000,
        }
    }

    /// Derive a scale from an analysis; traffic follows the scaling requirement.
    pub fn from_analysis(analysis: &ProjectAnalysis, timeline: Timeline) -> Self {
        Self {
            complexity: analysis.complexity,
            expected_users: Self::typical_users(analysis.complexity),
            expected_traffic: analysis.scaling_requirements,
            features: analysis.features.iter().map(|f| f.as_str().to_string()).collect(),
            timeline,
        }
    }
}

impl Default for ProjectScale {
    fn default() -> Self {
        Self {
            complexity: Complexity::Simple,
            expected_users: 100,
            expected_traffic: ScalingLevel::Low,
            features: Vec::new(),
            timeline: Timeline::Production,
        }
    }
}

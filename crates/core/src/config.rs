//! Selection configuration.

use serde::{Deserialize, Serialize};

/// Knobs for stack selection. Defaults match the production behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Stop filling once the stack has this many tools
    pub max_stack_size: usize,

    /// Tools scoring below this are never auto-selected
    pub min_score: u8,

    /// Phrases per generated reason
    pub max_reasons: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_stack_size: 6,
            min_score: 50,
            max_reasons: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: RecommendationConfig = serde_json::from_str(r#"{"min_score": 40}"#).unwrap();
        assert_eq!(config.min_score, 40);
        assert_eq!(config.max_stack_size, 6);
        assert_eq!(config.max_reasons, 2);
    }
}

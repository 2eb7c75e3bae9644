//! Recommendation layer - description analysis, tool scoring, and stack selection.

#![warn(missing_docs)]

pub mod analyzer;
pub mod scorer;
pub mod selector;
pub mod engine;

pub use analyzer::{ProjectAnalyzer, analyze_project};
pub use scorer::{ToolScorer, score_tool, fits_complexity};
pub use selector::{StackSelector, Selection, SelectedTool};
pub use engine::{RecommendationEngine, generate_recommendation};

pub use stackfast_cost::calculate_cost_projection;

//! Usage and scaling tables.

use stackfast_core::{Complexity, ProjectScale, ScalingFactors, ScalingLevel, Timeline};

/// Monthly usage units assumed for a cost category, before scaling.
const USAGE_BASES: &[(&str, f64)] = &[
    ("AI/ML API", 1000.0),
    ("Database", 500.0),
    ("Authentication", 1000.0),
    ("Hosting", 100.0),
    ("Storage", 100.0),
    ("Analytics", 10_000.0),
    ("Monitoring", 1000.0),
    ("Email", 5000.0),
    ("Payments", 100.0),
    ("Search", 1000.0),
];

/// Usage base for categories missing from the table.
pub const DEFAULT_USAGE_BASE: f64 = 100.0;

/// Base monthly usage units for a cost category.
pub fn usage_base(category: &str) -> f64 {
    USAGE_BASES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, base)| *base)
        .unwrap_or(DEFAULT_USAGE_BASE)
}

/// Usage units for a category, scaled by complexity and traffic.
pub fn usage_multiplier(category: &str, scale: &ProjectScale) -> f64 {
    let complexity = match scale.complexity {
        Complexity::Complex => 2.0,
        Complexity::Medium => 1.5,
        Complexity::Simple => 1.0,
    };
    let traffic = match scale.expected_traffic {
        ScalingLevel::High => 3.0,
        ScalingLevel::Medium => 1.5,
        ScalingLevel::Low => 1.0,
    };
    usage_base(category) * complexity * traffic
}

/// Multipliers applied to the stack totals.
pub fn scaling_factors(scale: &ProjectScale) -> ScalingFactors {
    let development = match scale.timeline {
        Timeline::Prototype => 0.5,
        Timeline::Mvp => 0.8,
        Timeline::Production => 1.0,
    };

    let production = match scale.complexity {
        Complexity::Simple => 1.0,
        Complexity::Medium => 1.5,
        Complexity::Complex => 2.0,
    };

    let users = if scale.expected_users > 10_000 {
        2.0
    } else if scale.expected_users > 1_000 {
        1.5
    } else {
        1.0
    };
    let traffic = match scale.expected_traffic {
        ScalingLevel::High => 1.5,
        ScalingLevel::Medium => 1.2,
        ScalingLevel::Low => 1.0,
    };

    ScalingFactors {
        development,
        production,
        scale: users * traffic,
    }
}

/// Round to cents.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

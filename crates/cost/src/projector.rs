//! Monthly cost projection for a stack.

use stackfast_core::{
    Complexity, Confidence, CostModel, CostProjection, CostType, ProjectScale, ScalingLevel,
    StackItem, ToolCost,
};
use tracing::debug;

use crate::rates::{round2, scaling_factors, usage_multiplier};

/// Custom pricing placeholder range.
const CUSTOM_MIN: f64 = 0.0;
const CUSTOM_MAX: f64 = 500.0;
const CUSTOM_ESTIMATE: f64 = 100.0;

/// Worst-case usage relative to the estimate.
const USAGE_PEAK_FACTOR: f64 = 3.0;

const MONTHS_PER_YEAR: f64 = 12.0;

const NOTE_UNKNOWN: &str = "Cost information not available";
const NOTE_FREE: &str = "Free and open source";
const NOTE_CUSTOM: &str = "Contact sales for pricing";

/// Projects stack costs for a project scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostProjector;

impl CostProjector {
    /// Create a projector.
    pub fn new() -> Self {
        Self
    }

    /// Project the monthly and yearly cost of a stack.
    pub fn project(&self, stack: &[StackItem], scale: &ProjectScale) -> CostProjection {
        let breakdown: Vec<ToolCost> = stack.iter().map(|item| self.tool_cost(item, scale)).collect();

        let sum_min: f64 = breakdown.iter().map(|c| c.monthly_min).sum();
        let sum_max: f64 = breakdown.iter().map(|c| c.monthly_max).sum();
        let sum_estimate: f64 = breakdown.iter().map(|c| c.monthly_estimate).sum();

        let factors = scaling_factors(scale);
        let total_min = round2(sum_min * factors.development);
        let total_max = round2(sum_max * factors.production * factors.scale);
        let total_estimate = round2(sum_estimate * (factors.development + factors.production) / 2.0);

        let confidence = Self::confidence(&breakdown, scale);
        let notes = Self::notes(&breakdown, scale);

        debug!(
            "Projected {} tools: ${:.2}-${:.2}/month (estimate ${:.2}, confidence {})",
            breakdown.len(),
            total_min,
            total_max,
            total_estimate,
            confidence.as_str()
        );

        CostProjection {
            total_monthly_min: total_min,
            total_monthly_max: total_max,
            total_monthly_estimate: total_estimate,
            total_yearly_min: round2(total_min * MONTHS_PER_YEAR),
            total_yearly_max: round2(total_max * MONTHS_PER_YEAR),
            total_yearly_estimate: round2(total_estimate * MONTHS_PER_YEAR),
            breakdown,
            scaling_factors: factors,
            confidence,
            notes,
        }
    }

    /// Unscaled monthly cost of one stack entry.
    pub fn tool_cost(&self, item: &StackItem, scale: &ProjectScale) -> ToolCost {
        let Some(model) = &item.cost_model else {
            return ToolCost {
                tool_name: item.name.clone(),
                category: item.category.clone(),
                cost_type: None,
                monthly_min: 0.0,
                monthly_max: 0.0,
                monthly_estimate: 0.0,
                notes: NOTE_UNKNOWN.to_string(),
            };
        };

        let (min, max, estimate, notes) = match model.cost_type {
            CostType::Free => (0.0, 0.0, 0.0, NOTE_FREE.to_string()),
            CostType::Subscription => {
                let base = model.base_cost_monthly;
                (base, base, base, subscription_note(model))
            }
            CostType::PayAsYouGo => {
                let base = model.base_cost_monthly;
                let usage = model.unit_cost.unwrap_or(0.0) * usage_multiplier(&item.category, scale);
                (base, base + USAGE_PEAK_FACTOR * usage, base + usage, usage_note(model))
            }
            CostType::Custom => (CUSTOM_MIN, CUSTOM_MAX, CUSTOM_ESTIMATE, NOTE_CUSTOM.to_string()),
        };

        ToolCost {
            tool_name: item.name.clone(),
            category: item.category.clone(),
            cost_type: Some(model.cost_type),
            monthly_min: round2(min),
            monthly_max: round2(max),
            monthly_estimate: round2(estimate),
            notes,
        }
    }

    fn confidence(breakdown: &[ToolCost], scale: &ProjectScale) -> Confidence {
        let variable = breakdown
            .iter()
            .any(|c| c.cost_type.map_or(false, |t| t.is_variable()));
        let demanding =
            scale.complexity == Complexity::Complex || scale.expected_traffic == ScalingLevel::High;

        match (variable, demanding) {
            (true, true) => Confidence::Low,
            (true, false) | (false, true) => Confidence::Medium,
            (false, false) => Confidence::High,
        }
    }

    fn notes(breakdown: &[ToolCost], scale: &ProjectScale) -> Vec<String> {
        let mut notes = Vec::new();

        if scale.complexity == Complexity::Complex {
            notes.push("Complex projects often need extra services not listed in this stack".to_string());
        }
        if scale.expected_traffic == ScalingLevel::High {
            notes.push("High traffic can raise usage-based costs well above the estimate".to_string());
        }
        if breakdown.iter().any(|c| c.notes.contains("Variable")) {
            notes.push("Some tools bill by usage, so actual costs will vary month to month".to_string());
        }
        if breakdown.iter().any(|c| c.notes.contains("Contact")) {
            notes.push("Some tools need a sales quote before costs can be confirmed".to_string());
        }

        notes
    }
}

fn subscription_note(model: &CostModel) -> String {
    match (model.free_tier, model.base_cost_monthly > 0.0) {
        (true, true) => format!(
            "Free tier available, paid plans from ${:.2}/month",
            model.base_cost_monthly
        ),
        (true, false) => "Free tier available".to_string(),
        (false, _) => format!("${:.2}/month subscription", model.base_cost_monthly),
    }
}

fn usage_note(model: &CostModel) -> String {
    format!(
        "Variable pricing: ${:.2}/month base plus ${} per {}",
        model.base_cost_monthly,
        model.unit_cost.unwrap_or(0.0),
        model.unit_type.as_deref().unwrap_or("unit")
    )
}

/// Project stack costs with a default projector.
pub fn calculate_cost_projection(stack: &[StackItem], scale: &ProjectScale) -> CostProjection {
    CostProjector::new().project(stack, scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackfast_core::Timeline;

    fn item(name: &str, category: &str, model: Option<CostModel>) -> StackItem {
        StackItem {
            name: name.to_string(),
            category: category.to_string(),
            cost_model: model,
        }
    }

    fn scale(complexity: Complexity, users: u64, traffic: ScalingLevel, timeline: Timeline) -> ProjectScale {
        ProjectScale {
            complexity,
            expected_users: users,
            expected_traffic: traffic,
            features: vec![],
            timeline,
        }
    }

    #[test]
    fn test_free_tool() {
        let cost = CostProjector::new().tool_cost(
            &item("React", "Frontend", Some(CostModel::free())),
            &ProjectScale::default(),
        );
        assert_eq!((cost.monthly_min, cost.monthly_max, cost.monthly_estimate), (0.0, 0.0, 0.0));
        assert_eq!(cost.notes, "Free and open source");
    }

    #[test]
    fn test_all_free_stack_projects_to_zero() {
        let stack = vec![
            item("React", "Frontend", Some(CostModel::free())),
            item("Postgres", "Database", Some(CostModel::free())),
        ];
        let projection = calculate_cost_projection(
            &stack,
            &scale(Complexity::Complex, 100_000, ScalingLevel::High, Timeline::Production),
        );
        assert_eq!(projection.total_monthly_min, 0.0);
        assert_eq!(projection.total_monthly_max, 0.0);
        assert_eq!(projection.total_monthly_estimate, 0.0);
        assert_eq!(projection.total_yearly_max, 0.0);
    }

    #[test]
    fn test_missing_cost_model_degrades() {
        let cost = CostProjector::new().tool_cost(&item("Mystery", "Other", None), &ProjectScale::default());
        assert_eq!(cost.cost_type, None);
        assert_eq!(cost.monthly_estimate, 0.0);
        assert_eq!(cost.notes, "Cost information not available");
    }

    #[test]
    fn test_pay_as_you_go_ai_api() {
        let cost = CostProjector::new().tool_cost(
            &item("OpenAI", "AI/ML API", Some(CostModel::pay_as_you_go(10.0, 0.01))),
            &scale(Complexity::Complex, 500, ScalingLevel::High, Timeline::Production),
        );
        assert_eq!(cost.monthly_min, 10.0);
        assert_eq!(cost.monthly_estimate, 70.0);
        assert_eq!(cost.monthly_max, 190.0);
        assert!(cost.notes.starts_with("Variable"));
    }

    #[test]
    fn test_subscription_and_custom() {
        let projector = CostProjector::new();
        let s = ProjectScale::default();

        let sub = projector.tool_cost(&item("Vercel", "Hosting", Some(CostModel::subscription(20.0, true))), &s);
        assert_eq!((sub.monthly_min, sub.monthly_max, sub.monthly_estimate), (20.0, 20.0, 20.0));
        assert!(sub.notes.starts_with("Free tier available"));

        let plain = projector.tool_cost(&item("Linear", "Productivity", Some(CostModel::subscription(8.0, false))), &s);
        assert_eq!(plain.notes, "$8.00/month subscription");

        let custom = projector.tool_cost(&item("Oracle", "Database", Some(CostModel::custom())), &s);
        assert_eq!((custom.monthly_min, custom.monthly_max, custom.monthly_estimate), (0.0, 500.0, 100.0));
        assert_eq!(custom.notes, "Contact sales for pricing");
    }

    #[test]
    fn test_totals_apply_scaling_factors() {
        let stack = vec![
            item("Vercel", "Hosting", Some(CostModel::subscription(20.0, false))),
            item("Oracle", "Database", Some(CostModel::custom())),
        ];
        let projection = calculate_cost_projection(
            &stack,
            &scale(Complexity::Medium, 5_000, ScalingLevel::Medium, Timeline::Mvp),
        );

        // sums: min 20, max 520, estimate 120
        assert_eq!(projection.total_monthly_min, 16.0);
        assert_eq!(projection.total_monthly_max, 1404.0);
        assert_eq!(projection.total_monthly_estimate, 138.0);
        assert_eq!(projection.total_yearly_estimate, 1656.0);
        assert_eq!(projection.confidence, Confidence::Medium);
    }

    #[test]
    fn test_totals_scale_independently() {
        // min, estimate and max each use their own factors; the ordering
        // min <= estimate <= max is a consequence of the current tables
        // (development <= 1 <= production), not something the projector enforces.
        let stack = vec![
            item("Linear", "Productivity", Some(CostModel::subscription(10.0, false))),
            item("OpenAI", "AI/ML API", Some(CostModel::pay_as_you_go(10.0, 0.01))),
        ];
        let projection = calculate_cost_projection(
            &stack,
            &scale(Complexity::Simple, 10, ScalingLevel::Low, Timeline::Prototype),
        );

        // sums: min 20, estimate 30, max 50
        assert_eq!(projection.total_monthly_min, 10.0);
        assert_eq!(projection.total_monthly_estimate, 22.5);
        assert_eq!(projection.total_monthly_max, 50.0);
        assert_eq!(projection.scaling_factors.development, 0.5);
    }

    #[test]
    fn test_confidence_levels() {
        let variable = vec![item("OpenAI", "AI/ML API", Some(CostModel::pay_as_you_go(0.0, 0.01)))];
        let fixed = vec![item("Linear", "Productivity", Some(CostModel::subscription(8.0, false)))];
        let calm = scale(Complexity::Simple, 10, ScalingLevel::Low, Timeline::Production);
        let busy = scale(Complexity::Simple, 10, ScalingLevel::High, Timeline::Production);

        assert_eq!(calculate_cost_projection(&variable, &busy).confidence, Confidence::Low);
        assert_eq!(calculate_cost_projection(&variable, &calm).confidence, Confidence::Medium);
        assert_eq!(calculate_cost_projection(&fixed, &busy).confidence, Confidence::Medium);
        assert_eq!(calculate_cost_projection(&fixed, &calm).confidence, Confidence::High);
    }

    #[test]
    fn test_notes() {
        let stack = vec![
            item("OpenAI", "AI/ML API", Some(CostModel::pay_as_you_go(0.0, 0.01))),
            item("Oracle", "Database", Some(CostModel::custom())),
        ];
        let projection = calculate_cost_projection(
            &stack,
            &scale(Complexity::Complex, 10, ScalingLevel::High, Timeline::Production),
        );
        assert_eq!(projection.notes.len(), 4);

        let quiet = calculate_cost_projection(
            &[item("React", "Frontend", Some(CostModel::free()))],
            &ProjectScale::default(),
        );
        assert!(quiet.notes.is_empty());
    }
}

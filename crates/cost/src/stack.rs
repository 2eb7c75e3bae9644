//! Mapping catalog entries to cost projection inputs.

use stackfast_core::{CostModel, CostType, PricingModel, StackItem, ToolCategory, ToolProfile};

/// Cost category label used by the usage table.
pub fn cost_category(category: ToolCategory) -> &'static str {
    match category {
        ToolCategory::Frontend => "Frontend",
        ToolCategory::Backend => "Backend",
        ToolCategory::Database => "Database",
        ToolCategory::Api => "API",
        ToolCategory::Testing => "Testing",
        ToolCategory::Deployment => "Hosting",
        ToolCategory::Monitoring => "Monitoring",
        ToolCategory::Analytics => "Analytics",
        ToolCategory::Security => "Authentication",
        ToolCategory::Devops => "DevOps",
        ToolCategory::Mobile => "Mobile",
        ToolCategory::Desktop => "Desktop",
        ToolCategory::AiMl => "AI/ML API",
        ToolCategory::Blockchain => "Blockchain",
        ToolCategory::Iot => "IoT",
        ToolCategory::GameDevelopment => "Game Development",
        ToolCategory::DataScience => "Data Science",
        ToolCategory::Design => "Design",
        ToolCategory::Productivity => "Productivity",
    }
}

/// Cost model implied by a tool's pricing tag.
pub fn cost_model(tool: &ToolProfile) -> CostModel {
    let base = tool.base_cost_monthly;
    match tool.pricing_model {
        PricingModel::Free => CostModel::free(),
        PricingModel::FreeTier => CostModel::subscription(base, true),
        PricingModel::Subscription => CostModel::subscription(base, false),
        PricingModel::PayAsYouGo => CostModel {
            cost_type: CostType::PayAsYouGo,
            base_cost_monthly: base,
            unit_cost: tool.unit_cost,
            unit_type: tool.unit_type.clone(),
            free_tier: false,
        },
        PricingModel::Custom => CostModel::custom(),
    }
}

/// Cost projection input for a catalog entry.
pub fn stack_item(tool: &ToolProfile) -> StackItem {
    StackItem {
        name: tool.name.clone(),
        category: cost_category(tool.category).to_string(),
        cost_model: Some(cost_model(tool)),
    }
}

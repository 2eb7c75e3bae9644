//! Recommendation properties against the bundled sample catalog.

use std::collections::HashSet;

use stackfast_catalog::{Catalog, JsonCatalog};
use stackfast_core::{SkillProfile, ToolProfile};
use stackfast_engine::{analyze_project, generate_recommendation, score_tool};

const CATALOG: &str = include_str!("../../../data/catalog.json");

const DESCRIPTIONS: &[&str] = &[
    "",
    "A personal blog",
    "Mobile app for tracking workouts with social login",
    "Backend API for a multi-tenant SaaS with billing",
    "Admin dashboard with analytics for an enterprise sales team",
    "A real-time chat app with AI recommendations and payment processing for enterprise users",
    "Distributed microservices platform with machine learning search at scale",
];

fn catalog() -> Vec<ToolProfile> {
    let tools = JsonCatalog::parse(CATALOG).expect("sample catalog parses");
    Catalog::new(tools).expect("sample catalog ids are unique").tools().to_vec()
}

#[test]
fn scores_stay_in_range() {
    let catalog = catalog();
    for description in DESCRIPTIONS {
        let analysis = analyze_project(description);
        for skill in [SkillProfile::new(1, 1), SkillProfile::new(5, 5), SkillProfile::new(-3, 40)] {
            for tool in &catalog {
                assert!(score_tool(tool, &analysis, &skill) <= 100);
            }
        }
    }
}

#[test]
fn stacks_respect_cap_and_categories() {
    let catalog = catalog();
    for description in DESCRIPTIONS {
        let rec = generate_recommendation(description, &SkillProfile::new(2, 2), &[], &catalog);

        assert!(rec.recommended_stack.len() <= 6, "{}", description);
        let categories: HashSet<_> = rec.recommended_stack.iter().map(|e| e.category).collect();
        assert_eq!(categories.len(), rec.recommended_stack.len(), "{}", description);
        assert!(rec
            .recommended_stack
            .iter()
            .all(|e| e.compatibility_score >= 50));
    }
}

#[test]
fn preferred_tools_always_present() {
    let catalog = catalog();
    let preferred = vec![
        "auth0".to_string(),
        "datadog".to_string(),
        "not-in-catalog".to_string(),
    ];

    for description in DESCRIPTIONS {
        let rec = generate_recommendation(description, &SkillProfile::new(2, 2), &preferred, &catalog);
        let ids: Vec<_> = rec.recommended_stack.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(&ids[..2], &["auth0", "datadog"]);
        assert!(!ids.contains(&"not-in-catalog"));
    }
}

#[test]
fn output_is_deterministic() {
    let catalog = catalog();
    for description in DESCRIPTIONS {
        let a = generate_recommendation(description, &SkillProfile::new(3, 2), &[], &catalog);
        let b = generate_recommendation(description, &SkillProfile::new(3, 2), &[], &catalog);
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }
}

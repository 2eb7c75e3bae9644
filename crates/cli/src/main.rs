//! StackFast CLI - technology stack recommendations and cost projections.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use stackfast_catalog::{Catalog, JsonCatalog};
use stackfast_core::{
    Complexity, ProjectScale, RecommendationConfig, RecommendationRequest, SkillProfile,
    StackItem, Timeline, Traffic,
};
use stackfast_cost::calculate_cost_projection;
use stackfast_engine::{ProjectAnalyzer, RecommendationEngine, ToolScorer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stackfast")]
#[command(about = "Technology stack recommendations and cost projections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a project description
    Analyze {
        /// Project description
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// Estimate project scale from a description
    Scale {
        /// Project description
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// Score one catalog tool for a description
    Score {
        /// Catalog file or directory
        #[arg(long, default_value = "data/catalog.json")]
        catalog: PathBuf,
        /// Tool id
        #[arg(long)]
        tool: String,
        /// Skill profile as "setup,daily"
        #[arg(long, default_value = "3,3")]
        skill: SkillProfile,
        /// Project description
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// Recommend a stack
    Recommend {
        /// Catalog file or directory
        #[arg(long, default_value = "data/catalog.json")]
        catalog: PathBuf,
        /// Request body JSON ({projectIdea, skillProfile, preferredToolIds})
        #[arg(long, conflicts_with = "description")]
        request: Option<PathBuf>,
        /// Skill profile as "setup,daily"
        #[arg(long, default_value = "3,3")]
        skill: SkillProfile,
        /// Preferred tool id (repeatable)
        #[arg(long = "prefer")]
        preferred: Vec<String>,
        /// Selection config JSON
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the stack size cap
        #[arg(long)]
        max_stack_size: Option<usize>,
        /// Override the auto-selection score floor
        #[arg(long)]
        min_score: Option<u8>,
        /// Project description
        description: Vec<String>,
    },
    /// Project the cost of a stack
    Cost {
        /// Stack JSON: array of {name, category, costModel}
        #[arg(long)]
        stack: PathBuf,
        /// simple, medium or complex
        #[arg(long, default_value = "medium")]
        complexity: Complexity,
        /// Expected active users
        #[arg(long, default_value = "1000")]
        users: u64,
        /// low, medium or high
        #[arg(long, default_value = "medium")]
        traffic: Traffic,
        /// prototype, mvp or production
        #[arg(long, default_value = "production")]
        timeline: Timeline,
    },
    /// List catalog tools
    Catalog {
        /// Catalog file or directory
        #[arg(long, default_value = "data/catalog.json")]
        catalog: PathBuf,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { description } => {
            let analysis = ProjectAnalyzer::new().analyze(&description.join(" "));
            print_json(&analysis)?;
        }
        Commands::Scale { description } => {
            let scale = ProjectAnalyzer::new().analyze_scale(&description.join(" "));
            print_json(&scale)?;
        }
        Commands::Score { catalog, tool, skill, description } => {
            let catalog = load_catalog(&catalog).await?;
            let profile = catalog
                .get(&tool)
                .with_context(|| format!("Tool {} is not in the catalog", tool))?;
            let analysis = ProjectAnalyzer::new().analyze(&description.join(" "));
            let score = ToolScorer::new().score(profile, &analysis, &skill);
            println!("{} ({}): {}", profile.name, profile.category, score);
        }
        Commands::Recommend {
            catalog,
            request,
            skill,
            preferred,
            config,
            max_stack_size,
            min_score,
            description,
        } => {
            let request = match request {
                Some(path) => read_json::<RecommendationRequest>(&path).await?,
                None => {
                    if description.is_empty() {
                        anyhow::bail!("Provide a project description or --request");
                    }
                    RecommendationRequest {
                        project_idea: description.join(" "),
                        skill_profile: skill,
                        preferred_tool_ids: preferred,
                    }
                }
            };

            let mut config = match config {
                Some(path) => read_json::<RecommendationConfig>(&path).await?,
                None => RecommendationConfig::default(),
            };
            if let Some(max) = max_stack_size {
                config.max_stack_size = max;
            }
            if let Some(min) = min_score {
                config.min_score = min;
            }

            let catalog = load_catalog(&catalog).await?;
            let recommendation = RecommendationEngine::new()
                .with_config(config)
                .handle(&request, catalog.tools());
            print_json(&recommendation)?;
        }
        Commands::Cost { stack, complexity, users, traffic, timeline } => {
            let stack: Vec<StackItem> = read_json(&stack).await?;
            let scale = ProjectScale {
                complexity,
                expected_users: users,
                expected_traffic: traffic,
                features: Vec::new(),
                timeline,
            };
            let projection = calculate_cost_projection(&stack, &scale);
            info!(
                "Projected ${:.2}/month ({} confidence)",
                projection.total_monthly_estimate,
                projection.confidence.as_str()
            );
            print_json(&projection)?;
        }
        Commands::Catalog { catalog } => {
            let catalog = load_catalog(&catalog).await?;
            println!("Tools ({})", catalog.len());
            for tool in catalog.tools() {
                println!(
                    "  {} | {} | {:.2} | {}",
                    tool.id, tool.category, tool.popularity_score, tool.name
                );
            }
        }
    }

    Ok(())
}

async fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::load(&JsonCatalog::new(path))
        .await
        .with_context(|| format!("Failed to load catalog from {}", path.display()))
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use validator::Validate;

use kitchen_store::config::{LoggingSettings, Settings};
use kitchen_store::core::SortKey;
use kitchen_store::data::default_questions;
use kitchen_store::models::{CatalogQuery, CatalogResponse, RecommendRequest, RecommendationResponse};
use kitchen_store::services::Catalog;

#[derive(Debug, Parser)]
#[command(name = "kitchen-store", version, about = "Kitchen store catalog and consultation tool")]
struct Cli {
    /// Configuration file (defaults to config/default.toml and config/local.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter and sort the product catalog
    Catalog {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "All")]
        category: String,
        /// Category slug, e.g. kitchen-sets (takes precedence over --category)
        #[arg(long)]
        category_slug: Option<String>,
        #[arg(long)]
        min_price: Option<String>,
        #[arg(long)]
        max_price: Option<String>,
        #[arg(long, default_value = "popular")]
        sort: SortKey,
    },
    /// Score the catalog against consultation answers
    Recommend {
        /// Answer as question=option[,option], repeatable
        #[arg(long = "answer", value_parser = parse_answer)]
        answers: Vec<(String, Vec<String>)>,
        /// JSON file holding {"answers": {"question": ["option"]}}
        #[arg(long)]
        answers_file: Option<PathBuf>,
    },
    /// Print the consultation questionnaire
    Questions,
}

fn parse_answer(raw: &str) -> Result<(String, Vec<String>), String> {
    let (question, options) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected question=option[,option], got {:?}", raw))?;

    let options: Vec<String> = options
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    Ok((question.trim().to_string(), options))
}

/// LOG_LEVEL and LOG_FORMAT take precedence over the logging section
fn init_logging(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("Failed to load configuration")?;

    init_logging(&settings.logging);

    let catalog = Catalog::load(settings.catalog.path.as_deref()).context("Failed to load catalog")?;
    let questions = default_questions();

    match cli.command {
        Command::Catalog {
            search,
            category,
            category_slug,
            min_price,
            max_price,
            sort,
        } => {
            let category = match category_slug {
                Some(slug) => catalog.category_by_slug(&slug).to_string(),
                None => category,
            };

            let query = CatalogQuery {
                search,
                category,
                price_min: min_price,
                price_max: max_price,
                sort,
            };
            query.validate().context("Invalid catalog query")?;

            let products = catalog.query(&query);
            info!("Catalog query returned {} products", products.len());

            let response = CatalogResponse {
                total_results: products.len(),
                products,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Recommend { answers, answers_file } => {
            let mut request = match answers_file {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    serde_json::from_str::<RecommendRequest>(&raw)
                        .with_context(|| format!("Invalid answers file {}", path.display()))?
                }
                None => RecommendRequest {
                    answers: BTreeMap::new(),
                },
            };
            request.answers.extend(answers);
            request.validate().context("Invalid answers")?;

            if request.answers.is_empty() {
                bail!("No answers given; use --answer question=option or --answers-file");
            }

            let recommender = settings.recommender();
            let result = recommender.recommend(catalog.products(), &questions, &request.answer_set());

            info!(
                "Recommended {} of {} matching products",
                result.recommendations.len(),
                result.matched_candidates
            );

            let response = RecommendationResponse {
                recommendations: result.recommendations,
                total_candidates: result.total_candidates,
                matched_candidates: result.matched_candidates,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Questions => {
            println!("{}", serde_json::to_string_pretty(&questions)?);
        }
    }

    Ok(())
}

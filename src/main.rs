//! Larder CLI - rank recipes for the ingredients you have on hand.
//!
//! ```bash
//! # Bundled seed catalog
//! larder --ingredient rice --ingredient eggs
//!
//! # Own catalog, constraints, JSON output
//! larder --catalog recipes.json -i chicken -i onion --diet vegetarian --max-minutes 30 --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use larder::{
    JsonFileCatalog, LarderConfig, LoggingYamlConfig, MatchRequest, Recommendation, recommend,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "larder",
    about = "Leftover-ingredient recipe matcher",
    long_about = "Rank catalog recipes by how many of their key ingredients you already have"
)]
struct Args {
    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON recipe catalog; overrides the configured source
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Ingredient on hand (repeatable)
    #[arg(long = "ingredient", short = 'i', required = true)]
    ingredients: Vec<String>,

    /// Difficulty tier: easy, medium, hard or any
    #[arg(long)]
    difficulty: Option<String>,

    /// Maximum preparation time in minutes
    #[arg(long, allow_negative_numbers = true)]
    max_minutes: Option<i64>,

    /// Dietary restriction keyword (repeatable)
    #[arg(long = "diet")]
    diets: Vec<String>,

    /// Free-text dietary restrictions, e.g. "vegetarian please"
    #[arg(long)]
    restrictions: Option<String>,

    /// Only print the top recommendation
    #[arg(long)]
    best: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn init_tracing(logging: &LoggingYamlConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_request(args: &Args, config: &LarderConfig) -> MatchRequest {
    let mut request = MatchRequest::new(args.ingredients.iter().cloned());
    request.difficulty = args.difficulty.clone();
    request.max_duration_minutes = args.max_minutes;
    request.dietary_restrictions = args.diets.clone();
    if let Some(text) = &args.restrictions {
        request = request.with_restriction_text(text, &config.to_dietary_table());
    }
    request
}

fn print_text(results: &[Recommendation]) {
    if results.is_empty() {
        println!("No recipes match those ingredients and constraints.");
        return;
    }
    for rec in results {
        let rating = rec
            .recipe
            .quality_score
            .map(|score| format!("{score:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>2}. {} [{}] matches={} rating={} {}min {}",
            rec.rank,
            rec.recipe.title,
            rec.recipe.id,
            rec.match_count,
            rating,
            rec.recipe.duration_minutes,
            rec.recipe.difficulty,
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => LarderConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LarderConfig::default(),
    };
    init_tracing(&config.logging);

    let engine = config.engine();
    let request = build_request(&args, &config);

    let mut results = match &args.catalog {
        Some(path) => {
            let provider = JsonFileCatalog::new(path.clone(), config.catalog.to_catalog_config());
            recommend(&provider, &engine, &request)?
        }
        None => {
            let provider = config.catalog_provider()?;
            recommend(provider.as_ref(), &engine, &request)?
        }
    };
    if args.best {
        results.truncate(1);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_text(&results);
    }

    Ok(())
}

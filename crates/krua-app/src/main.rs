//! Krua application binary - composition root.
//!
//! Ties together the Krua crates into a single executable:
//! 1. Load configuration from TOML
//! 2. Load the recipe corpus
//! 3. Run the requested subcommand (search or nutrition)
//! 4. Print results as pretty JSON on stdout

use clap::Parser;

use krua_core::config::KruaConfig;
use krua_core::RecipeCorpus;
use krua_nutrition::NutritionEstimator;
use krua_search::{MockEmbedding, SearchEngine};

mod cli;

use cli::{CliArgs, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let config = KruaConfig::load_or_default(&config_file);

    // Tracing.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Krua v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    // Corpus.
    let data_path = args
        .data
        .clone()
        .unwrap_or_else(|| config.general.data_path.clone().into());
    let corpus = RecipeCorpus::load_json_or_empty(&data_path);
    tracing::info!(path = %data_path.display(), recipes = corpus.len(), "Recipe corpus ready");

    match args.command {
        Command::Search {
            query,
            mode,
            top_k,
            mock_embeddings,
        } => {
            let mut engine = SearchEngine::new(corpus, config.search.clone(), &config.cache);
            if mock_embeddings {
                engine = engine.with_provider(Box::new(MockEmbedding::new()));
            }

            let results = engine.search(&query, mode.into(), top_k).await;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }

        Command::Nutrition { recipe, text } => {
            let estimator = NutritionEstimator::new(config.nutrition.clone());

            let (label, ingredient_text) = match (recipe, text) {
                (_, Some(text)) => ("ingredient text".to_string(), text),
                (Some(needle), None) => {
                    let index = needle
                        .parse::<usize>()
                        .ok()
                        .filter(|i| *i < corpus.len())
                        .or_else(|| corpus.find_by_name(&needle));
                    let recipe = match index.and_then(|i| corpus.get(i)) {
                        Some(recipe) => recipe,
                        None => return Err(format!("no recipe matching '{needle}'").into()),
                    };
                    (recipe.name.clone(), recipe.ingredient.clone())
                }
                (None, None) => {
                    return Err("pass a recipe name/index or --text".into());
                }
            };

            let totals = estimator.aggregate(&ingredient_text);
            let output = serde_json::json!({
                "recipe": label,
                "totals": totals,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

use std::{path::PathBuf, sync::Arc, time::Duration};

use catalog::{
    CatalogConfig, FileMoviesLoader, HttpImageLoader, HttpMoviesLoader, MoviesLoader,
};
use clap::Parser;
use game::{run_quiz, QuestionFactory, QuizConfig, QuizError};
use statistics::{KeyValueStore, MemoryStore, SqliteStore, StatisticService, StorageConfig};
use strategies::{InputStrategy, RandomStrategy};
use types::{Strategy, QUESTIONS_AMOUNT};

#[derive(Parser, Debug)]
struct Params {
    /// YAML file with api_url, catalog_file, database and feedback_delay_ms
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    api_url: Option<String>,

    /// Read the catalog from a JSON file instead of the network
    #[arg(long)]
    catalog_file: Option<PathBuf>,

    /// SQLite file holding the statistics
    #[arg(long)]
    database: Option<String>,

    /// Keep statistics in memory only
    #[arg(long)]
    memory: bool,

    #[arg(long)]
    reset_stats: bool,

    /// Let a random bot answer instead of reading stdin
    #[arg(long)]
    auto: bool,

    /// Stop after this many rounds
    #[arg(long)]
    rounds: Option<usize>,

    /// Pause after each answer, overrides the config file
    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), QuizError> {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");

    let config = match &args.config {
        Some(path) => QuizConfig::from_yaml_file(path)?,
        None => QuizConfig::default(),
    };
    let feedback_delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.feedback_delay());

    let movies_loader: Arc<dyn MoviesLoader> =
        match args.catalog_file.clone().or(config.catalog_file.clone()) {
            Some(path) => Arc::new(FileMoviesLoader::new(path)),
            None => {
                let catalog_config =
                    CatalogConfig::from_cli_or_env_or_yaml(args.api_url.clone(), config.api_url.clone());
                Arc::new(HttpMoviesLoader::new(&catalog_config))
            }
        };
    let mut factory = QuestionFactory::new(movies_loader, Arc::new(HttpImageLoader::default()));
    if let Some(seed) = args.seed {
        factory = factory.with_seed(seed);
    }

    let strategy: Box<dyn Strategy> = match (args.auto, args.seed) {
        (false, _) => Box::new(InputStrategy::default()),
        (true, Some(seed)) => Box::new(RandomStrategy::with_seed(seed)),
        (true, None) => Box::new(RandomStrategy::default()),
    };

    if args.memory {
        play(MemoryStore::new(), factory, strategy, feedback_delay, &args).await
    } else {
        let storage_config =
            StorageConfig::from_cli_or_env_or_yaml(args.database.clone(), config.database.clone());
        let store = SqliteStore::new(storage_config.create_pool().await?);
        store.init().await?;
        log::info!("Statistics in {}", storage_config.url);
        play(store, factory, strategy, feedback_delay, &args).await
    }
}

async fn play<S: KeyValueStore>(
    store: S,
    factory: QuestionFactory,
    strategy: Box<dyn Strategy>,
    feedback_delay: Duration,
    args: &Params,
) -> Result<(), QuizError> {
    let mut statistics = StatisticService::new(store, QUESTIONS_AMOUNT as u32);
    if args.reset_stats {
        statistics.reset().await?;
    }

    let (statistics, rounds_played) =
        run_quiz(statistics, factory, strategy, feedback_delay, args.rounds).await?;

    println!(
        "Rounds this session: {rounds_played}\nQuizzes played: {}\nRecord: {}\nAverage accuracy: {:.2}%",
        statistics.games_count().await?,
        statistics.best_game().await?,
        statistics.total_accuracy().await?,
    );
    Ok(())
}

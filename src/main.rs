use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};

use reelname::cli::Args;
use reelname::config::{API_KEY_ENV, AppConfig};
use reelname::logging::{self, RunLogs};
use reelname::renamer::{
    CatalogClient, MatchResolver, MovieResolver, Organizer, OrganizerConfig, RenameMode,
    TmdbCatalog, TvResolver,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(if args.verbose { Level::DEBUG } else { Level::INFO });

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    let Some(api_key) = config.api_key() else {
        anyhow::bail!("{API_KEY_ENV} not set in environment.");
    };

    let catalog: Arc<dyn CatalogClient> = Arc::new(
        TmdbCatalog::with_base_url(api_key, &config.tmdb.base_url)
            .context("Failed to create TMDB client")?
            .with_language(config.tmdb.language.clone()),
    );

    let settings = config.match_settings();
    let resolver: Box<dyn MatchResolver> = match args.mode {
        RenameMode::Tv => Box::new(TvResolver::new(catalog, settings)),
        RenameMode::Movie => Box::new(MovieResolver::new(catalog, settings)),
    };

    let logs = RunLogs::open(
        &config.logs.directory,
        &config.logs.rename_log,
        &config.logs.error_log,
    )
    .with_context(|| format!("Failed to open log files in {:?}", config.logs.directory))?;

    let organizer = Organizer::new(
        OrganizerConfig {
            root: args.dir,
            dry_run: args.dry_run,
        },
        config.scanner(),
        resolver,
        logs,
    );

    let result = organizer.organize_all().await?;
    info!(
        "Processed {} files: {} renamed, {} failed",
        result.total(),
        result.renamed_count(),
        result.failed_count()
    );

    Ok(())
}

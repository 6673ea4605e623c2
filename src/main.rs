use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use instafetch::application::{FetchImagesRequest, FetchImagesUseCase};
use instafetch::domain::ports::UrlCachePort;
use instafetch::infrastructure::{
    CliArgs, FileUrlCache, InstagramMediaClient, LogLevel, MemoryUrlCache,
};

fn init_logging(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

async fn open_cache(args: &CliArgs) -> Result<Arc<dyn UrlCachePort>> {
    if args.no_file_cache {
        return Ok(Arc::new(MemoryUrlCache::with_default_capacity()));
    }

    let cache = match &args.cache_dir {
        Some(dir) => FileUrlCache::new(dir.clone()).await?,
        None => FileUrlCache::default_location().await?,
    };

    Ok(Arc::new(cache))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    init_logging(args.log_level.unwrap_or_default());

    info!(version = instafetch::VERSION, "Starting instafetch");

    let client = Arc::new(match &args.base_url {
        Some(base_url) => InstagramMediaClient::with_base_url(base_url)?,
        None => InstagramMediaClient::new()?,
    });
    let cache = open_cache(&args).await?;

    let use_case = FetchImagesUseCase::new(client, cache);
    let response = use_case
        .execute(FetchImagesRequest::new(args.account, args.limit))
        .await?;

    info!(
        count = response.urls.len(),
        from_cache = response.from_cache,
        "Fetch complete"
    );

    for url in &response.urls {
        println!("{url}");
    }

    Ok(())
}

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "instafetch",
    version,
    about = "A cursor-paginated Instagram media fetcher with a write-through cache",
    long_about = None
)]
pub struct CliArgs {
    /// Account whose media listing to fetch.
    #[arg(value_name = "ACCOUNT")]
    pub account: String,

    /// Maximum number of image URLs to return (0 = no cap).
    #[arg(short, long, default_value_t = 0)]
    pub limit: u32,

    /// Listing endpoint base URL override.
    #[arg(long, value_name = "URL", env = "INSTAFETCH_BASE_URL")]
    pub base_url: Option<String>,

    /// Cache directory path.
    #[arg(long, value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Keep results in memory only instead of the file cache.
    #[arg(long)]
    pub no_file_cache: bool,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

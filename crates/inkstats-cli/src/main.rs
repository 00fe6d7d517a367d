use clap::{Parser, Subcommand};

mod crawl;

#[derive(Debug, Parser)]
#[command(name = "inkstats")]
#[command(about = "Topic, article, and author statistics for a publishing account")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Crawl the configured account and write the three report artifacts.
    Crawl {
        /// Print what would be crawled without navigating or writing.
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = inkstats_core::load_app_config()
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?;
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    match cli.command {
        // A bare invocation is a crawl; there is nothing else to do.
        Some(Commands::Crawl { dry_run }) => crawl::run_crawl(&config, dry_run).await,
        None => crawl::run_crawl(&config, false).await,
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

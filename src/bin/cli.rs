//! Sportfeed CLI
//!
//! Queries upstream sports listings from the command line.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use sportfeed::{
    error::Result,
    extract::stream_data,
    models::{Config, ResultType, Sport, StreamParams},
    services::MatchService,
};

/// Sportfeed - live sports listing aggregator
#[derive(Parser, Debug)]
#[command(
    name = "sportfeed",
    version,
    about = "Normalized live sports listings with fallback sources"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List matches
    Matches {
        /// Only this sport (e.g. basketball)
        #[arg(short, long)]
        sport: Option<Sport>,

        /// all, live, today or top-today
        #[arg(short, long, default_value = "all")]
        filter: ResultType,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List sports with current matches
    Sports,

    /// Build a player URL from stream parameters
    Stream {
        /// Stream type (t)
        #[arg(long = "type", default_value = "")]
        stream_type: String,

        /// Channel id (c)
        #[arg(short, long, default_value = "")]
        channel: String,

        /// Event id (eid)
        #[arg(short, long, default_value = "")]
        event: String,

        /// Link id (lid)
        #[arg(long, default_value = "")]
        link: String,

        /// Language (lang)
        #[arg(long, default_value = "en")]
        lang: String,

        /// Category id (ci)
        #[arg(long, default_value = "")]
        category: String,

        /// Source index (si)
        #[arg(long, default_value = "")]
        source: String,
    },

    /// Validate the configuration file
    Validate,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Text,
}

const TEXT_TEMPLATE: &str = "{date}  {live}\t[{category}] {title} ({league}, {sources} streams)";

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Player URL for `params`. Only the player endpoint of `config` is used.
fn stream_url(config: &Config, params: &StreamParams) -> Result<String> {
    Ok(stream_data(&config.endpoints.player_url, params)?.stream_url)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    log::debug!("Using configuration from {}", cli.config.display());
    let config = Arc::new(config);

    match cli.command {
        Command::Matches {
            sport,
            filter,
            format,
        } => {
            let service = MatchService::from_config(Arc::clone(&config))?;
            let matches = service.fetch_matches(sport, filter).await;

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&matches)?),
                Format::Text => {
                    for m in &matches {
                        println!("{}", m.format(TEXT_TEMPLATE));
                    }
                    log::info!("{} matches", matches.len());
                }
            }
        }

        Command::Sports => {
            let service = MatchService::from_config(Arc::clone(&config))?;
            for sport in service.fetch_sports().await {
                println!("{sport}");
            }
        }

        Command::Stream {
            stream_type,
            channel,
            event,
            link,
            lang,
            category,
            source,
        } => {
            let mut params = StreamParams {
                stream_type,
                channel_id: channel,
                event_id: event,
                link_id: link,
                category_id: category,
                source_index: source,
                ..StreamParams::default()
            };
            params.set("lang", &lang);

            println!("{}", stream_url(&config, &params)?);
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK ({})", cli.config.display());
        }
    }

    Ok(())
}

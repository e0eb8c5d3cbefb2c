use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tuningsearch_mcp::client::TuningSearchClient;
use tuningsearch_mcp::config::{get_config, load_config, Config, API_KEY_ENV};
use tuningsearch_mcp::format;
use tuningsearch_mcp::mcp::server::McpServer;
use tuningsearch_mcp::models::{Language, SafeSearch, SearchRequest, TimeRange};

/// TuningSearch MCP - web search tools and prompts for MCP clients
#[derive(Parser, Debug)]
#[command(name = "tuningsearch-mcp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MCP server exposing TuningSearch web search and quota tools", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the MCP server over stdio (for Claude Desktop and other MCP clients)
    Serve,

    /// Search the web from the terminal
    Search {
        /// Search query
        query: String,

        /// Result language
        #[arg(long)]
        language: Option<Language>,

        /// Result page, starting at 1
        #[arg(long)]
        page: Option<u32>,

        /// Safe-search level: 0 off, 1 moderate, 2 strict
        #[arg(long)]
        safe: Option<u8>,

        /// Time window: day, week, month, year
        #[arg(long)]
        time_range: Option<TimeRange>,
    },

    /// Show the account quota
    Quota,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("tuningsearch_mcp={}", env_filter)),
        ))
        // stdout carries the MCP transport, so logs go to stderr
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => get_config(),
    };

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Search {
            query,
            language,
            page,
            safe,
            time_range,
        } => {
            let api_key = require_api_key(&config)?;

            let mut request = SearchRequest::new(query);
            request.language = language;
            request.page = page;
            request.safe = safe.map(SafeSearch::from_level).transpose()?;
            request.time_range = time_range;
            request.validate()?;

            let client = TuningSearchClient::from_config(&config);
            let data = client.search(&request, &api_key).await?;
            println!("{}", format::format_search_results(&data));
            Ok(())
        }
        Commands::Quota => {
            let api_key = require_api_key(&config)?;

            let client = TuningSearchClient::from_config(&config);
            let info = client.quota(&api_key).await?;
            println!("{}", format::format_quota(&info));
            Ok(())
        }
    }
}

/// Run the MCP server. A missing credential is the one fatal precondition:
/// exit 1 before the transport is attached.
async fn serve(config: Config) -> Result<()> {
    if config.api_key.is_none() {
        tracing::error!(
            "{} environment variable is not set; cannot serve TuningSearch tools",
            API_KEY_ENV
        );
        std::process::exit(1);
    }

    let server = McpServer::new(&config);
    server.run().await?;
    Ok(())
}

fn require_api_key(config: &Config) -> Result<String> {
    config
        .api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("{} environment variable is not set", API_KEY_ENV))
}

//! CLI command implementations

use anyhow::Context;
use clap::{Args, Subcommand};
use reelscout_core::{ReelscoutConfig, RuntimeMode};
use reelscout_search::{MovieSearchService, TriggerPolicy};
use reelscout_web::run_server;

use crate::output::render_text;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Run one search and print what the page would show
    Search {
        /// Movie title to look for
        query: String,
        /// Trigger variant to emulate
        #[arg(long, default_value = "auto")]
        policy: TriggerPolicy,
        /// Print the raw UI state as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where search results come from.
#[derive(Args)]
pub struct SourceArgs {
    /// Runtime mode (production uses OMDb, development uses demo data)
    #[arg(long, default_value = "production")]
    mode: RuntimeMode,
    /// OMDb API key (overrides REELSCOUT_OMDB_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

impl SourceArgs {
    fn apply(&self, config: &mut ReelscoutConfig) {
        if let Some(key) = &self.api_key {
            config.omdb.api_key = Some(key.clone());
        }
    }
}

/// Handle the CLI command
///
/// # Errors
/// Configuration, provider setup or server failures. Search misses and
/// transport failures are printed, not returned.
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve { host, port, source } => serve(host, port, source).await,
        Commands::Search {
            query,
            policy,
            json,
            source,
        } => search(query, policy, json, source).await,
    }
}

async fn serve(host: Option<String>, port: Option<u16>, source: SourceArgs) -> anyhow::Result<()> {
    let mut config = ReelscoutConfig::from_env();
    source.apply(&mut config);
    if let Some(host) = host {
        config.web.host = host;
    }
    if let Some(port) = port {
        config.web.port = port;
    }

    run_server(config, source.mode)
        .await
        .map_err(|e| anyhow::anyhow!("server stopped: {e}"))
}

async fn search(
    query: String,
    policy: TriggerPolicy,
    json: bool,
    source: SourceArgs,
) -> anyhow::Result<()> {
    let mut config = ReelscoutConfig::from_env();
    source.apply(&mut config);
    let service = search_service(&config, source.mode)?;

    tracing::debug!(%query, %policy, mode = %source.mode, "Running one-off search");
    let state = run_search(&service, &query, policy).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", render_text(&state, policy));
    }
    Ok(())
}

/// Builds the provider for a one-off search. The web section is not checked
/// since nothing is bound.
fn search_service(
    config: &ReelscoutConfig,
    mode: RuntimeMode,
) -> anyhow::Result<MovieSearchService> {
    config.validate_search(mode)?;
    MovieSearchService::from_runtime_mode(config, mode).context("could not set up movie search")
}

/// Drives a session the way the matching page would.
async fn run_search(
    service: &MovieSearchService,
    query: &str,
    policy: TriggerPolicy,
) -> reelscout_search::UiState {
    let session = service.session_with_query(policy, query);
    match policy {
        TriggerPolicy::Auto => session.start().await,
        TriggerPolicy::Manual => session.submit().await,
    }
}

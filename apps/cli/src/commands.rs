//! CLI command definitions, routing, and tracing setup.

use std::sync::Arc;

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::info;

use roster_core::{
    ArticlePublisher, FilterCriteria, InventoryPipeline, PipelineConfig, SilentIo,
};
use roster_github::GitHubClient;
use roster_shared::{
    AppConfig, RosterError, init_config, load_config, resolve_token, validate_preflight,
};
use roster_stack::StackTeamsClient;

use crate::io::ConsoleIo;

/// Label shown in the confirmation prompt and run title.
const OPERATION_DESCRIPTION: &str = "Update repository inventory article";

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// roster — publish a topic-grouped repository inventory page.
#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Regenerate a GitHub repository inventory page and publish it to a Teams article.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Regenerate the inventory page and publish it.
    Update {
        /// Skip the confirmation prompt (the selection is still listed).
        #[arg(long)]
        no_confirm: bool,

        /// Render everything but do not publish.
        #[arg(long)]
        dry_run: bool,
    },

    /// Render the inventory page to stdout without publishing.
    Preview,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "roster=info",
        1 => "roster=debug",
        _ => "roster=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Update {
            no_confirm,
            dry_run,
        } => cmd_update(no_confirm, dry_run).await,
        Command::Preview => cmd_preview().await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

async fn cmd_update(no_confirm: bool, dry_run: bool) -> Result<()> {
    let config = load_config()?;
    validate_preflight(&config)?;

    let github_token = resolve_token(&config.github.token_env, "GitHub")?;
    let stack_token = resolve_token(&config.stack.token_env, "Stack Teams")?;

    let source = Arc::new(GitHubClient::new(&config.github.api_base, &github_token)?);
    let publisher = Arc::new(StackTeamsClient::new(
        &config.stack.api_base,
        &config.stack.team,
        &stack_token,
    )?);
    let io = Arc::new(ConsoleIo::new());

    let pipeline = InventoryPipeline::new(
        source,
        io.clone(),
        publisher,
        pipeline_config(&config, dry_run),
    );

    info!(no_confirm, dry_run, "updating inventory article");

    let outcome = pipeline.run(OPERATION_DESCRIPTION, no_confirm).await;
    io.finish();

    match outcome {
        Ok(result) => {
            println!();
            if result.published {
                println!("  Inventory article updated!");
            } else {
                println!("  Dry run complete, nothing published.");
            }
            println!("  Article:      {}", result.article_id);
            println!("  Repositories: {}", result.repository_count);
            println!("  Topics:       {}", result.topic_count);
            println!("  Time:         {:.1}s", result.elapsed.as_secs_f64());
            println!();
            Ok(())
        }
        Err(RosterError::SelectionAborted) => {
            println!();
            println!("  Selection declined, nothing published.");
            println!();
            Err(RosterError::SelectionAborted.into())
        }
        Err(e) => Err(e.into()),
    }
}

// ---------------------------------------------------------------------------
// preview
// ---------------------------------------------------------------------------

/// Publisher that must never be reached: preview runs are dry runs.
struct NullPublisher;

#[async_trait]
impl ArticlePublisher for NullPublisher {
    async fn update_article_body(
        &self,
        _article_id: &str,
        _body: &str,
    ) -> roster_shared::Result<()> {
        Err(RosterError::Publish(
            "preview must not publish".into(),
        ))
    }
}

async fn cmd_preview() -> Result<()> {
    let config = load_config()?;
    let github_token = resolve_token(&config.github.token_env, "GitHub")?;

    let source = Arc::new(GitHubClient::new(&config.github.api_base, &github_token)?);

    let pipeline = InventoryPipeline::new(
        source,
        Arc::new(SilentIo),
        Arc::new(NullPublisher),
        pipeline_config(&config, true),
    );

    info!("rendering inventory preview");

    let result = pipeline.run(OPERATION_DESCRIPTION, true).await?;
    print!("{}", result.page.body);
    Ok(())
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn pipeline_config(config: &AppConfig, dry_run: bool) -> PipelineConfig {
    PipelineConfig {
        article_id: config.inventory.article_id.clone(),
        page_title: config.inventory.title.clone(),
        page_description: config.inventory.description.clone(),
        criteria: FilterCriteria::from(&config.inventory),
        dry_run,
    }
}

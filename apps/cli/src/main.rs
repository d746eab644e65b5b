//! roster CLI — GitHub repository inventory page publisher.
//!
//! Regenerates a topic-grouped Markdown inventory of an organization's
//! repositories and publishes it to a Stack Overflow for Teams article.

mod commands;
mod io;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}

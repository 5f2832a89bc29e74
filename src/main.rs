//! webpack-manifest CLI - inspect and render webpack manifests
//!
//! Usage: webpack-manifest <COMMAND>
//!
//! Commands:
//!   render  Print the HTML tags (or inline content) for an entry
//!   urls    Print the relative URLs of an entry's files
//!   status  Report a manifest's build status

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use webpack_manifest::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Render {
            bundle,
            entry,
            kind,
            inline,
        } => commands::cmd_render(
            &config,
            &bundle,
            &entry,
            &Commands::kinds(kind),
            inline,
            cli.json,
        ),
        Commands::Urls {
            bundle,
            entry,
            kind,
        } => commands::cmd_urls(&config, &bundle, &entry, &Commands::kinds(kind), cli.json),
        Commands::Status { bundle } => commands::cmd_status(&config, &bundle, cli.json),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => {
            let (config, _warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            Ok(config.with_env_overrides())
        }
        None => {
            let cwd = std::env::current_dir().context("resolving current directory")?;
            Ok(Config::load_or_default(Some(&cwd)))
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

//! CLI Argument Parsing
//!
//! Global flags (--config, --json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use webpack_manifest::AssetKind;

/// webpack-manifest - render webpack build output for templates
#[derive(Parser, Debug)]
#[command(name = "webpack-manifest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file with [manifests.<name>] bundles (defaults to ./webpack-manifest.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the HTML tags (or inline content) for an entry
    Render {
        /// Bundle name from the config file
        bundle: String,

        /// Entry name from the manifest
        entry: String,

        /// Only render one kind of asset
        #[arg(short, long, value_enum)]
        kind: Option<AssetKind>,

        /// Inline file content instead of referencing URLs
        #[arg(long)]
        inline: bool,
    },

    /// Print the relative URLs of an entry's files
    Urls {
        /// Bundle name from the config file
        bundle: String,

        /// Entry name from the manifest
        entry: String,

        /// Only list one kind of asset
        #[arg(short, long, value_enum)]
        kind: Option<AssetKind>,
    },

    /// Read a bundle's manifest once and report its build status
    Status {
        /// Bundle name from the config file
        bundle: String,
    },
}

impl Commands {
    /// Kinds selected by `--kind`, stylesheets first when unset
    pub fn kinds(kind: Option<AssetKind>) -> Vec<AssetKind> {
        match kind {
            Some(kind) => vec![kind],
            None => vec![AssetKind::Stylesheet, AssetKind::Script],
        }
    }
}

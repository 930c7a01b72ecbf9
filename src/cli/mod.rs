// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the mizan command-line interface.
//!
//! Two subcommands over a site's data directory: `search` prints what the
//! search page would show, `suggest` prints the typeahead JSON. Both read the
//! same `<collection>.json` files the site writes.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mizan",
    about = "Rank site content against a search query",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full search: ranked results with snippets
    Search {
        /// Data directory containing <collection>.json files
        data_dir: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results (defaults to the config's maxResults)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Path to a JSON search config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print results as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Typeahead suggestions as JSON
    Suggest {
        /// Data directory containing <collection>.json files
        data_dir: PathBuf,

        /// Partial query as typed
        query: String,

        /// Maximum number of suggestions (defaults to the config's maxSuggestions)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Path to a JSON search config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

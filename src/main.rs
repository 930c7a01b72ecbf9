// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mizan::{
    load_collections, rank_full_with, rank_suggestions_with, JsonDirStore, MizanError,
    SearchConfig, SuggestionResponse, SystemClock,
};

mod cli;
use cli::display::{render_results, use_colors};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, limit: Option<usize>, suggest: bool) -> mizan::Result<SearchConfig> {
    let mut config = match path {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    };
    if let Some(limit) = limit {
        if suggest {
            config.max_suggestions = limit;
        } else {
            config.max_results = limit;
        }
    }
    config.validate()?;
    Ok(config)
}

fn to_json<T: serde::Serialize>(value: &T) -> mizan::Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| MizanError::json("<stdout>", e))
}

fn run(command: Commands) -> mizan::Result<()> {
    match command {
        Commands::Search {
            data_dir,
            query,
            limit,
            config,
            json,
        } => {
            let config = load_config(config.as_deref(), limit, false)?;
            let store = JsonDirStore::new(&data_dir);
            let loaded = load_collections(&store, &config.collections);
            tracing::info!(
                collections = loaded.len(),
                records = loaded.record_count(),
                data_dir = %data_dir.display(),
                "loaded content"
            );

            let collections = loaded.collections();
            let results = rank_full_with(&query, &collections, &SystemClock, &config);

            if json {
                println!("{}", to_json(&results)?);
            } else {
                print!("{}", render_results(&results, use_colors()));
            }
        }

        Commands::Suggest {
            data_dir,
            query,
            limit,
            config,
        } => {
            let config = load_config(config.as_deref(), limit, true)?;
            let store = JsonDirStore::new(&data_dir);
            let loaded = load_collections(&store, &config.collections);
            let collections = loaded.collections();
            let suggestions = rank_suggestions_with(&query, &collections, &SystemClock, &config);
            println!("{}", to_json(&SuggestionResponse { suggestions })?);
        }
    }
    Ok(())
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! rigpreset - game settings presets for your hardware
//!
//! Entry point for the rigpreset CLI application.

use clap::Parser;

use rigpreset::cli::{Cli, Commands};
use rigpreset::commands;
use rigpreset::config::Settings;
use rigpreset::dataset::DatasetCache;
use rigpreset::error::Result;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on load and lookup diagnostics; `RUST_LOG` still applies.
    if cli.verbose > 0 {
        if let Ok(parsed) = "rigpreset=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings = Settings::load()?;

    let cache = DatasetCache::new(settings.dataset_path(cli.dataset.as_deref()));
    tracing::debug!("Dataset path: {}", cache.path().display());

    // Dispatch to appropriate command
    match cli.command {
        Commands::Find(args) => {
            settings.validate()?;
            commands::find::execute(&args, &cache, &settings.lookup, &cli.format)?;
        }
        Commands::Options => {
            commands::options::execute(&cache, &cli.format)?;
        }
        Commands::Dataset => {
            commands::dataset::execute(&cache, &cli.format)?;
        }
        Commands::Normalize { kind, text } => {
            commands::normalize::execute(kind, &text, &cli.format)?;
        }
        Commands::Settings(args) => {
            commands::settings::execute(
                args.command,
                settings,
                &Settings::default_path(),
                &cli.format,
            )?;
        }
    }

    Ok(())
}

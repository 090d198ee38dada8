// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use paperhub::facet::{job_facet_groups, paper_facet_groups};
use paperhub::{filter, validate_registration, Catalog, FacetSelection, RegistrationForm};

mod cli;
use cli::display;
use cli::{Cli, Commands, FilterArgs, View};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(2);
        }
    }
}

/// Returns the process exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Papers(args) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let selection = selection_from(&args);
            let results = filter(&catalog.papers, &selection, &args.query);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                display::print_papers(&results, catalog.papers.len(), &args.query, &selection);
            }
            Ok(0)
        }
        Commands::Jobs(args) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let selection = selection_from(&args);
            let results = filter(&catalog.jobs, &selection, &args.query);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                display::print_jobs(&results, catalog.jobs.len(), &args.query, &selection);
            }
            Ok(0)
        }
        Commands::Facets { view } => {
            match view {
                View::Papers => display::print_facet_groups("Paper Filters", &paper_facet_groups()),
                View::Jobs => display::print_facet_groups("Job Filters", &job_facet_groups()),
            }
            Ok(0)
        }
        Commands::Validate { file } => {
            let raw = match &file {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut raw = String::new();
                    std::io::stdin()
                        .read_to_string(&mut raw)
                        .context("failed to read stdin")?;
                    raw
                }
            };
            let form: RegistrationForm =
                serde_json::from_str(&raw).context("invalid registration form JSON")?;
            let result = validate_registration(&form);
            display::print_validation(&result);
            Ok(if result.is_ok() { 0 } else { 1 })
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Ok(Catalog::load(path)?),
        None => {
            tracing::debug!("no catalog given, using sample listings");
            Ok(Catalog::sample())
        }
    }
}

fn selection_from(args: &FilterArgs) -> FacetSelection {
    args.facets
        .iter()
        .map(|(group, value)| (group.as_str(), value.as_str()))
        .collect()
}

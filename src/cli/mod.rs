// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the paperhub command-line interface.
//!
//! `papers` and `jobs` filter a catalog, `facets` lists the options each view
//! offers, and `validate` checks a registration form. The catalog comes from
//! `--catalog` / `PAPERHUB_CATALOG`, or the built-in sample when neither is set.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "paperhub",
    about = "Browse exam papers and student job listings with faceted search",
    version
)]
pub struct Cli {
    /// Catalog JSON file with "papers" and "jobs" arrays
    #[arg(long, global = true, env = "PAPERHUB_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Query and facet flags shared by the listing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text to look for (used as given, not trimmed)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Facet selection as Group=value; repeat to select more
    ///
    /// Values within a group are OR'ed, groups are AND'ed.
    /// Example: --facet Faculty=engineering --facet Semester=3
    #[arg(short, long = "facet", value_name = "GROUP=VALUE", value_parser = parse_facet)]
    pub facets: Vec<(String, String)>,

    /// Emit matching records as JSON instead of cards
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter past exam papers
    Papers(FilterArgs),

    /// Filter internships and jobs
    Jobs(FilterArgs),

    /// List the facet groups and option values a view accepts
    Facets {
        #[arg(value_enum, default_value = "papers")]
        view: View,
    },

    /// Validate a registration form (JSON) from a file or stdin
    Validate {
        /// Form file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum View {
    Papers,
    Jobs,
}

/// Parse `Group=value`. The group name is trimmed; the value is everything
/// after the first `=`, verbatim.
pub fn parse_facet(raw: &str) -> Result<(String, String), String> {
    let (group, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected GROUP=VALUE, got '{}'", raw))?;
    let group = group.trim();
    if group.is_empty() {
        return Err(format!("missing facet group in '{}'", raw));
    }
    Ok((group.to_string(), value.to_string()))
}

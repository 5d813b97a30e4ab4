//! Command dispatch for the `search-tags` entrypoint.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use search_tags_patterns::{compile_matcher, translate};

use crate::config::LogLevel;
use crate::error::CliError;
use crate::output::{write_hit, write_pattern};
use crate::search::search_paths;

/// Turn Emmet class abbreviations such as `.btn.primary` into `className`
/// search patterns.
#[derive(Parser, Debug)]
#[command(name = "search-tags", author, version, about)]
pub(crate) struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported commands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Print the search pattern for an abbreviation.
    Pattern(PatternArgs),
    /// Print lines whose `className` carries every class in the abbreviation.
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub(crate) struct PatternArgs {
    /// Abbreviation to translate; read from the first line of stdin when
    /// omitted.
    pub abbreviation: Option<String>,
    /// Emit JSON instead of the bare pattern.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Abbreviation describing the classes to look for.
    pub abbreviation: String,
    /// Files or directories to search.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,
    /// Emit one JSON object per match.
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Pattern(args) => handle_pattern(args),
        Commands::Search(args) => handle_search(&args),
    }
}

/// Read the first line of `reader` without its line terminator.
///
/// Returns `None` when the reader is exhausted before any input arrives.
pub(crate) fn read_abbreviation<R: BufRead>(mut reader: R) -> Result<Option<String>, CliError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']);
    Ok(Some(trimmed.to_owned()))
}

fn handle_pattern(args: PatternArgs) -> Result<()> {
    let abbreviation = match args.abbreviation {
        Some(abbreviation) => Some(abbreviation),
        None => read_abbreviation(io::stdin().lock()).wrap_err("failed to read abbreviation")?,
    };
    let Some(abbreviation) = abbreviation.filter(|a| !a.is_empty()) else {
        tracing::info!("no abbreviation given; nothing to do");
        return Ok(());
    };

    let pattern = translate(&abbreviation)
        .wrap_err_with(|| format!("failed to translate abbreviation `{abbreviation}`"))?;
    let mut stdout = io::stdout();
    write_pattern(&mut stdout, &abbreviation, &pattern, args.json)?;
    stdout.flush().wrap_err("failed to flush pattern to stdout")
}

fn handle_search(args: &SearchArgs) -> Result<()> {
    if args.abbreviation.is_empty() {
        tracing::info!("no abbreviation given; nothing to do");
        return Ok(());
    }
    let matcher = compile_matcher(&args.abbreviation)
        .wrap_err_with(|| format!("failed to compile abbreviation `{}`", args.abbreviation))?;
    tracing::debug!(pattern = matcher.pattern(), "searching");

    let mut stdout = io::stdout().lock();
    search_paths(&matcher, &args.paths, |hit| {
        write_hit(&mut stdout, hit, args.json)
    })?;
    stdout.flush().wrap_err("failed to flush search results")
}

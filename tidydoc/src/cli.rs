// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::config::{Config, load_config, load_config_file};
use crate::core::builder::build_str;
use crate::core::name::HumanNameKey;
use crate::core::render::render_string;
use crate::core::sorter::sort;
use crate::models::SortReport;
use crate::utils::{print_reports, read_document, write_atomically};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sorts entries in a markdown file.", long_about = None)]
pub struct Args {
    /// Input markdown file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output markdown file path
    #[arg(short, long, required_unless_present = "check")]
    pub output: Option<PathBuf>,

    /// Parent sections whose entries get sorted (repeatable; default: Speakers,
    /// Organizers, Mentors, Getting Started)
    #[arg(short, long = "sections", value_name = "NAME")]
    pub sections: Vec<String>,

    /// Config file to use instead of searching for tidydoc.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report what would be reordered without writing anything
    #[arg(long)]
    pub check: bool,

    /// Enable debug mode
    #[arg(short, long)]
    pub debug: bool,
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over
/// `--debug`.
pub fn init_logging(debug: bool) {
    let default_filter = if debug { "tidydoc=debug" } else { "tidydoc=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_config(args: &Args) -> Result<Config> {
    if let Some(path) = &args.config {
        return load_config_file(path);
    }
    let input_dir = args
        .input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(env::current_dir, |parent| Ok(parent.to_path_buf()))
        .context("Failed to resolve the input directory")?;
    load_config(&input_dir)
}

/// Sorts the input document and writes the result, returning the change
/// reports for every sorted section.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * The input file cannot be read
/// * The output file cannot be written
pub fn run(args: Args) -> Result<Vec<SortReport>> {
    debug!("Debug mode enabled");
    let config = resolve_config(&args)?;
    let marker = config.marker();
    let policy = config.policy(&args.sections);
    debug!("Sorting children of {:?} at depth {}", policy.sections, policy.depth);

    let content = read_document(&args.input)?;
    debug!(
        "\n--- Original Content of {} ---\n{}\n--- End of Original Content ---\n",
        args.input.display(),
        content
    );

    let mut doc = build_str(&content, marker);
    debug!("Parsed {} sections:\n{}", doc.section_count(), doc.outline());

    let mut reports = Vec::new();
    sort(&mut doc, &policy, &HumanNameKey, &mut reports);
    print_reports(&reports);

    if args.check {
        return Ok(reports);
    }

    if let Some(output) = &args.output {
        write_atomically(output, &render_string(&doc, marker))?;
        debug!("Wrote {}", output.display());
    }

    Ok(reports)
}

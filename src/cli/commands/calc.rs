//! `stackup calc` command - compute a stack-up from a file and/or inline entries

use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::{effective_policy, load_config};
use crate::cli::output::format_report;
use crate::cli::GlobalOpts;
use crate::core::config::View;
use crate::core::input::{load_input, StackupInput};
use crate::entities::stackup::{report, FeatureEntry};

#[derive(clap::Args, Debug)]
pub struct CalcArgs {
    /// Entries file (.yaml, .yml, .json, .csv), or '-' for YAML on stdin
    pub file: Option<PathBuf>,

    /// Inline entry as LENGTH:TOL (repeatable, appended after file entries)
    #[arg(
        long = "entry",
        short = 'e',
        value_name = "LENGTH:TOL",
        value_parser = parse_entry_arg,
        allow_hyphen_values = true
    )]
    pub entries: Vec<FeatureEntry>,

    /// Presentation for text output (overrides the config file)
    #[arg(long)]
    pub view: Option<View>,

    /// Title shown above the results (overrides the file's title)
    #[arg(long, short = 't')]
    pub title: Option<String>,
}

fn parse_entry_arg(s: &str) -> std::result::Result<FeatureEntry, String> {
    s.parse().map_err(|e: crate::core::InputError| e.to_string())
}

pub fn run(args: CalcArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;

    let mut input = match &args.file {
        Some(path) => load_input(path)?,
        None => StackupInput::default(),
    };
    input.features.extend(args.entries);
    if args.title.is_some() {
        input.title = args.title;
    }

    let policy = effective_policy(global, &config);
    tracing::debug!(
        features = input.features.len(),
        policy = %policy,
        "running calc"
    );
    let entries = policy.apply(input.features)?;

    if entries.is_empty() {
        tracing::warn!("no features given; results are all zero");
    }

    let report = report(&entries);
    let view = args.view.unwrap_or(config.view);
    print!(
        "{}",
        format_report(&report, input.title.as_deref(), global.format, view, &config)?
    );
    Ok(())
}

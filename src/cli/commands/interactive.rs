//! `stackup interactive` command - prompt for features one by one

use clap::builder::RangedU64ValueParser;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::commands::{effective_policy, load_config};
use crate::cli::output::format_report;
use crate::cli::GlobalOpts;
use crate::core::config::View;
use crate::core::input::{save_input, StackupInput};
use crate::entities::stackup::{report, FeatureEntry, UNITS};

/// Smallest number of features the form accepts
pub const MIN_FEATURES: usize = 1;

/// Largest number of features the form accepts
pub const MAX_FEATURES: usize = 20;

/// Feature count offered when the user just presses enter
const DEFAULT_FEATURES: usize = 3;

#[derive(clap::Args, Debug)]
pub struct InteractiveArgs {
    /// Number of features (skips the count prompt)
    #[arg(
        long,
        short = 'n',
        value_parser = RangedU64ValueParser::<usize>::new().range(MIN_FEATURES as u64..=MAX_FEATURES as u64)
    )]
    pub count: Option<usize>,

    /// Title shown above the results
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Save the entered features to a YAML entries file
    #[arg(long, short = 's')]
    pub save: Option<PathBuf>,

    /// Presentation for text output (overrides the config file)
    #[arg(long)]
    pub view: Option<View>,
}

pub fn run(args: InteractiveArgs, global: &GlobalOpts) -> Result<()> {
    if !console::user_attended() {
        return Err(miette::miette!(
            help = "use `stackup calc FILE` or `stackup calc -e LENGTH:TOL ...` in scripts",
            "Interactive mode needs a terminal"
        ));
    }

    let config = load_config(global)?;
    let theme = ColorfulTheme::default();

    println!("{} Enter dimensions and their ± tolerances", style("◆").cyan());

    let count = match args.count {
        Some(n) => n,
        None => Input::<usize>::with_theme(&theme)
            .with_prompt("How many features?")
            .default(DEFAULT_FEATURES)
            .validate_with(|n: &usize| -> std::result::Result<(), String> {
                if (MIN_FEATURES..=MAX_FEATURES).contains(n) {
                    Ok(())
                } else {
                    Err(format!(
                        "enter a number from {} to {}",
                        MIN_FEATURES, MAX_FEATURES
                    ))
                }
            })
            .interact_text()
            .into_diagnostic()?,
    };

    let mut features = Vec::with_capacity(count);
    for i in 1..=count {
        let length: f64 = Input::with_theme(&theme)
            .with_prompt(format!("Length {} ({})", i, UNITS))
            .default(0.0)
            .validate_with(finite)
            .interact_text()
            .into_diagnostic()?;
        let tolerance: f64 = Input::with_theme(&theme)
            .with_prompt(format!("Tolerance {} (± {})", i, UNITS))
            .default(0.0)
            .validate_with(finite)
            .interact_text()
            .into_diagnostic()?;
        features.push(FeatureEntry::new(length, tolerance));
    }

    let entries = effective_policy(global, &config).apply(features)?;

    if let Some(path) = &args.save {
        let input = StackupInput {
            title: args.title.clone(),
            features: entries.clone(),
        };
        save_input(path, &input)?;
        eprintln!(
            "{} Saved {} feature(s) to {}",
            style("✓").green(),
            entries.len(),
            style(path.display()).cyan()
        );
    }

    let report = report(&entries);
    let view = args.view.unwrap_or(config.view);
    println!();
    print!(
        "{}",
        format_report(&report, args.title.as_deref(), global.format, view, &config)?
    );
    Ok(())
}

fn finite(value: &f64) -> std::result::Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err("enter a finite number".to_string())
    }
}

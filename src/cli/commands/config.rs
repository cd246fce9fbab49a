//! `stackup config` command - show the effective configuration

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::{effective_policy, load_config};
use crate::cli::GlobalOpts;
use crate::core::config::Config;

#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// Print only the config file location
    #[arg(long)]
    pub path: bool,
}

pub fn run(args: ConfigArgs, global: &GlobalOpts) -> Result<()> {
    let path = global.config.clone().or_else(Config::default_path);

    if args.path {
        match path {
            Some(path) => println!("{}", path.display()),
            None => {
                return Err(miette::miette!(
                    "No config directory available on this platform; use --config <FILE>"
                ))
            }
        }
        return Ok(());
    }

    let mut config = load_config(global)?;
    config.policy = effective_policy(global, &config);

    if let Some(path) = &path {
        let state = if path.exists() { "loaded" } else { "not found, using defaults" };
        eprintln!(
            "{} {} ({})",
            style("Config:").bold(),
            style(path.display()).cyan(),
            style(state).dim()
        );
    }

    print!("{}", serde_yml::to_string(&config).into_diagnostic()?);
    Ok(())
}

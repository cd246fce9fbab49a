//! Command-line arguments

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::calc::CalcArgs;
use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::config::ConfigArgs;
use crate::cli::commands::interactive::InteractiveArgs;
use crate::core::policy::TolerancePolicy;

#[derive(Parser, Debug)]
#[command(
    name = "stackup",
    version,
    about = "Worst-case and RSS tolerance stack-up analysis",
    long_about = "Combine the nominal lengths and ± tolerances of a chain of linear features \
                  into a total length, a worst-case bound (sum of tolerances) and a \
                  statistical RSS bound (root-sum-square of tolerances)."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(
        long,
        short = 'f',
        global = true,
        default_value = "auto",
        env = "STACKUP_FORMAT"
    )]
    pub format: OutputFormat,

    /// Negative tolerance handling (overrides the config file)
    #[arg(long, global = true, env = "STACKUP_POLICY")]
    pub policy: Option<TolerancePolicy>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "STACKUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a stack-up from an entries file and/or inline entries
    Calc(CalcArgs),

    /// Enter features one by one and compute the stack-up
    #[command(visible_alias = "i")]
    Interactive(InteractiveArgs),

    /// Show the effective configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text on a terminal, JSON when piped
    Auto,
    /// Styled human-readable text
    Text,
    Json,
    Yaml,
    /// One row per feature
    Csv,
}

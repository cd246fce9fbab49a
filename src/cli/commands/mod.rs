//! CLI command implementations

pub mod calc;
pub mod completions;
pub mod config;
pub mod interactive;

use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::config::Config;
use crate::core::policy::TolerancePolicy;

/// Load the config file named by the global options (or the default one)
pub(crate) fn load_config(global: &GlobalOpts) -> Result<Config> {
    Ok(Config::load(global.config.as_deref())?)
}

/// Command-line policy wins over the config file
pub(crate) fn effective_policy(global: &GlobalOpts, config: &Config) -> TolerancePolicy {
    global.policy.unwrap_or(config.policy)
}

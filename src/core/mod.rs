//! Core module - intake, policy and configuration around the calculator

pub mod config;
pub mod input;
pub mod policy;

pub use config::{Config, ConfigError, Precision, View};
pub use input::{load_input, parse_input, save_input, InputError, InputFormat, StackupInput};
pub use policy::TolerancePolicy;

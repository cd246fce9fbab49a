//! CLI module - argument parsing, rendering and command dispatch

pub mod args;
pub mod commands;
pub mod helpers;
pub mod logging;
pub mod output;
pub mod render;
pub mod viz;

pub use args::{Cli, Commands, GlobalOpts, OutputFormat};
pub use render::{EnhancedRenderer, Renderer, SimpleRenderer};

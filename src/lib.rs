//! Tolerance Stack-Up: worst-case and RSS analysis of linear tolerance chains
//!
//! The calculator in [`entities::stackup`] is pure and stateless. The `core`
//! and `yaml` modules collect entries from files and arguments, and `cli`
//! renders results in the terminal or as JSON/YAML/CSV.

pub mod cli;
pub mod core;
pub mod entities;
pub mod yaml;

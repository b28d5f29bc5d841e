//! enchant_cli - command line front end for enchant_core

pub mod cli;
pub mod report;

pub use cli::Cli;
pub use report::render;

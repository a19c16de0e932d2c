pub mod commands;
pub mod render;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Debug, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// JSON payload for create commands, inline or from a file.
#[derive(Args, Clone, Debug)]
pub struct PayloadArgs {
    /// Inline JSON document
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub data: Option<String>,
    /// Path to a JSON document
    #[arg(long)]
    pub file: Option<PathBuf>,
}

//! Shared CLI option types.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table for terminals
    Text,
    /// Pretty-printed score sheet
    Json,
}

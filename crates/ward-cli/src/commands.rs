pub mod demo;
pub mod export;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ward")]
#[command(about = "An in-memory hospital registry.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Populate a sample hospital and print its reports
    #[command(alias = "d")]
    Demo {
        /// Hospital name
        #[arg(long, default_value = "City Hospital")]
        name: String,
    },
    /// Populate a sample hospital and emit a registry snapshot
    #[command(alias = "e")]
    Export {
        /// Hospital name
        #[arg(long, default_value = "City Hospital")]
        name: String,
        /// Snapshot format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

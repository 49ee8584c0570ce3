use crate::core::printer::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "tenant-desk")]
#[command(about = "Tenant inbox and rent report tool")]
pub struct CliConfig {
    /// Path to a TOML file with report settings and sample data
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Deliver the configured messages and print the inbox
    Messages {
        /// Recipient whose messages are printed in detail
        #[arg(long)]
        recipient: Option<String>,
    },
    /// Print the financial report for the configured properties
    Report {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Override the premium rent threshold
        #[arg(long)]
        threshold: Option<f64>,

        /// Override the report title
        #[arg(long)]
        title: Option<String>,
    },
}

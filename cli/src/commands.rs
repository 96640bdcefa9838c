pub mod info;
pub mod latest;

use clap::{Parser, Subcommand};
use kiva_common::config::KIVA_NEWEST_LOANS_URL;

#[derive(Parser)]
#[command(name = "kiva")]
#[command(about = "Lists the newest microloans published on Kiva.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Endpoint returning the newest loans as JSON
    #[arg(long, global = true, default_value = KIVA_NEWEST_LOANS_URL)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 10, value_name = "SECS")]
    pub timeout: u64,

    /// Print the loans as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Less output, repeat for even less
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and list the newest loans
    #[command(alias = "l")]
    Latest,
    /// Show version and configuration
    #[command(alias = "i")]
    Info,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

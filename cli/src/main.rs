mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, info, latest};
use kiva_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        endpoint: commands.endpoint,
        timeout: Duration::from_secs(commands.timeout),
        quiet: commands.quiet,
        json: commands.json,
        ..Default::default()
    };

    if !cfg.json {
        print::banner(commands.no_banner, cfg.quiet);
    }

    match commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&cfg);
            Ok(())
        }
        Commands::Latest => latest::latest(&cfg).await,
    }
}

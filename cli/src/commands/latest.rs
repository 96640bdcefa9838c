use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;

use kiva_common::config::Config;
use kiva_common::{info, success, warn};
use kiva_core::fetcher::HttpLoanSource;
use kiva_core::screen::{CycleOutcome, LoanScreen};

use crate::kprint;
use crate::terminal::display::TerminalDisplay;
use crate::terminal::{colors, print, spinner};

pub async fn latest(cfg: &Config) -> anyhow::Result<()> {
    let source: HttpLoanSource = HttpLoanSource::new(cfg).context("preparing loan source")?;
    if !cfg.json {
        info!("Fetching newest loans from {}", source.endpoint());
    }

    let mut screen = LoanScreen::new(Arc::new(source), TerminalDisplay::new(cfg.quiet, cfg.json));

    let start_time: Instant = Instant::now();
    let guard = (!cfg.json).then(|| spinner::start("Waiting for the Kiva API..."));

    screen.activate();
    let outcome: Option<CycleOutcome> = screen.settle().await;

    drop(guard);

    match outcome {
        Some(CycleOutcome::Refreshed { count, skipped, decode_error }) => {
            if let Some(err) = decode_error {
                warn!("Response could not be decoded: {err}");
            }
            if !cfg.json {
                print_summary(count, skipped, start_time.elapsed(), cfg);
            }
            Ok(())
        }
        Some(CycleOutcome::Failed(err)) => {
            Err(anyhow::Error::new(err).context("fetching newest loans"))
        }
        None => anyhow::bail!("no fetch was started"),
    }
}

fn print_summary(count: usize, skipped: usize, total_time: Duration, cfg: &Config) {
    let listed: ColoredString = format!("{count} loans").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let mut output: String = format!("Fetch Complete: {listed} listed in {total_time}");
    if skipped > 0 {
        output.push_str(&format!(", {} skipped", skipped.to_string().bold().red()));
    }
    let output: ColoredString = output.color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            kprint!();
            success!("{}", output)
        }
    }
}

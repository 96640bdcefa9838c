use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::Metadata;
use tracing_subscriber::fmt::MakeWriter;

use crate::terminal::print::PRINT_TARGET;

static SPINNER: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Keeps the spinner on screen until dropped.
pub struct SpinnerGuard;

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        if let Ok(mut slot) = SPINNER.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
            }
        }
    }
}

pub fn start(msg: impl Into<String>) -> SpinnerGuard {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}") {
        pb.set_style(style.tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]));
    }
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(100));

    if let Ok(mut slot) = SPINNER.lock() {
        if let Some(previous) = slot.replace(pb) {
            previous.finish_and_clear();
        }
    }
    SpinnerGuard
}

fn active_spinner() -> Option<ProgressBar> {
    SPINNER.lock().ok().and_then(|slot| slot.clone())
}

/// Where an event ends up. Display output is the only thing on stdout, so
/// `--json` output can be piped; every log line goes to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    pub fn for_target(target: &str) -> Self {
        if target == PRINT_TARGET {
            Stream::Stdout
        } else {
            Stream::Stderr
        }
    }
}

/// Picks a [`SpinnerWriter`] per event from its target.
pub struct TerminalWriter;

impl<'a> MakeWriter<'a> for TerminalWriter {
    type Writer = SpinnerWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SpinnerWriter { stream: Stream::Stderr }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        SpinnerWriter { stream: Stream::for_target(meta.target()) }
    }
}

/// Writes without tearing a running spinner.
pub struct SpinnerWriter {
    stream: Stream,
}

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match (self.stream, active_spinner()) {
            (Stream::Stdout, Some(pb)) => pb.suspend(|| std::io::stdout().write_all(buf))?,
            (Stream::Stdout, None) => std::io::stdout().write_all(buf)?,
            (Stream::Stderr, Some(pb)) => {
                let msg = String::from_utf8_lossy(buf);
                pb.println(msg.trim_end());
            }
            (Stream::Stderr, None) => std::io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.stream {
            Stream::Stdout => std::io::stdout().flush(),
            Stream::Stderr => std::io::stderr().flush(),
        }
    }
}

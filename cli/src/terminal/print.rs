//! Display output. Every line is emitted as a `kiva::print` event so it shares
//! the subscriber (and the spinner) with log lines but lands on stdout.

use std::cell::Cell;
use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

pub const PRINT_TARGET: &str = "kiva::print";

thread_local! {
    static KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! kprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: "kiva::print", raw_msg = msg);
}

pub fn set_key_width(width: usize) {
    KEY_WIDTH.set(width);
}

/// A full-width line of `fill` with `title` centered in it.
fn rule(title: &str, fill: &str) -> String {
    let title_width: usize = UnicodeWidthStr::width(title);
    let pad: usize = TOTAL_WIDTH.saturating_sub(title_width);
    let left: String = fill.repeat(pad / 2);
    let right: String = fill.repeat(pad - pad / 2);
    format!("{}{}{}", left.bright_black(), title.bright_green().bold(), right.bright_black())
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }
    print(&rule(&format!("⟦ KIVA v{} ⟧", env!("CARGO_PKG_VERSION")), "═"));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&rule(&format!("⟦ {} ⟧", msg.to_uppercase()), "─"));
}

pub fn fat_separator() {
    print(&rule("", "═"));
}

pub fn end_of_program(q_level: u8) {
    if q_level == 0 {
        fat_separator();
    }
}

/// `> Key.....: value`, keys padded to the width set by [`set_key_width`].
pub fn aligned_line(key: &str, value: impl Display) {
    let dots: String = ".".repeat((KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    print(&format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.to_string().color(colors::TEXT_DEFAULT)
    ));
}

/// `[idx] title` followed by one branch per detail.
pub fn tree(idx: usize, title: &str, details: Vec<(String, ColoredString)>) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        title.color(colors::PRIMARY)
    ));

    let key_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let last: usize = details.len().saturating_sub(1);
    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i == last { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width - key.len()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}"));
}

const NO_LOANS: &str = r#"
         _   _  ___    _     ___    _    _   _ ____  
        | \ | |/ _ \  | |   / _ \  / \  | \ | / ___| 
        |  \| | | | | | |  | | | |/ _ \ |  \| \___ \ 
        | |\  | |_| | | |__| |_| / ___ \| |\  |___) |
        |_| \_|\___/  |_____\___/_/   \_\_| \_|____/ 
"#;

pub fn no_results() {
    print(&format!("{}", NO_LOANS.red().bold()));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

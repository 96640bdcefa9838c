use kiva_common::config::Config;

use crate::terminal::print;

pub fn info(cfg: &Config) {
    print::set_key_width(8);
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line("Endpoint", cfg.endpoint.as_str());
    print::aligned_line("Timeout", format!("{}s", cfg.timeout.as_secs()));
    print::aligned_line("Agent", cfg.user_agent.as_str());
    print::end_of_program(cfg.quiet);
}

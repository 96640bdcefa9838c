use std::time::Duration;

/// Endpoint that lists the newest fundraising loans, newest first.
pub const KIVA_NEWEST_LOANS_URL: &str = "https://api.kivaws.org/v1/loans/newest.json";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Config {
    /// URL the fetcher issues its single GET against.
    pub endpoint: String,
    /// Upper bound for the whole request, connect included.
    pub timeout: Duration,
    pub user_agent: String,
    /// Reduces terminal output. `1` drops headers, `2` prints only the summary.
    pub quiet: u8,
    /// Emit records as JSON instead of the terminal list.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: KIVA_NEWEST_LOANS_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("kiva-feed/{}", env!("CARGO_PKG_VERSION")),
            quiet: 0,
            json: false,
        }
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

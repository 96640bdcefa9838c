use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use kiva_common::config::Config;
use kiva_common::debug;
use kiva_common::error::FetchError;

use super::LoanSource;
use crate::parser::{self, LoanBatch};

/// Fetches listings with a single HTTP GET against a fixed endpoint.
pub struct HttpLoanSource {
    client: Client,
    endpoint: Url,
}

impl HttpLoanSource {
    pub fn new(cfg: &Config) -> Result<Self, FetchError> {
        let endpoint: Url = Url::parse(&cfg.endpoint)?;
        let client: Client = Client::builder()
            .timeout(cfg.timeout)
            .user_agent(cfg.user_agent.clone())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LoanSource for HttpLoanSource {
    async fn fetch_latest_loans(&self) -> Result<LoanBatch, FetchError> {
        debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        debug!("Received {} bytes", body.len());

        Ok(parser::parse(&body))
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

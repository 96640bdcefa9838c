//! The **port** through which the loan screen obtains listings.
//!
//! Screens depend on [`LoanSource`] only. The production adapter is
//! [`HttpLoanSource`], which talks to the Kiva API; tests plug in canned
//! sources.

use async_trait::async_trait;
use kiva_common::error::FetchError;

use crate::parser::LoanBatch;

mod http;

pub use http::HttpLoanSource;

#[async_trait]
pub trait LoanSource: Send + Sync {
    /// Issues one request and parses its body.
    ///
    /// Network level failures are returned as [`FetchError`] and the body is
    /// never parsed. A body that fails to decode is *not* an error here; it
    /// comes back as an empty batch with [`LoanBatch::decode_error`] set.
    async fn fetch_latest_loans(&self) -> Result<LoanBatch, FetchError>;
}

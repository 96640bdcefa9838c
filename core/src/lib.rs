//! # Kiva Core
//!
//! The fetch cycle of the loan screen.
//!
//! * **[`parser`]**: turns a response body into an ordered [`parser::LoanBatch`].
//! * **[`fetcher`]**: the [`fetcher::LoanSource`] port and its HTTP adapter.
//! * **[`screen`]**: owns the displayed list and applies fetch results to it.
//!
//! Data flows one way: activation → fetch (background task) → parse →
//! replace list → "data changed" notification on the owning task.

pub mod fetcher;
pub mod parser;
pub mod screen;

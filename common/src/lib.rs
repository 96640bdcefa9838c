//! # Kiva Common
//!
//! Shared vocabulary of the workspace: the loan domain model, the error
//! taxonomy of a fetch cycle, runtime configuration and the logging macros
//! used by every other crate.

pub mod config;
pub mod error;
pub mod loan;
pub mod log;

#[doc(hidden)]
pub use tracing;

//! # Loan Listing Model
//!
//! A [`LoanRecord`] is one published microloan listing as the display layer
//! sees it. It only exists fully populated: the parser builds it after all
//! four fields were extracted, so there is no partially filled record.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanRecord {
    /// Borrower display name.
    pub name: String,
    /// Requested amount in the API's currency unit. Not validated.
    pub amount: i64,
    /// Free-form description of what the loan is for.
    #[serde(rename = "use")]
    pub purpose: String,
    /// Borrower's country, taken from `location.country`.
    pub country: String,
}

impl LoanRecord {
    pub fn new(
        name: impl Into<String>,
        amount: i64,
        purpose: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            purpose: purpose.into(),
            country: country.into(),
        }
    }

    /// Amount as shown in a list cell, e.g. `$475`.
    pub fn display_amount(&self) -> String {
        format!("${}", self.amount)
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

//! Converts the body of the newest-loans endpoint into [`LoanRecord`]s.
//!
//! Decoding happens in two stages. The document is first checked for a
//! top-level `loans` array; any failure there is a [`DecodeError`] and yields
//! no records at all. Each element of the array is then decoded on its own
//! into a `Result<LoanRecord, ElementError>`, and the [`ParsePolicy`] decides
//! what a malformed element does to the whole batch.

use serde::Deserialize;
use serde_json::Value;

use kiva_common::error::{DecodeError, ElementError};
use kiva_common::loan::LoanRecord;
use kiva_common::warn;

/// What to do when one element of `loans` has the wrong shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Drop the element, remember it in [`LoanBatch::skipped`], keep going.
    #[default]
    SkipMalformed,
    /// Fail the whole batch with [`DecodeError::Element`].
    AbortOnMalformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLoan {
    /// Position inside the `loans` array.
    pub index: usize,
    pub reason: ElementError,
}

/// Result of parsing one response body.
///
/// `records` keeps the order of the `loans` array (the API lists newest
/// first; nothing is re-sorted).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoanBatch {
    pub records: Vec<LoanRecord>,
    pub skipped: Vec<SkippedLoan>,
    /// Set when the body could not be decoded at all. `records` is empty then.
    pub decode_error: Option<DecodeError>,
}

impl LoanBatch {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    fn failed(err: DecodeError) -> Self {
        Self {
            decode_error: Some(err),
            ..Default::default()
        }
    }
}

#[derive(Deserialize)]
struct RawLoan {
    name: String,
    loan_amount: i64,
    #[serde(rename = "use")]
    purpose: String,
    location: RawLocation,
}

#[derive(Deserialize)]
struct RawLocation {
    country: String,
}

impl From<RawLoan> for LoanRecord {
    fn from(raw: RawLoan) -> Self {
        Self {
            name: raw.name,
            amount: raw.loan_amount,
            purpose: raw.purpose,
            country: raw.location.country,
        }
    }
}

/// Parses a response body, never failing.
///
/// A body that cannot be decoded is logged and reported through
/// [`LoanBatch::decode_error`]; callers treat it as "no data".
pub fn parse(raw: &[u8]) -> LoanBatch {
    match decode(raw) {
        Ok(batch) => batch,
        Err(err) => {
            warn!("Discarding response body: {err}");
            LoanBatch::failed(err)
        }
    }
}

/// Typed decode with the default [`ParsePolicy::SkipMalformed`].
pub fn decode(raw: &[u8]) -> Result<LoanBatch, DecodeError> {
    decode_with(raw, ParsePolicy::default())
}

pub fn decode_with(raw: &[u8], policy: ParsePolicy) -> Result<LoanBatch, DecodeError> {
    let elements: Vec<Value> = loan_elements(raw)?;
    let mut batch: LoanBatch = LoanBatch {
        records: Vec::with_capacity(elements.len()),
        ..Default::default()
    };

    for (index, element) in elements.into_iter().enumerate() {
        match decode_element(element) {
            Ok(record) => batch.records.push(record),
            Err(reason) => match policy {
                ParsePolicy::SkipMalformed => {
                    warn!("Skipping loan #{index}: {reason}");
                    batch.skipped.push(SkippedLoan { index, reason });
                }
                ParsePolicy::AbortOnMalformed => {
                    return Err(DecodeError::Element { index, reason });
                }
            },
        }
    }

    Ok(batch)
}

/// Decodes a single element of the `loans` array.
pub fn decode_element(element: Value) -> Result<LoanRecord, ElementError> {
    let raw: RawLoan = serde_json::from_value(element)?;
    Ok(raw.into())
}

fn loan_elements(raw: &[u8]) -> Result<Vec<Value>, DecodeError> {
    let root: Value =
        serde_json::from_slice(raw).map_err(|e| DecodeError::Json(e.to_string()))?;

    let Value::Object(mut root) = root else {
        return Err(DecodeError::MissingLoans);
    };

    match root.remove("loans") {
        Some(Value::Array(elements)) => Ok(elements),
        Some(_) => Err(DecodeError::NotAnArray),
        None => Err(DecodeError::MissingLoans),
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

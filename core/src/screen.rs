//! # Loan Screen
//!
//! Owns the list of loans a display layer shows and runs the fetch cycle
//! that keeps it current.
//!
//! The fetch itself runs on a background tokio task. Its result travels back
//! over a oneshot channel and is applied by whoever owns the [`LoanScreen`],
//! so the list is only ever mutated on the owning task and never while the
//! display layer reads it. Only one fetch can be in flight per screen.

use std::sync::Arc;

use tokio::sync::oneshot;

use kiva_common::error::{DecodeError, FetchError};
use kiva_common::loan::LoanRecord;
use kiva_common::{debug, error, success, warn};

use crate::fetcher::LoanSource;
use crate::parser::LoanBatch;

type FetchResult = Result<LoanBatch, FetchError>;

/// The loans currently on screen.
///
/// The only mutation is [`replace_all`](LoanList::replace_all); entries are
/// never merged or appended across fetches.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoanList {
    records: Vec<LoanRecord>,
}

impl LoanList {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn record_at(&self, index: usize) -> Option<&LoanRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[LoanRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn replace_all(&mut self, records: Vec<LoanRecord>) {
        self.records = records;
    }
}

/// The display layer, as seen from the screen.
pub trait DisplaySink {
    /// Called after the list was replaced. Always the last step of a
    /// successful cycle.
    fn data_changed(&mut self, loans: &LoanList);

    /// Called when a fetch failed. The list has not been touched.
    fn fetch_failed(&mut self, _err: &FetchError) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Started,
    /// A fetch was already running; nothing new was issued.
    AlreadyInFlight,
}

/// What one fetch cycle did to the screen.
#[derive(Debug)]
pub enum CycleOutcome {
    Refreshed {
        count: usize,
        skipped: usize,
        decode_error: Option<DecodeError>,
    },
    Failed(FetchError),
}

impl CycleOutcome {
    pub fn is_refreshed(&self) -> bool {
        matches!(self, CycleOutcome::Refreshed { .. })
    }
}

pub struct LoanScreen<D: DisplaySink> {
    source: Arc<dyn LoanSource>,
    display: D,
    loans: LoanList,
    pending: Option<oneshot::Receiver<FetchResult>>,
}

impl<D: DisplaySink> LoanScreen<D> {
    pub fn new(source: Arc<dyn LoanSource>, display: D) -> Self {
        Self {
            source,
            display,
            loans: LoanList::default(),
            pending: None,
        }
    }

    pub fn loans(&self) -> &LoanList {
        &self.loans
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a fetch on a background task.
    ///
    /// Must be called from within a tokio runtime. Returns
    /// [`Activation::AlreadyInFlight`] without issuing a request if the
    /// previous fetch has not been settled yet.
    pub fn activate(&mut self) -> Activation {
        if self.pending.is_some() {
            debug!("Fetch already in flight, ignoring activation");
            return Activation::AlreadyInFlight;
        }
        self.pending = Some(self.spawn_fetch());
        Activation::Started
    }

    /// Waits for the in-flight fetch and applies its result.
    ///
    /// Returns `None` if nothing was in flight.
    pub async fn settle(&mut self) -> Option<CycleOutcome> {
        let rx = self.pending.take()?;
        Some(self.complete(rx).await)
    }

    /// One full cycle: activate, then settle. Joins a fetch that is already
    /// in flight instead of issuing a second one.
    pub async fn refresh(&mut self) -> CycleOutcome {
        let rx = match self.pending.take() {
            Some(rx) => rx,
            None => self.spawn_fetch(),
        };
        self.complete(rx).await
    }

    fn spawn_fetch(&self) -> oneshot::Receiver<FetchResult> {
        let (tx, rx) = oneshot::channel::<FetchResult>();
        let source: Arc<dyn LoanSource> = Arc::clone(&self.source);

        tokio::spawn(async move {
            let result: FetchResult = source.fetch_latest_loans().await;
            // The screen may have been dropped meanwhile.
            let _ = tx.send(result);
        });

        rx
    }

    async fn complete(&mut self, rx: oneshot::Receiver<FetchResult>) -> CycleOutcome {
        match rx.await {
            Ok(Ok(batch)) => self.apply(batch),
            Ok(Err(err)) => self.fail(err),
            Err(_) => self.fail(FetchError::Interrupted),
        }
    }

    fn apply(&mut self, batch: LoanBatch) -> CycleOutcome {
        let LoanBatch {
            records,
            skipped,
            decode_error,
        } = batch;

        let count: usize = records.len();
        self.loans.replace_all(records);

        if !skipped.is_empty() {
            warn!("{} malformed loans were skipped", skipped.len());
        }
        success!("Loaded {count} loans");

        self.display.data_changed(&self.loans);

        CycleOutcome::Refreshed {
            count,
            skipped: skipped.len(),
            decode_error,
        }
    }

    fn fail(&mut self, err: FetchError) -> CycleOutcome {
        error!("Fetching loans failed: {err}");
        self.display.fetch_failed(&err);
        CycleOutcome::Failed(err)
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

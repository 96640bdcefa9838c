//! Terminal rendition of the loan list.

use colored::*;

use kiva_common::error::FetchError;
use kiva_common::error;
use kiva_common::loan::LoanRecord;
use kiva_core::screen::{DisplaySink, LoanList};

use crate::kprint;
use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

pub struct TerminalDisplay {
    quiet: u8,
    json: bool,
}

impl TerminalDisplay {
    pub fn new(quiet: u8, json: bool) -> Self {
        Self { quiet, json }
    }
}

impl DisplaySink for TerminalDisplay {
    fn data_changed(&mut self, loans: &LoanList) {
        if self.json {
            print_json(loans.records());
            return;
        }

        if loans.is_empty() {
            print::header("zero loans listed", self.quiet);
            print::no_results();
            return;
        }

        if self.quiet > 1 {
            return;
        }

        print::header("newest loans", self.quiet);
        for idx in 0..loans.record_count() {
            if let Some(loan) = loans.record_at(idx) {
                print_loan_tree(loan, idx);
            }
            if idx + 1 != loans.record_count() {
                kprint!();
            }
        }
    }

    fn fetch_failed(&mut self, _err: &FetchError) {
        if !self.json {
            print::header("fetch failed", self.quiet);
        }
    }
}

fn print_json(records: &[LoanRecord]) {
    match serde_json::to_string_pretty(records) {
        Ok(json) => print::print(&json),
        Err(e) => error!("Failed to serialize loans: {e}"),
    }
}

fn print_loan_tree(loan: &LoanRecord, idx: usize) {
    print::tree(idx, &loan.name, loan_details(loan));
}

fn loan_details(loan: &LoanRecord) -> Vec<Detail> {
    vec![
        ("Country".to_string(), loan.country.color(colors::COUNTRY)),
        ("Use".to_string(), loan.purpose.color(colors::TEXT_DEFAULT)),
        ("Amount".to_string(), loan.display_amount().color(colors::AMOUNT).bold()),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

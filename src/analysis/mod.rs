//! Layout analysis for pagelint.
//!
//! This module ties the two detectors together into the per-page analysis
//! the reporting layer consumes:
//! - [`find_textline_crossings`]: text lines whose trace enters a region
//!   other than their assigned one
//! - [`find_duplicate_sentences`]: transcriptions repeated across the page
//!
//! Analysis is a pure function of one page's model — no I/O, no state
//! shared between pages — so callers are free to run pages in parallel and
//! to decide per page whether a malformed input is logged or skipped.

mod crossings;
mod duplicates;
mod findings;

pub use crossings::find_textline_crossings;
pub use duplicates::{find_duplicate_sentences, normalize_text};
pub use findings::{CrossingFinding, CrossingKind, DuplicateFinding};

use serde::Serialize;
use std::fmt;

use crate::page::Page;

/// The findings for one page.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PageAnalysis {
    /// Crossing findings, in page input order.
    pub crossings: Vec<CrossingFinding>,

    /// Duplicate findings, in input order of the duplicate lines.
    pub duplicates: Vec<DuplicateFinding>,
}

impl PageAnalysis {
    /// Returns the number of crossing findings.
    pub fn crossing_count(&self) -> usize {
        self.crossings.len()
    }

    /// Returns the number of duplicate findings.
    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }

    /// Returns true if the page produced no findings.
    pub fn is_clean(&self) -> bool {
        self.crossings.is_empty() && self.duplicates.is_empty()
    }
}

impl fmt::Display for PageAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "Layout check passed: no findings");
        }

        writeln!(
            f,
            "Layout check found {} crossing(s) and {} duplicate(s):",
            self.crossing_count(),
            self.duplicate_count()
        )?;
        writeln!(f)?;

        for crossing in &self.crossings {
            writeln!(f, "  [CROSSING ] {}", crossing)?;
        }
        for duplicate in &self.duplicates {
            writeln!(f, "  [DUPLICATE] {}", duplicate)?;
        }

        Ok(())
    }
}

/// Analyzes one page: runs both detectors over its regions and text lines.
///
/// Pure and deterministic — identical input yields identical finding lists
/// in identical order. Aggregation across pages is the caller's job.
pub fn analyze_page(page: &Page) -> PageAnalysis {
    PageAnalysis {
        crossings: find_textline_crossings(&page.regions, &page.textlines),
        duplicates: find_duplicate_sentences(&page.textlines),
    }
}

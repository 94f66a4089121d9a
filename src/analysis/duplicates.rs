//! Detection of duplicated transcribed sentences on a page.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::findings::DuplicateFinding;
use crate::page::{TextLine, TextLineId};

/// Lines whose trimmed raw text is shorter than this are never considered
/// duplicates: short tokens ("Hi", page numbers) repeat incidentally.
const MIN_TEXT_LEN: usize = 5;

/// Normalizes text for duplicate comparison: lowercases, strips every
/// character that is neither alphanumeric nor whitespace, collapses
/// whitespace runs to single spaces, and trims the ends.
///
/// Idempotent: `normalize_text(&normalize_text(s)) == normalize_text(s)`.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Finds text lines whose normalized transcription already occurred
/// earlier on the page.
///
/// For each group of lines sharing a normalized text, the first line in
/// input order is the original and every later one yields a finding
/// referencing it. Findings are emitted in input order of the duplicate
/// lines, not grouped by text.
///
/// Lines are skipped (never originals, never duplicates) when their trace
/// has fewer than 2 points, their text is absent, empty, whitespace-only,
/// or shorter than 5 characters after trimming, or their normalized form
/// is empty.
pub fn find_duplicate_sentences(textlines: &[TextLine]) -> Vec<DuplicateFinding> {
    let mut duplicates = Vec::new();

    // First line seen for each normalized text, in input order.
    let mut first_seen: HashMap<String, &TextLineId> = HashMap::new();

    for line in textlines {
        if line.trace.len() < 2 {
            continue;
        }

        let Some(text) = &line.text else {
            continue;
        };
        let trimmed = text.trim();
        if trimmed.chars().count() < MIN_TEXT_LEN {
            continue;
        }

        let normalized = normalize_text(trimmed);
        if normalized.is_empty() {
            continue;
        }

        match first_seen.entry(normalized) {
            Entry::Occupied(original) => {
                let Some(centroid) = line.trace_centroid() else {
                    continue;
                };
                duplicates.push(DuplicateFinding {
                    textline_id: line.id.clone(),
                    original_textline_id: (*original.get()).clone(),
                    text: text.clone(),
                    duplicate_point: centroid,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(&line.id);
            }
        }
    }

    duplicates
}

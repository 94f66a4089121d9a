use std::collections::HashSet;

use pagelint::analysis::{
    analyze_page, find_duplicate_sentences, find_textline_crossings, normalize_text,
};
use proptest::prelude::*;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn normalize_text_is_idempotent(s in "\\PC{0,64}") {
        let once = normalize_text(&s);
        let twice = normalize_text(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn normalized_text_is_canonical(s in "\\PC{0,64}") {
        let out = normalize_text(&s);
        prop_assert!(!out.starts_with(' '));
        prop_assert!(!out.ends_with(' '));
        prop_assert!(!out.contains("  "));
        prop_assert!(out.chars().all(|c| c.is_alphanumeric() || c == ' '));
        prop_assert!(!out.chars().any(char::is_uppercase));
    }

    #[test]
    fn analysis_is_deterministic(page in proptest_helpers::arb_page()) {
        let first = serde_json::to_value(analyze_page(&page)).expect("serialize analysis");
        let second = serde_json::to_value(analyze_page(&page)).expect("serialize analysis");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn crossings_never_repeat_a_foreign_region(page in proptest_helpers::arb_page()) {
        let findings = find_textline_crossings(&page.regions, &page.textlines);

        let mut seen = HashSet::new();
        for finding in &findings {
            prop_assert_ne!(&finding.crossed_region, &finding.assigned_region);
            prop_assert!(
                seen.insert((finding.textline_id.clone(), finding.crossed_region.clone())),
                "duplicate finding for line {} and region {}",
                finding.textline_id,
                finding.crossed_region
            );
        }
    }

    #[test]
    fn crossings_only_reference_page_elements(page in proptest_helpers::arb_page()) {
        let findings = find_textline_crossings(&page.regions, &page.textlines);

        for finding in &findings {
            prop_assert!(page.regions.iter().any(|r| r.id == finding.crossed_region));
            prop_assert!(page.regions.iter().any(|r| r.id == finding.assigned_region));
            prop_assert!(page.textlines.iter().any(|l| l.id == finding.textline_id));
        }
    }

    #[test]
    fn duplicates_reference_earlier_lines(page in proptest_helpers::arb_page()) {
        let findings = find_duplicate_sentences(&page.textlines);

        let index_of = |id: &pagelint::page::TextLineId| {
            page.textlines.iter().position(|l| &l.id == id)
        };
        for finding in &findings {
            let dup = index_of(&finding.textline_id).expect("duplicate line is on the page");
            let orig = index_of(&finding.original_textline_id).expect("original line is on the page");
            prop_assert!(orig < dup, "original must precede its duplicate in input order");
        }
    }
}

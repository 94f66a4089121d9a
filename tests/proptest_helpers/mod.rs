#![allow(dead_code)]

use pagelint::page::{Page, Point, Region, TextLine};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Integer-valued page-pixel points, like parsed markup produces.
pub fn arb_point() -> impl Strategy<Value = Point> {
    (0i32..400, 0i32..400).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
}

/// Short transcriptions with some punctuation, so normalized collisions
/// actually happen; `None` for untranscribed lines.
pub fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-d ,.!?]{0,16}")
}

/// Arbitrary pages, deliberately including degenerate geometry: polygons
/// with fewer than 3 vertices, traces with fewer than 2 points, dangling
/// and absent region assignments. The analysis engine must skip all of
/// these without failing.
pub fn arb_page() -> impl Strategy<Value = Page> {
    let regions = prop::collection::vec(prop::collection::vec(arb_point(), 0..8), 0..5);
    let lines = prop::collection::vec(
        (
            prop::option::of(0usize..6),
            prop::collection::vec(arb_point(), 0..5),
            arb_text(),
        ),
        0..8,
    );

    (regions, lines).prop_map(|(region_polys, line_specs)| {
        let regions: Vec<Region> = region_polys
            .into_iter()
            .enumerate()
            .map(|(i, points)| Region::new(format!("r{i}"), points))
            .collect();

        let textlines: Vec<TextLine> = line_specs
            .into_iter()
            .enumerate()
            .map(|(i, (region_idx, trace, text))| {
                let mut line = TextLine::new(format!("l{i}"), trace);
                if let Some(idx) = region_idx {
                    // Indexes past the region count yield dangling references.
                    line = line.with_region(format!("r{idx}"));
                }
                if let Some(text) = text {
                    line = line.with_text(text);
                }
                line
            })
            .collect();

        Page {
            name: None,
            width: 400,
            height: 400,
            regions,
            textlines,
        }
    })
}

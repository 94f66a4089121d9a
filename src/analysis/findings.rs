//! Finding types produced by the analysis engine.
//!
//! Findings reference page elements by ID only — they never own a `Region`
//! or `TextLine` — so the engine stays decoupled from how the page model is
//! stored or rendered. Each finding carries a point for placing a visual
//! marker and enough IDs for a legend or label.

use serde::Serialize;
use std::fmt;

use crate::page::{Point, RegionId, TextLineId};

/// How a crossing was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossingKind {
    /// A trace vertex lies inside the foreign region.
    Vertex,
    /// A trace segment intersects the foreign boundary and terminates
    /// inside it.
    Segment,
}

/// A text line whose trace enters a region other than its assigned one —
/// a signal of mis-segmentation.
///
/// The detector emits at most one of these per (text line, foreign region)
/// pair on a page.
#[derive(Clone, Debug, Serialize)]
pub struct CrossingFinding {
    /// The offending text line.
    pub textline_id: TextLineId,

    /// The region the line is filed under.
    pub assigned_region: RegionId,

    /// The region the line was found to cross into.
    pub crossed_region: RegionId,

    /// Where the trace enters the foreign region: the offending vertex, or
    /// the boundary intersection point.
    pub crossing_point: Point,

    /// How the crossing was detected.
    pub kind: CrossingKind,
}

impl fmt::Display for CrossingFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} (assigned to {}) crosses into {} at ({:.1}, {:.1})",
            self.textline_id,
            self.assigned_region,
            self.crossed_region,
            self.crossing_point.x,
            self.crossing_point.y
        )
    }
}

/// A text line whose transcription duplicates an earlier line on the same
/// page (after normalization).
///
/// A normalized-text group of size N yields N-1 of these, all referencing
/// the group's first line as the original.
#[derive(Clone, Debug, Serialize)]
pub struct DuplicateFinding {
    /// The duplicate text line.
    pub textline_id: TextLineId,

    /// The first line on the page with the same normalized text.
    pub original_textline_id: TextLineId,

    /// The duplicate line's raw (un-normalized) text.
    pub text: String,

    /// Centroid of the duplicate line's trace, for marker placement.
    pub duplicate_point: Point,
}

impl fmt::Display for DuplicateFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} duplicates line {}: \"{}\"",
            self.textline_id, self.original_textline_id, self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_display() {
        let finding = CrossingFinding {
            textline_id: TextLineId::new("l3"),
            assigned_region: RegionId::new("r1"),
            crossed_region: RegionId::new("r2"),
            crossing_point: Point::new(120.0, 45.5),
            kind: CrossingKind::Segment,
        };
        assert_eq!(
            finding.to_string(),
            "line l3 (assigned to r1) crosses into r2 at (120.0, 45.5)"
        );
    }

    #[test]
    fn test_duplicate_display() {
        let finding = DuplicateFinding {
            textline_id: TextLineId::new("l9"),
            original_textline_id: TextLineId::new("l2"),
            text: "Hello, World!".into(),
            duplicate_point: Point::new(50.0, 50.0),
        };
        assert_eq!(
            finding.to_string(),
            "line l9 duplicates line l2: \"Hello, World!\""
        );
    }

    #[test]
    fn test_crossing_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&CrossingKind::Vertex).unwrap(),
            "\"vertex\""
        );
        assert_eq!(
            serde_json::to_string(&CrossingKind::Segment).unwrap(),
            "\"segment\""
        );
    }
}

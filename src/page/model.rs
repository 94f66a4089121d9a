//! Core page model for pagelint.
//!
//! This module defines the canonical representation of one page's layout:
//! polygonal text regions and the text lines filed under them. Upstream
//! parsers produce this model, and the analysis engine consumes it.

use serde::{Deserialize, Serialize};

use super::ids::{RegionId, TextLineId};

/// A 2D point in page-pixel coordinates.
///
/// (0, 0) is the top-left corner of the page image. Coordinates are stored
/// as `f64` so intersection points can be represented exactly as computed;
/// parsed input is typically integer-valued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given x and y values.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A closed polygonal boundary, described by its ordered vertices.
///
/// The closing edge from the last vertex back to the first is implicit.
/// Fewer than 3 vertices is degenerate; such polygons can be represented
/// (construction is permissive, as with the rest of the model) but the
/// analysis engine never treats them as crossing targets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns true if the polygon has fewer than 3 vertices.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }
}

/// A text region on a page: a labeled polygonal area corresponding to a
/// structural element (paragraph block, marginalia, header, ...).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Region {
    /// Unique identifier for this region within its page.
    pub id: RegionId,

    /// Optional semantic label (e.g. "paragraph", "marginalia").
    /// Absent for unclassified regions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The region's boundary.
    pub polygon: Polygon,
}

impl Region {
    /// Creates a new unlabeled region.
    pub fn new(id: impl Into<RegionId>, points: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            label: None,
            polygon: Polygon::new(points),
        }
    }

    /// Sets the semantic label for this region.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A single line of transcribed text with its own geometric trace.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextLine {
    /// Unique identifier for this text line within its page.
    pub id: TextLineId,

    /// The region this line is administratively assigned to. May be absent
    /// when the source markup carries no (or a broken) assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<RegionId>,

    /// The line's physical path on the page (baseline or outline), as an
    /// ordered polyline. Fewer than 2 points is degenerate and excluded
    /// from analysis.
    pub trace: Vec<Point>,

    /// Optional transcribed text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl TextLine {
    /// Creates a new text line with no region assignment and no text.
    pub fn new(id: impl Into<TextLineId>, trace: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            region_id: None,
            trace,
            text: None,
        }
    }

    /// Sets the assigned region for this line.
    pub fn with_region(mut self, region_id: impl Into<RegionId>) -> Self {
        self.region_id = Some(region_id.into());
        self
    }

    /// Sets the transcribed text for this line.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Arithmetic-mean centroid of the trace, or `None` for an empty trace.
    pub fn trace_centroid(&self) -> Option<Point> {
        if self.trace.is_empty() {
            return None;
        }
        let n = self.trace.len() as f64;
        let sum_x: f64 = self.trace.iter().map(|p| p.x).sum();
        let sum_y: f64 = self.trace.iter().map(|p| p.y).sum();
        Some(Point::new(sum_x / n, sum_y / n))
    }
}

/// One page's parsed layout: the unit of analysis.
///
/// Regions and text lines are scoped to exactly one page; nothing in the
/// model refers across pages.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Page {
    /// Optional page name (usually the source file stem).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Page image width in pixels.
    #[serde(default)]
    pub width: u32,

    /// Page image height in pixels.
    #[serde(default)]
    pub height: u32,

    /// All text regions on the page, in source order.
    pub regions: Vec<Region>,

    /// All text lines on the page, in source order.
    pub textlines: Vec<TextLine>,
}

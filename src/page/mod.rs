//! Page model for pagelint.
//!
//! This module defines the canonical representation of a digitized page's
//! layout as produced by a structural-markup pipeline: polygonal text
//! [`Region`]s and [`TextLine`]s with geometric traces and transcriptions.
//! The analysis engine consumes this model and never touches the source
//! markup itself.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: Region and text line IDs are distinct newtypes so
//!    they cannot be mixed up.
//!
//! 2. **Permissive Construction**: "invalid" data (degenerate polygons,
//!    dangling region assignments, empty traces) is representable. The
//!    analysis layer skips such entities rather than failing the page.
//!
//! # Example
//!
//! ```
//! use pagelint::page::{Page, Point, Region, TextLine};
//!
//! let page = Page {
//!     regions: vec![Region::new(
//!         "r1",
//!         vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 50.0)],
//!     )],
//!     textlines: vec![
//!         TextLine::new("l1", vec![Point::new(10.0, 20.0), Point::new(90.0, 20.0)])
//!             .with_region("r1")
//!             .with_text("a line of transcription"),
//!     ],
//!     ..Default::default()
//! };
//! ```

mod ids;
pub mod io_json;
mod model;

// Re-export core types for convenient access
pub use ids::{RegionId, TextLineId};
pub use model::{Page, Point, Polygon, Region, TextLine};

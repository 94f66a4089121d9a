//! JSON serialization for the pagelint page model.
//!
//! This provides a simple JSON format for reading and writing pages.
//! Upstream PageXML (or other markup) extraction lives outside this crate;
//! its output is exchanged as page JSON. Also useful for:
//! - Testing the analysis engine without a markup parser
//! - Debugging by inspecting exactly what the engine sees

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::model::Page;
use crate::error::PagelintError;

/// Reads a page from a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_page_json(path: &Path) -> Result<Page, PagelintError> {
    let file = File::open(path).map_err(PagelintError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| PagelintError::PageJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a page to a JSON file.
///
/// # Arguments
/// * `path` - Path to the output file
/// * `page` - The page to write
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_page_json(path: &Path, page: &Page) -> Result<(), PagelintError> {
    let file = File::create(path).map_err(PagelintError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, page).map_err(|source| PagelintError::PageJsonWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a page from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_json_str(json: &str) -> Result<Page, serde_json::Error> {
    serde_json::from_str(json)
}

/// Writes a page to a JSON string.
///
/// Useful for testing without file I/O.
pub fn to_json_string(page: &Page) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Point, Region, TextLine};

    fn sample_page() -> Page {
        Page {
            name: Some("scan_0001".into()),
            width: 2000,
            height: 3000,
            regions: vec![
                Region::new(
                    "r1",
                    vec![
                        Point::new(0.0, 0.0),
                        Point::new(1000.0, 0.0),
                        Point::new(1000.0, 500.0),
                        Point::new(0.0, 500.0),
                    ],
                )
                .with_label("paragraph"),
                Region::new(
                    "r2",
                    vec![
                        Point::new(0.0, 600.0),
                        Point::new(1000.0, 600.0),
                        Point::new(1000.0, 1100.0),
                    ],
                ),
            ],
            textlines: vec![
                TextLine::new("l1", vec![Point::new(10.0, 100.0), Point::new(990.0, 100.0)])
                    .with_region("r1")
                    .with_text("In the margin of the ledger"),
                TextLine::new("l2", vec![Point::new(10.0, 700.0), Point::new(990.0, 700.0)])
                    .with_region("r2"),
            ],
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let original = sample_page();

        let json = to_json_string(&original).expect("serialization failed");
        let restored: Page = from_json_str(&json).expect("deserialization failed");

        assert_eq!(original.regions.len(), restored.regions.len());
        assert_eq!(original.textlines.len(), restored.textlines.len());

        assert_eq!(restored.name, Some("scan_0001".into()));
        assert_eq!(restored.regions[0].label.as_deref(), Some("paragraph"));
        assert_eq!(restored.regions[1].label, None);
        assert_eq!(
            restored.textlines[0].text.as_deref(),
            Some("In the margin of the ledger")
        );
        assert_eq!(restored.textlines[1].text, None);
        assert_eq!(restored.regions[0].polygon.points.len(), 4);
    }

    #[test]
    fn test_json_format() {
        let page = sample_page();
        let json = to_json_string(&page).expect("serialization failed");

        assert!(json.contains("\"regions\""));
        assert!(json.contains("\"textlines\""));
        assert!(json.contains("\"scan_0001\""));
        // Absent optional fields are omitted, not serialized as null.
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("page.json");

        let original = sample_page();
        write_page_json(&path, &original).expect("write failed");
        let restored = read_page_json(&path).expect("read failed");

        assert_eq!(original.regions.len(), restored.regions.len());
        assert_eq!(original.textlines[0].id, restored.textlines[0].id);
    }
}

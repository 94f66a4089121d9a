//! Newtype IDs for type-safe identification of page elements.
//!
//! Using newtypes prevents accidentally mixing up different kinds of IDs
//! (e.g., passing a region ID where a text line ID is expected). Source
//! markup assigns opaque string identifiers, so the inner type is `String`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a region on a page.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub String);

impl RegionId {
    /// Creates a new RegionId.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionId({})", self.0)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        RegionId::new(id)
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        RegionId(id)
    }
}

/// A unique identifier for a text line on a page.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextLineId(pub String);

impl TextLineId {
    /// Creates a new TextLineId.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TextLineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextLineId({})", self.0)
    }
}

impl fmt::Display for TextLineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TextLineId {
    fn from(id: &str) -> Self {
        TextLineId::new(id)
    }
}

impl From<String> for TextLineId {
    fn from(id: String) -> Self {
        TextLineId(id)
    }
}

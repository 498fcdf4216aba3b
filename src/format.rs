//! Format tags naming data representations.
//!
//! This module provides [`FormatTag`], the opaque identifier used to label
//! the source and target representation of every conversion (e.g. `"json"`,
//! `"xml"`). The dispatcher fixes no enumeration of formats: any tag value is
//! valid, and equality is the only operation resolution relies on.
//!
//! # Examples
//!
//! ```
//! use convroute::FormatTag;
//!
//! let json = FormatTag::new("json");
//! assert_eq!(json, FormatTag::from("json"));
//! assert_eq!(json.as_str(), "json");
//! assert_eq!(json.to_string(), "json");
//! ```

use serde::{Deserialize, Serialize};

/// Opaque identifier naming a data representation.
///
/// Tags are compared verbatim: no case folding, no trimming, no aliasing.
/// `"JSON"` and `"json"` are two different formats.
///
/// # Examples
///
/// ```
/// use convroute::FormatTag;
///
/// let a = FormatTag::new("csv");
/// let b: FormatTag = "csv".into();
/// assert_eq!(a, b);
/// assert_ne!(a, FormatTag::new("CSV"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatTag(String);

impl FormatTag {
    /// Create a new format tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        FormatTag(tag.into())
    }

    /// View the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FormatTag {
    fn from(tag: &str) -> Self {
        FormatTag(tag.to_string())
    }
}

impl From<String> for FormatTag {
    fn from(tag: String) -> Self {
        FormatTag(tag)
    }
}

impl From<&FormatTag> for FormatTag {
    fn from(tag: &FormatTag) -> Self {
        tag.clone()
    }
}

impl PartialEq<str> for FormatTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FormatTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

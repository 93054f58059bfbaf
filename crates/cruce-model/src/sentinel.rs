//! In-band sentinel tokens used by the extraction collaborator.
//!
//! The extractor never omits a text field; when it cannot produce a value it
//! substitutes a literal token instead. Numeric absence is encoded as zero
//! and handled directly by the rules.

use std::fmt;

/// Tokens the extractor substitutes for missing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// The field was not found in the document.
    NotFound,
    /// A plate photo could not be deciphered. Plate readings only.
    NotLegible,
}

impl Sentinel {
    /// Returns the wire token for this sentinel.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentinel::NotFound => "NO_ENCONTRADO",
            Sentinel::NotLegible => "NO_LEGIBLE",
        }
    }

    /// Classifies a raw field value. Returns `None` for genuine content,
    /// including blank strings.
    pub fn of(value: &str) -> Option<Self> {
        match value {
            "NO_ENCONTRADO" => Some(Sentinel::NotFound),
            "NO_LEGIBLE" => Some(Sentinel::NotLegible),
            _ => None,
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when a raw text field carries no usable content, meaning it is
/// blank, whitespace-only, or a sentinel token.
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || Sentinel::of(trimmed).is_some()
}

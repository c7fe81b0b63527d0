//! Media type value used as the codec registry key.
//!
//! # Design Decisions
//! - Normalized to lowercase at construction (media types are
//!   case-insensitive per RFC 9110)
//! - Header parameters (`; charset=utf-8`) are stripped on parse; equality
//!   and registry lookup consider only `type/subtype`

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a string is not a valid `type/subtype` media type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid media type: {0:?}")]
pub struct InvalidMediaType(pub String);

/// A media type identifying a codec, e.g. `application/json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    kind: String,
    subtype: String,
}

impl MediaType {
    /// Create a media type from its two components.
    /// Both components are lowercased.
    pub fn new(kind: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            kind: kind.into().to_lowercase(),
            subtype: subtype.into().to_lowercase(),
        }
    }

    /// `application/json`
    pub fn json() -> Self {
        Self::new("application", "json")
    }

    /// `text/plain`
    pub fn plain_text() -> Self {
        Self::new("text", "plain")
    }

    /// `application/octet-stream`
    pub fn octet_stream() -> Self {
        Self::new("application", "octet-stream")
    }

    /// The top-level type, e.g. `application`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The subtype, e.g. `json`.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.subtype)
    }
}

impl FromStr for MediaType {
    type Err = InvalidMediaType;

    /// Parse a content-type header value. Parameters after `;` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let essence = s.split(';').next().unwrap_or("").trim();
        let (kind, subtype) = essence
            .split_once('/')
            .ok_or_else(|| InvalidMediaType(s.to_string()))?;
        if kind.is_empty() || subtype.is_empty() || subtype.contains('/') {
            return Err(InvalidMediaType(s.to_string()));
        }
        Ok(Self::new(kind, subtype))
    }
}

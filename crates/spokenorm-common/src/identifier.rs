//! Identifier values: CURIEs as they arrive, SPOKE identifiers as they leave.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::SpokeLabel;
use crate::error::{NormError, Result};

/// A compact URI, e.g. "DOID:0111771", or a bare code such as "CHEMBL25"
/// or "5594". Opaque apart from what a pattern match extracts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curie(String);

impl Curie {
    pub fn new(curie: impl Into<String>) -> Self {
        Self(curie.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Namespace before the first ':', if any. "DOID:0111771" → "DOID".
    pub fn prefix(&self) -> Option<&str> {
        self.0.split_once(':').map(|(p, _)| p)
    }

    /// Part after the first ':', or the whole string for bare codes.
    pub fn local_id(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(_, local)| local)
    }
}

impl From<&str> for Curie {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Curie {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// SPOKE stores gene identifiers as integers.
impl From<u64> for Curie {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl AsRef<str> for Curie {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Curie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An identifier in SPOKE's own representation.
/// Gene identifiers are integers; every other label uses strings.
/// `Int` holds a `u64`: a gene id above `u64::MAX` is reported as
/// `MalformedIdentifier` rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpokeIdentifier {
    Int(u64),
    Str(String),
}

impl SpokeIdentifier {
    /// Convert a CURIE already in SPOKE format to its stored representation.
    pub fn native(label: SpokeLabel, curie: &Curie) -> Result<Self> {
        match label {
            SpokeLabel::Gene => parse_gene_id(curie.as_str(), curie.as_str()),
            _ => Ok(SpokeIdentifier::Str(curie.as_str().to_string())),
        }
    }

    pub fn as_int(&self) -> Option<u64> {
        match self {
            SpokeIdentifier::Int(n) => Some(*n),
            SpokeIdentifier::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SpokeIdentifier::Int(_) => None,
            SpokeIdentifier::Str(s) => Some(s),
        }
    }
}

/// Parse the digits of a gene id. `original` is reported on failure.
pub fn parse_gene_id(digits: &str, original: &str) -> Result<SpokeIdentifier> {
    digits
        .parse::<u64>()
        .map(SpokeIdentifier::Int)
        .map_err(|e| NormError::MalformedIdentifier {
            curie: original.to_string(),
            reason: format!("gene id is not an integer: {e}"),
        })
}

impl fmt::Display for SpokeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpokeIdentifier::Int(n) => write!(f, "{n}"),
            SpokeIdentifier::Str(s) => f.write_str(s),
        }
    }
}

impl From<SpokeIdentifier> for Curie {
    fn from(id: SpokeIdentifier) -> Self {
        Curie(id.to_string())
    }
}

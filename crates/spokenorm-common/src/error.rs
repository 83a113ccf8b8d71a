use thiserror::Error;

use crate::entities::{BiolinkCategory, SpokeLabel};

#[derive(Debug, Error)]
pub enum NormError {
    /// No result-direction formatter is registered for the label.
    #[error("Could not find a SPOKE identifier formatter for label {0}")]
    UnsupportedType(SpokeLabel),

    /// A formatter exists but no equivalent identifier satisfied its pattern.
    #[error("Specified search CURIE {searched} could not be mapped to SPOKE {label}")]
    UnmatchedIdentifier { label: SpokeLabel, searched: String },

    /// A candidate matched its pattern but could not be converted.
    #[error("Malformed identifier {curie}: {reason}")]
    MalformedIdentifier { curie: String, reason: String },

    /// Checked search formatting only: the category has rules, none matched.
    #[error("No search formatter for {category} matched {curie}")]
    NoSearchRule { category: BiolinkCategory, curie: String },

    #[error("Node normalizer error: {0}")]
    Normalizer(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown SPOKE label: {0}")]
    UnknownLabel(String),

    #[error("Unknown biolink category: {0}")]
    UnknownCategory(String),

    /// Query node projection found no value for the named field.
    #[error("Query node has no {0}")]
    EmptyQueryNode(&'static str),
}

impl NormError {
    /// Wrap a failure reported by the node normalizer client.
    pub fn normalizer<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        NormError::Normalizer(err.into())
    }

    /// True for the "not implemented for this type" condition.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, NormError::UnsupportedType(_))
    }

    /// True for the "normalization failed to resolve" condition.
    pub fn is_unmatched(&self) -> bool {
        matches!(self, NormError::UnmatchedIdentifier { .. })
    }

    /// The CURIE originally searched, for unmatched-identifier failures.
    pub fn searched_curie(&self) -> Option<&str> {
        match self {
            NormError::UnmatchedIdentifier { searched, .. } => Some(searched.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NormError>;

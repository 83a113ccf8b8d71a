//! spokenorm-common: shared types and errors used across all spokenorm crates.

pub mod error;
pub mod entities;
pub mod identifier;
pub mod models;

// Re-export commonly used types
pub use entities::{BiolinkCategory, SpokeLabel};
pub use error::{NormError, Result};
pub use identifier::{Curie, SpokeIdentifier};
pub use models::{EquivalentIdentifier, NormalizationResponse, NormalizedNode, QNode, SearchNode};

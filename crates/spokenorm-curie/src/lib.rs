//! spokenorm-curie: CURIE translation between SPOKE and the SRI node normalizer.
//!
//! - Search direction: SPOKE identifier → CURIE the normalizer understands
//! - Result direction: normalizer equivalent identifiers → SPOKE identifier
//! - Acceptability: is an identifier already in SPOKE format?
//!
//! The built-in tables are constructed once per process on first use and
//! are read-only afterwards.

pub mod acceptability;
pub mod config;
pub mod consistency;
pub mod patterns;
pub mod resolver;
pub mod search;
pub mod spoke;
pub mod telemetry;

use std::sync::OnceLock;

use spokenorm_common::{BiolinkCategory, Curie, NormalizedNode, Result, SpokeIdentifier, SpokeLabel};

pub use acceptability::AcceptabilityTable;
pub use config::Config;
pub use resolver::{CurieResolver, NodeNormalizer};
pub use search::SearchRegistry;
pub use spoke::SpokeRegistry;

pub fn search_registry() -> &'static SearchRegistry {
    static REGISTRY: OnceLock<SearchRegistry> = OnceLock::new();
    REGISTRY.get_or_init(SearchRegistry::builtin)
}

pub fn spoke_registry() -> &'static SpokeRegistry {
    static REGISTRY: OnceLock<SpokeRegistry> = OnceLock::new();
    REGISTRY.get_or_init(SpokeRegistry::builtin)
}

pub fn acceptability_table() -> &'static AcceptabilityTable {
    static TABLE: OnceLock<AcceptabilityTable> = OnceLock::new();
    TABLE.get_or_init(AcceptabilityTable::builtin)
}

/// Format a SPOKE CURIE for a node normalizer query. Never fails; see
/// [`SearchRegistry::format_for_search`].
pub fn format_for_search(category: BiolinkCategory, curie: &Curie) -> Curie {
    search_registry().format_for_search(category, curie)
}

/// Pick the SPOKE identifier for `label` out of a normalized node.
pub fn get_internal_identifier(
    label: SpokeLabel,
    node: &NormalizedNode,
    searched: &Curie,
) -> Result<SpokeIdentifier> {
    spoke_registry().get_internal_identifier(label, node, searched)
}

pub fn is_already_acceptable(label: SpokeLabel, curie: &Curie) -> bool {
    acceptability_table().is_already_acceptable(label, curie)
}

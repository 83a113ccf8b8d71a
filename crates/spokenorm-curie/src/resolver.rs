//! End-to-end resolution of a query CURIE to a SPOKE identifier.
//!
//! The node normalizer itself is reached through [`NodeNormalizer`]; this
//! crate performs no network I/O, retries or caching.

use async_trait::async_trait;
use spokenorm_common::{Curie, NormError, NormalizedNode, QNode, Result, SearchNode, SpokeIdentifier, SpokeLabel};
use tracing::{debug, instrument};

use crate::config::ResolverConfig;
use crate::{acceptability_table, search_registry, spoke_registry};

/// Client for an external node normalization service.
#[async_trait]
pub trait NodeNormalizer: Send + Sync {
    /// Normalized node for `curie`, or `None` if the service does not know it.
    async fn normalize(&self, curie: &Curie) -> Result<Option<NormalizedNode>>;
}

/// Resolves query CURIEs to SPOKE identifiers using the process-wide
/// translation tables and a [`NodeNormalizer`].
pub struct CurieResolver<N> {
    normalizer: N,
    config: ResolverConfig,
}

impl<N: NodeNormalizer> CurieResolver<N> {
    pub fn new(normalizer: N, config: ResolverConfig) -> Self {
        Self { normalizer, config }
    }

    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }

    /// Resolve `node.curie` to the identifier SPOKE stores for `label`.
    #[instrument(skip(self, node), fields(category = ?node.category, curie = %node.curie))]
    pub async fn resolve(&self, label: SpokeLabel, node: &SearchNode) -> Result<SpokeIdentifier> {
        if self.config.skip_acceptable && acceptability_table().is_already_acceptable(label, &node.curie) {
            debug!(%label, "already in SPOKE format");
            return SpokeIdentifier::native(label, &node.curie);
        }

        let spoke = spoke_registry();
        if !spoke.supports(label) {
            return Err(NormError::UnsupportedType(label));
        }

        let search_curie = search_registry().format_search_node(node);
        if !label.supported_by_node_normalizer() {
            debug!(%label, "node normalizer does not cover this label, expect no match");
        }
        debug!(%label, search_curie = %search_curie, "querying node normalizer");

        let normalized = self
            .normalizer
            .normalize(&search_curie)
            .await?
            .ok_or_else(|| NormError::UnmatchedIdentifier {
                label,
                searched: node.curie.to_string(),
            })?;

        spoke.get_internal_identifier(label, &normalized, &node.curie)
    }

    /// Project a query node to its first category and id, then resolve it.
    pub async fn resolve_qnode(&self, label: SpokeLabel, qnode: &QNode) -> Result<SpokeIdentifier> {
        let node = SearchNode::try_from(qnode)?;
        self.resolve(label, &node).await
    }
}

//! Inputs to the translator: query nodes and node normalizer responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::BiolinkCategory;
use crate::error::{NormError, Result};
use crate::identifier::Curie;

/// The minimal input to search-direction translation.
///
/// `category` is `None` when the query named a biolink class outside
/// [`BiolinkCategory`]; no search formatter applies to such a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchNode {
    pub category: Option<BiolinkCategory>,
    pub curie: Curie,
}

impl SearchNode {
    pub fn new(category: BiolinkCategory, curie: impl Into<Curie>) -> Self {
        Self { category: Some(category), curie: curie.into() }
    }

    pub fn uncategorized(curie: impl Into<Curie>) -> Self {
        Self { category: None, curie: curie.into() }
    }
}

/// A TRAPI query node, reduced to the fields the translator reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QNode {
    #[serde(default)]
    pub ids: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Projects a query node to its first category and first id.
/// Multi-valued nodes collapse to the first element; later values are ignored.
/// A first category outside [`BiolinkCategory`] (e.g. "biolink:SmallMolecule")
/// projects to an uncategorized node rather than an error.
impl TryFrom<&QNode> for SearchNode {
    type Error = NormError;

    fn try_from(qnode: &QNode) -> Result<Self> {
        let category = qnode
            .categories
            .first()
            .ok_or(NormError::EmptyQueryNode("categories"))?
            .parse::<BiolinkCategory>()
            .ok();
        let curie = qnode.ids.first().ok_or(NormError::EmptyQueryNode("ids"))?;
        Ok(SearchNode { category, curie: Curie::from(curie.as_str()) })
    }
}

/// One entry of a normalized node's `equivalent_identifiers` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalentIdentifier {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// The node normalizer's answer for a single queried CURIE.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EquivalentIdentifier>,
    #[serde(default)]
    pub equivalent_identifiers: Vec<EquivalentIdentifier>,
    #[serde(default, rename = "type")]
    pub types: Vec<String>,
}

impl NormalizedNode {
    /// Identifier strings in response order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.equivalent_identifiers.iter().map(|e| e.identifier.as_str())
    }
}

/// Full normalizer payload: queried CURIE → node, or null when unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizationResponse(pub HashMap<String, Option<NormalizedNode>>);

impl NormalizationResponse {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The node returned for `curie`, if the service resolved it.
    pub fn node(&self, curie: &Curie) -> Option<&NormalizedNode> {
        self.0.get(curie.as_str()).and_then(Option::as_ref)
    }

}

//! Formatting SPOKE identifiers for search against the node normalizer.
//!
//! Each biolink category holds an ordered list of (pattern, transform)
//! rules. The first rule whose pattern matches the start of the CURIE is
//! applied. Categories with no rules, and CURIEs no rule matches, pass
//! through unchanged: many categories are unknown to the normalizer and
//! must be sent as-is.
//!
//! Known gap: because an unmatched CURIE passes through silently, a
//! malformed identifier for a category that does have rules is not
//! detected here. Use [`SearchRegistry::try_format_for_search`] when that
//! case must be caught.

use std::collections::HashMap;

use spokenorm_common::{BiolinkCategory, Curie, NormError, QNode, Result, SearchNode};
use tracing::{debug, trace};

use crate::patterns::{self, Pattern};

pub type SearchTransform = fn(&Curie) -> Curie;

pub struct SearchRule {
    pattern: Pattern,
    transform: SearchTransform,
}

impl SearchRule {
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn apply(&self, curie: &Curie) -> Curie {
        (self.transform)(curie)
    }
}

/// Ordered search rules per category.
#[derive(Default)]
pub struct SearchRegistry {
    rules: HashMap<BiolinkCategory, Vec<SearchRule>>,
}

impl SearchRegistry {
    /// An empty registry; every category passes through.
    pub fn new() -> Self {
        Self::default()
    }

    /// The formatters used against the SRI node normalizer.
    pub fn builtin() -> Self {
        let mut reg = Self::new();
        reg.register_builtin(BiolinkCategory::ChemicalSubstance, "^CHEMBL[0-9]+", format_chembl);
        reg.register_builtin(BiolinkCategory::ChemicalSubstance, "^DB[0-9]+", format_drugbank);
        reg.register_builtin(BiolinkCategory::Gene, patterns::SPOKE_GENE, format_ncbigene);
        reg.register_builtin(BiolinkCategory::PhenotypicFeature, patterns::SPOKE_SYMPTOM, format_mesh);
        reg.register_builtin(BiolinkCategory::Protein, patterns::SPOKE_PROTEIN, format_uniprot);
        reg
    }

    fn register_builtin(&mut self, category: BiolinkCategory, pattern: &'static str, transform: SearchTransform) {
        self.insert(category, Pattern::builtin(pattern), transform);
    }

    /// Add a rule after the category's existing rules.
    ///
    /// Registering a pattern already present for the category replaces its
    /// transform and keeps its original position.
    pub fn register(
        &mut self,
        category: BiolinkCategory,
        pattern: &str,
        transform: SearchTransform,
    ) -> Result<()> {
        let pattern = Pattern::new(pattern)?;
        self.insert(category, pattern, transform);
        Ok(())
    }

    fn insert(&mut self, category: BiolinkCategory, pattern: Pattern, transform: SearchTransform) {
        let rules = self.rules.entry(category).or_default();
        match rules.iter_mut().find(|r| r.pattern.as_str() == pattern.as_str()) {
            Some(existing) => existing.transform = transform,
            None => rules.push(SearchRule { pattern, transform }),
        }
    }

    /// Rules for a category in match-priority order.
    pub fn rules_for(&self, category: BiolinkCategory) -> &[SearchRule] {
        self.rules.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    fn matching_rule(&self, category: BiolinkCategory, curie: &Curie) -> Option<&SearchRule> {
        self.rules_for(category)
            .iter()
            .find(|r| r.pattern.matches_start(curie.as_str()))
    }

    /// Reformat `curie` for a node normalizer query.
    pub fn format_for_search(&self, category: BiolinkCategory, curie: &Curie) -> Curie {
        if self.rules_for(category).is_empty() {
            trace!(%category, %curie, "no search formatters for category");
            return curie.clone();
        }
        match self.matching_rule(category, curie) {
            Some(rule) => {
                let formatted = rule.apply(curie);
                trace!(%category, %curie, %formatted, pattern = rule.pattern.as_str(), "formatted for search");
                formatted
            }
            None => {
                debug!(%category, %curie, "no search formatter matched, passing through");
                curie.clone()
            }
        }
    }

    /// Like [`Self::format_for_search`], but a category with rules that
    /// all fail to match is an error instead of a pass-through.
    pub fn try_format_for_search(&self, category: BiolinkCategory, curie: &Curie) -> Result<Curie> {
        if self.rules_for(category).is_empty() {
            return Ok(curie.clone());
        }
        self.matching_rule(category, curie)
            .map(|rule| rule.apply(curie))
            .ok_or_else(|| NormError::NoSearchRule {
                category,
                curie: curie.to_string(),
            })
    }

    /// An uncategorized node has no formatters and passes through.
    pub fn format_search_node(&self, node: &SearchNode) -> Curie {
        match node.category {
            Some(category) => self.format_for_search(category, &node.curie),
            None => {
                trace!(curie = %node.curie, "uncategorized search node");
                node.curie.clone()
            }
        }
    }

    /// Projects the query node to its first category and first id, then
    /// formats it.
    pub fn format_qnode(&self, qnode: &QNode) -> Result<Curie> {
        let node = SearchNode::try_from(qnode)?;
        Ok(self.format_search_node(&node))
    }
}

// ── Built-in formatters ──────────────────────────────────────────────────────

fn format_chembl(curie: &Curie) -> Curie {
    Curie::new(format!("CHEMBL.COMPOUND:{curie}"))
}

fn format_drugbank(curie: &Curie) -> Curie {
    Curie::new(format!("DRUGBANK:{curie}"))
}

fn format_ncbigene(curie: &Curie) -> Curie {
    Curie::new(format!("NCBIGene:{curie}"))
}

fn format_mesh(curie: &Curie) -> Curie {
    Curie::new(format!("MESH:{curie}"))
}

fn format_uniprot(curie: &Curie) -> Curie {
    Curie::new(format!("UniProtKB:{curie}"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Translating node normalizer results back to SPOKE identifiers.
//!
//! Each SPOKE label has at most one (pattern, transform) rule. The
//! normalizer's `equivalent_identifiers` are scanned in response order and
//! the first identifier matching the pattern is transformed and returned.
//!
//! | label              | accepts                      | yields                      |
//! |--------------------|------------------------------|-----------------------------|
//! | Anatomy            | `UBERON:1234567`             | same string                 |
//! | BiologicalProcess  | `GO:1234567`                 | same string                 |
//! | CellType           | `CL:1234567`                 | same string                 |
//! | CellularComponent  | `GO:1234567`                 | same string                 |
//! | Compound           | `CHEMBL.COMPOUND:…`, `DRUGBANK:…` | string, prefix removed |
//! | Disease            | `DOID:…`                     | same string                 |
//! | Food               | `FOOD12345`                  | same string                 |
//! | Gene               | `NCBIGene:…`                 | integer, prefix removed     |
//! | MolecularFunction  | `GO:1234567`                 | same string                 |
//! | Nutrient           | `FDBN12345`                  | same string                 |
//! | Pathway            | `WP…_r…`                     | same string                 |
//! | PharmacologicClass | `N1234567890`                | same string                 |
//! | Protein            | `UniProtKB:…`                | string, prefix removed      |
//! | SideEffect         | `C1234567`                   | same string                 |
//! | Symptom            | `MESH:D…`                    | same string, keeps `MESH:`  |
//!
//! AnatomyCellType has no rule.

use std::collections::HashMap;

use spokenorm_common::identifier::parse_gene_id;
use spokenorm_common::{Curie, NormError, NormalizedNode, Result, SpokeIdentifier, SpokeLabel};
use tracing::trace;

use crate::patterns::{self, Pattern};

pub type SpokeTransform = fn(&str) -> Result<SpokeIdentifier>;

const COMPOUND_PREFIXES: &str = r"^CHEMBL\.COMPOUND:|^DRUGBANK:";

pub struct SpokeRule {
    pattern: Pattern,
    transform: SpokeTransform,
}

impl SpokeRule {
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn apply(&self, identifier: &str) -> Result<SpokeIdentifier> {
        (self.transform)(identifier)
    }
}

/// One result rule per SPOKE label.
#[derive(Default)]
pub struct SpokeRegistry {
    rules: HashMap<SpokeLabel, SpokeRule>,
}

impl SpokeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut reg = Self::new();
        reg.register_builtin(SpokeLabel::Anatomy, patterns::SPOKE_ANATOMY, keep);
        reg.register_builtin(SpokeLabel::BiologicalProcess, patterns::SPOKE_BIOLOGICAL_PROCESS, keep);
        reg.register_builtin(SpokeLabel::CellType, patterns::SPOKE_CELL_TYPE, keep);
        reg.register_builtin(SpokeLabel::CellularComponent, patterns::SPOKE_CELLULAR_COMPONENT, keep);
        reg.register_builtin(SpokeLabel::Compound, COMPOUND_PREFIXES, format_compound);
        reg.register_builtin(SpokeLabel::Disease, patterns::SPOKE_DISEASE, keep);
        reg.register_builtin(SpokeLabel::Food, patterns::SPOKE_FOOD, keep);
        reg.register_builtin(SpokeLabel::Gene, "^NCBIGene:", format_gene);
        reg.register_builtin(SpokeLabel::MolecularFunction, patterns::SPOKE_MOLECULAR_FUNCTION, keep);
        reg.register_builtin(SpokeLabel::Nutrient, patterns::SPOKE_NUTRIENT, keep);
        reg.register_builtin(SpokeLabel::Pathway, patterns::SPOKE_PATHWAY, keep);
        reg.register_builtin(SpokeLabel::PharmacologicClass, patterns::SPOKE_PHARMACOLOGIC_CLASS, keep);
        reg.register_builtin(SpokeLabel::Protein, "^UniProtKB:", format_protein);
        reg.register_builtin(SpokeLabel::SideEffect, patterns::SPOKE_SIDE_EFFECT, keep);
        reg.register_builtin(SpokeLabel::Symptom, "^MESH:D[0-9]+", keep);
        reg
    }

    fn register_builtin(&mut self, label: SpokeLabel, pattern: &'static str, transform: SpokeTransform) {
        self.rules.insert(label, SpokeRule { pattern: Pattern::builtin(pattern), transform });
    }

    /// Set the rule for `label`. A later registration replaces an earlier one.
    pub fn register(&mut self, label: SpokeLabel, pattern: &str, transform: SpokeTransform) -> Result<()> {
        let pattern = Pattern::new(pattern)?;
        self.rules.insert(label, SpokeRule { pattern, transform });
        Ok(())
    }

    pub fn rule_for(&self, label: SpokeLabel) -> Option<&SpokeRule> {
        self.rules.get(&label)
    }

    pub fn supports(&self, label: SpokeLabel) -> bool {
        self.rules.contains_key(&label)
    }

    /// Pick the SPOKE identifier out of a normalized node.
    ///
    /// `searched` is only used to report an unmatched response.
    pub fn get_internal_identifier(
        &self,
        label: SpokeLabel,
        node: &NormalizedNode,
        searched: &Curie,
    ) -> Result<SpokeIdentifier> {
        let rule = self.rule_for(label).ok_or(NormError::UnsupportedType(label))?;

        for identifier in node.identifiers() {
            if rule.pattern.matches_start(identifier) {
                trace!(%label, %searched, identifier, "matched equivalent identifier");
                return rule.apply(identifier);
            }
        }

        Err(NormError::UnmatchedIdentifier {
            label,
            searched: searched.to_string(),
        })
    }
}

// ── Built-in transforms ──────────────────────────────────────────────────────

fn keep(identifier: &str) -> Result<SpokeIdentifier> {
    Ok(SpokeIdentifier::Str(identifier.to_string()))
}

// Transforms are registered with a prefix pattern but can also be called
// through `SpokeRule::apply` directly; an identifier without the expected
// prefix is malformed.

fn strip(identifier: &str, prefixes: &[&str]) -> Result<String> {
    prefixes
        .iter()
        .find_map(|p| identifier.strip_prefix(p))
        .map(str::to_string)
        .ok_or_else(|| NormError::MalformedIdentifier {
            curie: identifier.to_string(),
            reason: format!("expected prefix {}", prefixes.join(" or ")),
        })
}

fn format_compound(identifier: &str) -> Result<SpokeIdentifier> {
    strip(identifier, &["CHEMBL.COMPOUND:", "DRUGBANK:"]).map(SpokeIdentifier::Str)
}

fn format_gene(identifier: &str) -> Result<SpokeIdentifier> {
    let digits = strip(identifier, &["NCBIGene:"])?;
    parse_gene_id(&digits, identifier)
}

fn format_protein(identifier: &str) -> Result<SpokeIdentifier> {
    strip(identifier, &["UniProtKB:"]).map(SpokeIdentifier::Str)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

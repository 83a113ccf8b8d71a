//! Checks whether an identifier is already in SPOKE's native format.
//!
//! This table covers every SPOKE label, including labels with no
//! result-direction formatter, and is kept apart from [`crate::spoke`].

use std::collections::HashMap;

use spokenorm_common::{Curie, Result, SpokeLabel};

use crate::patterns::{self, Pattern};

/// Native pattern source for a label.
pub fn native_pattern(label: SpokeLabel) -> &'static str {
    match label {
        SpokeLabel::Anatomy            => patterns::SPOKE_ANATOMY,
        SpokeLabel::AnatomyCellType    => patterns::SPOKE_ANATOMY_CELL_TYPE,
        SpokeLabel::BiologicalProcess  => patterns::SPOKE_BIOLOGICAL_PROCESS,
        SpokeLabel::CellType           => patterns::SPOKE_CELL_TYPE,
        SpokeLabel::CellularComponent  => patterns::SPOKE_CELLULAR_COMPONENT,
        SpokeLabel::Compound           => patterns::SPOKE_COMPOUND,
        SpokeLabel::Disease            => patterns::SPOKE_DISEASE,
        SpokeLabel::Food               => patterns::SPOKE_FOOD,
        SpokeLabel::Gene               => patterns::SPOKE_GENE,
        SpokeLabel::MolecularFunction  => patterns::SPOKE_MOLECULAR_FUNCTION,
        SpokeLabel::Nutrient           => patterns::SPOKE_NUTRIENT,
        SpokeLabel::Pathway            => patterns::SPOKE_PATHWAY,
        SpokeLabel::PharmacologicClass => patterns::SPOKE_PHARMACOLOGIC_CLASS,
        SpokeLabel::Protein            => patterns::SPOKE_PROTEIN,
        SpokeLabel::SideEffect         => patterns::SPOKE_SIDE_EFFECT,
        SpokeLabel::Symptom            => patterns::SPOKE_SYMPTOM,
    }
}

/// Compiled native patterns, one per SPOKE label.
pub struct AcceptabilityTable {
    patterns: HashMap<SpokeLabel, Pattern>,
}

impl AcceptabilityTable {
    pub fn builtin() -> Self {
        let patterns = SpokeLabel::ALL
            .iter()
            .map(|&label| (label, Pattern::builtin(native_pattern(label))))
            .collect();
        Self { patterns }
    }

    pub fn pattern(&self, label: SpokeLabel) -> Option<&Pattern> {
        self.patterns.get(&label)
    }

    /// True iff `curie` matches the label's native pattern from its start.
    ///
    /// # Panics
    /// If the table has no entry for `label`. The table is exhaustive over
    /// [`SpokeLabel::ALL`]; a missing entry is a programming error.
    pub fn is_already_acceptable(&self, label: SpokeLabel, curie: &Curie) -> bool {
        self.patterns[&label].matches_start(curie.as_str())
    }

    /// As [`Self::is_already_acceptable`], parsing the label text first.
    pub fn is_already_acceptable_str(&self, label: &str, curie: &Curie) -> Result<bool> {
        let label = label.parse::<SpokeLabel>()?;
        Ok(self.is_already_acceptable(label, curie))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for AcceptabilityTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spokenorm_common::NormError;

    fn table() -> AcceptabilityTable {
        AcceptabilityTable::builtin()
    }

    fn accepts(label: SpokeLabel, curie: &str) -> bool {
        table().is_already_acceptable(label, &Curie::from(curie))
    }

    #[test]
    fn test_every_label_has_an_entry() {
        let t = table();
        assert_eq!(t.len(), SpokeLabel::ALL.len());
        for label in SpokeLabel::ALL {
            assert!(t.pattern(label).is_some(), "no native pattern for {label}");
        }
    }

    #[test]
    fn test_disease() {
        assert!(accepts(SpokeLabel::Disease, "DOID:0111771"));
        assert!(!accepts(SpokeLabel::Disease, "DOID"));
        assert!(!accepts(SpokeLabel::Disease, "MONDO:0005148"));
    }

    #[test]
    fn test_compound_accepts_both_native_formats() {
        assert!(accepts(SpokeLabel::Compound, "CHEMBL25"));
        assert!(accepts(SpokeLabel::Compound, "DB00945"));
        assert!(!accepts(SpokeLabel::Compound, "CHEMBL.COMPOUND:CHEMBL25"));
        assert!(!accepts(SpokeLabel::Compound, "DRUGBANK:DB00945"));
    }

    #[test]
    fn test_gene_is_bare_digits() {
        assert!(accepts(SpokeLabel::Gene, "5594"));
        assert!(!accepts(SpokeLabel::Gene, "NCBIGene:5594"));
    }

    #[test]
    fn test_protein_accession() {
        assert!(accepts(SpokeLabel::Protein, "P12345"));
        assert!(accepts(SpokeLabel::Protein, "Q9Y6K9"));
        assert!(!accepts(SpokeLabel::Protein, "UniProtKB:P12345"));
    }

    #[test]
    fn test_anatomy_cell_type_pairs() {
        assert!(accepts(SpokeLabel::AnatomyCellType, "UBERON:0002107/CL:0000182"));
        assert!(!accepts(SpokeLabel::AnatomyCellType, "UBERON:0002107"));
    }

    #[test]
    fn test_remaining_native_formats() {
        assert!(accepts(SpokeLabel::Anatomy, "UBERON:0002107"));
        assert!(accepts(SpokeLabel::BiologicalProcess, "GO:0140206"));
        assert!(accepts(SpokeLabel::CellType, "CL:1000391"));
        assert!(accepts(SpokeLabel::CellularComponent, "GO:0034518"));
        assert!(accepts(SpokeLabel::Food, "FOOD00001"));
        assert!(accepts(SpokeLabel::MolecularFunction, "GO:0001055"));
        assert!(accepts(SpokeLabel::Nutrient, "FDBN00002"));
        assert!(accepts(SpokeLabel::Pathway, "WP314_r109375"));
        assert!(accepts(SpokeLabel::PharmacologicClass, "N0000175533"));
        assert!(accepts(SpokeLabel::SideEffect, "C0235309"));
        assert!(accepts(SpokeLabel::Symptom, "D012345"));
        assert!(!accepts(SpokeLabel::Symptom, "MESH:D012345"));
    }

    #[test]
    fn test_label_text_lookup() {
        let t = table();
        assert!(t.is_already_acceptable_str("Disease", &Curie::from("DOID:9351")).unwrap());
        assert!(matches!(
            t.is_already_acceptable_str("Unicorn", &Curie::from("DOID:9351")),
            Err(NormError::UnknownLabel(_))
        ));
    }
}

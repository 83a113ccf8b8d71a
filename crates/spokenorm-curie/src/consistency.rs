//! Cross-check between the result-direction rules and the native patterns.
//!
//! The two tables are populated independently. A result rule whose output
//! is not itself accepted as native means a translated identifier would be
//! sent back through normalization on the next query.

use spokenorm_common::{Curie, EquivalentIdentifier, NormError, NormalizedNode, SpokeLabel};

use crate::acceptability::AcceptabilityTable;
use crate::spoke::SpokeRegistry;

/// A representative normalizer identifier per label with a result rule.
pub const SAMPLE_NORMALIZED_IDS: &[(SpokeLabel, &str)] = &[
    (SpokeLabel::Anatomy, "UBERON:0002107"),
    (SpokeLabel::BiologicalProcess, "GO:0140206"),
    (SpokeLabel::CellType, "CL:1000391"),
    (SpokeLabel::CellularComponent, "GO:0034518"),
    (SpokeLabel::Compound, "CHEMBL.COMPOUND:CHEMBL25"),
    (SpokeLabel::Disease, "DOID:0111771"),
    (SpokeLabel::Food, "FOOD00001"),
    (SpokeLabel::Gene, "NCBIGene:5594"),
    (SpokeLabel::MolecularFunction, "GO:0001055"),
    (SpokeLabel::Nutrient, "FDBN00002"),
    (SpokeLabel::Pathway, "WP314_r109375"),
    (SpokeLabel::PharmacologicClass, "N0000175533"),
    (SpokeLabel::Protein, "UniProtKB:P12345"),
    (SpokeLabel::SideEffect, "C0235309"),
    (SpokeLabel::Symptom, "MESH:D005334"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// The translated identifier fails the label's native pattern.
    NotNative { label: SpokeLabel, sample: String, translated: String },
    /// The sample did not translate at all.
    Untranslatable { label: SpokeLabel, sample: String, reason: String },
}

impl Mismatch {
    pub fn label(&self) -> SpokeLabel {
        match self {
            Mismatch::NotNative { label, .. } | Mismatch::Untranslatable { label, .. } => *label,
        }
    }
}

/// Translate each sample through `spoke` and test the result against
/// `acceptable`. Labels without a result rule are skipped.
pub fn check(
    spoke: &SpokeRegistry,
    acceptable: &AcceptabilityTable,
    samples: &[(SpokeLabel, &str)],
) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for &(label, sample) in samples {
        let node = NormalizedNode {
            equivalent_identifiers: vec![EquivalentIdentifier { identifier: sample.to_string(), label: None }],
            ..Default::default()
        };
        match spoke.get_internal_identifier(label, &node, &Curie::from(sample)) {
            Ok(id) => {
                let translated = Curie::from(id);
                if !acceptable.is_already_acceptable(label, &translated) {
                    mismatches.push(Mismatch::NotNative {
                        label,
                        sample: sample.to_string(),
                        translated: translated.into_string(),
                    });
                }
            }
            Err(NormError::UnsupportedType(_)) => {}
            Err(e) => mismatches.push(Mismatch::Untranslatable {
                label,
                sample: sample.to_string(),
                reason: e.to_string(),
            }),
        }
    }
    mismatches
}

//! Entity tags for the two taxonomies the translator bridges:
//! biolink categories (used by the node normalizer) and SPOKE node labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NormError;

// ---------------------------------------------------------------------------
// Biolink categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiolinkCategory {
    #[serde(rename = "biolink:AnatomicalEntity", alias = "AnatomicalEntity")]
    AnatomicalEntity,
    #[serde(rename = "biolink:BiologicalProcess", alias = "BiologicalProcess")]
    BiologicalProcess,
    #[serde(rename = "biolink:Cell", alias = "Cell")]
    Cell,
    #[serde(rename = "biolink:CellularComponent", alias = "CellularComponent")]
    CellularComponent,
    #[serde(rename = "biolink:ChemicalSubstance", alias = "ChemicalSubstance")]
    ChemicalSubstance,
    #[serde(rename = "biolink:Disease", alias = "Disease")]
    Disease,
    #[serde(rename = "biolink:Gene", alias = "Gene")]
    Gene,
    #[serde(rename = "biolink:MolecularActivity", alias = "MolecularActivity")]
    MolecularActivity,
    #[serde(rename = "biolink:NamedThing", alias = "NamedThing")]
    NamedThing,
    #[serde(rename = "biolink:Pathway", alias = "Pathway")]
    Pathway,
    #[serde(rename = "biolink:PhenotypicFeature", alias = "PhenotypicFeature")]
    PhenotypicFeature,
    #[serde(rename = "biolink:Protein", alias = "Protein")]
    Protein,
}

impl BiolinkCategory {
    pub const ALL: [BiolinkCategory; 12] = [
        BiolinkCategory::AnatomicalEntity,
        BiolinkCategory::BiologicalProcess,
        BiolinkCategory::Cell,
        BiolinkCategory::CellularComponent,
        BiolinkCategory::ChemicalSubstance,
        BiolinkCategory::Disease,
        BiolinkCategory::Gene,
        BiolinkCategory::MolecularActivity,
        BiolinkCategory::NamedThing,
        BiolinkCategory::Pathway,
        BiolinkCategory::PhenotypicFeature,
        BiolinkCategory::Protein,
    ];

    /// Prefixed form, e.g. "biolink:Gene".
    pub fn as_str(&self) -> &'static str {
        match self {
            BiolinkCategory::AnatomicalEntity  => "biolink:AnatomicalEntity",
            BiolinkCategory::BiologicalProcess => "biolink:BiologicalProcess",
            BiolinkCategory::Cell              => "biolink:Cell",
            BiolinkCategory::CellularComponent => "biolink:CellularComponent",
            BiolinkCategory::ChemicalSubstance => "biolink:ChemicalSubstance",
            BiolinkCategory::Disease           => "biolink:Disease",
            BiolinkCategory::Gene              => "biolink:Gene",
            BiolinkCategory::MolecularActivity => "biolink:MolecularActivity",
            BiolinkCategory::NamedThing        => "biolink:NamedThing",
            BiolinkCategory::Pathway           => "biolink:Pathway",
            BiolinkCategory::PhenotypicFeature => "biolink:PhenotypicFeature",
            BiolinkCategory::Protein           => "biolink:Protein",
        }
    }
}

impl FromStr for BiolinkCategory {
    type Err = NormError;

    /// Accepts both "biolink:Gene" and "Gene".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.trim().trim_start_matches("biolink:");
        BiolinkCategory::ALL
            .iter()
            .copied()
            .find(|c| &c.as_str()["biolink:".len()..] == bare)
            .ok_or_else(|| NormError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for BiolinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SPOKE node labels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpokeLabel {
    Anatomy,
    AnatomyCellType,
    BiologicalProcess,
    CellType,
    CellularComponent,
    Compound,
    Disease,
    Food,
    Gene,
    MolecularFunction,
    Nutrient,
    Pathway,
    PharmacologicClass,
    Protein,
    SideEffect,
    Symptom,
}

impl SpokeLabel {
    pub const ALL: [SpokeLabel; 16] = [
        SpokeLabel::Anatomy,
        SpokeLabel::AnatomyCellType,
        SpokeLabel::BiologicalProcess,
        SpokeLabel::CellType,
        SpokeLabel::CellularComponent,
        SpokeLabel::Compound,
        SpokeLabel::Disease,
        SpokeLabel::Food,
        SpokeLabel::Gene,
        SpokeLabel::MolecularFunction,
        SpokeLabel::Nutrient,
        SpokeLabel::Pathway,
        SpokeLabel::PharmacologicClass,
        SpokeLabel::Protein,
        SpokeLabel::SideEffect,
        SpokeLabel::Symptom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpokeLabel::Anatomy            => "Anatomy",
            SpokeLabel::AnatomyCellType    => "AnatomyCellType",
            SpokeLabel::BiologicalProcess  => "BiologicalProcess",
            SpokeLabel::CellType           => "CellType",
            SpokeLabel::CellularComponent  => "CellularComponent",
            SpokeLabel::Compound           => "Compound",
            SpokeLabel::Disease            => "Disease",
            SpokeLabel::Food               => "Food",
            SpokeLabel::Gene               => "Gene",
            SpokeLabel::MolecularFunction  => "MolecularFunction",
            SpokeLabel::Nutrient           => "Nutrient",
            SpokeLabel::Pathway            => "Pathway",
            SpokeLabel::PharmacologicClass => "PharmacologicClass",
            SpokeLabel::Protein            => "Protein",
            SpokeLabel::SideEffect         => "SideEffect",
            SpokeLabel::Symptom            => "Symptom",
        }
    }

    /// Biolink category a SPOKE label corresponds to.
    /// AnatomyCellType has no biolink counterpart.
    pub fn biolink_category(&self) -> Option<BiolinkCategory> {
        match self {
            SpokeLabel::Anatomy            => Some(BiolinkCategory::AnatomicalEntity),
            SpokeLabel::AnatomyCellType    => None,
            SpokeLabel::BiologicalProcess  => Some(BiolinkCategory::BiologicalProcess),
            SpokeLabel::CellType           => Some(BiolinkCategory::Cell),
            SpokeLabel::CellularComponent  => Some(BiolinkCategory::CellularComponent),
            SpokeLabel::Compound           => Some(BiolinkCategory::ChemicalSubstance),
            SpokeLabel::Disease            => Some(BiolinkCategory::Disease),
            SpokeLabel::Food               => Some(BiolinkCategory::NamedThing),
            SpokeLabel::Gene               => Some(BiolinkCategory::Gene),
            SpokeLabel::MolecularFunction  => Some(BiolinkCategory::MolecularActivity),
            SpokeLabel::Nutrient           => Some(BiolinkCategory::NamedThing),
            SpokeLabel::Pathway            => Some(BiolinkCategory::Pathway),
            SpokeLabel::PharmacologicClass => Some(BiolinkCategory::NamedThing),
            SpokeLabel::Protein            => Some(BiolinkCategory::Protein),
            SpokeLabel::SideEffect         => Some(BiolinkCategory::NamedThing),
            SpokeLabel::Symptom            => Some(BiolinkCategory::PhenotypicFeature),
        }
    }

    /// Whether the node normalizer knows identifiers of this label at all.
    pub fn supported_by_node_normalizer(&self) -> bool {
        !matches!(
            self,
            SpokeLabel::AnatomyCellType
                | SpokeLabel::Food
                | SpokeLabel::Nutrient
                | SpokeLabel::Pathway
                | SpokeLabel::PharmacologicClass
                | SpokeLabel::SideEffect
        )
    }
}

impl FromStr for SpokeLabel {
    type Err = NormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpokeLabel::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s.trim())
            .ok_or_else(|| NormError::UnknownLabel(s.to_string()))
    }
}

impl fmt::Display for SpokeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_prefixed_and_bare() {
        assert_eq!("biolink:Gene".parse::<BiolinkCategory>().unwrap(), BiolinkCategory::Gene);
        assert_eq!("Protein".parse::<BiolinkCategory>().unwrap(), BiolinkCategory::Protein);
        assert!(matches!(
            "biolink:Unicorn".parse::<BiolinkCategory>(),
            Err(NormError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_serde_uses_prefixed_form() {
        let json = serde_json::to_string(&BiolinkCategory::ChemicalSubstance).unwrap();
        assert_eq!(json, "\"biolink:ChemicalSubstance\"");
        let back: BiolinkCategory = serde_json::from_str("\"PhenotypicFeature\"").unwrap();
        assert_eq!(back, BiolinkCategory::PhenotypicFeature);
    }

    #[test]
    fn test_every_label_parses_from_its_own_name() {
        for label in SpokeLabel::ALL {
            assert_eq!(label.as_str().parse::<SpokeLabel>().unwrap(), label);
        }
        assert!(matches!("Unicorn".parse::<SpokeLabel>(), Err(NormError::UnknownLabel(_))));
    }

    #[test]
    fn test_label_to_biolink_mapping() {
        assert_eq!(SpokeLabel::Compound.biolink_category(), Some(BiolinkCategory::ChemicalSubstance));
        assert_eq!(SpokeLabel::Symptom.biolink_category(), Some(BiolinkCategory::PhenotypicFeature));
        assert_eq!(SpokeLabel::CellType.biolink_category(), Some(BiolinkCategory::Cell));
        assert_eq!(SpokeLabel::AnatomyCellType.biolink_category(), None);
    }

    #[test]
    fn test_unsupported_labels_map_to_named_thing_or_nothing() {
        for label in SpokeLabel::ALL {
            if !label.supported_by_node_normalizer() && label != SpokeLabel::Pathway {
                assert!(matches!(
                    label.biolink_category(),
                    None | Some(BiolinkCategory::NamedThing)
                ), "{label} should not have a specific biolink class");
            }
        }
        assert!(SpokeLabel::Gene.supported_by_node_normalizer());
        assert!(!SpokeLabel::Food.supported_by_node_normalizer());
    }
}

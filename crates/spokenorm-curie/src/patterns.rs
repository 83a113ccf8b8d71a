//! Native SPOKE identifier patterns and the prefix-anchored matcher.
//!
//! SPOKE type          |  biolink type               |  SPOKE curie format |  notes
//! --------------------|-----------------------------|---------------------|-----------------------------------
//! Anatomy             |  biolink:AnatomicalEntity   |  UBERON:1234567     |
//! AnatomyCellType     |  N/A                        |  UBERON:…/CL:…      |
//! BiologicalProcess   |  biolink:BiologicalProcess  |  GO:0140206         |
//! CellType            |  biolink:Cell               |  CL:1000391         |
//! CellularComponent   |  biolink:CellularComponent  |  GO:0034518         |
//! Compound            |  biolink:ChemicalSubstance  |  CHEMBL25, DB00945  |
//! Disease             |  biolink:Disease            |  DOID:0111771       |
//! Food                |  biolink:NamedThing         |  FOOD00001          |  not in node normalizer
//! Gene                |  biolink:Gene               |  5594               |  integer in SPOKE
//! MolecularFunction   |  biolink:MolecularActivity  |  GO:0001055         |
//! Nutrient            |  biolink:NamedThing         |  FDBN00002          |  not in biolink/node normalizer
//! Pathway             |  biolink:Pathway            |  WP314_r109375      |  not in node normalizer
//! PharmacologicClass  |  biolink:NamedThing         |  N0000175533        |  not in biolink/node normalizer
//! Protein             |  biolink:Protein            |  P12345             |
//! SideEffect          |  biolink:NamedThing         |  C0235309           |  not in biolink/node normalizer
//! Symptom             |  biolink:PhenotypicFeature  |  D012345            |

use regex::Regex;
use spokenorm_common::{NormError, Result};

pub const SPOKE_ANATOMY: &str = "^UBERON:[0-9]{7}";
/// Anatomy and cell type joined by '/', anchored once at the start, so
/// "UBERON:0002107/CL:0000182" is accepted as native.
pub const SPOKE_ANATOMY_CELL_TYPE: &str = "^UBERON:[0-9]{7}/CL:[0-9]{7}";
pub const SPOKE_BIOLOGICAL_PROCESS: &str = "^GO:[0-9]{7}";
pub const SPOKE_CELL_TYPE: &str = "^CL:[0-9]{7}";
pub const SPOKE_CELLULAR_COMPONENT: &str = "^GO:[0-9]{7}";
pub const SPOKE_COMPOUND: &str = "^CHEMBL[0-9]+|^DB[0-9]+";
pub const SPOKE_DISEASE: &str = "^DOID:[0-9]+";
pub const SPOKE_FOOD: &str = "^FOOD[0-9]{5}";
pub const SPOKE_GENE: &str = "^[0-9]+";
pub const SPOKE_MOLECULAR_FUNCTION: &str = "^GO:[0-9]{7}";
pub const SPOKE_NUTRIENT: &str = "^FDBN[0-9]{5}";
pub const SPOKE_PATHWAY: &str = "^WP[0-9]{1,6}_r[0-9]{6}";
pub const SPOKE_PHARMACOLOGIC_CLASS: &str = "^N[0-9]{10}";
pub const SPOKE_PROTEIN: &str =
    "[OPQ][0-9][A-Z0-9]{3}[0-9]|[A-NR-Z][0-9]([A-Z][A-Z0-9]{2}[0-9]){1,2}";
pub const SPOKE_SIDE_EFFECT: &str = "^C[0-9]{7}";
pub const SPOKE_SYMPTOM: &str = "^D[0-9]{5,9}";

/// A pattern tested against the start of an identifier.
///
/// The source is compiled as `^(?:source)`, so an alternation is anchored
/// as a whole and nothing is required after the match unless the source
/// itself anchors the end.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{source})")).map_err(|e| NormError::InvalidPattern {
            pattern: source.to_string(),
            source: e,
        })?;
        Ok(Self { source: source.to_string(), regex })
    }

    /// Compile one of the constant patterns in this crate.
    pub(crate) fn builtin(source: &'static str) -> Self {
        Self::new(source).expect("built-in identifier pattern must compile")
    }

    pub fn matches_start(&self, identifier: &str) -> bool {
        self.regex.is_match(identifier)
    }

    /// The pattern as registered, without the added anchor.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_prefix_not_full_string() {
        let p = Pattern::new(SPOKE_DISEASE).unwrap();
        assert!(p.matches_start("DOID:0111771"));
        assert!(p.matches_start("DOID:0111771-and-trailing-text"));
        assert!(!p.matches_start("xDOID:0111771"));
        assert!(!p.matches_start("DOID"));
    }

    #[test]
    fn test_unanchored_alternation_is_anchored_as_a_whole() {
        // Neither alternative of the protein pattern starts with '^'.
        let p = Pattern::new(SPOKE_PROTEIN).unwrap();
        assert!(p.matches_start("P12345"));
        assert!(p.matches_start("A0A024RBG1"));
        assert!(!p.matches_start("UniProtKB:P12345"));
    }

    #[test]
    fn test_invalid_pattern_reports_source() {
        let err = Pattern::new("^DOID:[0-9").unwrap_err();
        match err {
            NormError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "^DOID:[0-9"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_every_builtin_pattern_compiles() {
        for src in [
            SPOKE_ANATOMY, SPOKE_ANATOMY_CELL_TYPE, SPOKE_BIOLOGICAL_PROCESS, SPOKE_CELL_TYPE,
            SPOKE_CELLULAR_COMPONENT, SPOKE_COMPOUND, SPOKE_DISEASE, SPOKE_FOOD, SPOKE_GENE,
            SPOKE_MOLECULAR_FUNCTION, SPOKE_NUTRIENT, SPOKE_PATHWAY, SPOKE_PHARMACOLOGIC_CLASS,
            SPOKE_PROTEIN, SPOKE_SIDE_EFFECT, SPOKE_SYMPTOM,
        ] {
            assert!(Pattern::new(src).is_ok(), "{src} failed to compile");
        }
    }
}

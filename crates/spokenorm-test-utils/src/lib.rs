//! Fixtures for node normalizer responses and TRAPI query nodes.

use spokenorm_common::{EquivalentIdentifier, NormalizationResponse, NormalizedNode, QNode};

/// Builder for a single normalized node.
#[derive(Debug, Default)]
pub struct NodeBuilder {
    node: NormalizedNode,
}

impl NodeBuilder {
    /// Start a node whose preferred id is also its first equivalent identifier.
    pub fn new(preferred: &str) -> Self {
        let id = EquivalentIdentifier { identifier: preferred.to_string(), label: None };
        Self {
            node: NormalizedNode {
                id: Some(id.clone()),
                equivalent_identifiers: vec![id],
                types: Vec::new(),
            },
        }
    }

    pub fn equivalent(mut self, identifier: &str) -> Self {
        self.node.equivalent_identifiers.push(EquivalentIdentifier {
            identifier: identifier.to_string(),
            label: None,
        });
        self
    }

    pub fn labelled(mut self, identifier: &str, label: &str) -> Self {
        self.node.equivalent_identifiers.push(EquivalentIdentifier {
            identifier: identifier.to_string(),
            label: Some(label.to_string()),
        });
        self
    }

    pub fn with_type(mut self, biolink_type: &str) -> Self {
        self.node.types.push(biolink_type.to_string());
        self
    }

    pub fn build(self) -> NormalizedNode {
        self.node
    }
}

/// A node with exactly these equivalent identifiers, in order, and no preferred id.
pub fn node_with_ids(ids: &[&str]) -> NormalizedNode {
    NormalizedNode {
        id: None,
        equivalent_identifiers: ids
            .iter()
            .map(|id| EquivalentIdentifier { identifier: id.to_string(), label: None })
            .collect(),
        types: Vec::new(),
    }
}

pub fn qnode(categories: &[&str], ids: &[&str]) -> QNode {
    QNode {
        ids: ids.iter().map(|s| s.to_string()).collect(),
        categories: categories.iter().map(|s| s.to_string()).collect(),
    }
}

/// A node normalizer payload covering the searched CURIEs used across the
/// workspace tests. `MESH:D000000` resolves to null.
pub const SAMPLE_RESPONSE_JSON: &str = r#"{
    "NCBIGene:5594": {
        "id": {"identifier": "NCBIGene:5594", "label": "MAPK1"},
        "equivalent_identifiers": [
            {"identifier": "NCBIGene:5594", "label": "MAPK1"},
            {"identifier": "ENSEMBL:ENSG00000100030"},
            {"identifier": "HGNC:6871", "label": "MAPK1"},
            {"identifier": "UMLS:C1417002"}
        ],
        "type": ["biolink:Gene", "biolink:GeneOrGeneProduct", "biolink:NamedThing"]
    },
    "UniProtKB:P28482": {
        "id": {"identifier": "UniProtKB:P28482", "label": "MK01_HUMAN"},
        "equivalent_identifiers": [
            {"identifier": "UniProtKB:P28482", "label": "MK01_HUMAN"},
            {"identifier": "PR:P28482"}
        ],
        "type": ["biolink:Protein", "biolink:NamedThing"]
    },
    "CHEMBL.COMPOUND:CHEMBL25": {
        "id": {"identifier": "PUBCHEM.COMPOUND:2244", "label": "Aspirin"},
        "equivalent_identifiers": [
            {"identifier": "PUBCHEM.COMPOUND:2244", "label": "Aspirin"},
            {"identifier": "CHEMBL.COMPOUND:CHEMBL25", "label": "ASPIRIN"},
            {"identifier": "DRUGBANK:DB00945"},
            {"identifier": "MESH:D001241", "label": "Aspirin"}
        ],
        "type": ["biolink:SmallMolecule", "biolink:ChemicalSubstance", "biolink:NamedThing"]
    },
    "MONDO:0005148": {
        "id": {"identifier": "MONDO:0005148", "label": "type 2 diabetes mellitus"},
        "equivalent_identifiers": [
            {"identifier": "MONDO:0005148", "label": "type 2 diabetes mellitus"},
            {"identifier": "DOID:9352"},
            {"identifier": "UMLS:C0011860"}
        ],
        "type": ["biolink:Disease", "biolink:NamedThing"]
    },
    "MESH:D005334": {
        "id": {"identifier": "HP:0001945", "label": "Fever"},
        "equivalent_identifiers": [
            {"identifier": "HP:0001945", "label": "Fever"},
            {"identifier": "MESH:D005334", "label": "Fever"},
            {"identifier": "UMLS:C0015967"}
        ],
        "type": ["biolink:PhenotypicFeature", "biolink:NamedThing"]
    },
    "MESH:D000000": null
}"#;

pub fn sample_response() -> NormalizationResponse {
    NormalizationResponse::from_json(SAMPLE_RESPONSE_JSON)
        .expect("SAMPLE_RESPONSE_JSON is valid normalizer JSON")
}

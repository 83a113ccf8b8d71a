//! Translation properties over the process-wide tables.

use pretty_assertions::assert_eq;
use spokenorm_common::{BiolinkCategory, Curie, NormError, SpokeIdentifier, SpokeLabel};
use spokenorm_curie::{
    format_for_search, get_internal_identifier, is_already_acceptable, search_registry, spoke_registry,
    SearchRegistry,
};
use spokenorm_test_utils::{node_with_ids, qnode, sample_response, NodeBuilder};

#[test]
fn gene_response_yields_integer() {
    let node = node_with_ids(&["NCBIGene:12345"]);
    let id = get_internal_identifier(SpokeLabel::Gene, &node, &Curie::from("NCBIGene:12345")).unwrap();
    assert_eq!(id, SpokeIdentifier::Int(12345));
}

#[test]
fn every_label_without_a_rule_is_unsupported() {
    let node = node_with_ids(&["UBERON:0002107/CL:0000182", "UBERON:0002107"]);
    for label in SpokeLabel::ALL.into_iter().filter(|l| !spoke_registry().supports(*l)) {
        let err = get_internal_identifier(label, &node, &Curie::from("X:1")).unwrap_err();
        assert!(err.is_unsupported(), "{label}: {err}");
    }
}

#[test]
fn unmatched_response_carries_searched_curie() {
    let resp = sample_response();
    let searched = Curie::from("MONDO:0005148");
    let node = resp.node(&searched).unwrap();

    // The disease node only has DOID:9352, which matches; a Gene lookup does not.
    let err = get_internal_identifier(SpokeLabel::Gene, node, &searched).unwrap_err();
    match err {
        NormError::UnmatchedIdentifier { label, searched } => {
            assert_eq!(label, SpokeLabel::Gene);
            assert_eq!(searched, "MONDO:0005148");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn categories_without_rules_pass_through() {
    for category in BiolinkCategory::ALL
        .into_iter()
        .filter(|c| search_registry().rules_for(*c).is_empty())
    {
        for raw in ["DOID:0111771", "5594", "CHEMBL25", ""] {
            let curie = Curie::from(raw);
            assert_eq!(format_for_search(category, &curie), curie, "{category}");
        }
    }
}

#[test]
fn matching_rule_is_applied_deterministically() {
    let curie = Curie::from("DB00945");
    let expected = Curie::from("DRUGBANK:DB00945");
    for _ in 0..5 {
        assert_eq!(format_for_search(BiolinkCategory::ChemicalSubstance, &curie), expected);
    }
}

#[test]
fn acceptability_examples() {
    assert!(is_already_acceptable(SpokeLabel::Disease, &Curie::from("DOID:0111771")));
    assert!(!is_already_acceptable(SpokeLabel::Disease, &Curie::from("DOID")));
    assert!(is_already_acceptable(SpokeLabel::Gene, &Curie::from(5594u64)));
}

#[test]
fn first_registered_of_two_overlapping_rules_wins() {
    let mut reg = SearchRegistry::new();
    reg.register(BiolinkCategory::ChemicalSubstance, "^CHEMBL", |c| Curie::new(format!("BROAD:{c}")))
        .unwrap();
    reg.register(BiolinkCategory::ChemicalSubstance, "^CHEMBL[0-9]+", |c| Curie::new(format!("NARROW:{c}")))
        .unwrap();
    let out = reg.format_for_search(BiolinkCategory::ChemicalSubstance, &Curie::from("CHEMBL25"));
    assert_eq!(out.as_str(), "BROAD:CHEMBL25");
}

#[test]
fn gene_round_trip() {
    let native = Curie::from("12345");
    let search = format_for_search(BiolinkCategory::Gene, &native);
    assert_eq!(search.as_str(), "NCBIGene:12345");

    let node = NodeBuilder::new(search.as_str()).equivalent("ENSEMBL:ENSG00000000001").build();
    let back = get_internal_identifier(SpokeLabel::Gene, &node, &native).unwrap();
    assert_eq!(Curie::from(back), native);
}

#[test]
fn protein_round_trip() {
    let native = Curie::from("P12345");
    let search = format_for_search(BiolinkCategory::Protein, &native);
    assert_eq!(search.as_str(), "UniProtKB:P12345");

    let node = NodeBuilder::new(search.as_str()).build();
    let back = get_internal_identifier(SpokeLabel::Protein, &node, &native).unwrap();
    assert_eq!(back, SpokeIdentifier::Str("P12345".into()));
}

#[test]
fn compound_round_trip_through_sample_response() {
    let native = Curie::from("CHEMBL25");
    let search = format_for_search(BiolinkCategory::ChemicalSubstance, &native);
    let resp = sample_response();
    let node = resp.node(&search).unwrap();

    // PUBCHEM comes first in the response but does not match; CHEMBL does.
    let back = get_internal_identifier(SpokeLabel::Compound, node, &native).unwrap();
    assert_eq!(Curie::from(back), native);
}

#[test]
fn symptom_result_keeps_mesh_prefix_and_is_not_native() {
    let native = Curie::from("D005334");
    let search = format_for_search(BiolinkCategory::PhenotypicFeature, &native);
    assert_eq!(search.as_str(), "MESH:D005334");

    let resp = sample_response();
    let back = get_internal_identifier(SpokeLabel::Symptom, resp.node(&search).unwrap(), &native).unwrap();
    assert_eq!(back, SpokeIdentifier::Str("MESH:D005334".into()));
    assert!(!is_already_acceptable(SpokeLabel::Symptom, &Curie::from(back)));
}

#[test]
fn qnode_projection_uses_first_values_only() {
    let q = qnode(&["biolink:Protein", "biolink:Gene"], &["P28482", "5594"]);
    let curie = search_registry().format_qnode(&q).unwrap();
    assert_eq!(curie.as_str(), "UniProtKB:P28482");

    let unlisted = qnode(&["biolink:Drug", "biolink:ChemicalSubstance"], &["DB00945"]);
    assert_eq!(search_registry().format_qnode(&unlisted).unwrap().as_str(), "DB00945");

    let empty = qnode(&[], &["P28482"]);
    assert!(matches!(
        search_registry().format_qnode(&empty),
        Err(NormError::EmptyQueryNode("categories"))
    ));
}

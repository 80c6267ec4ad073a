//! Contract tests for the render element schema
//!
//! The visualization layer consumes this shape bit-exactly: node records
//! `{data: {id, label}}` first, edge records `{data: {source, target}}`
//! after, label/source/target always strings, never a `weight` or `name` key.

use std::fs;
use tempfile::TempDir;

use ontodash_core::{project_elements, GenericGraph, OntologyClient, RenderElement};

const FIXTURE_RDF_XML: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:ex="http://example.org/ont#">
  <rdf:Description rdf:about="http://example.org/ont#Alpha">
    <ex:label>Alpha</ex:label>
    <ex:linksTo rdf:resource="http://example.org/ont#Beta"/>
    <ex:linksTo rdf:resource="http://example.org/ont#Gamma"/>
  </rdf:Description>
  <rdf:Description rdf:about="http://example.org/ont#Beta">
    <ex:linksTo rdf:resource="http://example.org/ont#Gamma"/>
  </rdf:Description>
</rdf:RDF>
"#;

fn fixture_elements() -> Vec<RenderElement> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ont.rdf");
    fs::write(&path, FIXTURE_RDF_XML).unwrap();

    let client = OntologyClient::new().unwrap();
    client.view_elements(path.to_str().unwrap()).unwrap()
}

/// Contract: for every non-empty graph, the element list is all nodes, then
/// all edges; no interleaving.
#[test]
fn contract_nodes_first_then_edges() {
    let elements = fixture_elements();
    assert!(!elements.is_empty());

    let first_edge = elements
        .iter()
        .position(RenderElement::is_edge)
        .expect("fixture graph has edges");
    assert!(elements[..first_edge].iter().all(RenderElement::is_node));
    assert!(elements[first_edge..].iter().all(RenderElement::is_edge));
}

/// Contract: serialized node records carry exactly `id` and `label` (both
/// strings); edge records exactly `source` and `target`; no `weight`, no
/// `name`.
#[test]
fn contract_element_json_schema() {
    let elements = fixture_elements();
    let json = serde_json::to_value(&elements).unwrap();

    for element in json.as_array().unwrap() {
        let data = element
            .get("data")
            .expect("every element wraps a data object");
        let keys: Vec<&str> = data.as_object().unwrap().keys().map(String::as_str).collect();

        if data.get("id").is_some() {
            assert_eq!(keys.len(), 2);
            assert!(data["id"].is_string());
            assert!(data["label"].is_string());
        } else {
            assert_eq!(keys.len(), 2);
            assert!(data["source"].is_string());
            assert!(data["target"].is_string());
        }
        assert!(data.get("weight").is_none());
        assert!(data.get("name").is_none());
    }
}

/// Contract: every edge endpoint names a node that appeared earlier in the
/// list (the renderer requires nodes to exist before edges reference them).
#[test]
fn contract_edges_reference_declared_nodes() {
    let elements = fixture_elements();

    let mut seen_ids: Vec<String> = Vec::new();
    for element in &elements {
        match element {
            RenderElement::Node { data } => seen_ids.push(data.id.clone()),
            RenderElement::Edge { data } => {
                assert!(seen_ids.contains(&data.source));
                assert!(seen_ids.contains(&data.target));
            }
        }
    }
}

/// Contract: a snapshot written and reloaded projects to an equivalent
/// element list (same node ids, same edge endpoint pairs).
#[test]
fn contract_snapshot_projection_equivalence() {
    let dir = TempDir::new().unwrap();
    let rdf_path = dir.path().join("ont.rdf");
    fs::write(&rdf_path, FIXTURE_RDF_XML).unwrap();

    let client = OntologyClient::new().unwrap();
    let graph = client.knowledge_graph(rdf_path.to_str().unwrap()).unwrap();

    let blob = ontodash_core::to_bytes(&graph).unwrap();
    let restored: GenericGraph = ontodash_core::from_bytes(&blob).unwrap();
    assert!(restored.is_isomorphic_to(&graph));

    let ids = |elements: &[RenderElement]| {
        let mut ids: Vec<String> = elements
            .iter()
            .filter_map(|e| match e {
                RenderElement::Node { data } => Some(data.id.clone()),
                _ => None,
            })
            .collect();
        ids.sort();
        ids
    };
    let endpoints = |elements: &[RenderElement]| {
        let mut pairs: Vec<(String, String)> = elements
            .iter()
            .filter_map(|e| match e {
                RenderElement::Edge { data } => Some((data.source.clone(), data.target.clone())),
                _ => None,
            })
            .collect();
        pairs.sort();
        pairs
    };

    let original = project_elements(&graph);
    let reloaded = project_elements(&restored);
    assert_eq!(ids(&original), ids(&reloaded));
    assert_eq!(endpoints(&original), endpoints(&reloaded));
}

/**
 * graph.rs
 * Generic directed graph built from a fetched RDF store
 *
 * Intermediate representation between the triple store and the render
 * elements: every distinct subject/object term (literals included) becomes a
 * labeled node, every (subject, object) pair a single directed edge carrying
 * the predicates seen between them and a weight counting them.
 */

use crate::errors::{DashError, Result};
use crate::ontology::term::{subject_text, term_text};
use oxigraph::store::Store;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Node payload: the stringified RDF term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeAttrs {
    pub value: String,
}

/// Edge payload: predicates between one (subject, object) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeAttrs {
    pub predicates: Vec<String>,
    pub weight: u32,
}

/// Directed labeled graph derived from one ontology document.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GenericGraph {
    graph: DiGraph<NodeAttrs, EdgeAttrs>,
}

impl GenericGraph {
    /// Convert every quad of `store` into nodes and merged directed edges.
    pub fn from_store(store: &Store) -> Result<Self> {
        let mut graph = DiGraph::new();
        let mut index: HashMap<String, NodeIndex> = HashMap::new();

        let mut node_for = |graph: &mut DiGraph<NodeAttrs, EdgeAttrs>, value: String| {
            *index
                .entry(value.clone())
                .or_insert_with(|| graph.add_node(NodeAttrs { value }))
        };

        for quad in store.iter() {
            let quad = quad.map_err(|e| DashError::Store(e.to_string()))?;
            let subject = subject_text(&quad.subject);
            let object = term_text(&quad.object);
            let predicate = quad.predicate.as_str().to_string();

            let source = node_for(&mut graph, subject);
            let target = node_for(&mut graph, object);

            match graph.find_edge(source, target) {
                Some(edge) => {
                    let attrs = &mut graph[edge];
                    attrs.predicates.push(predicate);
                    attrs.weight += 1;
                }
                None => {
                    graph.add_edge(
                        source,
                        target,
                        EdgeAttrs {
                            predicates: vec![predicate],
                            weight: 1,
                        },
                    );
                }
            }
        }

        Ok(Self { graph })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node payloads in index order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeAttrs> {
        self.graph.node_weights()
    }

    /// Edges as (source value, target value, payload), in index order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &EdgeAttrs)> {
        self.graph.edge_indices().map(move |edge| {
            let (source, target) = self
                .graph
                .edge_endpoints(edge)
                .expect("edge index from the same graph");
            (
                self.graph[source].value.as_str(),
                self.graph[target].value.as_str(),
                &self.graph[edge],
            )
        })
    }

    /// Order-insensitive equality on node/edge sets and attributes.
    ///
    /// Two graphs loaded from the same triples are isomorphic regardless of
    /// the order the store handed the quads out in.
    pub fn is_isomorphic_to(&self, other: &GenericGraph) -> bool {
        if self.node_count() != other.node_count() || self.edge_count() != other.edge_count() {
            return false;
        }

        let mut our_nodes: Vec<&str> = self.nodes().map(|n| n.value.as_str()).collect();
        let mut their_nodes: Vec<&str> = other.nodes().map(|n| n.value.as_str()).collect();
        our_nodes.sort_unstable();
        their_nodes.sort_unstable();
        if our_nodes != their_nodes {
            return false;
        }

        let edge_key = |(source, target, attrs): (&str, &str, &EdgeAttrs)| {
            let mut predicates = attrs.predicates.clone();
            predicates.sort_unstable();
            (source.to_string(), target.to_string(), predicates, attrs.weight)
        };
        let mut our_edges: Vec<_> = self.edges().map(edge_key).collect();
        let mut their_edges: Vec<_> = other.edges().map(edge_key).collect();
        our_edges.sort_unstable();
        their_edges.sort_unstable();
        our_edges == their_edges
    }
}

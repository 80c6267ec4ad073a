/**
 * elements.rs
 * Render elements for the graph view, cytoscape element-list shape
 *
 * Nodes first, then edges - the renderer resolves edge endpoints against
 * nodes it has already seen, so the ordering is load-bearing.
 */

use crate::ontology::graph::GenericGraph;
use serde::{Deserialize, Serialize};

/// Payload of a node element. The graph's `value` attribute arrives here
/// renamed to `label`; there is no `name` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeData {
    pub id: String,
    pub label: String,
}

/// Payload of an edge element: stringified endpoint ids, no `weight` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeData {
    pub source: String,
    pub target: String,
}

/// One element of the flat render list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RenderElement {
    Node { data: NodeData },
    Edge { data: EdgeData },
}

impl RenderElement {
    pub fn node(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Node {
            data: NodeData {
                id: id.into(),
                label: label.into(),
            },
        }
    }

    pub fn edge(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Edge {
            data: EdgeData {
                source: source.into(),
                target: target.into(),
            },
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node { .. })
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, Self::Edge { .. })
    }
}

/// Project a generic graph into the flat element list: every node record
/// (id + stringified label), then every edge record (stringified source and
/// target). Edge weights and predicate lists do not survive projection.
pub fn project_elements(graph: &GenericGraph) -> Vec<RenderElement> {
    let mut elements = Vec::with_capacity(graph.node_count() + graph.edge_count());

    for node in graph.nodes() {
        elements.push(RenderElement::node(node.value.clone(), node.value.clone()));
    }
    for (source, target, _) in graph.edges() {
        elements.push(RenderElement::edge(source, target));
    }

    elements
}

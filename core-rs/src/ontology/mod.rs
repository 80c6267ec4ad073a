/**
 * ontology module
 *
 * - fetch: per-request document retrieval into an Oxigraph store
 * - query: SPARQL execution and result rectangularization
 * - graph: generic directed-graph intermediate
 * - elements: cytoscape-shape render element projection
 * - term: plain-text term rendering shared by query rows and node labels
 */

pub mod elements;
pub mod fetch;
pub mod graph;
pub mod query;
pub mod term;

pub use elements::{project_elements, EdgeData, NodeData, RenderElement};
pub use fetch::{OntologyFetcher, DEFAULT_RDF_FORMAT};
pub use graph::{EdgeAttrs, GenericGraph, NodeAttrs};
pub use query::{execute_against, Column, QueryExecutor, ResultSet, Row};

use crate::errors::Result;

/// Pipeline entrypoints the dashboard layer calls.
///
/// Each method fetches the endpoint's document fresh; no state is kept
/// between submissions beyond the HTTP client itself.
pub struct OntologyClient {
    fetcher: OntologyFetcher,
}

impl OntologyClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fetcher: OntologyFetcher::new()?,
        })
    }

    /// Tabular results for one resolved query: fetch, execute, rectangularize.
    pub fn query_results(&self, endpoint: &str, query: &str) -> Result<ResultSet> {
        let store = self.fetcher.fetch(endpoint)?;
        execute_against(&store, query)
    }

    /// The generic graph of the document at `endpoint`.
    pub fn knowledge_graph(&self, endpoint: &str) -> Result<GenericGraph> {
        let store = self.fetcher.fetch(endpoint)?;
        GenericGraph::from_store(&store)
    }

    /// Render elements for the graph view: all nodes, then all edges.
    pub fn view_elements(&self, endpoint: &str) -> Result<Vec<RenderElement>> {
        let graph = self.knowledge_graph(endpoint)?;
        Ok(project_elements(&graph))
    }
}

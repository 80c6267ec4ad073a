//! # Ontodash Core
//!
//! Core pipeline of the semantic-web dashboard: pick an ontology from a
//! CSV-backed catalog, resolve a parameterized SPARQL template, run it
//! against the ontology's endpoint, and project the fetched document into
//! render elements for the graph view.
//!
//! ## Pipeline
//!
//! ```text
//! ontologies.csv ──> DashboardConfig ──> lookup_template(ontology, query)
//!                                              │
//!                         Bindings ──> resolve(template, bindings)
//!                                              │
//!            ┌─────────────── fresh fetch per submission ───────────────┐
//!            │                                                          │
//!   QueryExecutor::execute ──> ResultSet          OntologyClient::view_elements
//!   (rows + columns table)                        (nodes first, then edges)
//! ```
//!
//! Everything is synchronous and stateless per request: no cache, no shared
//! mutable state, one sequential run per submission. The browser UI that
//! consumes both outputs lives outside this crate.

pub mod catalog;
pub mod errors;
pub mod ontology;
pub mod storage;
pub mod template;

pub use catalog::{DashboardConfig, OntologyDescriptor, QueryCatalog, QueryTemplate};
pub use errors::{DashError, Result};
pub use ontology::{
    execute_against, project_elements, Column, EdgeAttrs, EdgeData, GenericGraph, NodeAttrs,
    NodeData, OntologyClient, OntologyFetcher, QueryExecutor, RenderElement, ResultSet, Row,
};
pub use storage::{from_bytes, load_graph, save_graph, to_bytes};
pub use template::{check_markers, resolve, scale_factor, Bindings, ParamRole};

/// Crate version, mirrored into the CLI.
pub const VERSION: &str = "0.3.0";

/// Default data directory holding `ontologies.csv` and the query catalogs.
pub const DEFAULT_DATA_DIR: &str = "data";

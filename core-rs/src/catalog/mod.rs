/**
 * catalog module
 *
 * - config: the ontology table (ontologies.csv) as an explicit config object
 * - queries: per-ontology query catalogs with exact-name template lookup
 */

pub mod config;
pub mod queries;

pub use config::{DashboardConfig, OntologyDescriptor, ONTOLOGIES_FILE};
pub use queries::{QueryCatalog, QueryTemplate};

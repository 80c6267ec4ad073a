//! Dashboard configuration: the ontology table loaded from `ontologies.csv`
//!
//! One explicit object, loaded once at process start and passed by reference
//! into whatever layer drives the pipeline. No module-level state.

use crate::catalog::queries::QueryCatalog;
use crate::errors::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One row of `ontologies.csv`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct OntologyDescriptor {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Description")]
    pub description: String,

    /// URI the ontology's RDF document is fetched from.
    #[serde(rename = "Endpoint")]
    pub endpoint: String,

    /// Path of the per-ontology query catalog CSV, relative to the data dir.
    #[serde(rename = "Sparql")]
    pub sparql: String,
}

/// The ontology table plus the data directory its catalog paths resolve
/// against. Immutable after [`DashboardConfig::load`].
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    data_dir: PathBuf,
    ontologies: Vec<OntologyDescriptor>,
}

/// Filename of the ontology table inside the data directory.
pub const ONTOLOGIES_FILE: &str = "ontologies.csv";

impl DashboardConfig {
    /// Load `{data_dir}/ontologies.csv`.
    pub fn load(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let path = data_dir.join(ONTOLOGIES_FILE);
        let ontologies = read_ontology_table(&path)?;
        tracing::debug!(
            path = %path.display(),
            rows = ontologies.len(),
            "loaded ontology table"
        );
        Ok(Self {
            data_dir,
            ontologies,
        })
    }

    /// Build a config from already-materialized rows (tests, embedded data).
    pub fn from_rows(data_dir: impl Into<PathBuf>, ontologies: Vec<OntologyDescriptor>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ontologies,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Ontology names in table order, first occurrence wins.
    pub fn ontology_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.ontologies.len());
        for row in &self.ontologies {
            if !names.contains(&row.name.as_str()) {
                names.push(&row.name);
            }
        }
        names
    }

    /// Exact-name lookup.
    ///
    /// Zero rows is `NotFound`; more than one row with the same name is a
    /// data-integrity error surfaced as `Ambiguous`, never a silent
    /// take-the-first.
    pub fn ontology(&self, name: &str) -> Result<&OntologyDescriptor> {
        let mut matches = self.ontologies.iter().filter(|row| row.name == name);
        let first = matches
            .next()
            .ok_or_else(|| DashError::NotFound(format!("ontology: {}", name)))?;
        if matches.next().is_some() {
            return Err(DashError::Ambiguous(format!(
                "more than one ontology row named '{}'",
                name
            )));
        }
        Ok(first)
    }

    /// Load the query catalog referenced by an ontology row.
    pub fn query_catalog(&self, ontology_name: &str) -> Result<QueryCatalog> {
        let descriptor = self.ontology(ontology_name)?;
        QueryCatalog::load(self.data_dir.join(&descriptor.sparql))
    }

    /// Look up a query template by `(ontology name, query name)`.
    ///
    /// Returns the template string and the endpoint to run it against: the
    /// template's own endpoint when the catalog row carries one, otherwise
    /// the ontology's.
    pub fn lookup_template(&self, ontology_name: &str, query_name: &str) -> Result<(String, String)> {
        let descriptor = self.ontology(ontology_name)?;
        let catalog = QueryCatalog::load(self.data_dir.join(&descriptor.sparql))?;
        let template = catalog.template(query_name)?;
        let endpoint = template
            .endpoint
            .clone()
            .unwrap_or_else(|| descriptor.endpoint.clone());
        Ok((template.sparql.clone(), endpoint))
    }
}

fn read_ontology_table(path: &Path) -> Result<Vec<OntologyDescriptor>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: OntologyDescriptor = record?;
        rows.push(row);
    }
    Ok(rows)
}

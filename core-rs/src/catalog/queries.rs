//! Per-ontology query catalogs
//!
//! Each ontology row points at a CSV of named SPARQL templates. Lookup is
//! exact-name with defined zero/duplicate behavior.

use crate::errors::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One row of a query catalog CSV.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct QueryTemplate {
    #[serde(rename = "Name")]
    pub name: String,

    /// The template string, placeholder tags included.
    #[serde(rename = "Sparql")]
    pub sparql: String,

    /// Optional endpoint override for this query.
    #[serde(rename = "Endpoint")]
    pub endpoint: Option<String>,
}

/// A loaded query catalog.
#[derive(Debug, Clone, Default)]
pub struct QueryCatalog {
    templates: Vec<QueryTemplate>,
}

impl QueryCatalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)?;
        let mut templates = Vec::new();
        for record in reader.deserialize() {
            let mut row: QueryTemplate = record?;
            // Empty override cells mean "no override".
            if row.endpoint.as_deref() == Some("") {
                row.endpoint = None;
            }
            templates.push(row);
        }
        tracing::debug!(
            path = %path.display(),
            templates = templates.len(),
            "loaded query catalog"
        );
        Ok(Self { templates })
    }

    pub fn from_rows(templates: Vec<QueryTemplate>) -> Self {
        Self { templates }
    }

    /// Query names in catalog order, first occurrence wins.
    pub fn query_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.templates.len());
        for row in &self.templates {
            if !names.contains(&row.name.as_str()) {
                names.push(&row.name);
            }
        }
        names
    }

    /// Exact-name lookup; `NotFound` on zero rows, `Ambiguous` on duplicates.
    pub fn template(&self, name: &str) -> Result<&QueryTemplate> {
        let mut matches = self.templates.iter().filter(|row| row.name == name);
        let first = matches
            .next()
            .ok_or_else(|| DashError::NotFound(format!("query: {}", name)))?;
        if matches.next().is_some() {
            return Err(DashError::Ambiguous(format!(
                "more than one query row named '{}'",
                name
            )));
        }
        Ok(first)
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }
}

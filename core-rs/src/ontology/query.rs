/**
 * query.rs
 * SPARQL execution against a freshly fetched store, rectangularized for the
 * results table
 */

use crate::errors::{DashError, Result};
use crate::ontology::fetch::OntologyFetcher;
use crate::ontology::term::term_text;
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One column descriptor of the results table; `name` and `id` are equal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub id: String,
}

impl Column {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            id: name.to_string(),
        }
    }
}

/// One result row: variable name to bound value, `None` where the variable
/// is unbound in that solution.
pub type Row = HashMap<String, Option<String>>;

/// A rectangular query result: ordered columns plus row mappings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

/// Executes resolved query strings, fetching the target graph fresh each time.
pub struct QueryExecutor {
    fetcher: OntologyFetcher,
}

impl QueryExecutor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fetcher: OntologyFetcher::new()?,
        })
    }

    /// Fetch the graph at `endpoint` and run `query` against it.
    pub fn execute(&self, endpoint: &str, query: &str) -> Result<ResultSet> {
        let store = self.fetcher.fetch(endpoint)?;
        execute_against(&store, query)
    }
}

/// Run a query against an already-fetched store.
///
/// SELECT solutions become rows keyed by variable name, columns in the
/// projection order the engine reports. ASK yields a single `result` column.
/// CONSTRUCT/DESCRIBE are not table-shaped and fail with `Query`.
pub fn execute_against(store: &Store, query: &str) -> Result<ResultSet> {
    let results = store
        .query(query)
        .map_err(|e| DashError::Query(e.to_string()))?;

    match results {
        QueryResults::Solutions(solutions) => {
            let columns: Vec<Column> = solutions
                .variables()
                .iter()
                .map(|v| Column::new(v.as_str()))
                .collect();

            let mut rows = Vec::new();
            for solution in solutions {
                let solution = solution.map_err(|e| DashError::Query(e.to_string()))?;

                let mut row: Row = columns
                    .iter()
                    .map(|c| (c.name.clone(), None))
                    .collect();
                for (var, term) in solution.iter() {
                    row.insert(var.as_str().to_string(), Some(term_text(term)));
                }
                rows.push(row);
            }

            Ok(ResultSet { columns, rows })
        }
        QueryResults::Boolean(value) => {
            let mut row = Row::new();
            row.insert("result".to_string(), Some(value.to_string()));
            Ok(ResultSet {
                columns: vec![Column::new("result")],
                rows: vec![row],
            })
        }
        QueryResults::Graph(_) => Err(DashError::Query(
            "CONSTRUCT/DESCRIBE queries are not supported".to_string(),
        )),
    }
}

//! Binary snapshots of generic graphs
//!
//! Pure pass-through persistence: a graph serializes to a bincode blob and
//! back, reproducing an isomorphic graph. No versioning, no migration.

use crate::errors::{DashError, Result};
use crate::ontology::graph::GenericGraph;
use std::fs;
use std::path::Path;

/// Serialize a graph to a binary blob.
pub fn to_bytes(graph: &GenericGraph) -> Result<Vec<u8>> {
    bincode::serialize(graph).map_err(|e| DashError::Serialization(e.to_string()))
}

/// Deserialize a graph from a binary blob.
pub fn from_bytes(bytes: &[u8]) -> Result<GenericGraph> {
    bincode::deserialize(bytes).map_err(|e| DashError::Serialization(e.to_string()))
}

/// Write a graph snapshot to `path`.
pub fn save_graph(graph: &GenericGraph, path: impl AsRef<Path>) -> Result<()> {
    let bytes = to_bytes(graph)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Read a graph snapshot from `path`.
pub fn load_graph(path: impl AsRef<Path>) -> Result<GenericGraph> {
    let bytes = fs::read(path)?;
    from_bytes(&bytes)
}

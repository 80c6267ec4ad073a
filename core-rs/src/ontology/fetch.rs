//! Remote ontology fetching
//!
//! Every pipeline run fetches its document fresh; nothing is cached between
//! submissions. An endpoint is an `http(s)://` URI, a `file://` URI, or a
//! bare filesystem path (the last two mostly for tests and local snapshots).

use crate::errors::{DashError, Result};
use oxigraph::io::RdfFormat;
use oxigraph::store::Store;
use std::fs;
use std::path::PathBuf;

/// Format ontology documents are assumed to be in unless stated otherwise.
pub const DEFAULT_RDF_FORMAT: RdfFormat = RdfFormat::RdfXml;

/// Fetches and parses remote RDF documents into fresh in-memory stores.
pub struct OntologyFetcher {
    client: reqwest::blocking::Client,
}

impl OntologyFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| DashError::Fetch(e.to_string()))?;
        Ok(Self { client })
    }

    /// Fetch `endpoint` and parse it as RDF/XML.
    pub fn fetch(&self, endpoint: &str) -> Result<Store> {
        self.fetch_with_format(endpoint, DEFAULT_RDF_FORMAT)
    }

    /// Fetch `endpoint` and parse it as `format`.
    ///
    /// Unreachable endpoints and unparsable documents both surface as
    /// `Fetch`; no partially-loaded store is ever returned.
    pub fn fetch_with_format(&self, endpoint: &str, format: RdfFormat) -> Result<Store> {
        tracing::debug!(endpoint, media_type = format.media_type(), "fetching ontology");
        let document = self.read_endpoint(endpoint, format)?;

        let store = Store::new().map_err(|e| DashError::Store(e.to_string()))?;
        store
            .load_from_reader(format, document.as_slice())
            .map_err(|e| {
                DashError::Fetch(format!("failed to parse document at {}: {}", endpoint, e))
            })?;
        Ok(store)
    }

    fn read_endpoint(&self, endpoint: &str, format: RdfFormat) -> Result<Vec<u8>> {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            let response = self
                .client
                .get(endpoint)
                .header(reqwest::header::ACCEPT, format.media_type())
                .send()
                .map_err(|e| DashError::Fetch(format!("{}: {}", endpoint, e)))?;

            if !response.status().is_success() {
                return Err(DashError::Fetch(format!(
                    "{} returned HTTP {}",
                    endpoint,
                    response.status()
                )));
            }

            let body = response
                .bytes()
                .map_err(|e| DashError::Fetch(format!("{}: {}", endpoint, e)))?;
            Ok(body.to_vec())
        } else {
            let path = match endpoint.strip_prefix("file://") {
                Some(stripped) => PathBuf::from(stripped),
                None => PathBuf::from(endpoint),
            };
            fs::read(&path)
                .map_err(|e| DashError::Fetch(format!("{}: {}", path.display(), e)))
        }
    }
}

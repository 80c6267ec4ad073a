/// Example: run a catalog query end to end against the bundled data
///
/// Walks the whole pipeline: load the ontology table, look up a template,
/// resolve its placeholder tags, execute the query, and project the graph
/// view elements.
///
/// Usage:
///   cargo run --example run_query
///   cargo run --example run_query "Asset by ticker" ETH

use ontodash_core::{resolve, Bindings, DashboardConfig, OntologyClient, QueryExecutor};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let query_name = args.get(1).map(String::as_str).unwrap_or("Asset by ticker");
    let ticker = args.get(2).map(String::as_str).unwrap_or("BTC");

    let config = DashboardConfig::load(ontodash_core::DEFAULT_DATA_DIR)?;

    println!("Configured ontologies:");
    for name in config.ontology_names() {
        println!("  - {}", name);
    }

    let (template, endpoint) = config.lookup_template("Markets", query_name)?;
    println!("\nTemplate ({}):\n{}", query_name, template);

    let bindings = Bindings::new()
        .with_dropdown1(ticker)
        .with_start_date("2024-01-01")
        .with_end_date("2024-12-31")
        .with_precision(2);
    let resolved = resolve(&template, &bindings);
    println!("\nResolved:\n{}", resolved);

    let executor = QueryExecutor::new()?;
    let results = executor.execute(&endpoint, &resolved)?;

    println!("\nColumns: {:?}", results.columns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>());
    for row in &results.rows {
        println!("  {:?}", row);
    }

    let client = OntologyClient::new()?;
    let elements = client.view_elements(&endpoint)?;
    let nodes = elements.iter().filter(|e| e.is_node()).count();
    println!("\nGraph view: {} nodes, {} edges", nodes, elements.len() - nodes);

    Ok(())
}

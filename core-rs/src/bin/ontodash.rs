//! Ontodash CLI
//!
//! Command-line front-end for the dashboard pipeline: list the catalog,
//! inspect templates, run parameterized queries, export the graph view.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ontodash_core::{
    check_markers, resolve, Bindings, DashboardConfig, OntologyClient, QueryExecutor, ResultSet,
};

#[derive(Parser)]
#[command(name = "ontodash")]
#[command(version = ontodash_core::VERSION)]
#[command(about = "Semantic web dashboard pipeline", long_about = None)]
struct Cli {
    /// Data directory holding ontologies.csv and the query catalogs
    #[arg(long, global = true, default_value = ontodash_core::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the configured ontologies
    Ontologies,
    /// List the query catalog of an ontology
    Queries {
        /// Ontology name
        ontology: String,
    },
    /// Print a query template verbatim, with a marker check
    Show {
        /// Ontology name
        ontology: String,
        /// Query name
        query: String,
    },
    /// Resolve a template and run it against the ontology's endpoint
    Run {
        /// Ontology name
        ontology: String,
        /// Query name
        query: String,
        #[arg(long)]
        dropdown1: Option<String>,
        #[arg(long)]
        dropdown2: Option<String>,
        #[arg(long)]
        dropdown3: Option<String>,
        #[arg(long)]
        dropdown4: Option<String>,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        /// Decimal precision, substituted as a 10^n scale factor
        #[arg(long)]
        precision: Option<i32>,
        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Emit the graph-view element list as JSON
    View {
        /// Ontology name
        ontology: String,
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write a binary snapshot of the ontology's generic graph
    Snapshot {
        /// Ontology name
        ontology: String,
        /// Snapshot file path
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();
    let config = DashboardConfig::load(&cli.data_dir)?;

    match cli.command {
        Commands::Ontologies => {
            for name in config.ontology_names() {
                let descriptor = config.ontology(name)?;
                println!("{:<24} {}", descriptor.name, descriptor.description);
                println!("{:<24} endpoint: {}", "", descriptor.endpoint);
            }
        }
        Commands::Queries { ontology } => {
            let catalog = config.query_catalog(&ontology)?;
            for name in catalog.query_names() {
                println!("{}", name);
            }
        }
        Commands::Show { ontology, query } => {
            let (template, endpoint) = config.lookup_template(&ontology, &query)?;
            println!("endpoint: {}", endpoint);
            println!("{}", template);
            if let Err(e) = check_markers(&template) {
                eprintln!("warning: {}", e);
            }
        }
        Commands::Run {
            ontology,
            query,
            dropdown1,
            dropdown2,
            dropdown3,
            dropdown4,
            start_date,
            end_date,
            precision,
            format,
        } => {
            let (template, endpoint) = config.lookup_template(&ontology, &query)?;
            let bindings = Bindings {
                dropdown1,
                dropdown2,
                dropdown3,
                dropdown4,
                start_date,
                end_date,
                precision,
            };
            let resolved = resolve(&template, &bindings);

            let executor = QueryExecutor::new()?;
            let results = executor.execute(&endpoint, &resolved)?;

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&results)?),
                _ => print_table(&results),
            }
        }
        Commands::View { ontology, output } => {
            let descriptor = config.ontology(&ontology)?;
            let client = OntologyClient::new()?;
            let elements = client.view_elements(&descriptor.endpoint)?;
            let json = serde_json::to_string_pretty(&elements)?;
            match output {
                Some(path) => std::fs::write(path, json)?,
                None => println!("{}", json),
            }
        }
        Commands::Snapshot { ontology, output } => {
            let descriptor = config.ontology(&ontology)?;
            let client = OntologyClient::new()?;
            let graph = client.knowledge_graph(&descriptor.endpoint)?;
            ontodash_core::save_graph(&graph, &output)?;
            println!(
                "wrote {} nodes / {} edges to {}",
                graph.node_count(),
                graph.edge_count(),
                output.display()
            );
        }
    }

    Ok(())
}

fn print_table(results: &ResultSet) {
    let header: Vec<&str> = results.columns.iter().map(|c| c.name.as_str()).collect();
    println!("{}", header.join(" | "));

    for row in &results.rows {
        let cells: Vec<&str> = results
            .columns
            .iter()
            .map(|c| {
                row.get(&c.name)
                    .and_then(|v| v.as_deref())
                    .unwrap_or("")
            })
            .collect();
        println!("{}", cells.join(" | "));
    }
    println!("({} rows)", results.rows.len());
}

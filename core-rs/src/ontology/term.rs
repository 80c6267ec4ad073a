//! Plain-text rendering of RDF terms
//!
//! IRIs render without angle brackets, literals as their lexical value,
//! blank nodes as their bare id. This is the form both the result table and
//! the graph node labels carry.

use oxigraph::model::{Subject, Term};

/// Render any term position (object or bound variable) as display text.
pub fn term_text(term: &Term) -> String {
    match term {
        Term::NamedNode(node) => node.as_str().to_string(),
        Term::BlankNode(node) => node.as_str().to_string(),
        Term::Literal(literal) => literal.value().to_string(),
        other => other.to_string(),
    }
}

/// Render a subject position as display text.
pub fn subject_text(subject: &Subject) -> String {
    match subject {
        Subject::NamedNode(node) => node.as_str().to_string(),
        Subject::BlankNode(node) => node.as_str().to_string(),
        other => other.to_string(),
    }
}

//! Contract tests for template resolution
//!
//! These pin the externally observable resolver behavior the dashboard
//! depends on: identity without tags, tag-site substitution, the precision
//! scale-factor rule, and truncation at an unmatched marker.

use ontodash_core::{check_markers, resolve, scale_factor, Bindings, DashError};

/// Contract: a template with no placeholder tags is returned unchanged,
/// whatever the bindings.
#[test]
fn contract_no_tags_is_identity() {
    let templates = [
        "",
        "SELECT ?s WHERE { ?s ?p ?o }",
        "text with a lone > and a lone < but no markers",
        "PREFIX ex: <http://example.org/> SELECT * WHERE { ?s ex:p ?o }",
    ];
    let bindings = [
        Bindings::new(),
        Bindings::new()
            .with_dropdown1("BTC")
            .with_dropdown2("ETH")
            .with_start_date("2020-01-01")
            .with_end_date("2029-12-31")
            .with_precision(6),
    ];

    for template in &templates {
        for binding in &bindings {
            assert_eq!(&resolve(template, binding), template);
        }
    }
}

/// Contract: the documented dropdown example resolves exactly.
#[test]
fn contract_dropdown_substitution() {
    let resolved = resolve(
        "SELECT ?x WHERE { ?x :p <<T:dropdown1>> }",
        &Bindings::new().with_dropdown1("BTC"),
    );
    assert_eq!(resolved, "SELECT ?x WHERE { ?x :p BTC }");
}

/// Contract: precision substitutes 10^n for the literal word `precision`,
/// with the documented formatting.
#[test]
fn contract_precision_scale_factor() {
    let template = "BIND(?v * precision AS ?s) <<precision:precision>>";

    let with_two = resolve(template, &Bindings::new().with_precision(2));
    assert_eq!(with_two, "BIND(?v * 100.0 AS ?s) ");

    let with_zero = resolve(template, &Bindings::new().with_precision(0));
    assert_eq!(with_zero, "BIND(?v * 1.0 AS ?s) ");

    assert_eq!(scale_factor(2), "100.0");
    assert_eq!(scale_factor(0), "1.0");
}

/// Contract: an unmatched `<<` resolves everything before it and leaves the
/// remainder untouched; re-resolving the output is a no-op for the tail.
#[test]
fn contract_unmatched_marker_truncates_and_is_idempotent() {
    let template = "?x :p <<T:dropdown1>> . ?x :q <<unterminated";
    let bindings = Bindings::new().with_dropdown1("BTC").with_precision(2);

    let once = resolve(template, &bindings);
    assert_eq!(once, "?x :p BTC . ?x :q <<unterminated");

    let twice = resolve(&once, &bindings);
    assert_eq!(twice, once);
}

/// Contract: unrecognized roles are silent no-ops, not errors.
#[test]
fn contract_unknown_role_is_noop() {
    let template = "SELECT ?x <<hint:future_reserved>> WHERE { ?x ?p ?o }";
    let bindings = Bindings::new()
        .with_dropdown1("a")
        .with_dropdown2("b")
        .with_precision(3);
    assert_eq!(resolve(template, &bindings), template);
}

/// Contract: absent dropdown and date bindings substitute as empty text.
#[test]
fn contract_absent_bindings_substitute_empty() {
    let template = "{ :a <<x:dropdown3>> ; :b <<y:start_date>> }";
    assert_eq!(resolve(template, &Bindings::new()), "{ :a  ; :b  }");
}

/// Contract: the strict checker flags what resolve tolerates.
#[test]
fn contract_check_markers_strictness() {
    assert!(check_markers("SELECT <<t:dropdown1>>").is_ok());
    assert!(matches!(
        check_markers("SELECT << nope").unwrap_err(),
        DashError::MalformedTemplate(_)
    ));
}

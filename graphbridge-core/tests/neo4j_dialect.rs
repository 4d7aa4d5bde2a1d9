//! Descriptor-level behavior of the Neo4j dialect, exercised the way the
//! host platform drives it: resolve by implementor code, read the input
//! spec, build connect URLs.

use graphbridge_core::dialect::{Dialect, InputMandatory, Scope};
use graphbridge_core::{ConnectionProfile, DialectRegistry};

fn resolve_neo4j(registry: &DialectRegistry) -> std::sync::Arc<dyn Dialect> {
    registry
        .resolve("NEO4J")
        .expect("the built-in registry ships a Neo4j dialect")
}

#[test]
fn input_spec_is_static() {
    let registry = DialectRegistry::with_builtins().expect("builtins register");
    let dialect = resolve_neo4j(&registry);

    // The descriptor takes no profile: the spec cannot depend on profile
    // contents, and repeated reads agree.
    let spec = dialect.input_spec();
    assert_eq!(spec, dialect.input_spec());

    assert_eq!(spec.authentication_type, InputMandatory::Mandatory);
    assert_eq!(spec.username, InputMandatory::Mandatory);
    assert_eq!(spec.password, InputMandatory::Mandatory);
    assert_eq!(spec.catalog, InputMandatory::None);
    assert_eq!(spec.sid, InputMandatory::None);
    assert_eq!(spec.database, InputMandatory::None);
}

#[test]
fn identity_matches_descriptor_contract() {
    let registry = DialectRegistry::with_builtins().expect("builtins register");
    let dialect = resolve_neo4j(&registry);

    assert_eq!(dialect.name(), "Neo4j");
    assert_eq!(dialect.implementor(), "NEO4J");
    assert_eq!(dialect.scope(), Scope::Embedded);
}

#[test]
fn implementor_matching_is_case_insensitive() {
    let registry = DialectRegistry::with_builtins().expect("builtins register");
    let dialect = resolve_neo4j(&registry);

    assert!(dialect.supports_implementor("neo4j"));
    assert!(dialect.supports_implementor("NEO4J"));
    assert!(dialect.supports_implementor("Neo4j"));

    assert!(!dialect.supports_implementor(""));
    assert!(!dialect.supports_implementor("neo4"));
    assert!(!dialect.supports_implementor("neo4jj"));
    assert!(!dialect.supports_implementor("MYSQL"));
}

#[test]
fn connect_url_without_port_keeps_trailing_separator() {
    let registry = DialectRegistry::with_builtins().expect("builtins register");
    let dialect = resolve_neo4j(&registry);

    let profile = ConnectionProfile::new("graphhost");
    let url = dialect.connect_url(&profile);

    assert_eq!(url, "bolt://graphhost/");
    assert!(!url.contains("graphhost:"), "no port segment expected: {url}");
}

#[test]
fn connect_url_orders_host_port_database() {
    let registry = DialectRegistry::with_builtins().expect("builtins register");
    let dialect = resolve_neo4j(&registry);

    let profile = ConnectionProfile::new("graphhost")
        .with_port(7687)
        .with_database("neo4j");

    assert_eq!(dialect.connect_url(&profile), "bolt://graphhost:7687/neo4j");
}

#[test]
fn connect_url_is_idempotent() {
    let registry = DialectRegistry::with_builtins().expect("builtins register");
    let dialect = resolve_neo4j(&registry);

    let profile = ConnectionProfile::new("graphhost")
        .with_port(7687)
        .with_database("neo4j");

    let first = dialect.connect_url(&profile);
    let second = dialect.connect_url(&profile);
    assert_eq!(first, second);
}

#[test]
fn url_override_wins_over_every_other_field() {
    let registry = DialectRegistry::with_builtins().expect("builtins register");
    let dialect = resolve_neo4j(&registry);

    let profile = ConnectionProfile::new("real-host")
        .with_port(7687)
        .with_database("neo4j")
        .with_url_override("bolt+routing://cluster.internal:17687/graph");

    assert_eq!(
        dialect.connect_url(&profile),
        "bolt+routing://cluster.internal:17687/graph"
    );
}

#[test]
fn absent_capabilities_resolve_to_none_not_errors() {
    let registry = DialectRegistry::with_builtins().expect("builtins register");
    let dialect = resolve_neo4j(&registry);
    let profile = ConnectionProfile::new("graphhost");

    // The host branches on None; these calls must never panic or error.
    assert!(dialect.database_list_query(&profile, None, &[], None).is_none());
    assert!(dialect.table_list_query(&profile, None, None, &[], None).is_none());
    assert!(dialect.column_list_query(&profile, None, "Movie", None, None).is_none());
    assert!(dialect.quoted_identifier(&profile, "title").is_none());

    // The connection probe is the one template Neo4j does carry.
    assert_eq!(
        dialect.test_query(&profile).as_deref(),
        Some("MATCH (n) RETURN n LIMIT 1")
    );
}

//! Unit tests for domain error types

use wgb_domain::value_objects::Identity;
use wgb_domain::{Error, GraphError};

#[test]
fn test_duplicate_binding_names_identity() {
    let error = GraphError::duplicate(Identity::connection(1));
    assert_eq!(error.to_string(), "Duplicate binding: (Connection,[1])");
    assert_eq!(error.identity(), Some(&Identity::connection(1)));
}

#[test]
fn test_unresolved_reference_names_scope() {
    let error = GraphError::unresolved(Identity::connection(9), "root/aisle[1]/shuttle[1,1]");
    let display = error.to_string();
    assert!(display.contains("(Connection,[9])"));
    assert!(display.contains("root/aisle[1]/shuttle[1,1]"));
}

#[test]
fn test_cycle_display_lists_path() {
    let error = GraphError::cycle(vec![
        Identity::named("a"),
        Identity::named("b"),
        Identity::named("a"),
    ]);
    assert_eq!(
        error.to_string(),
        "Cyclic dependency: (Named,[\"a\"]) -> (Named,[\"b\"]) -> (Named,[\"a\"])"
    );
    assert_eq!(error.identity(), Some(&Identity::named("a")));
}

#[test]
fn test_graph_error_converts_into_error() {
    let error: Error = GraphError::not_visible(Identity::named("x"), "root").into();
    match error.as_graph() {
        Some(GraphError::VisibilityViolation { identity, scope }) => {
            assert_eq!(identity, &Identity::named("x"));
            assert_eq!(scope, "root");
        }
        _ => panic!("Expected VisibilityViolation error"),
    }
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("Missing topology");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Missing topology");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_io_error_with_source() {
    let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error = Error::io_with_source("Failed to read", source);
    assert!(matches!(error, Error::Io { source: Some(_), .. }));
    assert!(error.as_graph().is_none());
}

#[test]
fn test_unknown_scope_names_index_without_identity() {
    let error = GraphError::unknown_scope(42);
    assert_eq!(error.to_string(), "Unknown scope #42: not part of this graph");
    assert!(error.identity().is_none());
}

//! Resolver Tests
//!
//! Singleton caching, cycle detection, misuse errors and sticky failures on
//! hand-built graphs.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use wgb_domain::error::GraphError;
use wgb_domain::value_objects::{Identity, IdentityKind};
use wgb_infrastructure::di::{GraphBuilder, ObjectGraph, Recipe, ResolutionState};

fn named(name: &str) -> Identity {
    Identity::named(name)
}

/// `a -> b -> c -> a`, plus an independent `leaf`
fn cyclic_graph() -> ObjectGraph {
    let mut builder = GraphBuilder::new();
    let root = builder.root();
    for (from, to) in [("a", "b"), ("b", "c"), ("c", "a")] {
        builder
            .bind(
                root,
                named(from),
                Recipe::factory(|args| args.value::<i64>(0)),
                vec![named(to)],
            )
            .unwrap();
    }
    builder.bind_value(root, named("leaf"), 1_i64).unwrap();
    builder.build().unwrap()
}

#[test]
fn test_cycle_reported_with_full_path() {
    let graph = cyclic_graph();

    match graph.resolve(&named("a")) {
        Err(GraphError::CyclicDependency { cycle }) => {
            assert_eq!(
                cycle,
                vec![named("a"), named("b"), named("c"), named("a")]
            );
        }
        _ => panic!("Expected CyclicDependency error"),
    }
    assert_eq!(graph.state(&named("a")), Some(ResolutionState::Unvisited));
    assert_eq!(graph.construction_count(), 0);
}

#[test]
fn test_cycle_does_not_poison_unrelated_bindings() {
    let graph = cyclic_graph();

    assert!(graph.resolve(&named("b")).is_err());
    assert_eq!(*graph.resolve_as::<i64>(&named("leaf")).unwrap(), 1);
}

#[test]
fn test_self_reference_is_a_cycle() {
    let mut builder = GraphBuilder::new();
    let root = builder.root();
    builder
        .bind(
            root,
            named("me"),
            Recipe::factory(|args| args.value::<i64>(0)),
            vec![named("me")],
        )
        .unwrap();
    let graph = builder.build().unwrap();

    assert_eq!(
        graph.resolve(&named("me")).unwrap_err(),
        GraphError::cycle(vec![named("me"), named("me")])
    );
}

#[test]
fn test_cycle_through_aggregator() {
    let mut builder = GraphBuilder::new();
    let root = builder.root();
    builder
        .aggregator(root, Identity::connections(), IdentityKind::Connection)
        .unwrap();
    builder
        .bind(
            root,
            Identity::connection(1),
            Recipe::factory(|args| Ok(args.collection::<u8>(0)?.len())),
            vec![Identity::connections()],
        )
        .unwrap();
    builder
        .contribute(&Identity::connections(), Identity::connection(1))
        .unwrap();
    let graph = builder.build().unwrap();

    assert!(matches!(
        graph.resolve_collection(&Identity::connections()),
        Err(GraphError::CyclicDependency { .. })
    ));
}

#[test]
fn test_singleton_factory_runs_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut builder = GraphBuilder::new();
    let root = builder.root();
    builder
        .bind(
            root,
            named("counted"),
            Recipe::factory(move |_| Ok(counter.fetch_add(1, Ordering::SeqCst))),
            Vec::new(),
        )
        .unwrap();
    let graph = builder.build().unwrap();

    let first = graph.resolve(&named("counted")).unwrap();
    let second = graph.resolve(&named("counted")).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(graph.state(&named("counted")), Some(ResolutionState::Resolved));
}

#[test]
fn test_failure_is_sticky() {
    let mut builder = GraphBuilder::new();
    let root = builder.root();
    builder.bind_value(root, named("text"), "not a number").unwrap();
    builder
        .bind(
            root,
            named("parsed"),
            Recipe::factory(|args| args.value::<i64>(0)),
            vec![named("text")],
        )
        .unwrap();
    let graph = builder.build().unwrap();

    let first = graph.resolve(&named("parsed")).unwrap_err();
    let second = graph.resolve(&named("parsed")).unwrap_err();

    assert!(matches!(first, GraphError::Construction { .. }));
    assert_eq!(first, second);
    assert_eq!(graph.construction_count(), 1);
    assert_eq!(graph.state(&named("parsed")), Some(ResolutionState::Failed));
    // The argument itself was fine
    assert_eq!(graph.state(&named("text")), Some(ResolutionState::Resolved));
}

#[test]
fn test_wrong_request_shape() {
    let mut builder = GraphBuilder::new();
    let root = builder.root();
    builder
        .aggregator(root, Identity::connections(), IdentityKind::Connection)
        .unwrap();
    builder.bind_value(root, named("single"), 0_i64).unwrap();
    let graph = builder.build().unwrap();

    assert_eq!(
        graph.resolve(&Identity::connections()).unwrap_err(),
        GraphError::NotASingle {
            identity: Identity::connections()
        }
    );
    assert_eq!(
        graph.resolve_collection(&named("single")).unwrap_err(),
        GraphError::NotAnAggregator {
            identity: named("single")
        }
    );
    assert!(graph.resolve_collection(&Identity::connections()).unwrap().is_empty());
}

#[test]
fn test_resolve_unknown_identity() {
    let graph = GraphBuilder::new().build().unwrap();

    assert_eq!(
        graph.resolve(&Identity::app()).unwrap_err(),
        GraphError::unresolved(Identity::app(), "root")
    );
    assert_eq!(graph.state(&Identity::app()), None);
}

#[test]
fn test_alias_yields_target_instance() {
    let mut builder = GraphBuilder::new();
    let root = builder.root();
    let child = builder.child_scope(root, "child").unwrap();
    builder
        .bind(root, Identity::connection(1), Recipe::factory(|_| Ok(7_u32)), Vec::new())
        .unwrap();
    builder
        .bind_alias(child, named("conn"), Identity::connection(1))
        .unwrap();
    builder.expose(child, &named("conn")).unwrap();
    let graph = builder.build().unwrap();

    let via_alias = graph.resolve(&named("conn")).unwrap();
    let direct = graph.resolve(&Identity::connection(1)).unwrap();

    assert!(Arc::ptr_eq(&via_alias, &direct));
    assert_eq!(graph.construction_count(), 1);
}

#[test]
fn test_resolve_as_wrong_type() {
    let mut builder = GraphBuilder::new();
    let root = builder.root();
    builder.bind_value(root, named("n"), 3_i64).unwrap();
    let graph = builder.build().unwrap();

    assert!(matches!(
        graph.resolve_as::<String>(&named("n")),
        Err(GraphError::Construction { .. })
    ));
}

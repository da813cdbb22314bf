//! Concurrency Tests
//!
//! Many threads racing for the same roots must observe one instance per
//! identity and trigger exactly one construction each.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use wgb_domain::value_objects::Identity;
use wgb_infrastructure::di::{GraphBuilder, Recipe, TopologyGraphExt, build_object_graph};

use super::{WAREHOUSE_FACTORIES, warehouse_topology};

const THREADS: usize = 8;

#[test]
fn test_concurrent_app_resolution_shares_singletons() {
    let graph = build_object_graph(&warehouse_topology()).unwrap();
    let barrier = Barrier::new(THREADS);

    let apps: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    graph.app().unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for app in &apps[1..] {
        assert!(Arc::ptr_eq(app, &apps[0]));
    }
    assert_eq!(graph.construction_count(), WAREHOUSE_FACTORIES);
}

#[test]
fn test_concurrent_mixed_requests_share_shuttles() {
    let graph = build_object_graph(&warehouse_topology()).unwrap();
    let barrier = Barrier::new(THREADS);

    let shuttles: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let graph = &graph;
                let barrier = &barrier;
                s.spawn(move || {
                    barrier.wait();
                    match i % 3 {
                        0 => graph.shuttle(2, 2).unwrap(),
                        1 => Arc::clone(&graph.all_shuttles().unwrap()[3]),
                        _ => Arc::clone(&graph.aisle_shuttles(2).unwrap()[1]),
                    }
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for shuttle in &shuttles[1..] {
        assert!(Arc::ptr_eq(shuttle, &shuttles[0]));
    }
}

#[test]
fn test_slow_factory_runs_once_under_contention() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut builder = GraphBuilder::new();
    let root = builder.root();
    builder
        .bind(
            root,
            Identity::named("slow"),
            Recipe::factory(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                thread::sleep(Duration::from_millis(20));
                Ok(String::from("ready"))
            }),
            Vec::new(),
        )
        .unwrap();
    let graph = builder.build().unwrap();
    let barrier = Barrier::new(THREADS);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                barrier.wait();
                let value = graph.resolve_as::<String>(&Identity::named("slow")).unwrap();
                assert_eq!(value.as_str(), "ready");
            });
        }
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(graph.construction_count(), 1);
}

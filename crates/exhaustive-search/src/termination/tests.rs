//! Tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::*;

fn scope_with_nodes(nodes: u64) -> SearchScope {
    let scope = SearchScope::new();
    for _ in 0..nodes {
        scope.increment_node_count();
    }
    scope
}

#[test]
fn test_node_count_termination() {
    let term = NodeCountTermination::new(3);
    let scope = SearchScope::new();

    assert!(!term.is_terminated(&scope));
    scope.increment_node_count();
    scope.increment_node_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_node_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_zero_node_limit_fires_immediately() {
    let term = NodeCountTermination::new(0);
    assert!(term.is_terminated(&SearchScope::new()));
}

#[test]
fn test_time_termination_zero_limit() {
    let term = TimeTermination::new(Duration::ZERO);
    assert!(term.is_terminated(&SearchScope::new()));
}

#[test]
fn test_time_termination_not_reached() {
    let term = TimeTermination::seconds(3600);
    assert!(!term.is_terminated(&SearchScope::new()));
}

#[test]
fn test_external_termination() {
    let flag = AtomicBool::new(false);
    let term = ExternalTermination::new(&flag);
    let scope = SearchScope::new();

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination() {
    let term = OrTermination::new((NodeCountTermination::new(5), NodeCountTermination::new(2)));

    assert!(!term.is_terminated(&scope_with_nodes(1)));
    assert!(term.is_terminated(&scope_with_nodes(2)));
}

#[test]
fn test_and_termination() {
    let term = AndTermination::new((NodeCountTermination::new(5), NodeCountTermination::new(2)));

    assert!(!term.is_terminated(&scope_with_nodes(2)));
    assert!(term.is_terminated(&scope_with_nodes(5)));
}

#[test]
fn test_boxed_list_fires_on_any() {
    let terms: Vec<Box<dyn Termination>> = vec![
        Box::new(TimeTermination::seconds(3600)),
        Box::new(NodeCountTermination::new(1)),
    ];

    assert!(!terms.is_terminated(&scope_with_nodes(0)));
    assert!(terms.is_terminated(&scope_with_nodes(1)));
}

#[test]
fn test_empty_boxed_list_never_fires() {
    let terms: Vec<Box<dyn Termination>> = Vec::new();
    assert!(!terms.is_terminated(&scope_with_nodes(1_000)));
}

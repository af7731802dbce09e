//! Query layer tests: filters, sort keys, stability.

use skillpath_engine::{NodeQuery, ProgressStore, SortKey, resolve_all};
use skillpath_graph::GraphStore;
use skillpath_model::Difficulty;

const CATALOG: &str = include_str!("fixtures/web_dev_catalog.json");

fn store() -> GraphStore {
    GraphStore::from_json(CATALOG).expect("fixture catalog is valid")
}

fn ids(nodes: &[&skillpath_model::Node]) -> Vec<String> {
    nodes.iter().map(|n| n.id.clone()).collect()
}

#[test]
fn default_query_returns_declaration_order() {
    let store = store();
    let result = NodeQuery::new().run(&store, None);
    assert_eq!(result.len(), store.len());
    assert_eq!(result[0].id, "web-dev-intro");
    assert_eq!(result[result.len() - 1].id, "fullstack-project");
}

#[test]
fn text_search_is_case_insensitive_substring() {
    let store = store();
    let query = NodeQuery {
        text: Some("HTML Fund".to_string()),
        ..NodeQuery::new()
    };
    // Matches "HTML Fundamentals" by title, nothing else: "CSS
    // Fundamentals" has no "html" in title, description, or tags.
    assert_eq!(ids(&query.run(&store, None)), vec!["html-fundamentals"]);

    let query = NodeQuery {
        text: Some("react".to_string()),
        ..NodeQuery::new()
    };
    assert_eq!(ids(&query.run(&store, None)), vec!["react-basics"]);
}

#[test]
fn text_search_matches_tags_and_descriptions() {
    let store = store();
    let query = NodeQuery {
        text: Some("media-queries".to_string()),
        ..NodeQuery::new()
    };
    assert_eq!(ids(&query.run(&store, None)), vec!["responsive-css"]);

    let query = NodeQuery {
        text: Some("server-side".to_string()),
        ..NodeQuery::new()
    };
    assert_eq!(ids(&query.run(&store, None)), vec!["node-basics"]);
}

#[test]
fn filters_are_conjunctive() {
    let store = store();
    let query = NodeQuery {
        text: Some("responsive".to_string()),
        category: Some("CSS".to_string()),
        ..NodeQuery::new()
    };
    assert_eq!(ids(&query.run(&store, None)), vec!["responsive-css"]);

    let query = NodeQuery {
        category: Some("HTML".to_string()),
        difficulty: Some(Difficulty::Intermediate),
        level: Some(3),
        ..NodeQuery::new()
    };
    assert_eq!(
        ids(&query.run(&store, None)),
        vec!["html-advanced", "responsive-html"]
    );
}

#[test]
fn empty_and_mismatched_filters_yield_empty_results() {
    let store = store();
    let query = NodeQuery {
        text: Some("quantum chromodynamics".to_string()),
        ..NodeQuery::new()
    };
    assert!(query.run(&store, None).is_empty());

    let query = NodeQuery {
        category: Some("CSS".to_string()),
        level: Some(1),
        ..NodeQuery::new()
    };
    assert!(query.run(&store, None).is_empty());
}

#[test]
fn blank_search_text_is_a_no_op_filter() {
    let store = store();
    let query = NodeQuery {
        text: Some("   ".to_string()),
        ..NodeQuery::new()
    };
    assert_eq!(query.run(&store, None).len(), store.len());
}

#[test]
fn difficulty_sort_is_stable() {
    let store = store();
    let query = NodeQuery {
        sort: SortKey::Difficulty,
        ..NodeQuery::new()
    };
    let sorted = ids(&query.run(&store, None));
    // All Beginner nodes first in declaration order, then Intermediate,
    // then Advanced.
    assert_eq!(
        sorted,
        vec![
            "web-dev-intro",
            "html-fundamentals",
            "css-fundamentals",
            "html-advanced",
            "responsive-html",
            "css-advanced",
            "responsive-css",
            "javascript-basics",
            "node-basics",
            "javascript-async",
            "react-basics",
            "fullstack-project",
        ]
    );
}

#[test]
fn title_sort_is_case_insensitive() {
    let store = store();
    let query = NodeQuery {
        sort: SortKey::Title,
        category: Some("HTML".to_string()),
        ..NodeQuery::new()
    };
    assert_eq!(
        ids(&query.run(&store, None)),
        vec!["html-advanced", "html-fundamentals", "responsive-html"]
    );
}

#[test]
fn status_sort_ranks_completed_unlocked_locked() {
    let store = store();
    let mut progress = ProgressStore::new();
    progress.mark_complete("web-dev-intro");
    let statuses = resolve_all(&store, progress.snapshot());

    let query = NodeQuery {
        sort: SortKey::Status,
        ..NodeQuery::new()
    };
    let sorted = ids(&query.run(&store, Some(&statuses)));
    assert_eq!(sorted[0], "web-dev-intro"); // completed
    assert_eq!(sorted[1], "html-fundamentals"); // unlocked, declaration order
    assert_eq!(sorted[2], "css-fundamentals"); // unlocked
    // Everything else is locked and keeps declaration order.
    assert_eq!(sorted[3], "html-advanced");
    assert_eq!(sorted[sorted.len() - 1], "fullstack-project");
}

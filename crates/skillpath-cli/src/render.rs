//! Pure text rendering for CLI output.
//!
//! Everything here builds strings from already-resolved data so the
//! commands stay thin and the output is testable without a terminal.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use comfy_table::{ContentArrangement, Table, presets};
use skillpath_engine::ProgressSummary;
use skillpath_graph::GraphStore;
use skillpath_model::{Node, NodeStatus};

/// Structural summary printed by `skillpath check`.
pub fn check_report(store: &GraphStore) -> String {
    let max_level = store.all_nodes().iter().map(|n| n.level).max().unwrap_or(0);
    let total_duration = store
        .all_nodes()
        .iter()
        .fold(skillpath_model::Duration::default(), |acc, n| {
            acc + n.duration
        });

    let mut out = String::new();
    let _ = writeln!(
        out,
        "catalog: {} ({})",
        store.title(),
        store.catalog_id()
    );
    let _ = writeln!(out, "nodes: {}", store.len());
    let _ = writeln!(out, "edges: {}", store.edges().len());
    let _ = writeln!(out, "roots: {}", store.root_nodes().len());
    let _ = writeln!(out, "leaves: {}", store.leaf_nodes().len());
    let _ = writeln!(out, "convergence nodes: {}", store.convergence_nodes().len());
    let _ = writeln!(out, "branch nodes: {}", store.branch_nodes().len());
    let _ = writeln!(out, "max level: {max_level}");
    let _ = writeln!(out, "total duration: {total_duration}");
    out
}

/// Tabular listing for `skillpath list`. The status column appears only
/// when statuses were resolved.
pub fn node_table(
    nodes: &[&Node],
    statuses: Option<&BTreeMap<String, NodeStatus>>,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["id", "title", "category", "difficulty", "level", "duration"];
    if statuses.is_some() {
        header.push("status");
    }
    table.set_header(header);

    for node in nodes {
        let mut row = vec![
            node.id.clone(),
            node.title.clone(),
            node.category.clone(),
            node.difficulty.to_string(),
            node.level.to_string(),
            node.duration.to_string(),
        ];
        if let Some(statuses) = statuses {
            let status = statuses
                .get(&node.id)
                .map_or("unknown".to_string(), ToString::to_string);
            row.push(status);
        }
        table.add_row(row);
    }
    table
}

/// Detail view for `skillpath show`.
pub fn node_detail(
    store: &GraphStore,
    node: &Node,
    statuses: Option<&BTreeMap<String, NodeStatus>>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", node.title, node.id);
    let _ = writeln!(out, "  {}", node.description);
    let _ = writeln!(
        out,
        "  category: {}  difficulty: {}  level: {}  duration: {}",
        node.category, node.difficulty, node.level, node.duration
    );
    if !node.tags.is_empty() {
        let _ = writeln!(out, "  tags: {}", node.tags.join(", "));
    }
    if let Some(statuses) = statuses {
        if let Some(status) = statuses.get(&node.id) {
            let _ = writeln!(out, "  status: {status}");
        }
    }

    let prerequisites = store.prerequisites(&node.id);
    if prerequisites.is_empty() {
        let _ = writeln!(out, "  prerequisites: none (root)");
    } else {
        let _ = writeln!(out, "  prerequisites:");
        for p in prerequisites {
            let _ = writeln!(out, "    - {} ({})", p.title, p.id);
        }
    }

    let children = store.children(&node.id);
    if children.is_empty() {
        let _ = writeln!(out, "  leads to: nothing (leaf)");
    } else {
        let _ = writeln!(out, "  leads to:");
        for c in children {
            let _ = writeln!(out, "    - {} ({})", c.title, c.id);
        }
    }
    out
}

/// Dashboard text for `skillpath summary`.
pub fn summary_text(title: &str, summary: &ProgressSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(
        out,
        "completed {} of {} ({}%)",
        summary.completed,
        summary.total,
        summary.percent_complete.round() as u32
    );
    let _ = writeln!(
        out,
        "unlocked: {}  locked: {}",
        summary.unlocked, summary.locked
    );
    let _ = writeln!(
        out,
        "time completed: {} of {}",
        summary.completed_duration, summary.total_duration
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "by category:");
    for (category, progress) in &summary.by_category {
        let _ = writeln!(
            out,
            "  {category}: {}/{}",
            progress.completed, progress.total
        );
    }
    out
}

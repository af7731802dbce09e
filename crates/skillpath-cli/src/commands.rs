//! Command implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::json;
use tracing::{info, warn};

use skillpath_cli::render;
use skillpath_engine::{NodeQuery, ProgressStore, ProgressSummary, SortKey, resolve_all};
use skillpath_graph::GraphStore;
use skillpath_layout::{connectors, node_anchor};
use skillpath_model::NodeStatus;

use crate::cli::{ListArgs, SortArg};

pub fn run_check(catalog: &Path) -> Result<()> {
    let store = load_store(catalog)?;
    print!("{}", render::check_report(&store));
    Ok(())
}

pub fn run_list(args: &ListArgs) -> Result<()> {
    let store = load_store(&args.catalog)?;

    let sort = match args.sort {
        SortArg::Declaration => SortKey::Declaration,
        SortArg::Title => SortKey::Title,
        SortArg::Difficulty => SortKey::Difficulty,
        SortArg::Status => SortKey::Status,
    };

    // A status column needs resolved statuses; so does the status sort,
    // which falls back to a fresh session when no progress file is given.
    let statuses = if args.progress.is_some() || sort == SortKey::Status {
        let progress = load_progress(args.progress.as_deref())?;
        Some(resolve_all(&store, progress.snapshot()))
    } else {
        None
    };

    let query = NodeQuery {
        text: args.search.clone(),
        category: args.category.clone(),
        difficulty: args.difficulty.map(Into::into),
        level: args.level,
        sort,
    };
    let nodes = query.run(&store, statuses.as_ref());
    println!("{}", render::node_table(&nodes, statuses.as_ref()));
    println!("showing {} of {} nodes", nodes.len(), store.len());
    Ok(())
}

pub fn run_show(catalog: &Path, id: &str, progress: Option<&Path>) -> Result<()> {
    let store = load_store(catalog)?;
    let Some(node) = store.node(id) else {
        bail!("unknown node id: {id}");
    };
    let statuses = match progress {
        Some(path) => {
            let progress = load_progress(Some(path))?;
            Some(resolve_all(&store, progress.snapshot()))
        }
        None => None,
    };
    print!("{}", render::node_detail(&store, node, statuses.as_ref()));
    Ok(())
}

pub fn run_complete(catalog: &Path, id: &str, progress_path: &Path) -> Result<()> {
    let store = load_store(catalog)?;
    if store.node(id).is_none() {
        bail!("unknown node id: {id}");
    }

    let mut progress = load_progress(Some(progress_path))?;
    let before = resolve_all(&store, progress.snapshot());
    progress.mark_complete(id);
    let after = resolve_all(&store, progress.snapshot());

    let contents = progress.to_json().context("serialize progress")?;
    std::fs::write(progress_path, contents)
        .with_context(|| format!("write progress file {}", progress_path.display()))?;

    println!("completed: {id}");
    let newly_unlocked: Vec<&str> = store
        .all_nodes()
        .iter()
        .filter(|n| {
            before.get(&n.id) == Some(&NodeStatus::Locked)
                && after.get(&n.id) == Some(&NodeStatus::Unlocked)
        })
        .map(|n| n.id.as_str())
        .collect();
    for id in &newly_unlocked {
        println!("unlocked: {id}");
    }
    info!(
        completed = id,
        unlocked = newly_unlocked.len(),
        "progress updated"
    );
    Ok(())
}

pub fn run_summary(catalog: &Path, progress: Option<&Path>) -> Result<()> {
    let store = load_store(catalog)?;
    let progress = load_progress(progress)?;
    let summary = ProgressSummary::compute(&store, progress.snapshot());
    print!("{}", render::summary_text(store.title(), &summary));
    Ok(())
}

pub fn run_layout(catalog: &Path, progress: Option<&Path>) -> Result<()> {
    let store = load_store(catalog)?;
    let progress = load_progress(progress)?;
    let statuses = resolve_all(&store, progress.snapshot());

    let anchors: Vec<_> = store
        .all_nodes()
        .iter()
        .map(|n| json!({ "id": n.id, "anchor": node_anchor(n) }))
        .collect();
    let output = json!({
        "nodes": anchors,
        "connectors": connectors(&store, &statuses),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn load_store(catalog: &Path) -> Result<GraphStore> {
    let store = GraphStore::load(catalog)
        .with_context(|| format!("load catalog {}", catalog.display()))?;
    info!(
        catalog = %store.catalog_id(),
        nodes = store.len(),
        "catalog loaded"
    );
    Ok(store)
}

/// Read a progress file; an absent path or missing file is a fresh
/// session.
fn load_progress(path: Option<&Path>) -> Result<ProgressStore> {
    let Some(path) = path else {
        return Ok(ProgressStore::new());
    };
    if !path.exists() {
        warn!(path = %path.display(), "progress file not found, starting fresh");
        return Ok(ProgressStore::new());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read progress file {}", path.display()))?;
    ProgressStore::from_json(&contents)
        .with_context(|| format!("parse progress file {}", path.display()))
}

//! The canonical node/edge store.
//!
//! A `GraphStore` is built once per session from a catalog snapshot and
//! is immutable afterwards. Construction validates the full set of
//! structural invariants and fails fast on the first violation; every
//! accessor after that point is a pure, non-failing read.
//!
//! Prerequisites are the authoritative edge direction. Child lists are
//! derived from them at load time, so the two views cannot drift; when a
//! catalog also authors `children` explicitly, the authored lists are
//! checked against the derived inverse and any asymmetry is fatal.

use std::collections::HashMap;
use std::collections::VecDeque;
use std::path::Path;

use skillpath_model::{CATALOG_VERSION, Catalog, Node};
use tracing::warn;

use crate::error::{GraphError, Result};

#[derive(Debug, Clone)]
pub struct GraphStore {
    catalog_id: String,
    title: String,
    description: String,
    categories: Vec<String>,
    /// Nodes in declaration order, children normalized to the derived view.
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    /// Derived child indices per node, in child declaration order.
    children: Vec<Vec<usize>>,
    /// One valid topological order, computed at construction.
    topo: Vec<usize>,
    /// Graph-derived generation depth per node (roots are 1).
    depth: Vec<u32>,
}

impl GraphStore {
    /// Read and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| GraphError::io(path, e))?;
        Self::from_json(&contents)
    }

    /// Parse and validate a catalog from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Self::from_catalog(catalog)
    }

    /// Validate a catalog and build the store.
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        if catalog.version != CATALOG_VERSION {
            return Err(GraphError::UnsupportedVersion {
                found: catalog.version,
                supported: CATALOG_VERSION,
            });
        }

        let mut nodes = catalog.nodes;
        let index = build_index(&nodes)?;
        validate_attributes(&nodes, &catalog.categories)?;

        let prerequisites = resolve_prerequisites(&nodes, &index)?;
        let children = derive_children(&nodes, &prerequisites);
        verify_authored_children(&nodes, &index, &children)?;

        let topo = topological_sort(&nodes, &prerequisites, &children)?;
        let depth = derive_depths(&topo, &prerequisites);
        for (i, node) in nodes.iter().enumerate() {
            if depth[i] != node.level {
                warn!(
                    node = %node.id,
                    authored = node.level,
                    derived = depth[i],
                    "authored level disagrees with graph depth"
                );
            }
        }

        // Normalize the serialized child view to the derived edge set.
        for i in 0..nodes.len() {
            let ids: Vec<String> =
                children[i].iter().map(|&c| nodes[c].id.clone()).collect();
            nodes[i].children = ids;
        }

        Ok(Self {
            catalog_id: catalog.id,
            title: catalog.title,
            description: catalog.description,
            categories: catalog.categories,
            nodes,
            index,
            children,
            topo,
            depth,
        })
    }

    pub fn catalog_id(&self) -> &str {
        &self.catalog_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id. Absent ids are not an error on query paths.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// All nodes in declaration order.
    pub fn all_nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Resolved prerequisites of a node, in authored declaration order.
    /// Returns an empty list for unknown ids.
    pub fn prerequisites(&self, id: &str) -> Vec<&Node> {
        match self.node(id) {
            Some(node) => node
                .prerequisites
                .iter()
                // References were validated at construction.
                .filter_map(|p| self.node(p))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Resolved children of a node, in child declaration order.
    /// Returns an empty list for unknown ids.
    pub fn children(&self, id: &str) -> Vec<&Node> {
        match self.index.get(id) {
            Some(&i) => self.children[i].iter().map(|&c| &self.nodes[c]).collect(),
            None => Vec::new(),
        }
    }

    /// Nodes with no prerequisites.
    pub fn root_nodes(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.is_root()).collect()
    }

    /// Nodes with no children.
    pub fn leaf_nodes(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(i, _)| self.children[*i].is_empty())
            .map(|(_, n)| n)
            .collect()
    }

    /// Nodes with more than one prerequisite.
    pub fn convergence_nodes(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.is_convergence()).collect()
    }

    /// Nodes with more than one child.
    pub fn branch_nodes(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(i, _)| self.children[*i].len() > 1)
            .map(|(_, n)| n)
            .collect()
    }

    /// Nodes whose authored level equals `level`.
    pub fn nodes_by_level(&self, level: u32) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.level == level).collect()
    }

    /// One valid topological order of the node set.
    pub fn topological_order(&self) -> Vec<&Node> {
        self.topo.iter().map(|&i| &self.nodes[i]).collect()
    }

    /// Graph-derived generation depth (roots are 1). The authored `level`
    /// field is kept as the queryable value; this is the structural truth.
    pub fn derived_depth(&self, id: &str) -> Option<u32> {
        self.index.get(id).map(|&i| self.depth[i])
    }

    /// Every prerequisite edge as a (parent, child) pair, in parent
    /// declaration order.
    pub fn edges(&self) -> Vec<(&Node, &Node)> {
        let mut out = Vec::new();
        for (i, node) in self.nodes.iter().enumerate() {
            for &c in &self.children[i] {
                out.push((node, &self.nodes[c]));
            }
        }
        out
    }

    /// Serialize the node set back to the catalog schema.
    pub fn to_catalog(&self) -> Catalog {
        Catalog {
            version: CATALOG_VERSION,
            id: self.catalog_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            categories: self.categories.clone(),
            nodes: self.nodes.clone(),
        }
    }
}

fn build_index(nodes: &[Node]) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        if index.insert(node.id.clone(), i).is_some() {
            return Err(GraphError::DuplicateNode {
                id: node.id.clone(),
            });
        }
    }
    Ok(index)
}

fn validate_attributes(nodes: &[Node], categories: &[String]) -> Result<()> {
    for node in nodes {
        if node.level < 1 {
            return Err(GraphError::InvalidLevel {
                node: node.id.clone(),
                level: node.level,
            });
        }
        for (axis, value) in [('x', node.position.x), ('y', node.position.y)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(GraphError::InvalidPosition {
                    node: node.id.clone(),
                    axis,
                    value,
                });
            }
        }
        if !categories.is_empty() && !categories.contains(&node.category) {
            return Err(GraphError::UnknownCategory {
                node: node.id.clone(),
                category: node.category.clone(),
            });
        }
    }
    Ok(())
}

/// Resolve each node's prerequisite ids to indices, failing on danglers.
fn resolve_prerequisites(
    nodes: &[Node],
    index: &HashMap<String, usize>,
) -> Result<Vec<Vec<usize>>> {
    let mut resolved = Vec::with_capacity(nodes.len());
    for node in nodes {
        let mut prereqs = Vec::with_capacity(node.prerequisites.len());
        for id in &node.prerequisites {
            let &i = index.get(id).ok_or_else(|| GraphError::DanglingReference {
                node: node.id.clone(),
                reference: id.clone(),
                field: "prerequisites",
            })?;
            prereqs.push(i);
        }
        resolved.push(prereqs);
    }
    Ok(resolved)
}

/// Invert the prerequisite relation. Child order follows the children's
/// own declaration order, which keeps the view deterministic.
fn derive_children(nodes: &[Node], prerequisites: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut children = vec![Vec::new(); nodes.len()];
    for (i, prereqs) in prerequisites.iter().enumerate() {
        for &p in prereqs {
            children[p].push(i);
        }
    }
    children
}

/// When a catalog authors `children` lists, they must agree with the
/// inverse of the prerequisite relation.
fn verify_authored_children(
    nodes: &[Node],
    index: &HashMap<String, usize>,
    derived: &[Vec<usize>],
) -> Result<()> {
    for (i, node) in nodes.iter().enumerate() {
        if node.children.is_empty() {
            continue;
        }
        let mut authored = Vec::with_capacity(node.children.len());
        for id in &node.children {
            let &c = index.get(id).ok_or_else(|| GraphError::DanglingReference {
                node: node.id.clone(),
                reference: id.clone(),
                field: "children",
            })?;
            authored.push(c);
        }
        for &c in &authored {
            if !derived[i].contains(&c) {
                return Err(GraphError::EdgeAsymmetry {
                    parent: node.id.clone(),
                    child: nodes[c].id.clone(),
                    detail: format!(
                        "children of {} lists {} but {} does not list {} as a prerequisite",
                        node.id, nodes[c].id, nodes[c].id, node.id
                    ),
                });
            }
        }
        for &c in &derived[i] {
            if !authored.contains(&c) {
                return Err(GraphError::EdgeAsymmetry {
                    parent: node.id.clone(),
                    child: nodes[c].id.clone(),
                    detail: format!(
                        "{} lists {} as a prerequisite but is missing from {}'s children",
                        nodes[c].id, node.id, node.id
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Kahn's algorithm. Seeding the queue in declaration order makes the
/// resulting order deterministic.
fn topological_sort(
    nodes: &[Node],
    prerequisites: &[Vec<usize>],
    children: &[Vec<usize>],
) -> Result<Vec<usize>> {
    let mut indegree: Vec<usize> = prerequisites.iter().map(Vec::len).collect();
    let mut queue: VecDeque<usize> = (0..nodes.len()).filter(|&i| indegree[i] == 0).collect();
    let mut order = Vec::with_capacity(nodes.len());

    while let Some(i) = queue.pop_front() {
        order.push(i);
        for &c in &children[i] {
            indegree[c] -= 1;
            if indegree[c] == 0 {
                queue.push_back(c);
            }
        }
    }

    if order.len() < nodes.len() {
        let ids = nodes
            .iter()
            .enumerate()
            .filter(|(i, _)| indegree[*i] > 0)
            .map(|(_, n)| n.id.clone())
            .collect();
        return Err(GraphError::Cycle { ids });
    }
    Ok(order)
}

/// Depth of a root is 1; otherwise 1 + max depth of its prerequisites.
/// Walking in topological order guarantees prerequisites come first.
fn derive_depths(topo: &[usize], prerequisites: &[Vec<usize>]) -> Vec<u32> {
    let mut depth = vec![0u32; prerequisites.len()];
    for &i in topo {
        depth[i] = 1 + prerequisites[i]
            .iter()
            .map(|&p| depth[p])
            .max()
            .unwrap_or(0);
    }
    depth
}

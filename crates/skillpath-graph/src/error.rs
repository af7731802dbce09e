use std::path::PathBuf;

/// Fatal integrity errors raised once at graph construction.
///
/// A host receiving any of these must refuse to render: statuses computed
/// over a broken graph are meaningless.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported catalog version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("node {node} references unknown id {reference} in {field}")]
    DanglingReference {
        node: String,
        reference: String,
        field: &'static str,
    },

    #[error("edge asymmetry between {parent} and {child}: {detail}")]
    EdgeAsymmetry {
        parent: String,
        child: String,
        detail: String,
    },

    #[error("prerequisite cycle involving: {}", ids.join(", "))]
    Cycle { ids: Vec<String> },

    #[error("node {node} has invalid level {level} (must be >= 1)")]
    InvalidLevel { node: String, level: u32 },

    #[error("node {node} has position {axis}={value} outside 0..=100")]
    InvalidPosition {
        node: String,
        axis: char,
        value: f64,
    },

    #[error("node {node} has category '{category}' not declared by the catalog")]
    UnknownCategory { node: String, category: String },
}

impl GraphError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

pub mod progress;
pub mod query;
pub mod status;
pub mod summary;

pub use progress::ProgressStore;
pub use query::{NodeQuery, SortKey};
pub use status::{StatusCache, resolve_all, resolve_status};
pub use summary::{CategoryProgress, ProgressSummary};

pub mod catalog;
pub mod difficulty;
pub mod duration;
pub mod error;
pub mod node;
pub mod progress;
pub mod status;

pub use catalog::{CATALOG_VERSION, Catalog};
pub use difficulty::Difficulty;
pub use duration::Duration;
pub use error::{ModelError, Result};
pub use node::{Node, Position};
pub use progress::{ProgressRecord, ProgressSnapshot};
pub use status::NodeStatus;

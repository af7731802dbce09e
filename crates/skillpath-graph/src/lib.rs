pub mod error;
pub mod store;

pub use error::{GraphError, Result};
pub use store::GraphStore;

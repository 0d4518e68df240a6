pub mod courses;

// Re-export commonly used types for convenience.
pub use courses::{LeafMode, NavConfig, NavError, NavRequest, Navigator};

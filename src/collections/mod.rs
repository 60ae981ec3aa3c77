//! Collections with explicit control over their memory growth.
//!
//! Collections are organized by data structure type:
//! - `vec`: Vector and vector-like collections

pub mod vec;

// Re-export commonly used types from submodules
pub use vec::{GrowableArray, GrowthConfig, IndexOutOfRange};

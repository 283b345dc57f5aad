//! System naming
//!
//! Assigns de-duplicated display names to the systems of an effect graph.
//! Systems sharing a base name are told apart by a ` (N)` suffix, where `N` is
//! the lowest index still free within that name group.

pub mod config;
pub mod index;
mod system_names;

pub use config::NamerConfig;
pub use index::{extract_index, format_indexed_name, lowest_free_index, split_index_suffix};
pub use system_names::SystemNamer;

use crate::value_objects::ModelId;

/// Errors that can occur while naming systems
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SystemNameError {
    #[error("Model not found: {0}")]
    ModelNotFound(ModelId),

    #[error("Model not associated to a system: {0}")]
    NotASystem(ModelId),

    #[error("System not registered: {0}")]
    NotRegistered(ModelId),
}

/// Result type for naming operations
pub type NameResult<T> = Result<T, SystemNameError>;

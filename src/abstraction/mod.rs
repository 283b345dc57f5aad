//! Graph abstraction layer that lets the system namer work with any effect
//! graph implementation through a single traversal and lookup interface.

use crate::components::Model;
use crate::value_objects::ModelId;

/// Errors that can occur in graph operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphOperationError {
    #[error("Model not found: {0}")]
    ModelNotFound(ModelId),

    #[error("Model is not a context: {0}")]
    NotAContext(ModelId),

    #[error("Model is not a data container: {0}")]
    NotData(ModelId),

    #[error("Model cannot depend on itself: {0}")]
    SelfDependency(ModelId),

    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphOperationError>;

/// Trait that every graph handed to the system namer must implement
pub trait SystemGraph {
    /// Collect every model reachable from the graph.
    ///
    /// Each model appears once and the order is stable for an unmodified graph.
    fn collect_dependencies(&self) -> Vec<ModelId>;

    /// Get a model by ID
    fn model(&self, id: ModelId) -> Option<&Model>;

    /// Get a mutable model by ID
    fn model_mut(&mut self, id: ModelId) -> Option<&mut Model>;
}

//! System names for visual effect graphs
//!
//! An effect graph groups its contexts into systems: every spawner context is a
//! system, and every other context belongs to the system of the data container
//! it processes. This crate gives each system a display name that is unique
//! within the graph, reusing the lowest free ` (N)` suffix when several systems
//! share a base name.

pub mod abstraction;
pub mod aggregate;
pub mod components;
pub mod naming;
pub mod value_objects;

// Re-export main types
pub use abstraction::{GraphOperationError, GraphResult, SystemGraph};
pub use aggregate::ModelGraph;
pub use components::{ContextModel, DataModel, Model, ModelKind, OperatorModel, SystemRole};
pub use naming::{NameResult, NamerConfig, SystemNameError, SystemNamer};
pub use value_objects::{ContextType, ModelId, DEFAULT_SYSTEM_NAME};

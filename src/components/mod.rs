//! Model components for the effect graph
//!
//! Components represent the data/state of the models a graph holds.

pub mod model;

pub use model::{ContextModel, DataModel, Model, ModelKind, OperatorModel, SystemRole};

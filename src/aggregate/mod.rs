//! Graph aggregates

pub mod model_graph;

pub use model_graph::*;

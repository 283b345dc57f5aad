//! Graph value objects
//!
//! Value objects are immutable types that represent concepts in the effect graph.
//! They are compared by value rather than identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Label shown for systems whose base name is empty
pub const DEFAULT_SYSTEM_NAME: &str = "System";

/// Stable handle to a model stored in a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModelId(Uuid);

impl ModelId {
    /// Create a new random model ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stage a context occupies in an effect pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextType {
    /// Event entry point
    Event,
    /// Spawner driving particle emission
    Spawner,
    /// Particle initialization
    Init,
    /// Per-frame particle update
    Update,
    /// Rendering output
    Output,
}

impl ContextType {
    /// Parse a context type from a string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "event" => Some(ContextType::Event),
            "spawner" => Some(ContextType::Spawner),
            "init" | "initialize" => Some(ContextType::Init),
            "update" => Some(ContextType::Update),
            "output" => Some(ContextType::Output),
            _ => None,
        }
    }

    /// Get the string representation of the context type
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextType::Event => "event",
            ContextType::Spawner => "spawner",
            ContextType::Init => "init",
            ContextType::Update => "update",
            ContextType::Output => "output",
        }
    }

    /// Spawners are systems in their own right
    pub fn is_spawner(&self) -> bool {
        matches!(self, ContextType::Spawner)
    }
}

impl fmt::Display for ContextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

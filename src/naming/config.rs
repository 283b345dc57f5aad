//! System namer configuration

use crate::value_objects::DEFAULT_SYSTEM_NAME;
use serde::{Deserialize, Serialize};

/// Configuration for [`SystemNamer`](super::SystemNamer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamerConfig {
    /// Label used for systems with an empty base name.
    ///
    /// Systems explicitly named with this label share a group with unnamed ones.
    pub default_name: String,
}

impl Default for NamerConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_SYSTEM_NAME.to_string(),
        }
    }
}

impl NamerConfig {
    /// Load a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The default label, never empty
    pub fn default_name(&self) -> &str {
        if self.default_name.is_empty() {
            DEFAULT_SYSTEM_NAME
        } else {
            &self.default_name
        }
    }
}

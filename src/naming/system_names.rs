//! Registry of system indices for one graph view

use super::index::{format_indexed_name, lowest_free_index, split_index_suffix};
use super::{NameResult, NamerConfig, SystemNameError};
use crate::abstraction::SystemGraph;
use crate::components::{Model, SystemRole};
use crate::value_objects::ModelId;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// Assigns unique display names to the systems of a graph.
///
/// The registry is rebuilt from scratch by [`SystemNamer::sync`]; it is not
/// patched when the graph changes, so callers sync again after structural
/// edits or renames.
#[derive(Debug, Clone, Default)]
pub struct SystemNamer {
    config: NamerConfig,
    system_to_index: IndexMap<ModelId, u32>,
}

impl SystemNamer {
    /// Create an empty namer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NamerConfig) -> Self {
        Self {
            config,
            system_to_index: IndexMap::new(),
        }
    }

    pub fn config(&self) -> &NamerConfig {
        &self.config
    }

    /// Base name of a system, read from the model that stores it
    pub fn try_system_name<'g, G>(graph: &'g G, id: ModelId) -> NameResult<&'g str>
    where
        G: SystemGraph + ?Sized,
    {
        let owner = Self::resolve_owner(graph, id)?;
        graph
            .model(owner)
            .map(Model::label)
            .ok_or(SystemNameError::ModelNotFound(owner))
    }

    /// Base name of a system, or `None` (logged) when the model is not a system
    pub fn system_name<G>(graph: &G, id: ModelId) -> Option<String>
    where
        G: SystemGraph + ?Sized,
    {
        match Self::try_system_name(graph, id) {
            Ok(name) => Some(name.to_string()),
            Err(err) => {
                tracing::error!("Failed to read system name: {}", err);
                None
            }
        }
    }

    /// Write the base name of a system. No uniqueness is enforced here.
    pub fn try_set_system_name<G>(graph: &mut G, id: ModelId, name: impl Into<String>) -> NameResult<()>
    where
        G: SystemGraph + ?Sized,
    {
        let owner = Self::resolve_owner(&*graph, id)?;
        let model = graph
            .model_mut(owner)
            .ok_or(SystemNameError::ModelNotFound(owner))?;
        model.set_label(name);
        tracing::debug!("System {} renamed to {:?}", id, model.label());
        Ok(())
    }

    /// Write the base name of a system; logs and does nothing when the model is not a system
    pub fn set_system_name<G>(graph: &mut G, id: ModelId, name: impl Into<String>)
    where
        G: SystemGraph + ?Sized,
    {
        if let Err(err) = Self::try_set_system_name(graph, id, name) {
            tracing::error!("Failed to write system name: {}", err);
        }
    }

    /// Display name of a registered system
    pub fn try_unique_system_name<G>(&self, graph: &G, id: ModelId) -> NameResult<String>
    where
        G: SystemGraph + ?Sized,
    {
        let index = self
            .index_of(id)
            .ok_or(SystemNameError::NotRegistered(id))?;
        let base = Self::try_system_name(graph, id)?;
        let base = if base.is_empty() {
            self.config.default_name()
        } else {
            base
        };
        Ok(format_indexed_name(base, index))
    }

    /// Display name of a system.
    ///
    /// Falls back to the raw base name (logged) when the system is not registered.
    pub fn unique_system_name<G>(&self, graph: &G, id: ModelId) -> Option<String>
    where
        G: SystemGraph + ?Sized,
    {
        match self.try_unique_system_name(graph, id) {
            Ok(name) => Some(name),
            Err(err) => {
                tracing::error!("Failed to compute unique system name: {}", err);
                Self::system_name(graph, id)
            }
        }
    }

    /// Display names of every registered system, in registration order
    pub fn unique_system_names<G>(&self, graph: &G) -> Vec<(ModelId, String)>
    where
        G: SystemGraph + ?Sized,
    {
        self.system_to_index
            .keys()
            .filter_map(|&id| Some((id, self.unique_system_name(graph, id)?)))
            .collect()
    }

    /// Rebuild the registry from the systems currently reachable in `graph`.
    ///
    /// Returns the number of registered systems.
    pub fn sync<G>(&mut self, graph: &G) -> usize
    where
        G: SystemGraph + ?Sized,
    {
        let systems: IndexSet<ModelId> = graph
            .collect_dependencies()
            .into_iter()
            .filter_map(|id| Self::system_of(graph, id))
            .collect();

        let named: Vec<(ModelId, String)> = systems
            .into_iter()
            .map(|system| {
                let name = Self::try_system_name(graph, system).unwrap_or_else(|err| {
                    tracing::error!("System without a readable name: {}", err);
                    ""
                });
                (system, self.group_key(name).to_string())
            })
            .collect();

        // A base name such as "Fire (2)" already displays as index 2 of "Fire"
        let mut used_by_group: HashMap<String, Vec<u32>> = HashMap::new();
        for (_, key) in &named {
            if let (base, Some(index)) = split_index_suffix(key) {
                let group = self.group_key(base);
                if index > 0 && format_indexed_name(group, index) == *key {
                    used_by_group.entry(group.to_string()).or_default().push(index);
                }
            }
        }

        self.system_to_index.clear();
        for (system, key) in named {
            let used = used_by_group.entry(key).or_default();
            let index = lowest_free_index(used);
            used.push(index);
            self.system_to_index.insert(system, index);
        }

        tracing::debug!(
            "System names synced: {} systems in {} groups",
            self.system_to_index.len(),
            used_by_group.len()
        );
        self.system_to_index.len()
    }

    /// Index assigned to a system by the last sync
    pub fn index_of(&self, id: ModelId) -> Option<u32> {
        self.system_to_index.get(&id).copied()
    }

    pub fn is_registered(&self, id: ModelId) -> bool {
        self.system_to_index.contains_key(&id)
    }

    /// Registered systems in registration order
    pub fn systems(&self) -> impl Iterator<Item = ModelId> + '_ {
        self.system_to_index.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.system_to_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.system_to_index.is_empty()
    }

    pub fn clear(&mut self) {
        self.system_to_index.clear();
    }

    /// Empty names and the default label share one group
    fn group_key<'a>(&'a self, name: &'a str) -> &'a str {
        let default_name = self.config.default_name();
        if name.is_empty() || name == default_name {
            default_name
        } else {
            name
        }
    }

    /// System a reachable model stands for, if any.
    ///
    /// Spawner contexts are systems themselves; other contexts are represented by
    /// their data container.
    fn system_of<G>(graph: &G, id: ModelId) -> Option<ModelId>
    where
        G: SystemGraph + ?Sized,
    {
        let context = graph.model(id)?.as_context()?;
        if context.context_type.is_spawner() {
            return Some(id);
        }
        context
            .data
            .filter(|data| graph.model(*data).is_some_and(Model::is_data))
    }

    /// Model holding the system name of `id`
    fn resolve_owner<G>(graph: &G, id: ModelId) -> NameResult<ModelId>
    where
        G: SystemGraph + ?Sized,
    {
        let model = graph.model(id).ok_or(SystemNameError::ModelNotFound(id))?;
        match model.system_role() {
            SystemRole::Owner => Ok(id),
            SystemRole::Delegate(data) if graph.model(data).is_some_and(Model::is_data) => Ok(data),
            SystemRole::Delegate(_) | SystemRole::Unassigned => Err(SystemNameError::NotASystem(id)),
        }
    }
}

//! Model graph aggregate
//!
//! An arena of effect graph models plus the dependency edges between them.
//! Models are addressed by [`ModelId`] handles; the dependency structure is a
//! petgraph stable graph rooted at the graph itself, so removing a model never
//! invalidates the handles of the others.

use crate::abstraction::{GraphOperationError, GraphResult, SystemGraph};
use crate::components::{Model, ModelKind};
use crate::value_objects::{ContextType, ModelId};
use indexmap::IndexMap;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::Dfs;
use std::collections::HashMap;

/// In-memory effect graph
#[derive(Debug, Clone)]
pub struct ModelGraph {
    /// Graph ID, also the weight of the root node
    id: ModelId,

    /// Human-readable graph name
    name: String,

    /// Models in insertion order
    models: IndexMap<ModelId, Model>,

    /// Dependency edges, parent -> child
    dependencies: StableDiGraph<ModelId, ()>,

    /// Handle to node index lookup
    indices: HashMap<ModelId, NodeIndex>,

    root: NodeIndex,
}

impl ModelGraph {
    /// Create an empty graph
    pub fn new(name: impl Into<String>) -> Self {
        let id = ModelId::new();
        let mut dependencies = StableDiGraph::new();
        let root = dependencies.add_node(id);
        Self {
            id,
            name: name.into(),
            models: IndexMap::new(),
            dependencies,
            indices: HashMap::new(),
            root,
        }
    }

    /// Get the graph ID
    pub fn id(&self) -> ModelId {
        self.id
    }

    /// Get the graph name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of models in the graph
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn contains(&self, id: ModelId) -> bool {
        self.models.contains_key(&id)
    }

    /// Iterate over all models in insertion order
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Add a model as a direct child of the graph
    pub fn insert(&mut self, model: Model) -> ModelId {
        let id = model.id;
        let index = self.dependencies.add_node(id);
        self.dependencies.add_edge(self.root, index, ());
        self.indices.insert(id, index);
        self.models.insert(id, model);
        id
    }

    /// Add a data container
    pub fn add_data(&mut self, title: impl Into<String>) -> ModelId {
        self.insert(Model::data(title))
    }

    /// Add a context without attached data
    pub fn add_context(&mut self, context_type: ContextType, label: impl Into<String>) -> ModelId {
        self.insert(Model::context(context_type, label))
    }

    /// Add a model that never forms a system
    pub fn add_operator(&mut self, name: impl Into<String>) -> ModelId {
        self.insert(Model::operator(name))
    }

    /// Record that `parent` depends on `child`.
    ///
    /// The graph ID is accepted as a parent. Adding an existing dependency is a no-op.
    pub fn add_dependency(&mut self, parent: ModelId, child: ModelId) -> GraphResult<()> {
        if parent == child {
            return Err(GraphOperationError::SelfDependency(parent));
        }
        let parent_index = self.node_index(parent)?;
        let child_index = self.node_index(child)?;
        if self.dependencies.find_edge(parent_index, child_index).is_none() {
            self.dependencies.add_edge(parent_index, child_index, ());
        }
        Ok(())
    }

    /// Attach a data container to a context, replacing any previous attachment
    pub fn attach_data(&mut self, context: ModelId, data: ModelId) -> GraphResult<()> {
        match self.models.get(&data) {
            Some(model) if model.is_data() => {}
            Some(_) => return Err(GraphOperationError::NotData(data)),
            None => return Err(GraphOperationError::ModelNotFound(data)),
        }

        let previous = self.detach_data(context)?;
        if let Some(model) = self.models.get_mut(&context).and_then(Model::as_context_mut) {
            model.data = Some(data);
        }
        self.add_dependency(context, data)?;

        tracing::debug!("Data {} attached to context {} (previous: {:?})", data, context, previous);
        Ok(())
    }

    /// Detach the data container of a context, returning it
    pub fn detach_data(&mut self, context: ModelId) -> GraphResult<Option<ModelId>> {
        let model = self
            .models
            .get_mut(&context)
            .ok_or(GraphOperationError::ModelNotFound(context))?
            .as_context_mut()
            .ok_or(GraphOperationError::NotAContext(context))?;

        let previous = model.data.take();
        if let Some(data) = previous {
            if let (Some(&from), Some(&to)) = (self.indices.get(&context), self.indices.get(&data)) {
                if let Some(edge) = self.dependencies.find_edge(from, to) {
                    self.dependencies.remove_edge(edge);
                }
            }
        }
        Ok(previous)
    }

    /// Remove a model and every reference contexts hold to it
    pub fn remove_model(&mut self, id: ModelId) -> GraphResult<Model> {
        let model = self
            .models
            .shift_remove(&id)
            .ok_or(GraphOperationError::ModelNotFound(id))?;

        if let Some(index) = self.indices.remove(&id) {
            self.dependencies.remove_node(index);
        }

        if let ModelKind::Data(_) = model.kind {
            for context in self.models.values_mut().filter_map(Model::as_context_mut) {
                if context.data == Some(id) {
                    context.data = None;
                }
            }
        }

        tracing::debug!("Model removed: {}", id);
        Ok(model)
    }

    fn node_index(&self, id: ModelId) -> GraphResult<NodeIndex> {
        if id == self.id {
            return Ok(self.root);
        }
        self.indices
            .get(&id)
            .copied()
            .ok_or(GraphOperationError::ModelNotFound(id))
    }
}

impl SystemGraph for ModelGraph {
    fn collect_dependencies(&self) -> Vec<ModelId> {
        let mut collected = Vec::with_capacity(self.models.len());
        let mut dfs = Dfs::new(&self.dependencies, self.root);
        while let Some(index) = dfs.next(&self.dependencies) {
            if index != self.root {
                collected.push(self.dependencies[index]);
            }
        }
        collected
    }

    fn model(&self, id: ModelId) -> Option<&Model> {
        self.models.get(&id)
    }

    fn model_mut(&mut self, id: ModelId) -> Option<&mut Model> {
        self.models.get_mut(&id)
    }
}

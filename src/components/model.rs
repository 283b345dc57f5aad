//! Model variants stored in an effect graph

use crate::value_objects::{ContextType, ModelId};
use serde::{Deserialize, Serialize};

/// A model in the effect graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: ModelId,
    pub kind: ModelKind,
}

/// Closed set of model variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    /// Data container shared by the contexts of one system
    Data(DataModel),
    /// Pipeline stage
    Context(ContextModel),
    /// Anything else reachable from the graph (operators, blocks, parameters)
    Operator(OperatorModel),
}

/// Data container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataModel {
    pub title: String,
}

/// Context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextModel {
    pub context_type: ContextType,
    pub label: String,
    /// Data container this context processes, if attached
    pub data: Option<ModelId>,
}

/// Non-system model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorModel {
    pub name: String,
}

/// Where a model's system name is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemRole {
    /// The model carries its own system name
    Owner,
    /// The system name lives on the attached data container
    Delegate(ModelId),
    /// Not part of any system
    Unassigned,
}

impl Model {
    /// Create a data container
    pub fn data(title: impl Into<String>) -> Self {
        Self {
            id: ModelId::new(),
            kind: ModelKind::Data(DataModel { title: title.into() }),
        }
    }

    /// Create a context without attached data
    pub fn context(context_type: ContextType, label: impl Into<String>) -> Self {
        Self {
            id: ModelId::new(),
            kind: ModelKind::Context(ContextModel {
                context_type,
                label: label.into(),
                data: None,
            }),
        }
    }

    /// Create an operator
    pub fn operator(name: impl Into<String>) -> Self {
        Self {
            id: ModelId::new(),
            kind: ModelKind::Operator(OperatorModel { name: name.into() }),
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self.kind, ModelKind::Data(_))
    }

    pub fn is_context(&self) -> bool {
        matches!(self.kind, ModelKind::Context(_))
    }

    /// Context fields, if this model is a context
    pub fn as_context(&self) -> Option<&ContextModel> {
        match &self.kind {
            ModelKind::Context(context) => Some(context),
            _ => None,
        }
    }

    pub fn as_context_mut(&mut self) -> Option<&mut ContextModel> {
        match &mut self.kind {
            ModelKind::Context(context) => Some(context),
            _ => None,
        }
    }

    /// Resolve where this model's system name is stored
    pub fn system_role(&self) -> SystemRole {
        match &self.kind {
            ModelKind::Data(_) => SystemRole::Owner,
            ModelKind::Context(context) if context.context_type.is_spawner() => SystemRole::Owner,
            ModelKind::Context(ContextModel { data: Some(data), .. }) => SystemRole::Delegate(*data),
            _ => SystemRole::Unassigned,
        }
    }

    /// Backing label of the variant
    pub fn label(&self) -> &str {
        match &self.kind {
            ModelKind::Data(data) => &data.title,
            ModelKind::Context(context) => &context.label,
            ModelKind::Operator(operator) => &operator.name,
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        match &mut self.kind {
            ModelKind::Data(data) => data.title = label,
            ModelKind::Context(context) => context.label = label,
            ModelKind::Operator(operator) => operator.name = label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_roles() {
        let data = Model::data("Fire");
        assert_eq!(data.system_role(), SystemRole::Owner);

        let spawner = Model::context(ContextType::Spawner, "Burst");
        assert_eq!(spawner.system_role(), SystemRole::Owner);

        let mut init = Model::context(ContextType::Init, "");
        assert_eq!(init.system_role(), SystemRole::Unassigned);
        if let Some(context) = init.as_context_mut() {
            context.data = Some(data.id);
        }
        assert_eq!(init.system_role(), SystemRole::Delegate(data.id));

        assert_eq!(Model::operator("Add").system_role(), SystemRole::Unassigned);
    }

    #[test]
    fn test_spawner_keeps_its_own_name_with_data() {
        let mut spawner = Model::context(ContextType::Spawner, "Burst");
        if let Some(context) = spawner.as_context_mut() {
            context.data = Some(ModelId::new());
        }
        assert_eq!(spawner.system_role(), SystemRole::Owner);
    }

    #[test]
    fn test_label_follows_variant() {
        let mut data = Model::data("Smoke");
        data.set_label("Dust");
        assert_eq!(data.label(), "Dust");
        assert_eq!(data.kind, ModelKind::Data(DataModel { title: "Dust".to_string() }));

        let mut context = Model::context(ContextType::Output, "Quad");
        context.set_label("Mesh");
        assert_eq!(context.as_context().map(|c| c.label.as_str()), Some("Mesh"));
    }
}

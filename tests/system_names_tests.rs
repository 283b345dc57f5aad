//! System naming integration tests

use proptest::prelude::*;
use std::collections::HashSet;
use vfx_system_names::{
    ContextType, Model, ModelGraph, ModelId, SystemGraph, SystemNamer,
};

/// Builds a graph with one system per title. Titles starting with `!` become spawners.
fn build_graph(titles: &[String]) -> (ModelGraph, Vec<ModelId>) {
    let mut graph = ModelGraph::new("Effect");
    let mut systems = Vec::new();
    for title in titles {
        if let Some(label) = title.strip_prefix('!') {
            systems.push(graph.add_context(ContextType::Spawner, label));
        } else {
            let data = graph.add_data(title.as_str());
            let init = graph.add_context(ContextType::Init, "");
            let output = graph.add_context(ContextType::Output, "");
            graph.attach_data(init, data).unwrap();
            graph.attach_data(output, data).unwrap();
            systems.push(data);
        }
    }
    (graph, systems)
}

fn sorted_names(namer: &SystemNamer, graph: &ModelGraph) -> Vec<String> {
    let mut names: Vec<String> = namer
        .unique_system_names(graph)
        .into_iter()
        .map(|(_, name)| name)
        .collect();
    names.sort();
    names
}

#[test]
fn test_effect_graph_naming() {
    let mut graph = ModelGraph::new("Campfire");
    let spawner = graph.add_context(ContextType::Spawner, "");
    let fire = graph.add_data("Fire");
    let smoke = graph.add_data("");
    for data in [fire, smoke] {
        let init = graph.add_context(ContextType::Init, "");
        graph.add_dependency(spawner, init).unwrap();
        graph.attach_data(init, data).unwrap();
    }
    graph.add_operator("Random Number");

    let mut namer = SystemNamer::new();
    assert_eq!(namer.sync(&graph), 3);
    assert_eq!(sorted_names(&namer, &graph), vec!["Fire", "System", "System (1)"]);

    SystemNamer::set_system_name(&mut graph, smoke, "Smoke");
    namer.sync(&graph);
    assert_eq!(namer.unique_system_name(&graph, smoke).as_deref(), Some("Smoke"));
    assert_eq!(namer.unique_system_name(&graph, spawner).as_deref(), Some("System"));
}

#[test]
fn test_unattached_data_is_not_a_system() {
    let mut graph = ModelGraph::new("Effect");
    let data = graph.add_data("Loose");

    let mut namer = SystemNamer::new();
    assert_eq!(namer.sync(&graph), 0);
    assert!(!namer.is_registered(data));
    assert_eq!(SystemNamer::system_name(&graph, data).as_deref(), Some("Loose"));
}

#[test]
fn test_unreachable_contexts_are_ignored() {
    struct Partial {
        inner: ModelGraph,
        visible: Vec<ModelId>,
    }

    impl SystemGraph for Partial {
        fn collect_dependencies(&self) -> Vec<ModelId> {
            self.visible.clone()
        }

        fn model(&self, id: ModelId) -> Option<&Model> {
            self.inner.model(id)
        }

        fn model_mut(&mut self, id: ModelId) -> Option<&mut Model> {
            self.inner.model_mut(id)
        }
    }

    let (inner, systems) = build_graph(&["!Burst".to_string(), "!Burst".to_string()]);
    let graph = Partial {
        visible: vec![systems[1]],
        inner,
    };

    let mut namer = SystemNamer::new();
    assert_eq!(namer.sync(&graph), 1);
    assert_eq!(namer.unique_system_name(&graph, systems[1]).as_deref(), Some("Burst"));
    assert_eq!(namer.index_of(systems[0]), None);
}

proptest! {
    #[test]
    fn display_names_are_unique(
        titles in prop::collection::vec(prop::sample::select(vec![
            "", "System", "System (1)", "Fire", "Fire (1)", "Smoke", "!Burst", "!", "!Fire",
        ]), 0..24)
    ) {
        let titles: Vec<String> = titles.into_iter().map(str::to_string).collect();
        let (graph, systems) = build_graph(&titles);

        let mut namer = SystemNamer::new();
        prop_assert_eq!(namer.sync(&graph), systems.len());

        let names: Vec<String> = namer
            .unique_system_names(&graph)
            .into_iter()
            .map(|(_, name)| name)
            .collect();
        let unique: HashSet<&String> = names.iter().collect();
        prop_assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn sole_member_has_no_suffix(title in "[A-Za-z][A-Za-z ]{0,12}") {
        prop_assume!(title != "Other Group");
        let (graph, systems) = build_graph(&[title.clone(), "Other Group".to_string()]);

        let mut namer = SystemNamer::new();
        namer.sync(&graph);
        prop_assert_eq!(namer.unique_system_name(&graph, systems[0]), Some(title));
    }

    #[test]
    fn resync_keeps_name_multiset(
        titles in prop::collection::vec(prop::sample::select(vec!["Fire", "Smoke", "System", ""]), 0..16)
    ) {
        let titles: Vec<String> = titles.into_iter().map(str::to_string).collect();
        let (graph, _) = build_graph(&titles);

        let mut namer = SystemNamer::new();
        namer.sync(&graph);
        let first = sorted_names(&namer, &graph);
        namer.sync(&graph);
        prop_assert_eq!(first, sorted_names(&namer, &graph));
    }
}

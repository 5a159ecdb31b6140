use super::builder::WorkflowDefinition;
use super::types::NodeKind;

/// 拓扑排序；图中有环时返回 None
pub fn topological_sort(def: &WorkflowDefinition) -> Option<Vec<NodeKind>> {
    let sorted = petgraph::algo::toposort(&def.graph, None).ok()?;

    Some(
        sorted
            .into_iter()
            .filter_map(|idx| def.graph.node_weight(idx).map(|n| n.kind))
            .collect(),
    )
}

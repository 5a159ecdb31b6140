use crate::error::WorkflowError;
use crate::evaluator::{route, Label};

use super::builder::WorkflowDefinition;
use super::types::{EdgeType, NodeKind};

/// 验证图的合法性
pub fn validate_graph(def: &WorkflowDefinition) -> Result<(), WorkflowError> {
    let graph = &def.graph;

    // 1. 检测环（DAG 验证）
    if petgraph::algo::is_cyclic_directed(graph) {
        return Err(WorkflowError::CycleDetected);
    }

    // 2. 检查孤立节点（没有入边也没有出边的非 start/end 节点）
    for idx in graph.node_indices() {
        if let Some(node) = graph.node_weight(idx) {
            if node.kind != NodeKind::Start && node.kind != NodeKind::End {
                let in_degree = graph
                    .neighbors_directed(idx, petgraph::Direction::Incoming)
                    .count();
                let out_degree = graph
                    .neighbors_directed(idx, petgraph::Direction::Outgoing)
                    .count();

                if in_degree == 0 && out_degree == 0 {
                    return Err(WorkflowError::GraphValidationError(format!(
                        "Isolated node detected: {}",
                        node.kind
                    )));
                }
            }
        }
    }

    // 3. 每个标签恰好一条条件边，且目标与 route 一致
    for label in Label::ALL {
        let targets: Vec<NodeKind> = graph
            .edge_indices()
            .filter_map(|e| graph.edge_weight(e))
            .filter(|e| e.source == NodeKind::Evaluator)
            .filter(|e| e.edge_type == EdgeType::Conditional(label))
            .map(|e| e.target)
            .collect();

        match targets.as_slice() {
            [target] if *target == route(label) => {}
            [target] => {
                return Err(WorkflowError::GraphValidationError(format!(
                    "Branch '{}' targets {}, expected {}",
                    label,
                    target,
                    route(label)
                )));
            }
            [] => {
                return Err(WorkflowError::GraphValidationError(format!(
                    "Missing branch for label '{}'",
                    label
                )));
            }
            _ => {
                return Err(WorkflowError::GraphValidationError(format!(
                    "Ambiguous branch for label '{}': {} targets",
                    label,
                    targets.len()
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::{build_graph, Transition, TRANSITIONS};

    #[test]
    fn test_validate_built_graph() {
        assert!(validate_graph(&build_graph()).is_ok());
    }

    #[test]
    fn test_detect_cycle() {
        let mut transitions = TRANSITIONS.to_vec();
        transitions.push(Transition {
            source: NodeKind::HighHandler,
            target: NodeKind::Evaluator,
            edge_type: EdgeType::Normal,
        });
        let def = WorkflowDefinition::from_transitions(&transitions);

        assert!(matches!(
            validate_graph(&def),
            Err(WorkflowError::CycleDetected)
        ));
    }

    #[test]
    fn test_detect_isolated_node() {
        let transitions: Vec<Transition> = TRANSITIONS
            .iter()
            .copied()
            .filter(|t| t.source != NodeKind::LowHandler && t.target != NodeKind::LowHandler)
            .collect();
        let def = WorkflowDefinition::from_transitions(&transitions);

        let err = validate_graph(&def).unwrap_err();
        assert!(err.to_string().contains("low_handler"));
    }

    #[test]
    fn test_detect_misrouted_branch() {
        let transitions: Vec<Transition> = TRANSITIONS
            .iter()
            .map(|t| match t.edge_type {
                EdgeType::Conditional(Label::High) => Transition {
                    target: NodeKind::LowHandler,
                    ..*t
                },
                EdgeType::Conditional(Label::Low) => Transition {
                    target: NodeKind::HighHandler,
                    ..*t
                },
                EdgeType::Normal => *t,
            })
            .collect();
        let def = WorkflowDefinition::from_transitions(&transitions);

        let err = validate_graph(&def).unwrap_err();
        assert!(matches!(err, WorkflowError::GraphValidationError(_)));
        assert!(err.to_string().contains("expected high_handler"));
    }

    #[test]
    fn test_detect_missing_branch() {
        let transitions: Vec<Transition> = TRANSITIONS
            .iter()
            .copied()
            .filter(|t| t.edge_type != EdgeType::Conditional(Label::Low))
            .chain(std::iter::once(Transition {
                source: NodeKind::Evaluator,
                target: NodeKind::LowHandler,
                edge_type: EdgeType::Normal,
            }))
            .collect();
        let def = WorkflowDefinition::from_transitions(&transitions);

        let err = validate_graph(&def).unwrap_err();
        assert!(err.to_string().contains("Missing branch for label 'low'"));
    }
}

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;

use crate::error::WorkflowError;
use crate::evaluator::{route, Label};

use super::types::*;

/// 静态转移表中的一条边
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub source: NodeKind,
    pub target: NodeKind,
    pub edge_type: EdgeType,
}

impl Transition {
    const fn normal(source: NodeKind, target: NodeKind) -> Self {
        Transition {
            source,
            target,
            edge_type: EdgeType::Normal,
        }
    }

    const fn conditional(source: NodeKind, target: NodeKind, label: Label) -> Self {
        Transition {
            source,
            target,
            edge_type: EdgeType::Conditional(label),
        }
    }
}

/// Start → Evaluator → {HighHandler | LowHandler} → End
pub const TRANSITIONS: [Transition; 5] = [
    Transition::normal(NodeKind::Start, NodeKind::Evaluator),
    Transition::conditional(NodeKind::Evaluator, NodeKind::HighHandler, Label::High),
    Transition::conditional(NodeKind::Evaluator, NodeKind::LowHandler, Label::Low),
    Transition::normal(NodeKind::HighHandler, NodeKind::End),
    Transition::normal(NodeKind::LowHandler, NodeKind::End),
];

/// 给定当前节点和评估结果，返回下一个节点；到达 End 后返回 None
///
/// 与 [`TRANSITIONS`] 描述同一张表，执行时不需要查图。
pub fn next_node(from: NodeKind, label: Option<Label>) -> Option<NodeKind> {
    match from {
        NodeKind::Start => Some(NodeKind::Evaluator),
        NodeKind::Evaluator => label.map(route),
        NodeKind::HighHandler | NodeKind::LowHandler => Some(NodeKind::End),
        NodeKind::End => None,
    }
}

/// 工作流定义 - 编译后的不可变图结构
#[derive(Debug)]
pub struct WorkflowDefinition {
    /// 图结构
    pub graph: StableDiGraph<GraphNode, GraphEdge>,

    /// 开始节点索引
    pub start_node_idx: NodeIndex,

    /// 结束节点索引
    pub end_node_idx: NodeIndex,

    node_index_map: HashMap<NodeKind, NodeIndex>,
}

impl WorkflowDefinition {
    /// 从转移表构建图；所有 [`NodeKind`] 都会成为节点，即使没有边
    pub fn from_transitions(transitions: &[Transition]) -> Self {
        let mut graph = StableDiGraph::<GraphNode, GraphEdge>::new();
        let mut node_index_map = HashMap::new();

        for kind in NodeKind::ALL {
            let idx = graph.add_node(GraphNode {
                kind,
                title: default_title(kind).to_string(),
            });
            node_index_map.insert(kind, idx);
        }

        for t in transitions {
            let source = node_index_map[&t.source];
            let target = node_index_map[&t.target];
            graph.add_edge(
                source,
                target,
                GraphEdge {
                    source: t.source,
                    target: t.target,
                    edge_type: t.edge_type,
                },
            );
        }

        WorkflowDefinition {
            graph,
            start_node_idx: node_index_map[&NodeKind::Start],
            end_node_idx: node_index_map[&NodeKind::End],
            node_index_map,
        }
    }

    fn index_of(&self, kind: NodeKind) -> Result<NodeIndex, WorkflowError> {
        self.node_index_map
            .get(&kind)
            .copied()
            .ok_or_else(|| WorkflowError::NodeNotFound(kind.to_string()))
    }

    /// 根据节点类型获取图节点
    pub fn get_node(&self, kind: NodeKind) -> Result<&GraphNode, WorkflowError> {
        let idx = self.index_of(kind)?;
        self.graph
            .node_weight(idx)
            .ok_or_else(|| WorkflowError::NodeNotFound(kind.to_string()))
    }

    /// 获取节点的所有后继节点
    pub fn get_successors(&self, kind: NodeKind) -> Result<Vec<NodeKind>, WorkflowError> {
        let idx = self.index_of(kind)?;
        let mut successors: Vec<NodeKind> = self
            .graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .filter_map(|n| self.graph.node_weight(n).map(|node| node.kind))
            .collect();
        successors.sort();
        Ok(successors)
    }

    /// 获取节点的所有前驱节点
    pub fn get_predecessors(&self, kind: NodeKind) -> Result<Vec<NodeKind>, WorkflowError> {
        let idx = self.index_of(kind)?;
        let mut predecessors: Vec<NodeKind> = self
            .graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .filter_map(|n| self.graph.node_weight(n).map(|node| node.kind))
            .collect();
        predecessors.sort();
        Ok(predecessors)
    }

    /// 获取从某节点出发、标签为 `label` 的条件边的目标节点
    pub fn get_successor_by_label(
        &self,
        kind: NodeKind,
        label: Label,
    ) -> Result<Option<NodeKind>, WorkflowError> {
        let idx = self.index_of(kind)?;

        let target = self
            .graph
            .edges_directed(idx, petgraph::Direction::Outgoing)
            .find(|edge| edge.weight().edge_type == EdgeType::Conditional(label))
            .and_then(|edge| self.graph.node_weight(edge.target()))
            .map(|node| node.kind);

        Ok(target)
    }

    pub fn start_node(&self) -> NodeKind {
        NodeKind::Start
    }

    pub fn end_node(&self) -> NodeKind {
        NodeKind::End
    }
}

fn default_title(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Start => "Start",
        NodeKind::Evaluator => "Evaluate Number",
        NodeKind::HighHandler => "Handle High Value",
        NodeKind::LowHandler => "Handle Low Value",
        NodeKind::End => "End",
    }
}

/// 构建固定的阈值分支工作流
pub fn build_graph() -> WorkflowDefinition {
    WorkflowDefinition::from_transitions(&TRANSITIONS)
}

use std::fmt;

use crate::evaluator::Label;

/// 工作流中的固定节点集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Start,
    Evaluator,
    HighHandler,
    LowHandler,
    End,
}

impl NodeKind {
    /// 所有节点，按声明顺序
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Start,
        NodeKind::Evaluator,
        NodeKind::HighHandler,
        NodeKind::LowHandler,
        NodeKind::End,
    ];

    /// 节点 ID（与图渲染中使用的名字一致）
    pub fn id(self) -> &'static str {
        match self {
            NodeKind::Start => "__start__",
            NodeKind::Evaluator => "evaluator",
            NodeKind::HighHandler => "high_handler",
            NodeKind::LowHandler => "low_handler",
            NodeKind::End => "__end__",
        }
    }

    /// 是否为终止动作节点
    pub fn is_terminal_action(self) -> bool {
        matches!(self, NodeKind::HighHandler | NodeKind::LowHandler)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// 图节点
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub kind: NodeKind,

    /// 节点标题
    pub title: String,
}

impl fmt::Display for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.id())
    }
}

/// 图边
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub source: NodeKind,
    pub target: NodeKind,
    pub edge_type: EdgeType,
}

impl fmt::Display for GraphEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.edge_type {
            EdgeType::Normal => Ok(()),
            EdgeType::Conditional(label) => f.write_str(label.as_str()),
        }
    }
}

/// 边类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeType {
    /// 无条件边
    Normal,
    /// 评估结果为指定标签时才走的分支
    Conditional(Label),
}

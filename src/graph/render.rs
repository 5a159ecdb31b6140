//! Best-effort textual rendering of the workflow graph.
//!
//! Rendering is the only fallible path around the workflow. Callers that just
//! want something printable use [`render_or_fallback`], which never fails.

use std::fmt::Write;

use petgraph::dot::Dot;
use serde::{Deserialize, Serialize};

use crate::error::WorkflowError;

use super::builder::WorkflowDefinition;
use super::types::{EdgeType, NodeKind};

/// Printed in place of a diagram when rendering is unavailable or fails.
pub const FALLBACK_NOTICE: &str = "Graph visualization not supported in this environment.";

/// Diagram syntaxes the renderer can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramFormat {
    #[default]
    Mermaid,
    Dot,
}

/// Whether the current environment can render diagrams, and in which format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderCapability {
    Supported(DiagramFormat),
    Unavailable,
}

impl RenderCapability {
    pub fn is_supported(&self) -> bool {
        matches!(self, RenderCapability::Supported(_))
    }
}

impl WorkflowDefinition {
    /// Render the graph, or fail if `capability` does not allow it.
    pub fn render(&self, capability: RenderCapability) -> Result<String, WorkflowError> {
        match capability {
            RenderCapability::Supported(DiagramFormat::Mermaid) => self.draw_mermaid(),
            RenderCapability::Supported(DiagramFormat::Dot) => Ok(self.draw_dot()),
            RenderCapability::Unavailable => Err(WorkflowError::VisualizationUnsupported),
        }
    }

    /// Mermaid flowchart. Conditional edges are dotted and labelled.
    pub fn draw_mermaid(&self) -> Result<String, WorkflowError> {
        let mut out = String::new();
        writeln!(out, "---")?;
        writeln!(out, "config:")?;
        writeln!(out, "  flowchart:")?;
        writeln!(out, "    curve: linear")?;
        writeln!(out, "---")?;
        writeln!(out, "graph TD;")?;

        for idx in self.graph.node_indices() {
            let id = self.graph[idx].kind.id();
            match self.graph[idx].kind {
                NodeKind::Start => writeln!(out, "\t{id}([<p>{id}</p>]):::first")?,
                NodeKind::End => writeln!(out, "\t{id}([<p>{id}</p>]):::last")?,
                _ => writeln!(out, "\t{id}({id})")?,
            }
        }

        for edge in self.graph.edge_indices().filter_map(|e| self.graph.edge_weight(e)) {
            let source = edge.source.id();
            let target = edge.target.id();
            match edge.edge_type {
                EdgeType::Normal => writeln!(out, "\t{source} --> {target};")?,
                EdgeType::Conditional(label) => {
                    writeln!(out, "\t{source} -. &nbsp;{label}&nbsp; .-> {target};")?
                }
            }
        }

        writeln!(out, "\tclassDef default fill:#f2f0ff,line-height:1.2")?;
        writeln!(out, "\tclassDef first fill-opacity:0")?;
        writeln!(out, "\tclassDef last fill:#bfb6fc")?;

        Ok(out)
    }

    /// Graphviz DOT via petgraph.
    pub fn draw_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[]))
    }
}

/// Render the graph, substituting [`FALLBACK_NOTICE`] on any failure.
pub fn render_or_fallback(def: &WorkflowDefinition, capability: RenderCapability) -> String {
    match def.render(capability) {
        Ok(diagram) => diagram,
        Err(e) => {
            tracing::warn!(error = %e, "graph visualization unavailable");
            FALLBACK_NOTICE.to_string()
        }
    }
}

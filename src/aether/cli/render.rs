use aether::collab::{Capability, GraphRenderer, ServiceError};
use aether::config::GraphDirection;
use aether::graph::GraphProjection;
use aether::model::NoteKind;
use std::fmt::Write;
use uuid::Uuid;

const CLASS_DEFS: [&str; 3] = [
    "classDef textNode fill:#2563eb,stroke:#1d4ed8,stroke-width:2px,color:#fff;",
    "classDef audioNode fill:#e11d48,stroke:#be123c,stroke-width:2px,color:#fff;",
    "classDef sketchNode fill:#f59e0b,stroke:#d97706,stroke-width:2px,color:#fff;",
];

/// Renders the link graph as a Mermaid flowchart definition.
pub struct MermaidRenderer {
    direction: GraphDirection,
}

impl MermaidRenderer {
    pub fn new(direction: GraphDirection) -> Self {
        Self { direction }
    }
}

impl Capability for MermaidRenderer {
    fn name(&self) -> &str {
        "mermaid renderer"
    }
}

impl GraphRenderer for MermaidRenderer {
    fn render(&self, graph: &GraphProjection) -> Result<String, ServiceError> {
        let mut def = format!("graph {};\n", self.direction);
        if graph.is_empty() {
            return Ok(def);
        }

        let fmt_err = |e: std::fmt::Error| ServiceError::Failed(e.to_string());
        for node in &graph.nodes {
            writeln!(
                def,
                "  {}[\"{}\"];",
                node_id(&node.id),
                node.title.replace('"', "#quot;")
            )
            .map_err(fmt_err)?;
        }
        for edge in &graph.edges {
            writeln!(def, "  {} --> {};", node_id(&edge.from), node_id(&edge.to))
                .map_err(fmt_err)?;
        }
        for class_def in CLASS_DEFS {
            writeln!(def, "  {}", class_def).map_err(fmt_err)?;
        }
        for node in &graph.nodes {
            writeln!(def, "  class {} {};", node_id(&node.id), class_name(node.kind))
                .map_err(fmt_err)?;
        }
        Ok(def)
    }
}

// Mermaid ids must not start with a digit
fn node_id(id: &Uuid) -> String {
    format!("n{}", id.simple())
}

fn class_name(kind: NoteKind) -> &'static str {
    match kind {
        NoteKind::Text => "textNode",
        NoteKind::Audio => "audioNode",
        NoteKind::Sketch => "sketchNode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aether::graph::{GraphEdge, GraphNode};

    fn node(title: &str, kind: NoteKind) -> GraphNode {
        GraphNode {
            id: Uuid::new_v4(),
            title: title.to_string(),
            kind,
        }
    }

    #[test]
    fn test_empty_graph_is_header_only() {
        let graph = GraphProjection {
            nodes: vec![],
            edges: vec![],
        };
        let out = MermaidRenderer::new(GraphDirection::LR).render(&graph).unwrap();
        assert_eq!(out, "graph LR;\n");
    }

    #[test]
    fn test_nodes_edges_and_classes() {
        let a = node("Say \"hi\"", NoteKind::Text);
        let b = node("Memo", NoteKind::Audio);
        let graph = GraphProjection {
            edges: vec![GraphEdge { from: a.id, to: b.id }],
            nodes: vec![a.clone(), b.clone()],
        };

        let out = MermaidRenderer::new(GraphDirection::TD).render(&graph).unwrap();
        assert!(out.starts_with("graph TD;\n"));
        assert!(out.contains(&format!("{}[\"Say #quot;hi#quot;\"];", node_id(&a.id))));
        assert!(out.contains(&format!("{} --> {};", node_id(&a.id), node_id(&b.id))));
        assert!(out.contains(&format!("class {} audioNode;", node_id(&b.id))));
    }
}

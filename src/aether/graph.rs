//! # Graph Projection
//!
//! The read-only node/edge view handed to graph renderers. Stored `links`
//! may still point at deleted notes; those edges are filtered out here and
//! only here, so the projection never contains a dangling edge while the
//! notes themselves are left untouched.

use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

use crate::model::{Note, NoteKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: Uuid,
    pub title: String,
    pub kind: NoteKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GraphEdge {
    pub from: Uuid,
    pub to: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphProjection {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphProjection {
    /// Builds the projection from notes in display order.
    pub fn from_notes<'a, I>(notes: I) -> Self
    where
        I: IntoIterator<Item = &'a Note> + Clone,
    {
        let present: HashSet<Uuid> = notes.clone().into_iter().map(|n| n.id).collect();
        let mut projection = GraphProjection::default();

        for note in notes {
            projection.nodes.push(GraphNode {
                id: note.id,
                title: note.title.clone(),
                kind: note.kind,
            });
            projection.edges.extend(
                note.links
                    .iter()
                    .filter(|target| present.contains(*target))
                    .map(|&to| GraphEdge { from: note.id, to }),
            );
        }

        projection
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &Uuid) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Number of edges leaving `id`.
    pub fn out_degree(&self, id: &Uuid) -> usize {
        self.edges.iter().filter(|e| &e.from == id).count()
    }

    /// Number of edges arriving at `id`.
    pub fn in_degree(&self, id: &Uuid) -> usize {
        self.edges.iter().filter(|e| &e.to == id).count()
    }
}

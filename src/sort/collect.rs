use crate::dom::{Document, NodeId, NodeKind};

/// Collect every text leaf below `root`, depth-first in document order.
///
/// Only elements are descended into; a text `root` yields nothing.
#[must_use]
pub fn collect_text_segments(doc: &Document, root: NodeId) -> Vec<NodeId> {
    let mut segments = Vec::new();
    let mut stack: Vec<NodeId> = doc.children(root).iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
        match doc.node(id) {
            NodeKind::Text(_) => segments.push(id),
            NodeKind::Element { children, .. } => stack.extend(children.iter().rev().copied()),
        }
    }
    segments
}

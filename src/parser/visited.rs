//! Parse-scoped set of XML nodes already turned into model entities.

use rustc_hash::FxHashSet;

use crate::xml::NodeId;

/// Nodes already processed during one parse call.
///
/// Created empty at the start of every parse and threaded by reference
/// through the schema walk, so nothing leaks between calls.
#[derive(Debug, Default)]
pub(crate) struct ProcessedNodes {
    nodes: FxHashSet<NodeId>,
}

impl ProcessedNodes {
    /// Mark `node` as processed. Returns `false` if it already was.
    pub(crate) fn mark(&mut self, node: NodeId) -> bool {
        self.nodes.insert(node)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

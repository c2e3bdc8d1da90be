//! Per-element expand/collapse flags.

use crate::layout::ExpandQuery;
use crate::model::{ElementId, Structure};

/// Expanded flag of every element in a structure's arena.
///
/// Elements the structure does not know read as collapsed and ignore writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandState {
    expanded: Vec<bool>,
}

impl ExpandState {
    /// Roots expanded, every other element collapsed.
    pub fn new(structure: &Structure) -> Self {
        let mut state = Self {
            expanded: vec![false; structure.element_count()],
        };
        state.expand_first_level(structure);
        state
    }

    pub fn is_expanded(&self, id: ElementId) -> bool {
        self.expanded.get(id.index()).copied().unwrap_or(false)
    }

    /// Set one flag; returns `false` for unknown ids.
    pub fn set(&mut self, id: ElementId, expanded: bool) -> bool {
        match self.expanded.get_mut(id.index()) {
            Some(flag) => {
                *flag = expanded;
                true
            }
            None => false,
        }
    }

    /// Flip one flag and return its new value.
    pub fn toggle(&mut self, id: ElementId) -> Option<bool> {
        let flag = self.expanded.get_mut(id.index())?;
        *flag = !*flag;
        Some(*flag)
    }

    /// Set `id` and all its descendants.
    pub fn set_subtree(&mut self, structure: &Structure, id: ElementId, expanded: bool) {
        for member in structure.subtree(id) {
            self.set(member, expanded);
        }
    }

    pub fn expand_first_level(&mut self, structure: &Structure) {
        for &root in structure.root_ids() {
            self.set_subtree(structure, root, false);
            self.set(root, true);
        }
    }

    pub fn collapse_first_level(&mut self, structure: &Structure) {
        for &root in structure.root_ids() {
            self.set(root, false);
        }
    }

    /// Number of expanded elements.
    pub fn expanded_count(&self) -> usize {
        self.expanded.iter().filter(|flag| **flag).count()
    }
}

impl ExpandQuery for ExpandState {
    fn is_expanded(&self, id: ElementId) -> bool {
        ExpandState::is_expanded(self, id)
    }
}

//! The diagram controller: expand-state commands and pointer clicks.

use tracing::debug;

use super::ExpandState;
use crate::base::Point;
use crate::layout::{Layout, LayoutConfig, LayoutEngine, NodeRef};
use crate::model::{ComplexTypeDetails, ElementDetails, ElementId, Structure};

/// Result of resolving a click against the current layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// An expand affordance was hit and the element's flag flipped.
    Toggled { element: ElementId, expanded: bool },
    /// An element box was hit.
    ElementDetails(ElementDetails),
    /// A complex-type box was hit.
    TypeDetails(ComplexTypeDetails),
    /// Nothing under the pointer.
    Nothing,
}

/// Owns a parsed structure, its expand-state and the current layout.
///
/// Every command that changes expand-state recomputes the layout before
/// returning.
#[derive(Debug, Clone)]
pub struct DiagramController {
    structure: Structure,
    state: ExpandState,
    engine: LayoutEngine,
    layout: Layout,
}

impl DiagramController {
    pub fn new(structure: Structure) -> Self {
        Self::with_config(structure, LayoutConfig::default())
    }

    pub fn with_config(structure: Structure, config: LayoutConfig) -> Self {
        let state = ExpandState::new(&structure);
        let engine = LayoutEngine::new(config);
        let layout = engine.compute(&structure, &state);
        Self {
            structure,
            state,
            engine,
            layout,
        }
    }

    // ── Access ──────────────────────────────────────────────────────

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn state(&self) -> &ExpandState {
        &self.state
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &LayoutConfig {
        self.engine.config()
    }

    pub fn is_expanded(&self, id: ElementId) -> bool {
        self.state.is_expanded(id)
    }

    /// Status line for the host.
    pub fn summary(&self) -> String {
        self.structure.summary()
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Flip one element; `None` if the id is unknown.
    pub fn toggle(&mut self, id: ElementId) -> Option<bool> {
        let expanded = self.state.toggle(id)?;
        debug!(element = %id, expanded, "toggle");
        self.relayout();
        Some(expanded)
    }

    /// Set an element and all its descendants.
    pub fn set_subtree(&mut self, id: ElementId, expanded: bool) {
        debug!(element = %id, expanded, "set subtree");
        self.state.set_subtree(&self.structure, id, expanded);
        self.relayout();
    }

    pub fn expand_all(&mut self) {
        self.set_all(true);
    }

    pub fn collapse_all(&mut self) {
        self.set_all(false);
    }

    /// Roots expanded, everything below them collapsed.
    pub fn expand_first_level(&mut self) {
        debug!("expand first level");
        self.state.expand_first_level(&self.structure);
        self.relayout();
    }

    /// Roots collapsed; descendants keep their flags.
    pub fn collapse_first_level(&mut self) {
        debug!("collapse first level");
        self.state.collapse_first_level(&self.structure);
        self.relayout();
    }

    /// Back to the initial view.
    pub fn reset(&mut self) {
        self.expand_first_level();
    }

    /// Resolve a click: affordances first, then boxes in paint order.
    pub fn click(&mut self, point: Point) -> ClickOutcome {
        let toggled = self
            .layout
            .expander_at(point)
            .and_then(|node| node.node.element_id());
        if let Some((element, expanded)) =
            toggled.and_then(|id| self.toggle(id).map(|expanded| (id, expanded)))
        {
            return ClickOutcome::Toggled { element, expanded };
        }

        let hit = self.layout.box_at(point).map(|node| node.node);
        let outcome = match hit {
            Some(NodeRef::Element(id)) => self
                .element_details(id)
                .map_or(ClickOutcome::Nothing, ClickOutcome::ElementDetails),
            Some(NodeRef::ComplexType(index)) => self
                .structure
                .complex_types()
                .get(index)
                .map_or(ClickOutcome::Nothing, |complex_type| {
                    ClickOutcome::TypeDetails(complex_type.details())
                }),
            None => ClickOutcome::Nothing,
        };
        debug!(x = point.x, y = point.y, ?outcome, "click");
        outcome
    }

    pub fn element_details(&self, id: ElementId) -> Option<ElementDetails> {
        self.structure.element(id).map(|element| element.details())
    }

    fn set_all(&mut self, expanded: bool) {
        debug!(expanded, "set all");
        for &root in self.structure.root_ids() {
            self.state.set_subtree(&self.structure, root, expanded);
        }
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout = self.engine.compute(&self.structure, &self.state);
    }
}

//! The parse result: root elements, top-level complex types and the arena.

use indexmap::IndexMap;

use super::{ComplexType, Element, ElementId};

/// A parsed XSD document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Structure {
    /// Every element of the document, indexed by [`ElementId`].
    elements: Vec<Element>,
    root_elements: Vec<ElementId>,
    complex_types: Vec<ComplexType>,
    /// Complex type name → index into `complex_types`; a later duplicate wins.
    type_map: IndexMap<String, usize>,
    target_namespace: String,
}

impl Structure {
    pub(crate) fn new(target_namespace: impl Into<String>) -> Self {
        Self {
            target_namespace: target_namespace.into(),
            ..Self::default()
        }
    }

    // ── Population (parser only) ────────────────────────────────────

    /// Move an element into the arena and assign its id.
    pub(crate) fn alloc(&mut self, mut element: Element) -> ElementId {
        let id = ElementId::new(self.elements.len());
        element.set_id(id);
        self.elements.push(element);
        id
    }

    pub(crate) fn add_root_element(&mut self, id: ElementId) {
        self.root_elements.push(id);
    }

    pub(crate) fn add_complex_type(&mut self, complex_type: ComplexType) {
        self.type_map
            .insert(complex_type.name().to_string(), self.complex_types.len());
        self.complex_types.push(complex_type);
    }

    // ── Access ──────────────────────────────────────────────────────

    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }

    /// Look up an element by id.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// Every element in the arena (roots, nested and complex-type members).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn root_ids(&self) -> &[ElementId] {
        &self.root_elements
    }

    /// Root elements in document order.
    pub fn root_elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.resolve(&self.root_elements)
    }

    /// Inline children of `element`, in document order.
    pub fn children<'a>(&'a self, element: &'a Element) -> impl Iterator<Item = &'a Element> + 'a {
        self.resolve(element.children())
    }

    /// Elements of a complex type, in document order.
    pub fn type_elements<'a>(
        &'a self,
        complex_type: &'a ComplexType,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.resolve(complex_type.elements())
    }

    pub fn complex_types(&self) -> &[ComplexType] {
        &self.complex_types
    }

    /// Look up a top-level complex type by name.
    pub fn complex_type(&self, name: &str) -> Option<&ComplexType> {
        self.type_map
            .get(name)
            .and_then(|index| self.complex_types.get(*index))
    }

    /// `id` followed by all its descendants, depth first.
    pub fn subtree(&self, id: ElementId) -> Vec<ElementId> {
        let mut ids = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let Some(element) = self.element(next) else {
                continue;
            };
            ids.push(next);
            stack.extend(element.children().iter().rev());
        }
        ids
    }

    /// All elements with the given name, in arena order.
    pub fn find_by_name(&self, name: &str) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|element| element.name() == name)
            .collect()
    }

    /// No root elements and no complex types: nothing to show.
    pub fn is_empty(&self) -> bool {
        self.root_elements.is_empty() && self.complex_types.is_empty()
    }

    /// One-line status summary.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Root elements: {} | Complex types: {}",
            self.root_elements.len(),
            self.complex_types.len()
        );
        if !self.target_namespace.is_empty() {
            summary.push_str(" | Namespace: ");
            summary.push_str(&self.target_namespace);
        }
        summary
    }

    fn resolve<'a>(&'a self, ids: &'a [ElementId]) -> impl Iterator<Item = &'a Element> + 'a {
        ids.iter().filter_map(|id| self.element(*id))
    }
}

//! Column layout of a [`Structure`] under an expand-state.

use tracing::trace;

use super::{
    AttributeMarker, Connector, ExpandQuery, Layout, LayoutConfig, NodeBox, NodeRef, NodeStyle,
};
use crate::base::{Point, Rect, Size};
use crate::model::{ComplexType, Element, Structure};

/// Computes [`Layout`]s. Holds only configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out every visible node: root elements first, then top-level
    /// complex types, each entry below the previous one.
    pub fn compute<Q>(&self, structure: &Structure, state: &Q) -> Layout
    where
        Q: ExpandQuery + ?Sized,
    {
        let config = &self.config;
        if structure.is_empty() {
            return Layout::empty(config.empty_canvas);
        }

        let mut pass = Pass {
            config,
            structure,
            state,
            layout: Layout::default(),
        };

        let mut y = config.margin;
        for root in structure.root_elements() {
            y += pass.place_element(root, Point::new(config.margin, y), 0);
            y += config.vertical_spacing;
        }
        for (index, complex_type) in structure.complex_types().iter().enumerate() {
            y += pass.place_complex_type(index, complex_type, Point::new(config.margin, y));
            y += config.vertical_spacing;
        }

        let max_depth = structure
            .root_elements()
            .map(|root| self.expanded_depth(structure, state, root, 0))
            .max()
            .unwrap_or(0);
        let content_height = y - config.margin;

        let mut layout = pass.layout;
        layout.max_depth = max_depth;
        layout.content_height = content_height;
        layout.size = Size::new(
            config
                .min_canvas
                .width
                .max((max_depth as i32 + 1) * config.horizontal_spacing + 2 * config.margin),
            config
                .min_canvas
                .height
                .max(content_height + 2 * config.margin),
        );
        trace!(
            boxes = layout.boxes.len(),
            connectors = layout.connectors.len(),
            width = layout.size.width,
            height = layout.size.height,
            "layout pass"
        );
        layout
    }

    /// Depth of the deepest visible descendant; a collapsed node ends its chain.
    fn expanded_depth<Q>(
        &self,
        structure: &Structure,
        state: &Q,
        element: &Element,
        depth: usize,
    ) -> usize
    where
        Q: ExpandQuery + ?Sized,
    {
        if !state.is_expanded(element.id()) {
            return depth;
        }
        structure
            .children(element)
            .map(|child| self.expanded_depth(structure, state, child, depth + 1))
            .fold(depth, usize::max)
    }
}

/// State of a single layout pass.
struct Pass<'a, Q: ?Sized> {
    config: &'a LayoutConfig,
    structure: &'a Structure,
    state: &'a Q,
    layout: Layout,
}

impl<Q: ExpandQuery + ?Sized> Pass<'_, Q> {
    /// Place `element` and, when expanded, its children; returns the height
    /// reserved for the subtree.
    fn place_element(&mut self, element: &Element, origin: Point, depth: usize) -> i32 {
        let config = self.config;
        let bounds = config.node_bounds(origin);
        let has_children = element.has_children();
        let expanded = self.state.is_expanded(element.id());

        let mut label = vec![element.name().to_string(), format!("({})", element.type_name())];
        let occurrence = element.occurrence();
        if !occurrence.is_empty() {
            label.push(occurrence);
        }

        self.layout.boxes.push(NodeBox {
            node: NodeRef::Element(element.id()),
            bounds,
            depth,
            expander: has_children.then(|| config.expander_bounds(origin)),
            expanded,
            style: if element.is_root() {
                NodeStyle::RootElement
            } else {
                NodeStyle::Element
            },
            label,
        });
        self.layout
            .markers
            .extend((0..element.attributes().len()).map(|index| AttributeMarker {
                owner: element.id(),
                index,
                bounds: config.marker_bounds(bounds, index),
            }));

        if !(expanded && has_children) {
            return config.node_size.height;
        }
        let structure = self.structure;
        let children_height = self.place_column(structure.children(element), bounds, depth + 1);
        config.node_size.height.max(children_height)
    }

    /// Complex types are always shown with their elements and have no affordance.
    fn place_complex_type(&mut self, index: usize, complex_type: &ComplexType, origin: Point) -> i32 {
        let config = self.config;
        let bounds = config.node_bounds(origin);
        self.layout.boxes.push(NodeBox {
            node: NodeRef::ComplexType(index),
            bounds,
            depth: 0,
            expander: None,
            expanded: true,
            style: NodeStyle::ComplexType,
            label: vec![format!("<<{}>>", complex_type.name()), "ComplexType".to_string()],
        });

        let structure = self.structure;
        let elements_height = self.place_column(structure.type_elements(complex_type), bounds, 1);
        config.node_size.height.max(elements_height)
    }

    /// Stack `children` in the column right of `parent`, connecting each to it.
    fn place_column<'s>(
        &mut self,
        children: impl Iterator<Item = &'s Element>,
        parent: Rect,
        depth: usize,
    ) -> i32 {
        let config = self.config;
        let x = parent.x + config.horizontal_spacing;
        let mut y = parent.y;
        let mut total = 0;
        for child in children {
            let origin = Point::new(x, y);
            self.layout.connectors.push(Connector {
                from: parent.right_mid(),
                to: config.node_bounds(origin).left_mid(),
            });
            let height = self.place_element(child, origin, depth) + config.sibling_gap();
            y += height;
            total += height;
        }
        total
    }
}

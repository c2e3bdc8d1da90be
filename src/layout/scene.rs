//! Layout output: positioned boxes, connectors and attribute markers.

use crate::base::{Point, Rect, Size};
use crate::model::ElementId;

/// Shown instead of a diagram when the structure has nothing to display.
pub const EMPTY_MESSAGE: &str = "No elements found in the XSD file";

/// What a box stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeRef {
    Element(ElementId),
    /// Index into [`Structure::complex_types`](crate::model::Structure::complex_types).
    ComplexType(usize),
}

impl NodeRef {
    pub fn element_id(self) -> Option<ElementId> {
        match self {
            Self::Element(id) => Some(id),
            Self::ComplexType(_) => None,
        }
    }
}

/// How a box is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeStyle {
    RootElement,
    Element,
    ComplexType,
}

/// One visible box.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeBox {
    pub node: NodeRef,
    pub bounds: Rect,
    /// Column index; complex-type boxes sit at depth 0, their elements at 1.
    pub depth: usize,
    /// Present only for elements that have children.
    pub expander: Option<Rect>,
    pub expanded: bool,
    pub style: NodeStyle,
    /// Text lines, top to bottom.
    pub label: Vec<String>,
}

/// A line from a parent's right edge to a child's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Connector {
    pub from: Point,
    pub to: Point,
}

/// A small marker drawn beside an element for each of its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttributeMarker {
    pub owner: ElementId,
    /// Position in the owner's attribute list.
    pub index: usize,
    pub bounds: Rect,
}

/// The geometry of one layout pass, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Layout {
    pub boxes: Vec<NodeBox>,
    pub connectors: Vec<Connector>,
    pub markers: Vec<AttributeMarker>,
    /// Preferred canvas size.
    pub size: Size,
    /// Deepest visible column reached from a root element.
    pub max_depth: usize,
    /// Summed heights of all top-level entries, spacing included.
    pub content_height: i32,
    /// Set when there is nothing to display.
    pub message: Option<&'static str>,
}

impl Layout {
    pub(crate) fn empty(size: Size) -> Self {
        Self {
            size,
            message: Some(EMPTY_MESSAGE),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The first box whose expand affordance contains `point`.
    pub fn expander_at(&self, point: Point) -> Option<&NodeBox> {
        self.boxes
            .iter()
            .find(|node| node.expander.is_some_and(|rect| rect.contains(point)))
    }

    /// The first box containing `point`.
    pub fn box_at(&self, point: Point) -> Option<&NodeBox> {
        self.boxes.iter().find(|node| node.bounds.contains(point))
    }

    /// The box of a visible element.
    pub fn element_box(&self, id: ElementId) -> Option<&NodeBox> {
        self.boxes
            .iter()
            .find(|node| node.node == NodeRef::Element(id))
    }

    pub fn markers_of(&self, id: ElementId) -> impl Iterator<Item = &AttributeMarker> + '_ {
        self.markers.iter().filter(move |marker| marker.owner == id)
    }

    /// Serialize the layout for an external renderer.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

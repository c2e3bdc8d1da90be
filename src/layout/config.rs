//! Geometric constants of the layout engine.

use crate::base::{Point, Rect, Size};

/// Every size, spacing and offset the layout engine uses.
///
/// The defaults produce the classic diagram: 140×60 boxes in columns 180px
/// apart, 50px margin, an 800×600 minimum canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LayoutConfig {
    /// Fixed size of every box.
    pub node_size: Size,
    /// Column pitch: distance between the left edges of two depth levels.
    pub horizontal_spacing: i32,
    /// Gap between top-level entries; siblings use half of it.
    pub vertical_spacing: i32,
    /// Offset of the first box from the canvas origin, on both axes.
    pub margin: i32,
    /// Side of the square expand/collapse affordance.
    pub expander_size: i32,
    /// Inset of the affordance from the box's top-left corner.
    pub expander_inset: i32,
    /// Side of an attribute marker.
    pub marker_size: i32,
    /// Position of the first attribute marker relative to the box's top-right corner.
    pub marker_offset: Point,
    /// Vertical distance between stacked attribute markers.
    pub marker_pitch: i32,
    /// The canvas never shrinks below this.
    pub min_canvas: Size,
    /// Canvas size when there is nothing to display.
    pub empty_canvas: Size,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_size: Size::new(140, 60),
            horizontal_spacing: 180,
            vertical_spacing: 80,
            margin: 50,
            expander_size: 16,
            expander_inset: 5,
            marker_size: 15,
            marker_offset: Point::new(5, 10),
            marker_pitch: 15,
            min_canvas: Size::new(800, 600),
            empty_canvas: Size::new(400, 200),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_size(mut self, width: i32, height: i32) -> Self {
        self.node_size = Size::new(width, height);
        self
    }

    pub fn with_horizontal_spacing(mut self, spacing: i32) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    pub fn with_vertical_spacing(mut self, spacing: i32) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    /// Affordance side and its inset from the box corner.
    pub fn with_expander(mut self, size: i32, inset: i32) -> Self {
        self.expander_size = size;
        self.expander_inset = inset;
        self
    }

    /// Marker side, offset from the box's top-right corner, and stacking pitch.
    pub fn with_marker(mut self, size: i32, offset: Point, pitch: i32) -> Self {
        self.marker_size = size;
        self.marker_offset = offset;
        self.marker_pitch = pitch;
        self
    }

    pub fn with_min_canvas(mut self, width: i32, height: i32) -> Self {
        self.min_canvas = Size::new(width, height);
        self
    }

    pub fn with_empty_canvas(mut self, width: i32, height: i32) -> Self {
        self.empty_canvas = Size::new(width, height);
        self
    }

    // ── Derived geometry ────────────────────────────────────────────

    /// Gap between consecutive siblings in a column.
    pub fn sibling_gap(&self) -> i32 {
        self.vertical_spacing / 2
    }

    pub fn node_bounds(&self, origin: Point) -> Rect {
        Rect::from_origin(origin, self.node_size)
    }

    /// The expand/collapse affordance of a box placed at `origin`.
    pub fn expander_bounds(&self, origin: Point) -> Rect {
        Rect::new(
            origin.x + self.expander_inset,
            origin.y + self.expander_inset,
            self.expander_size,
            self.expander_size,
        )
    }

    /// The `index`-th attribute marker of a box.
    pub fn marker_bounds(&self, node: Rect, index: usize) -> Rect {
        Rect::new(
            node.right() + self.marker_offset.x,
            node.y + self.marker_offset.y + self.marker_pitch * index as i32,
            self.marker_size,
            self.marker_size,
        )
    }
}

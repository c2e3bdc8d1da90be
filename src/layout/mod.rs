//! Diagram layout: [`Structure`](crate::model::Structure) + expand-state →
//! positioned boxes.
//!
//! Nodes are placed in columns by depth, left to right, and stacked top to
//! bottom inside a column. Only expanded elements contribute their children.
//!
//! ```text
//!  margin
//!    │  ┌────────┐            ┌────────┐
//!    └─▶│[-] root│────────────│[+] a   │ ○ attribute markers
//!       └────────┘      ╲     └────────┘ ○
//!                        ╲    ┌────────┐
//!                         ╲───│    b   │
//!                             └────────┘
//!       │◀─ horizontal_spacing ─▶│
//!
//!       ┌──────────┐          ┌────────┐
//!       │<<Type>>  │──────────│ member │   complex types follow the roots
//!       └──────────┘          └────────┘
//! ```
//!
//! The engine reads expand-state through [`ExpandQuery`]; it never mutates it.

mod config;
mod engine;
mod scene;

pub use config::LayoutConfig;
pub use engine::LayoutEngine;
pub use scene::{AttributeMarker, Connector, EMPTY_MESSAGE, Layout, NodeBox, NodeRef, NodeStyle};

use crate::model::ElementId;

/// Read access to per-element expand-state.
pub trait ExpandQuery {
    /// Whether the children of `id` are visible.
    fn is_expanded(&self, id: ElementId) -> bool;
}

impl<F> ExpandQuery for F
where
    F: Fn(ElementId) -> bool,
{
    fn is_expanded(&self, id: ElementId) -> bool {
        self(id)
    }
}

#[cfg(test)]
mod tests;

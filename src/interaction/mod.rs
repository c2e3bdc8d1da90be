//! Expand/collapse state and click handling.
//!
//! [`DiagramController`] is the only writer of [`ExpandState`]; the layout
//! engine reads it through [`ExpandQuery`](crate::layout::ExpandQuery).
//!
//! ```text
//! click(point) ──▶ affordance hit? ──yes──▶ toggle ──▶ relayout
//!                       │ no
//!                       ▼
//!                  box hit? ──yes──▶ details snapshot
//!                       │ no
//!                       ▼
//!                    Nothing
//! ```

mod controller;
mod state;

pub use controller::{ClickOutcome, DiagramController};
pub use state::ExpandState;

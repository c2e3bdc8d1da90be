//! Foundation types for the xsd-view pipeline.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Point`], [`Size`], [`Rect`] - Integer pixel geometry for the diagram
//! - Domain constants (XSD namespace, file extension, local names)
//!
//! This module has NO dependencies on other xsd-view modules.

pub mod constants;
mod geometry;

pub use geometry::{Point, Rect, Size};

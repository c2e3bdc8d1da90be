//! # xsd-view
//!
//! XML Schema (XSD) parsing into a navigable model, diagram layout, and
//! expand/collapse interaction.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! host         → Open .xsd files, empty-schema branch
//!   ↓
//! interaction  → Expand-state, DiagramController, click resolution
//!   ↓
//! layout       → LayoutConfig, LayoutEngine, positioned boxes
//!   ↓
//! parser       → SchemaParser, engine fallback, processed-node set
//!   ↓
//! model        → Structure, Element, ComplexType, Attribute
//!   ↓
//! xml          → Namespace-aware document tree, XML engines
//!   ↓
//! base         → Geometry primitives, XSD constants
//! ```
//!
//! ## Quick start
//!
//! ```
//! use xsd_view::{DiagramController, SchemaParser};
//! use xsd_view::base::Point;
//!
//! let xsd = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
//!   <xs:element name="order"><xs:complexType><xs:sequence>
//!     <xs:element name="item" maxOccurs="unbounded"/>
//!   </xs:sequence></xs:complexType></xs:element>
//! </xs:schema>"#;
//!
//! let structure = SchemaParser::new().parse_str(xsd)?;
//! let mut diagram = DiagramController::new(structure);
//! assert_eq!(diagram.layout().boxes.len(), 2);
//!
//! // Clicking the root's affordance collapses it.
//! diagram.click(Point::new(55, 55));
//! assert_eq!(diagram.layout().boxes.len(), 1);
//! # Ok::<(), xsd_view::ParseError>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → xml → model → parser → layout → interaction → host)
// ============================================================================

/// Foundation types: geometry, XSD names and defaults
pub mod base;

/// XML reading: owned document tree and the engine chain
pub mod xml;

/// Schema model: elements, complex types, attributes
pub mod model;

/// XSD parser: document tree → Structure
pub mod parser;

/// Diagram layout
pub mod layout;

/// Expand-state and pointer interaction
pub mod interaction;

/// File entry point
pub mod host;

// Re-export commonly needed items
pub use host::{HostError, OpenedSchema, SchemaHost, is_schema_file, open_schema};
pub use interaction::{ClickOutcome, DiagramController, ExpandState};
pub use layout::{Layout, LayoutConfig, LayoutEngine};
pub use model::{Attribute, AttributeUse, ComplexType, Element, ElementId, Structure};
pub use parser::{ParseError, SchemaParser, parse_schema};

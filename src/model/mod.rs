//! Schema model built by the parser.
//!
//! The model is immutable once [`SchemaParser`](crate::parser::SchemaParser)
//! returns it. Elements live in an arena owned by [`Structure`] and refer to
//! their children by [`ElementId`], which also keys the interaction layer's
//! expand-state.
//!
//! ```text
//! Structure
//! ├── elements: Vec<Element>            (arena, indexed by ElementId)
//! ├── root_elements: Vec<ElementId>     (document order)
//! ├── complex_types: Vec<ComplexType>   (document order)
//! ├── type_map: IndexMap<String, usize> (name → complex_types index)
//! └── target_namespace: String
//! ```

mod attribute;
mod complex_type;
mod element;
mod structure;

pub use attribute::{Attribute, AttributeUse};
pub use complex_type::{ComplexType, ComplexTypeDetails};
pub use element::{Element, ElementDetails, ElementId};
pub use structure::Structure;

/// Receiver for structural content found inside a complex type.
///
/// Both [`Element`] (inline complex types fold into their owning element) and
/// [`ComplexType`] (top-level declarations) implement this, so the parser's
/// sequence/choice/attribute walk is written once.
pub trait ContentSink {
    /// Append a child element, already allocated in the structure's arena.
    fn add_element(&mut self, child: ElementId);

    /// Append an attribute.
    fn add_attribute(&mut self, attribute: Attribute);

    /// Record the `base` of a derivation. Only named types keep it.
    fn record_base_type(&mut self, base: &str) {
        let _ = base;
    }
}

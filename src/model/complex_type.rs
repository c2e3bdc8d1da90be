//! Top-level XSD complex type definitions.

use std::fmt;

use super::{Attribute, ContentSink, ElementId};

/// A named `<xs:complexType>` declared directly under the schema root.
///
/// Inline complex types never become a `ComplexType`; they are folded into
/// their owning [`Element`](super::Element).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComplexType {
    name: String,
    elements: Vec<ElementId>,
    attributes: Vec<Attribute>,
    documentation: Option<String>,
    base_type: Option<String>,
    is_abstract: bool,
    mixed: bool,
}

impl ComplexType {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn set_documentation(&mut self, text: impl Into<String>) {
        self.documentation = Some(text.into());
    }

    pub(crate) fn set_abstract(&mut self, is_abstract: bool) {
        self.is_abstract = is_abstract;
    }

    pub(crate) fn set_mixed(&mut self, mixed: bool) {
        self.mixed = mixed;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the elements declared in this type's sequences and choices.
    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// Name of the extended or restricted type; never dereferenced.
    pub fn base_type(&self) -> Option<&str> {
        self.base_type.as_deref()
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_mixed(&self) -> bool {
        self.mixed
    }

    pub fn has_elements(&self) -> bool {
        !self.elements.is_empty()
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// No elements and no attributes.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.attributes.is_empty()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn find_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name() == name)
    }

    /// `<<Name>> (abstract) extends Base`
    pub fn display_name(&self) -> String {
        let mut display = format!("<<{}>>", self.name);
        if self.is_abstract {
            display.push_str(" (abstract)");
        }
        if let Some(base) = &self.base_type {
            display.push_str(" extends ");
            display.push_str(base);
        }
        display
    }

    /// Snapshot handed to the detail display.
    pub fn details(&self) -> ComplexTypeDetails {
        ComplexTypeDetails {
            name: self.name.clone(),
            base_type: self.base_type.clone(),
            is_abstract: self.is_abstract,
            mixed: self.mixed,
            element_count: self.elements.len(),
            attribute_count: self.attributes.len(),
            documentation: self.documentation.clone(),
        }
    }
}

impl ContentSink for ComplexType {
    fn add_element(&mut self, child: ElementId) {
        self.elements.push(child);
    }

    fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    fn record_base_type(&mut self, base: &str) {
        if self.base_type.is_none() {
            self.base_type = Some(base.to_string());
        }
    }
}

impl fmt::Display for ComplexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} elements, {} attributes)",
            self.display_name(),
            self.elements.len(),
            self.attributes.len()
        )
    }
}

/// Owned details of a complex type, detached from the structure.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComplexTypeDetails {
    pub name: String,
    pub base_type: Option<String>,
    pub is_abstract: bool,
    pub mixed: bool,
    pub element_count: usize,
    pub attribute_count: usize,
    pub documentation: Option<String>,
}

impl fmt::Display for ComplexTypeDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Complex type: {}", self.name)?;
        if let Some(base) = &self.base_type {
            writeln!(f, "Extends: {base}")?;
        }
        if self.is_abstract {
            writeln!(f, "Kind: abstract")?;
        }
        if self.mixed {
            writeln!(f, "Content: mixed")?;
        }
        writeln!(f, "Elements: {}", self.element_count)?;
        write!(f, "Attributes: {}", self.attribute_count)?;
        if let Some(doc) = &self.documentation {
            write!(f, "\n\nDocumentation:\n{doc}")?;
        }
        Ok(())
    }
}

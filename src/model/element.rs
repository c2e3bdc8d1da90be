//! XSD element declarations.

use std::fmt;

use super::{Attribute, ContentSink};
use crate::base::constants::{DEFAULT_MAX_OCCURS, DEFAULT_TYPE, UNBOUNDED};

/// Stable identifier of an element inside its [`Structure`](super::Structure).
///
/// Assigned at parse time as the element's index in the structure's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementId(u32);

impl ElementId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// The arena index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An `<xs:element>` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Element {
    id: ElementId,
    name: String,
    type_name: Option<String>,
    min_occurs: u32,
    max_occurs: String,
    children: Vec<ElementId>,
    attributes: Vec<Attribute>,
    is_root: bool,
    documentation: Option<String>,
}

impl Element {
    /// A detached element; the arena assigns its id on allocation.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: ElementId::new(0),
            name: name.into(),
            type_name: None,
            min_occurs: 1,
            max_occurs: DEFAULT_MAX_OCCURS.to_string(),
            children: Vec::new(),
            attributes: Vec::new(),
            is_root: false,
            documentation: None,
        }
    }

    // ── Population (parser only) ────────────────────────────────────

    pub(crate) fn set_id(&mut self, id: ElementId) {
        self.id = id;
    }

    pub(crate) fn set_type(&mut self, type_name: impl Into<String>) {
        self.type_name = Some(type_name.into());
    }

    pub(crate) fn set_min_occurs(&mut self, min_occurs: u32) {
        self.min_occurs = min_occurs;
    }

    pub(crate) fn set_max_occurs(&mut self, max_occurs: impl Into<String>) {
        self.max_occurs = max_occurs.into();
    }

    pub(crate) fn set_root(&mut self, is_root: bool) {
        self.is_root = is_root;
    }

    pub(crate) fn set_documentation(&mut self, text: impl Into<String>) {
        self.documentation = Some(text.into());
    }

    // ── Access ──────────────────────────────────────────────────────

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type, or `"string"` when none was declared.
    pub fn type_name(&self) -> &str {
        self.type_name.as_deref().unwrap_or(DEFAULT_TYPE)
    }

    /// The type exactly as declared.
    pub fn declared_type(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn min_occurs(&self) -> u32 {
        self.min_occurs
    }

    /// Either an integer or `"unbounded"`, verbatim from the schema.
    pub fn max_occurs(&self) -> &str {
        &self.max_occurs
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_occurs == UNBOUNDED
    }

    /// Ids of inline child elements, in document order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    pub fn find_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name() == name)
    }

    /// `[min..max]`, or an empty string for the default `1..1`.
    pub fn occurrence(&self) -> String {
        if self.min_occurs == 1 && self.max_occurs == DEFAULT_MAX_OCCURS {
            String::new()
        } else {
            format!("[{}..{}]", self.min_occurs, self.max_occurs)
        }
    }

    /// Snapshot handed to the detail display.
    pub fn details(&self) -> ElementDetails {
        ElementDetails {
            id: self.id,
            name: self.name.clone(),
            type_name: self.type_name().to_string(),
            min_occurs: self.min_occurs,
            max_occurs: self.max_occurs.clone(),
            is_root: self.is_root,
            attributes: self.attributes.clone(),
            documentation: self.documentation.clone(),
        }
    }
}

impl ContentSink for Element {
    fn add_element(&mut self, child: ElementId) {
        self.children.push(child);
    }

    fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.type_name(), self.occurrence())
    }
}

/// Owned details of an element, detached from the structure.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementDetails {
    pub id: ElementId,
    pub name: String,
    pub type_name: String,
    pub min_occurs: u32,
    pub max_occurs: String,
    pub is_root: bool,
    pub attributes: Vec<Attribute>,
    pub documentation: Option<String>,
}

impl fmt::Display for ElementDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Element: {}", self.name)?;
        writeln!(f, "Type: {}", self.type_name)?;
        writeln!(f, "Occurrences: {}..{}", self.min_occurs, self.max_occurs)?;
        if !self.attributes.is_empty() {
            writeln!(f, "\nAttributes:")?;
            for attribute in &self.attributes {
                writeln!(f, "  {attribute}")?;
            }
        }
        if let Some(doc) = &self.documentation {
            write!(f, "\nDocumentation:\n{doc}")?;
        }
        Ok(())
    }
}
